use crate::data::example::{one_hot, Example};

/// The four XOR cases with two-class one-hot targets (`[1,0]` = false, `[0,1]` = true),
/// so argmax evaluation applies.
pub fn xor() -> Vec<Example> {
    [
        ([0.0, 0.0], false),
        ([0.0, 1.0], true),
        ([1.0, 0.0], true),
        ([1.0, 1.0], false),
    ]
    .into_iter()
    .map(|(input, label)| Example::new(input.to_vec(), one_hot(label as usize, 2)))
    .collect()
}

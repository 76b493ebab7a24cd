use serde::{Deserialize, Serialize};

/// One supervised sample: an input vector and the output the network should produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Example {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Example {
        Example { input, target }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Example {
    fn from((input, target): (Vec<f64>, Vec<f64>)) -> Self {
        Example { input, target }
    }
}

/// A `len`-long vector with a 1.0 at `index` and 0.0 elsewhere.
///
/// Panics if `index >= len`.
pub fn one_hot(index: usize, len: usize) -> Vec<f64> {
    assert!(index < len, "one_hot index {index} out of range for length {len}");
    let mut v = vec![0.0; len];
    v[index] = 1.0;
    v
}

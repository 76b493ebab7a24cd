pub mod datasets;
pub mod example;

pub use datasets::xor;
pub use example::{one_hot, Example};

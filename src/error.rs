use thiserror::Error;

/// Result alias used by every fallible constructor and the training loop.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Configuration errors rejected before any computation starts.
///
/// Shape mismatches inside the linear-algebra primitives are not represented
/// here: they are caller bugs and panic immediately.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Fewer than two layer sizes were given.
    #[error("a network needs at least 2 layers, got {0}")]
    TooFewLayers(usize),

    /// A layer was declared with zero neurons.
    #[error("layer {index} has size 0")]
    EmptyLayer { index: usize },

    /// Explicit layers do not chain into a valid network.
    #[error("layer {index} is inconsistent: {reason}")]
    LayerMismatch { index: usize, reason: String },

    /// The training loop was handed no examples.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// A hyperparameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

use serde::{Deserialize, Serialize};

/// Per-epoch progress emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the loop sends
/// one `EpochStats` at the end of every completed epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Correctly classified evaluation examples, if an evaluation set was given.
    pub correct: Option<usize>,
    /// Size of the evaluation set, if one was given.
    pub total: Option<usize>,
    /// Wall-clock duration of this epoch in milliseconds, evaluation included.
    pub elapsed_ms: u64,
}

impl EpochStats {
    /// `correct / total` as a fraction in [0, 1].
    pub fn accuracy(&self) -> Option<f64> {
        match (self.correct, self.total) {
            (Some(_), Some(0)) => Some(0.0),
            (Some(c), Some(t)) => Some(c as f64 / t as f64),
            _ => None,
        }
    }
}

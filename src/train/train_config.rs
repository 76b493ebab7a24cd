use std::sync::mpsc;
use std::sync::{atomic::AtomicBool, Arc};

use crate::error::{NetworkError, Result};
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`: total number of full passes over the training data
/// - `mini_batch_size`: examples per parameter update; use `1` for online SGD
/// - `progress_tx`: optional channel sender; one `EpochStats` is sent per
///   completed epoch. If the receiver is dropped the loop
///   terminates early.
/// - `stop_flag`: optional atomic flag checked once per epoch; when set
///   the loop returns before starting the next epoch.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub mini_batch_size: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no stop flag.
    pub fn new(epochs: usize, mini_batch_size: usize) -> Self {
        TrainConfig {
            epochs,
            mini_batch_size,
            progress_tx: None,
            stop_flag: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(NetworkError::InvalidConfig("epochs must be > 0".to_owned()));
        }
        if self.mini_batch_size == 0 {
            return Err(NetworkError::InvalidConfig(
                "mini-batch size must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

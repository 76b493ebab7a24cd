use std::sync::atomic::Ordering;
use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::data::Example;
use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::batch::{accumulate_gradients, mini_batches};
use crate::train::epoch_stats::EpochStats;
use crate::train::evaluate::evaluate;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` with mini-batch SGD and returns the number of epochs
/// completed.
///
/// # Arguments
/// - `network`: modified in place, one parameter swap per mini-batch
/// - `examples`: training set; only a list of references to it is shuffled
/// - `evaluation`: optional held-out set scored by argmax after every epoch
/// - `optimizer`: carries the learning rate
/// - `config`: epochs, mini-batch size, optional progress channel and stop flag
/// - `rng`: source for the per-epoch shuffle
///
/// # Early termination
/// The loop stops before the next epoch if `config.stop_flag` is set, or after
/// the current one if the `progress_tx` receiver has been dropped.
///
/// # Errors
/// Rejects an empty training set, zero epochs, or a zero mini-batch size before
/// touching the network. Examples whose widths do not match the network are
/// not checked up front; they panic at the first failing dot product.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    examples: &[Example],
    evaluation: Option<&[Example]>,
    optimizer: &Sgd,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<usize> {
    if examples.is_empty() {
        return Err(NetworkError::EmptyTrainingSet);
    }
    config.validate()?;

    debug!(
        sizes = ?network.sizes(),
        examples = examples.len(),
        epochs = config.epochs,
        mini_batch_size = config.mini_batch_size,
        learning_rate = optimizer.learning_rate,
        "starting training"
    );

    let mut order: Vec<&Example> = examples.iter().collect();
    let mut completed = 0;

    for epoch in 0..config.epochs {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                warn!(epoch, "stop flag set, ending training early");
                break;
            }
        }

        let t_start = Instant::now();

        // Fisher-Yates over references; the caller's slice keeps its order.
        order.shuffle(rng);
        for batch in mini_batches(&order, config.mini_batch_size) {
            update_mini_batch(network, batch, optimizer);
        }
        completed += 1;

        let (correct, total) = match evaluation {
            Some(eval) => {
                let correct = evaluate(network, eval);
                info!("Epoch {}: {} / {}", epoch, correct, eval.len());
                (Some(correct), Some(eval.len()))
            }
            None => (None, None),
        };

        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        debug!(epoch, elapsed_ms, "epoch complete");

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            correct,
            total,
            elapsed_ms,
        };

        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                warn!(epoch, "progress receiver dropped, ending training early");
                break;
            }
        }
    }

    debug!(completed, "training finished");
    Ok(completed)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Sums the batch's gradients, then applies a single averaged update.
fn update_mini_batch(network: &mut Network, batch: &[&Example], optimizer: &Sgd) {
    let gradient = accumulate_gradients(network, batch);
    optimizer.step(network, &gradient, batch.len());
}

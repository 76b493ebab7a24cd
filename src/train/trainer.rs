use rand::Rng;

use crate::{
    data::Example,
    error::Result,
    network::network::Network,
    optim::sgd::Sgd,
    train::{loop_fn::train_loop, train_config::TrainConfig},
};

/// Mini-batch SGD with the classic argument list.
///
/// Progress is reported as a `tracing` event per epoch when `evaluation` is
/// given; use [`train_loop`] directly for a progress channel or stop flag.
pub fn train_network<R: Rng + ?Sized>(
    network: &mut Network,
    examples: &[Example],
    epochs: usize,
    mini_batch_size: usize,
    learning_rate: f64,
    evaluation: Option<&[Example]>,
    rng: &mut R,
) -> Result<()> {
    let optimizer = Sgd::new(learning_rate)?;
    let config = TrainConfig::new(epochs, mini_batch_size);
    train_loop(network, examples, evaluation, &optimizer, &config, rng)?;
    Ok(())
}

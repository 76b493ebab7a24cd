use crate::{
    error::{NetworkError, Result},
    network::{Gradient, Network},
};

/// Plain gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Result<Sgd> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(NetworkError::InvalidConfig(format!(
                "learning rate must be finite and > 0, got {learning_rate}"
            )));
        }
        Ok(Sgd { learning_rate })
    }

    /// Applies one update from a gradient summed over `batch_len` examples:
    /// every parameter moves by `-(η / batch_len) * grad`.
    ///
    /// The whole parameter set is rebuilt and swapped in at once.
    pub fn step(&self, network: &mut Network, gradient: &Gradient, batch_len: usize) {
        assert!(batch_len > 0, "cannot step on an empty mini-batch");
        assert_eq!(gradient.len(), network.layers().len(), "gradient does not match network");

        let rate = self.learning_rate / batch_len as f64;
        let layers = network
            .layers()
            .iter()
            .zip(gradient.weights.iter().zip(&gradient.biases))
            .map(|(layer, (w, b))| layer.apply_gradients(w, b, rate))
            .collect();
        network.replace_layers(layers);
    }
}

use rand::Rng;

use crate::{
    data::Example,
    error::{NetworkError, Result},
    layers::dense::Layer,
    loss::QuadraticCost,
};

/// A feedforward sigmoid network.
///
/// `sizes` lists the neuron count of every layer, input first. The input layer
/// carries no parameters, so a network with `L` sizes owns `L - 1` layers, and
/// layer `l` maps `sizes[l]` activations to `sizes[l + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    sizes: Vec<usize>,
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network with every weight and bias drawn from N(0, 1).
    pub fn new<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<Network> {
        validate_sizes(sizes)?;
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::random(pair[1], pair[0], &mut *rng))
            .collect();
        Ok(Network { sizes: sizes.to_vec(), layers })
    }

    /// Builds a network with all parameters set to zero.
    pub fn zeros(sizes: &[usize]) -> Result<Network> {
        validate_sizes(sizes)?;
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::zeros(pair[1], pair[0]))
            .collect();
        Ok(Network { sizes: sizes.to_vec(), layers })
    }

    /// Builds a network from explicit layers, checking that they chain.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Network> {
        let first = layers.first().ok_or(NetworkError::TooFewLayers(1))?;
        let mut sizes = vec![first.input_size()];

        for (index, layer) in layers.iter().enumerate() {
            if layer.weights.rows != layer.biases.len() {
                return Err(NetworkError::LayerMismatch {
                    index,
                    reason: format!(
                        "{} weight rows but {} biases",
                        layer.weights.rows,
                        layer.biases.len()
                    ),
                });
            }
            let expected_inputs = sizes[index];
            if layer.input_size() != expected_inputs {
                return Err(NetworkError::LayerMismatch {
                    index,
                    reason: format!(
                        "expects {} inputs but the previous layer has {} outputs",
                        layer.input_size(),
                        expected_inputs
                    ),
                });
            }
            sizes.push(layer.size());
        }

        validate_sizes(&sizes)?;
        Ok(Network { sizes, layers })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of layers including the input layer.
    pub fn num_layers(&self) -> usize {
        self.sizes.len()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    /// Forward pass: `a ← σ(W·a + b)` through every layer.
    pub fn feed_forward(&self, input: &[f64]) -> Vec<f64> {
        self.layers
            .iter()
            .fold(input.to_vec(), |a, layer| layer.feed_from(&a))
    }

    /// Inference entry point; identical to [`Network::feed_forward`].
    pub fn predict(&self, input: &[f64]) -> Vec<f64> {
        self.feed_forward(input)
    }

    /// Quadratic cost of the current prediction for one example.
    pub fn cost(&self, example: &Example) -> f64 {
        QuadraticCost::cost(&self.feed_forward(&example.input), &example.target)
    }

    /// Swaps in a complete new parameter set. Shapes must match the old one.
    pub(crate) fn replace_layers(&mut self, layers: Vec<Layer>) {
        assert_eq!(layers.len(), self.layers.len(), "layer count changed");
        debug_assert!(self
            .layers
            .iter()
            .zip(&layers)
            .all(|(old, new)| old.weights.shape() == new.weights.shape()
                && old.biases.len() == new.biases.len()));
        self.layers = layers;
    }
}

fn validate_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.len() < 2 {
        return Err(NetworkError::TooFewLayers(sizes.len()));
    }
    if let Some(index) = sizes.iter().position(|&s| s == 0) {
        return Err(NetworkError::EmptyLayer { index });
    }
    Ok(())
}

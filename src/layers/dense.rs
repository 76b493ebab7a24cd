use rand::Rng;
use rand_distr::StandardNormal;

use crate::{activation::sigmoid_vec, math::{vector, Matrix}};

/// A fully connected sigmoid layer mapping `input_size` activations to `size` outputs.
///
/// `weights` has shape `(size × input_size)`, `biases` has length `size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub weights: Matrix,
    pub biases: Vec<f64>,
}

impl Layer {
    /// Weights and biases drawn independently from N(0, 1).
    pub fn random<R: Rng + ?Sized>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        let weights = Matrix::standard_normal(size, input_size, rng);
        let biases = (0..size).map(|_| rng.sample(StandardNormal)).collect();
        Layer { weights, biases }
    }

    pub fn zeros(size: usize, input_size: usize) -> Layer {
        Layer {
            weights: Matrix::zeros(size, input_size),
            biases: vec![0.0; size],
        }
    }

    pub fn size(&self) -> usize {
        self.biases.len()
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols
    }

    /// Weighted input `z = W·a + b`.
    pub fn pre_activation(&self, input: &[f64]) -> Vec<f64> {
        vector::add(&self.weights.dot(input), &self.biases)
    }

    /// `σ(W·a + b)`.
    pub fn feed_from(&self, input: &[f64]) -> Vec<f64> {
        sigmoid_vec(&self.pre_activation(input))
    }

    /// Returns a new layer with `rate`-scaled gradients subtracted.
    pub fn apply_gradients(&self, weights_grad: &Matrix, biases_grad: &[f64], rate: f64) -> Layer {
        Layer {
            weights: &self.weights - &weights_grad.scale(rate),
            biases: vector::subtract(&self.biases, &vector::scale(biases_grad, rate)),
        }
    }
}

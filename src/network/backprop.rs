use crate::{
    activation::{sigmoid_prime_vec, sigmoid_vec},
    data::Example,
    loss::QuadraticCost,
    math::{vector, Matrix},
    network::network::Network,
};

/// Gradient of the quadratic cost with respect to every bias and weight,
/// laid out exactly like the network's layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub biases: Vec<Vec<f64>>,
    pub weights: Vec<Matrix>,
}

impl Gradient {
    /// An all-zero gradient shaped like `network`; the starting point of a
    /// mini-batch fold.
    pub fn zeros_like(network: &Network) -> Gradient {
        let layers = network.layers();
        Gradient {
            biases: layers.iter().map(|l| vec![0.0; l.size()]).collect(),
            weights: layers
                .iter()
                .map(|l| Matrix::zeros(l.weights.rows, l.weights.cols))
                .collect(),
        }
    }

    /// Elementwise sum. Consumes `self` so it can drive a fold.
    pub fn add(self, other: &Gradient) -> Gradient {
        assert_eq!(self.biases.len(), other.biases.len(), "gradient layer count mismatch");
        Gradient {
            biases: self
                .biases
                .iter()
                .zip(&other.biases)
                .map(|(a, b)| vector::add(a, b))
                .collect(),
            weights: self
                .weights
                .iter()
                .zip(&other.weights)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }

    pub fn scale(&self, factor: f64) -> Gradient {
        Gradient {
            biases: self.biases.iter().map(|b| vector::scale(b, factor)).collect(),
            weights: self.weights.iter().map(|w| w.scale(factor)).collect(),
        }
    }

    /// Number of parameter layers covered.
    pub fn len(&self) -> usize {
        self.biases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biases.is_empty()
    }
}

/// Everything the backward pass needs from one forward pass.
struct ActivationTrace {
    /// `activations[0]` is the raw input; `activations[l]` feeds layer `l`.
    activations: Vec<Vec<f64>>,
    /// `zs[l]` is layer `l`'s weighted input before the sigmoid.
    zs: Vec<Vec<f64>>,
}

impl Network {
    fn trace(&self, input: &[f64]) -> ActivationTrace {
        let mut activations = Vec::with_capacity(self.layers().len() + 1);
        let mut zs = Vec::with_capacity(self.layers().len());
        activations.push(input.to_vec());

        for layer in self.layers() {
            let z = layer.pre_activation(&activations[activations.len() - 1]);
            activations.push(sigmoid_vec(&z));
            zs.push(z);
        }

        ActivationTrace { activations, zs }
    }

    /// Gradient of the quadratic cost of one example via the chain rule.
    ///
    /// Reads the current parameters only; the network is never mutated.
    pub fn backprop(&self, example: &Example) -> Gradient {
        let trace = self.trace(&example.input);
        let layers = self.layers();
        let last = layers.len() - 1;

        // Gradients are produced back to front and reversed at the end.
        let mut biases = Vec::with_capacity(layers.len());
        let mut weights = Vec::with_capacity(layers.len());

        let output = &trace.activations[last + 1];
        let mut delta = vector::hadamard(
            &QuadraticCost::derivative(output, &example.target),
            &sigmoid_prime_vec(&trace.zs[last]),
        );
        weights.push(Matrix::outer(&delta, &trace.activations[last]));
        biases.push(delta.clone());

        // `l` walks the hidden layers from last to first. Layer `l + 1` already
        // has its delta, and `activations[l]` is the input of layer `l`.
        // A network without hidden layers skips this loop.
        for l in (0..last).rev() {
            delta = vector::hadamard(
                &layers[l + 1].weights.transpose().dot(&delta),
                &sigmoid_prime_vec(&trace.zs[l]),
            );
            weights.push(Matrix::outer(&delta, &trace.activations[l]));
            biases.push(delta.clone());
        }

        biases.reverse();
        weights.reverse();
        Gradient { biases, weights }
    }
}

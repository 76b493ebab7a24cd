use crate::{data::Example, network::Network};

/// Number of examples whose predicted class (argmax of the output) equals the
/// target's argmax.
pub fn evaluate(network: &Network, examples: &[Example]) -> usize {
    examples
        .iter()
        .filter(|ex| argmax(&network.predict(&ex.input)) == argmax(&ex.target))
        .count()
}

/// Index of the maximum element in a slice. Ties go to the later index.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::one_hot, layers::Layer, math::Matrix};

    #[test]
    fn argmax_picks_largest() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), 1);
        assert_eq!(argmax(&[3.0]), 0);
        assert_eq!(argmax(&[0.5, 0.5]), 1);
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn counts_matching_classes() {
        // output[0] grows with input[0], output[1] with input[1]
        let layer = Layer {
            weights: Matrix::from_data(vec![vec![5.0, 0.0], vec![0.0, 5.0]]),
            biases: vec![0.0, 0.0],
        };
        let net = Network::from_layers(vec![layer]).unwrap();
        let examples = vec![
            Example::new(vec![1.0, 0.0], one_hot(0, 2)),
            Example::new(vec![0.0, 1.0], one_hot(1, 2)),
            Example::new(vec![1.0, 0.0], one_hot(1, 2)),
        ];
        let correct = evaluate(&net, &examples);
        assert_eq!(correct, 2);
        assert!(correct <= examples.len());
        assert_eq!(evaluate(&net, &[]), 0);
    }
}

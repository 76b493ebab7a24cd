use backprop_nn::{train_network, Example, Layer, Network};
use rand::{rngs::StdRng, SeedableRng};

const EPS: f64 = 1e-5;
const TOLERANCE: f64 = 1e-4;

fn cost_with(layers: Vec<Layer>, example: &Example) -> f64 {
    Network::from_layers(layers).unwrap().cost(example)
}

/// Central difference of the cost with respect to one parameter.
fn numerical<F>(net: &Network, example: &Example, perturb: F) -> f64
where
    F: Fn(&mut Vec<Layer>, f64),
{
    let mut plus = net.layers().to_vec();
    perturb(&mut plus, EPS);
    let mut minus = net.layers().to_vec();
    perturb(&mut minus, -EPS);
    (cost_with(plus, example) - cost_with(minus, example)) / (2.0 * EPS)
}

fn check_gradients(sizes: &[usize], example: &Example, seed: u64) {
    let net = Network::new(sizes, &mut StdRng::seed_from_u64(seed)).unwrap();
    let analytic = net.backprop(example);

    for (l, layer) in net.layers().iter().enumerate() {
        for i in 0..layer.weights.rows {
            for j in 0..layer.weights.cols {
                let n = numerical(&net, example, |ls, d| ls[l].weights.data[i][j] += d);
                let a = analytic.weights[l].data[i][j];
                assert!(
                    (a - n).abs() < TOLERANCE,
                    "weight [{l}][{i}][{j}]: analytic {a} vs numerical {n}"
                );
            }
            let n = numerical(&net, example, |ls, d| ls[l].biases[i] += d);
            let a = analytic.biases[l][i];
            assert!(
                (a - n).abs() < TOLERANCE,
                "bias [{l}][{i}]: analytic {a} vs numerical {n}"
            );
        }
    }
}

#[test]
fn gradient_matches_finite_differences_2_3_1() {
    check_gradients(&[2, 3, 1], &Example::new(vec![0.3, -0.7], vec![0.9]), 17);
}

#[test]
fn gradient_matches_finite_differences_deeper() {
    check_gradients(
        &[3, 4, 3, 2],
        &Example::new(vec![0.5, -1.2, 0.8], vec![1.0, 0.0]),
        23,
    );
}

#[test]
fn gradient_matches_finite_differences_without_hidden_layer() {
    check_gradients(&[3, 2], &Example::new(vec![1.0, 0.5, -0.5], vec![0.0, 1.0]), 29);
}

#[test]
fn zero_network_single_step_is_exact() {
    let mut net = Network::zeros(&[2, 2, 1]).unwrap();
    let example = Example::new(vec![1.0, 0.0], vec![1.0]);

    assert_eq!(net.predict(&example.input), vec![0.5]);

    // Output delta: (0.5 - 1) * σ'(0) = -0.5 * 0.25 = -0.125.
    // Hidden delta: W₁ᵀ·δ = 0, so the first layer gets no gradient.
    let g = net.backprop(&example);
    assert_eq!(g.biases[1], vec![-0.125]);
    assert_eq!(g.weights[1].data, vec![vec![-0.0625, -0.0625]]);
    assert_eq!(g.biases[0], vec![0.0, 0.0]);
    assert_eq!(g.weights[0].data, vec![vec![0.0, 0.0], vec![0.0, 0.0]]);

    let mut rng = StdRng::seed_from_u64(0);
    train_network(&mut net, &[example], 1, 1, 1.0, None, &mut rng).unwrap();

    let layers = net.layers();
    assert_eq!(layers[1].biases, vec![0.125]);
    assert_eq!(layers[1].weights.data, vec![vec![0.0625, 0.0625]]);
    assert_eq!(layers[0].biases, vec![0.0, 0.0]);
    assert_eq!(layers[0].weights.data, vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
}

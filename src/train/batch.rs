use crate::{
    data::Example,
    network::{Gradient, Network},
};

/// Contiguous mini-batches of `size` items; the last one holds the remainder.
///
/// Panics if `size == 0`.
pub fn mini_batches<T>(items: &[T], size: usize) -> std::slice::Chunks<'_, T> {
    assert!(size > 0, "mini-batch size must be at least 1");
    items.chunks(size)
}

/// Sum of the per-example gradients of a mini-batch, folded from zeros.
pub fn accumulate_gradients(network: &Network, batch: &[&Example]) -> Gradient {
    batch
        .iter()
        .fold(Gradient::zeros_like(network), |acc, example| {
            acc.add(&network.backprop(example))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn partition_sizes() {
        for n in 1..40usize {
            for b in 1..12usize {
                let items: Vec<usize> = (0..n).collect();
                let batches: Vec<&[usize]> = mini_batches(&items, b).collect();

                assert_eq!(batches.len(), (n + b - 1) / b, "n={n} b={b}");
                let (last, full) = batches.split_last().unwrap();
                assert!(full.iter().all(|chunk| chunk.len() == b));
                let expected_last = if n % b == 0 { b } else { n % b };
                assert_eq!(last.len(), expected_last);

                let flat: Vec<usize> = batches.concat();
                assert_eq!(flat, items);
            }
        }
    }

    #[test]
    #[should_panic(expected = "mini-batch size")]
    fn zero_size_panics() {
        let _ = mini_batches(&[1, 2, 3], 0);
    }

    #[test]
    fn accumulation_is_sum_of_backprops() {
        let net = Network::new(&[2, 3, 2], &mut StdRng::seed_from_u64(11)).unwrap();
        let a = Example::new(vec![0.1, 0.9], vec![1.0, 0.0]);
        let b = Example::new(vec![-0.4, 0.2], vec![0.0, 1.0]);

        let total = accumulate_gradients(&net, &[&a, &b]);
        let expected = net.backprop(&a).add(&net.backprop(&b));
        for (x, y) in total.biases.iter().flatten().zip(expected.biases.iter().flatten()) {
            assert!((x - y).abs() < 1e-15);
        }
        assert_eq!(accumulate_gradients(&net, &[]), Gradient::zeros_like(&net));
    }
}

use crate::math::vector;

/// Quadratic cost `½‖output − target‖²`, the loss backpropagation differentiates.
pub struct QuadraticCost;

impl QuadraticCost {
    pub fn cost(output: &[f64], target: &[f64]) -> f64 {
        0.5 * vector::subtract(output, target)
            .iter()
            .map(|d| d * d)
            .sum::<f64>()
    }

    /// Gradient with respect to the output activations: `output − target`.
    pub fn derivative(output: &[f64], target: &[f64]) -> Vec<f64> {
        vector::subtract(output, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_half_squared_norm() {
        assert_eq!(QuadraticCost::cost(&[1.0, 2.0], &[0.0, 0.0]), 2.5);
        assert_eq!(QuadraticCost::cost(&[0.3], &[0.3]), 0.0);
    }

    #[test]
    fn derivative_is_difference() {
        assert_eq!(QuadraticCost::derivative(&[0.5, 1.0], &[1.0, 0.0]), vec![-0.5, 1.0]);
    }
}

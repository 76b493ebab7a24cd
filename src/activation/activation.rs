/// The logistic function `1 / (1 + e^(-z))`.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Derivative of [`sigmoid`] with respect to its pre-activation input.
pub fn sigmoid_prime(z: f64) -> f64 {
    let s = sigmoid(z);
    s * (1.0 - s)
}

/// Applies [`sigmoid`] to every element.
pub fn sigmoid_vec(z: &[f64]) -> Vec<f64> {
    z.iter().map(|&x| sigmoid(x)).collect()
}

/// Applies [`sigmoid_prime`] to every element.
pub fn sigmoid_prime_vec(z: &[f64]) -> Vec<f64> {
    z.iter().map(|&x| sigmoid_prime(x)).collect()
}

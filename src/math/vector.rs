//! Elementwise operations on dense vectors.

pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    zip_with(a, b, "add", |x, y| x + y)
}

pub fn subtract(a: &[f64], b: &[f64]) -> Vec<f64> {
    zip_with(a, b, "subtract", |x, y| x - y)
}

/// Elementwise (Hadamard) product; used to gate an error by activation derivatives.
pub fn hadamard(a: &[f64], b: &[f64]) -> Vec<f64> {
    zip_with(a, b, "hadamard", |x, y| x * y)
}

pub fn scale(a: &[f64], factor: f64) -> Vec<f64> {
    a.iter().map(|x| x * factor).collect()
}

fn zip_with<F>(a: &[f64], b: &[f64], op: &str, f: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    assert_eq!(
        a.len(),
        b.len(),
        "Invalid {op} dimensions: {} vs {}",
        a.len(),
        b.len()
    );
    a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect()
}

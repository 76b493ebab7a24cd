use rand::Rng;
use rand_distr::StandardNormal;
use std::ops::{Add, Sub};

/// Dense row-major matrix.
///
/// Every operation checks operand shapes before computing and panics on a
/// mismatch; an incompatible shape is a construction bug, never a runtime
/// condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Samples every entry independently from N(0, 1) using the given source.
    pub fn standard_normal<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for row in res.data.iter_mut() {
            for x in row.iter_mut() {
                *x = rng.sample(StandardNormal);
            }
        }
        res
    }

    /// Builds a matrix from row vectors. Panics if the rows are ragged or empty.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        assert!(!data.is_empty(), "Matrix::from_data needs at least one row");
        let cols = data[0].len();
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix::from_data rows must all have length {cols}"
        );
        Matrix {
            rows: data.len(),
            cols,
            data,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Matrix-vector product: `self[m×n] · v[n] -> [m]`.
    pub fn dot(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(
            self.cols,
            v.len(),
            "Invalid dot dimensions: {}x{} matrix with vector of length {}",
            self.rows,
            self.cols,
            v.len()
        );

        self.data
            .iter()
            .map(|row| row.iter().zip(v).map(|(w, x)| w * x).sum())
            .collect()
    }

    /// Outer product `a[m] ⊗ b_row[n] -> m×n`, with `res[i][k] = a[i] * b_row[k]`.
    ///
    /// Turns an error vector and the activation feeding a layer into that
    /// layer's weight gradient without materializing a transposed activation.
    pub fn outer(a: &[f64], b_row: &[f64]) -> Matrix {
        Matrix {
            rows: a.len(),
            cols: b_row.len(),
            data: a
                .iter()
                .map(|ai| b_row.iter().map(|bk| ai * bk).collect())
                .collect(),
        }
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    fn zip_with<F>(&self, rhs: &Matrix, op: &str, f: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "Invalid {op} dimensions: {:?} vs {:?}",
            self.shape(),
            rhs.shape()
        );

        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
                .collect(),
        }
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, "add", |a, b| a + b)
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, "subtract", |a, b| a - b)
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

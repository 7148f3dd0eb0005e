//! Polynomial feature expansion, `x -> [1, x, x², …, x^d]`.

use nalgebra::DMatrix;

pub const DEFAULT_DEGREE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialFeatures {
    pub degree: usize,
}

impl Default for PolynomialFeatures {
    fn default() -> Self {
        Self::new(DEFAULT_DEGREE)
    }
}

impl PolynomialFeatures {
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    /// Number of output columns, intercept included.
    pub fn n_features(&self) -> usize {
        self.degree + 1
    }

    pub fn expand(&self, x: f64) -> Vec<f64> {
        std::iter::successors(Some(1.0), |p| Some(p * x)).take(self.n_features()).collect()
    }

    /// One expanded row per input value.
    pub fn design_matrix(&self, xs: &[f64]) -> DMatrix<f64> {
        DMatrix::from_fn(xs.len(), self.n_features(), |row, col| xs[row].powi(col as i32))
    }
}

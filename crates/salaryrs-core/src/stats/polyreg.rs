use crate::features::PolynomialFeatures;

use nalgebra::DVector;

use std::fmt;

/// Polynomial least squares model, `coeffs[j]` multiplies `x^j`.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyReg {
    pub coeffs: Vec<f64>,
}

impl fmt::Display for PolyReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y =")?;
        for (power, c) in self.coeffs.iter().enumerate() {
            let sep = if power == 0 { " " } else { " + " };
            match power {
                0 => write!(f, "{sep}{c:.4}")?,
                1 => write!(f, "{sep}{c:.4} * x")?,
                _ => write!(f, "{sep}{c:.4} * x^{power}")?,
            }
        }
        Ok(())
    }
}

impl PolyReg {
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn calculate(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    pub fn from_coeffs(coeffs: &[f64]) -> Self {
        Self { coeffs: coeffs.to_vec() }
    }

    /// Re-expresses a model trained on `x - offset` in powers of raw `x`.
    pub fn uncentered(&self, offset: f64) -> Self {
        let mut coeffs = vec![0.0; self.coeffs.len()];
        for (j, &c) in self.coeffs.iter().enumerate() {
            let mut binom = 1.0;
            for k in (0..=j).rev() {
                coeffs[k] += c * binom * (-offset).powi((j - k) as i32);
                // C(j, k - 1) from C(j, k)
                binom = binom * k as f64 / (j - k + 1) as f64;
            }
        }
        Self { coeffs }
    }

    /// Solves the normal equations `(XᵀX) β = Xᵀy` over the expanded design
    /// matrix. `None` if there are fewer points than coefficients or the
    /// system is singular.
    pub fn train(x: &[f64], y: &[f64], degree: usize) -> Option<Self> {
        if x.len() != y.len() || x.len() < degree + 1 {
            return None;
        }

        let design = PolynomialFeatures::new(degree).design_matrix(x);
        let target = DVector::from_column_slice(y);

        let xt = design.transpose();
        let a = &xt * &design;
        let b = &xt * target;

        let result = a.lu().solve(&b)?;
        if result.iter().any(|c| !c.is_finite()) {
            return None;
        }

        Some(Self { coeffs: result.iter().copied().collect() })
    }
}

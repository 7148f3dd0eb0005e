use crate::features::DEFAULT_DEGREE;
use crate::fit::fiterror::{FitError, FitResult};
use crate::fit::fitkind::FitKind;
use crate::fit::fitmodel::FitModel;
use crate::fit::check_input;
use crate::stats::{adjusted_r2, aic_from_rss, r2_from_predictions, rmse, rss, PolyReg};

use std::fmt;

impl fmt::Display for PolyFit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, r2: {:?}, n: {}", FitKind::Poly, self.model, self.r2, self.n)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolyFit {
    /// Trained on `x - x_offset` for conditioning.
    pub model: PolyReg,
    pub x_offset: f64,
    pub n: usize,
    pub r2: Option<f64>,
    pub adjusted_r2: Option<f64>,
    pub rss: f64,
    pub rmse: Option<f64>,
    pub sigma: Option<f64>,
    pub aic: f64,
}

impl FitModel for PolyFit {
    fn kind(&self) -> FitKind {
        FitKind::Poly
    }
    fn predict(&self, x: f64) -> f64 {
        self.model.calculate(x - self.x_offset)
    }
    fn coefficients(&self) -> Vec<f64> {
        self.model.uncentered(self.x_offset).coeffs
    }
    fn r2(&self) -> Option<f64> {
        self.r2
    }
    fn adj_r2(&self) -> Option<f64> {
        self.adjusted_r2
    }
    fn rss(&self) -> f64 {
        self.rss
    }
    fn rmse(&self) -> Option<f64> {
        self.rmse
    }
    fn sigma(&self) -> Option<f64> {
        self.sigma
    }
    fn aic(&self) -> f64 {
        self.aic
    }
    fn p_value(&self) -> Option<f64> {
        None
    }
}

impl PolyFit {
    pub fn from_data(x: &[f64], y: &[f64]) -> FitResult<Self> {
        Self::with_degree(x, y, DEFAULT_DEGREE)
    }

    pub fn with_degree(x: &[f64], y: &[f64], degree: usize) -> FitResult<Self> {
        if degree == 0 {
            return Err(FitError::InvalidDegree(degree));
        }
        let n_coeffs = degree + 1;
        check_input(x, y, n_coeffs)?;

        let n = x.len();
        let x_offset = x.iter().sum::<f64>() / n as f64; // normalize to mean
        let x_norm: Vec<f64> = x.iter().map(|&xi| xi - x_offset).collect();

        let model = PolyReg::train(&x_norm, y, degree).ok_or(FitError::Singular)?;

        let y_hat: Vec<f64> = x_norm.iter().map(|&xi| model.calculate(xi)).collect();
        let rss = rss(y, &y_hat);
        let r2 = r2_from_predictions(y, &y_hat);
        // predictors: x..x^d, intercept is implicit
        let adjusted_r2 = r2.map(|r2| adjusted_r2(r2, n, degree));
        let sigma =
            (n > n_coeffs).then(|| (rss / (n - n_coeffs) as f64).sqrt()).filter(|s| s.is_finite());

        Ok(Self {
            model,
            x_offset,
            n,
            r2,
            adjusted_r2,
            rss,
            rmse: rmse(y, &y_hat),
            sigma,
            aic: aic_from_rss(rss, n, n_coeffs),
        })
    }

    pub fn degree(&self) -> usize {
        self.model.degree()
    }
}

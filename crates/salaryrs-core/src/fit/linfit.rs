use crate::fit::fiterror::{FitError, FitResult};
use crate::fit::fitkind::FitKind;
use crate::fit::fitmodel::FitModel;
use crate::fit::check_input;
use crate::stats::{adjusted_r2, aic_from_rss, r2_from_predictions, rmse, rss, LinReg};

use statrs::distribution::{ContinuousCDF, StudentsT};

use std::fmt;

impl fmt::Display for LinearFit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, r2: {:?}, n: {}", FitKind::Linear, self.model, self.r2, self.n)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearFit {
    pub model: LinReg,
    pub n: usize,
    pub r2: Option<f64>,
    pub adjusted_r2: Option<f64>,
    pub rss: f64,
    pub rmse: Option<f64>,
    pub sigma: Option<f64>,
    pub p_value: Option<f64>,
    pub aic: f64,
}

impl FitModel for LinearFit {
    fn kind(&self) -> FitKind {
        FitKind::Linear
    }
    fn predict(&self, x: f64) -> f64 {
        self.model.calculate(x)
    }
    fn coefficients(&self) -> Vec<f64> {
        vec![self.model.intercept, self.model.slope]
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
        self.p_value
    }
}

impl LinearFit {
    pub fn from_data(x: &[f64], y: &[f64]) -> FitResult<Self> {
        check_input(x, y, 2)?;

        let model = LinReg::train(x, y).ok_or(FitError::Singular)?;

        let n = x.len();
        let y_hat: Vec<f64> = x.iter().map(|&xi| model.calculate(xi)).collect();
        let rss = rss(y, &y_hat);
        let r2 = r2_from_predictions(y, &y_hat);
        let adjusted_r2 = r2.map(|r2| adjusted_r2(r2, n, 1));

        // residual degrees of freedom: n - 2
        let sigma = (n > 2).then(|| (rss / (n as f64 - 2.0)).sqrt()).filter(|s| s.is_finite());
        let p_value = sigma.and_then(|sigma| slope_p_value(x, model.slope, sigma));

        Ok(Self {
            model,
            n,
            r2,
            adjusted_r2,
            rss,
            rmse: rmse(y, &y_hat),
            sigma,
            p_value,
            aic: aic_from_rss(rss, n, 2),
        })
    }
}

/// Two-sided p-value of the slope against H0: slope = 0.
fn slope_p_value(x: &[f64], slope: f64, sigma: f64) -> Option<f64> {
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let ss_xx: f64 = x.iter().map(|xi| (xi - x_mean).powi(2)).sum();

    let se_slope = sigma / ss_xx.sqrt();
    // e.g. perfect fit (sigma = 0)
    if !se_slope.is_finite() || se_slope <= 0.0 {
        return None;
    }
    let t_stat = slope / se_slope;
    if !t_stat.is_finite() {
        return None;
    }
    let dist = StudentsT::new(0.0, 1.0, n - 2.0).ok()?;
    Some(2.0 * (1.0 - dist.cdf(t_stat.abs())))
}

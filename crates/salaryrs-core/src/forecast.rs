//! Fit both models once over the full dataset and evaluate them at the
//! query experience.

use crate::dataset::Dataset;
use crate::fit::{FitError, FitKind, FitModel, FitResult, LinearFit, PolyFit};

/// Default query experience in years.
pub const DEFAULT_AT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub kind: FitKind,
    pub x: f64,
    pub y: f64,
}

impl Prediction {
    pub fn from_model(model: &dyn FitModel, x: f64) -> Self {
        Self { kind: model.kind(), x, y: model.predict(x) }
    }

    /// Like [`Prediction::from_model`], but overflow is an error.
    pub fn checked(model: &dyn FitModel, x: f64) -> FitResult<Self> {
        let p = Self::from_model(model, x);
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(FitError::NonFinitePrediction { kind: p.kind, at: x });
        }
        Ok(p)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub dataset: Dataset,
    pub linear: LinearFit,
    pub poly: PolyFit,
    pub linear_prediction: Prediction,
    pub poly_prediction: Prediction,
}

impl Forecast {
    pub fn compute(dataset: &Dataset, at: f64, degree: usize) -> FitResult<Self> {
        let (x, y) = (dataset.xs(), dataset.ys());

        let linear = LinearFit::from_data(&x, &y)?;
        let poly = PolyFit::with_degree(&x, &y, degree)?;

        let models: [&dyn FitModel; 2] = [&linear, &poly];
        for model in models {
            tracing::info!(kind = model.kind().as_str(), "{}", model);
        }

        let linear_prediction = Prediction::checked(&linear, at)?;
        let poly_prediction = Prediction::checked(&poly, at)?;
        tracing::info!(
            at,
            linear = linear_prediction.y,
            poly = poly_prediction.y,
            "predicted salaries"
        );

        Ok(Self { dataset: dataset.clone(), linear, poly, linear_prediction, poly_prediction })
    }

    pub fn at(&self) -> f64 {
        self.poly_prediction.x
    }

    pub fn models(&self) -> [&dyn FitModel; 2] {
        [&self.linear, &self.poly]
    }

    pub fn predictions(&self) -> [Prediction; 2] {
        [self.linear_prediction, self.poly_prediction]
    }
}

#[cfg(test)]
mod tests {
    use super::{Forecast, DEFAULT_AT};
    use crate::dataset::Dataset;
    use crate::features::DEFAULT_DEGREE;
    use crate::fit::{FitError, FitKind, FitModel};

    fn salaries_forecast() -> Forecast {
        Forecast::compute(&Dataset::salaries(), DEFAULT_AT, DEFAULT_DEGREE).unwrap()
    }

    #[test]
    fn test_predictions_between_neighbours() {
        let forecast = salaries_forecast();
        for p in forecast.predictions() {
            assert_eq!(p.x, 5.);
            assert!(p.y > 38360. && p.y < 49049., "{:?} out of range", p);
        }
        assert_eq!(forecast.linear_prediction.kind, FitKind::Linear);
        assert_eq!(forecast.poly_prediction.kind, FitKind::Poly);
    }

    #[test]
    fn test_predictions_values() {
        let forecast = salaries_forecast();
        assert!((forecast.linear_prediction.y - 44764.5).abs() < 1e-6);
        assert!((forecast.poly_prediction.y - 42432.5).abs() < 1e-6);
    }

    #[test]
    fn test_forecast_deterministic() {
        let a = salaries_forecast();
        let b = salaries_forecast();

        for (ma, mb) in a.models().iter().zip(b.models()) {
            let (ca, cb) = (ma.coefficients(), mb.coefficients());
            assert!(ca.iter().zip(&cb).all(|(x, y)| x.to_bits() == y.to_bits()));
        }
        for (pa, pb) in a.predictions().iter().zip(b.predictions()) {
            assert_eq!(pa.y.to_bits(), pb.y.to_bits());
        }
    }

    #[test]
    fn test_forecast_rejects_overflowing_prediction() {
        let data = Dataset::salaries();
        let err = Forecast::compute(&data, 1e300, DEFAULT_DEGREE).unwrap_err();
        assert_eq!(err, FitError::NonFinitePrediction { kind: FitKind::Poly, at: 1e300 });
        assert!(!err.is_degenerate());

        let err = Forecast::compute(&data, f64::INFINITY, DEFAULT_DEGREE).unwrap_err();
        assert!(matches!(err, FitError::NonFinitePrediction { kind: FitKind::Linear, .. }));
    }

    #[test]
    fn test_forecast_rejects_degenerate_dataset() {
        let data = Dataset::from_xy(&[3., 3., 3.], &[10., 20., 30.]).unwrap();
        let err = Forecast::compute(&data, DEFAULT_AT, DEFAULT_DEGREE).unwrap_err();
        assert!(err.is_degenerate());

        let data = Dataset::from_xy(&[3.], &[10.]).unwrap();
        let err = Forecast::compute(&data, DEFAULT_AT, DEFAULT_DEGREE).unwrap_err();
        assert!(err.is_degenerate());
    }
}

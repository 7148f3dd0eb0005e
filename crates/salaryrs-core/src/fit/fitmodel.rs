use crate::fit::fitkind::FitKind;

use std::fmt;

pub trait FitModel {
    fn kind(&self) -> FitKind;
    fn predict(&self, x: f64) -> f64;
    /// Coefficients in ascending powers of x.
    fn coefficients(&self) -> Vec<f64>;
    fn r2(&self) -> Option<f64>;
    fn adj_r2(&self) -> Option<f64>;
    fn rss(&self) -> f64;
    fn rmse(&self) -> Option<f64>;
    fn sigma(&self) -> Option<f64>;
    fn aic(&self) -> f64;
    fn p_value(&self) -> Option<f64>;
}

impl fmt::Display for dyn FitModel + '_ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, coeffs: {:?}, r2: {:?}, adj_r2: {:?}, rmse: {:?}, sigma: {:?}, aic: {:.3}, \
             p: {:?}",
            self.kind(),
            self.coefficients(),
            self.r2(),
            self.adj_r2(),
            self.rmse(),
            self.sigma(),
            self.aic(),
            self.p_value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::FitModel;
    use crate::fit::{LinearFit, PolyFit};

    #[test]
    fn test_summary_lists_fit_statistics() {
        let (x, y) = ([1., 2., 3., 4.], [1.1, 1.9, 3.2, 3.9]);
        let lin = LinearFit::from_data(&x, &y).unwrap();
        let poly = PolyFit::from_data(&x, &y).unwrap();

        let summary = format!("{}", &lin as &dyn FitModel);
        assert!(summary.starts_with("Linear, coeffs: "));
        assert!(summary.contains(&format!("adj_r2: {:?}", lin.adjusted_r2)));
        assert!(summary.contains(&format!("sigma: {:?}", lin.sigma)));
        assert!(summary.contains(&format!("p: {:?}", lin.p_value)));
        assert!(lin.p_value.is_some());

        let summary = format!("{}", &poly as &dyn FitModel);
        assert!(summary.starts_with("Polynomial, coeffs: "));
        assert!(summary.ends_with("p: None"));
    }
}

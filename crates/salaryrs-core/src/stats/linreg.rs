use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinReg {
    pub intercept: f64,
    pub slope: f64,
}

impl fmt::Display for LinReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y = {:.4} * x + {:.4}", self.slope, self.intercept)
    }
}

impl LinReg {
    pub fn calculate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Closed-form least squares. `None` if x has no variance.
    pub fn train(x: &[f64], y: &[f64]) -> Option<Self> {
        if x.len() != y.len() || x.is_empty() {
            return None;
        }

        let n = x.len() as f64;
        let avg_x: f64 = x.iter().sum::<f64>() / n;
        let avg_y: f64 = y.iter().sum::<f64>() / n;

        let ss_xx: f64 = x.iter().map(|xi| (xi - avg_x).powi(2)).sum();
        let ss_xy: f64 = x.iter().zip(y).map(|(xi, yi)| (xi - avg_x) * (yi - avg_y)).sum();

        // no variance in x relative to its magnitude, no meaningful regression
        let scale: f64 = x.iter().map(|xi| xi * xi).sum();
        if !ss_xx.is_finite() || ss_xx <= f64::EPSILON * scale {
            return None;
        }

        let slope = ss_xy / ss_xx;
        let intercept = avg_y - slope * avg_x;

        Some(Self { intercept, slope })
    }
}

#[cfg(test)]
mod tests {
    use super::LinReg;

    #[test]
    fn test_linreg_exact_line() {
        let x = [0., 1., 2., 3.];
        let y = [1., 3., 5., 7.]; // y = 2x + 1

        let model = LinReg::train(&x, &y).unwrap();
        assert!((model.slope - 2.0).abs() < 1e-12);
        assert!((model.intercept - 1.0).abs() < 1e-12);
        assert!((model.calculate(10.) - 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_linreg_constant_x() {
        let x = [3., 3., 3.];
        let y = [1., 2., 3.];

        assert_eq!(LinReg::train(&x, &y), None);
    }

    #[test]
    fn test_linreg_small_scale_x() {
        let x = [1e-9, 2e-9, 3e-9];
        let y = [1., 2., 3.];

        let model = LinReg::train(&x, &y).unwrap();
        assert!((model.slope - 1e9).abs() / 1e9 < 1e-9);
        assert!(model.intercept.abs() < 1e-6);
    }

    #[test]
    fn test_linreg_length_mismatch() {
        assert_eq!(LinReg::train(&[1., 2.], &[1.]), None);
        assert_eq!(LinReg::train(&[], &[]), None);
    }
}

//! Backend-independent description of the forecast chart. Renderers
//! (`plot::png`, the GUI viewer) only read this.

use crate::fit::FitModel;
use crate::forecast::{Forecast, Prediction};

/// Points per fitted curve.
pub const CURVE_SAMPLES: usize = 100;
/// Data labels sit this far right of their point, in x units.
pub const DATA_LABEL_OFFSET: f64 = 0.5;
/// Prediction labels sit this far left of their point, in x units.
pub const PREDICTION_LABEL_OFFSET: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotColor {
    Blue,
    Red,
    Green,
}

impl PlotColor {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PlotColor::Blue => (31, 119, 180),
            PlotColor::Red => (214, 39, 40),
            PlotColor::Green => (44, 160, 44),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line(LineStyle),
    Scatter,
    Star,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: PlotColor,
    pub kind: SeriesKind,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub position: (f64, f64),
    pub color: PlotColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
}

impl PlotSpec {
    pub fn from_forecast(forecast: &Forecast) -> Self {
        let (x_min, x_max) = forecast.dataset.x_range().unwrap_or((0.0, 0.0));
        let grid = linspace(x_min, x_max, CURVE_SAMPLES);

        let curve = |model: &dyn FitModel| -> Vec<(f64, f64)> {
            grid.iter().map(|&x| (x, model.predict(x))).collect()
        };
        let star = |p: &Prediction| vec![(p.x, p.y)];

        let samples = forecast.dataset.samples();

        let series = vec![
            Series {
                label: "Linear model".to_owned(),
                color: PlotColor::Blue,
                kind: SeriesKind::Line(LineStyle::Dotted),
                points: curve(&forecast.linear),
            },
            Series {
                label: "Polynomial model".to_owned(),
                color: PlotColor::Red,
                kind: SeriesKind::Line(LineStyle::Dashed),
                points: curve(&forecast.poly),
            },
            Series {
                label: "Linear predicted salary".to_owned(),
                color: PlotColor::Blue,
                kind: SeriesKind::Star,
                points: star(&forecast.linear_prediction),
            },
            Series {
                label: "Polynomial predicted salary".to_owned(),
                color: PlotColor::Red,
                kind: SeriesKind::Star,
                points: star(&forecast.poly_prediction),
            },
            Series {
                label: "Training Data".to_owned(),
                color: PlotColor::Green,
                kind: SeriesKind::Scatter,
                points: samples.iter().map(|s| (s.experience, s.salary)).collect(),
            },
        ];

        let mut annotations: Vec<Annotation> = samples
            .iter()
            .map(|s| Annotation {
                text: format!("R {}", s.salary),
                position: (s.experience + DATA_LABEL_OFFSET, s.salary),
                color: PlotColor::Green,
            })
            .collect();
        for (p, color) in [
            (&forecast.linear_prediction, PlotColor::Blue),
            (&forecast.poly_prediction, PlotColor::Red),
        ] {
            annotations.push(Annotation {
                text: format!("R {:.2}", p.y),
                position: (p.x - PREDICTION_LABEL_OFFSET, p.y),
                color,
            });
        }

        Self {
            title: format!(
                "-- My {} Year Software Engineering Salary Forecast --",
                forecast.at()
            ),
            x_label: "Work Experience (years)".to_owned(),
            y_label: "Salary (ZAR)".to_owned(),
            series,
            annotations,
        }
    }

    /// Axis bounds covering every point and label, with a 5% buffer.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let points = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().copied())
            .chain(self.annotations.iter().map(|a| a.position))
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        let (mut x0, mut x1, mut y0, mut y1) =
            (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
        for (x, y) in points {
            x0 = x0.min(x);
            x1 = x1.max(x);
            y0 = y0.min(y);
            y1 = y1.max(y);
        }
        if x0 > x1 {
            return None;
        }

        Some((pad(x0, x1), pad(y0, y1)))
    }
}

fn pad(lo: f64, hi: f64) -> (f64, f64) {
    let buffer = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - buffer, hi + buffer)
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n < 2 || start == end {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::forecast::{Forecast, DEFAULT_AT};

    fn spec() -> PlotSpec {
        let forecast = Forecast::compute(&Dataset::salaries(), DEFAULT_AT, 2).unwrap();
        PlotSpec::from_forecast(&forecast)
    }

    #[test]
    fn test_spec_series_and_legend_order() {
        let spec = spec();
        let labels: Vec<&str> = spec.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Linear model",
                "Polynomial model",
                "Linear predicted salary",
                "Polynomial predicted salary",
                "Training Data"
            ]
        );
        assert_eq!(spec.series[0].kind, SeriesKind::Line(LineStyle::Dotted));
        assert_eq!(spec.series[1].kind, SeriesKind::Line(LineStyle::Dashed));
        assert_eq!(spec.series[4].points.len(), 5);
    }

    #[test]
    fn test_spec_curves_span_sample_range() {
        let spec = spec();
        for curve in &spec.series[..2] {
            assert_eq!(curve.points.len(), CURVE_SAMPLES);
            assert_eq!(curve.points.first().unwrap().0, 2.);
            assert!((curve.points.last().unwrap().0 - 10.).abs() < 1e-12);
        }
    }

    #[test]
    fn test_spec_annotations() {
        let spec = spec();
        assert_eq!(spec.annotations.len(), 7);
        assert_eq!(spec.annotations[0].text, "R 26867");
        assert_eq!(spec.annotations[0].position, (2.5, 26867.));
        assert_eq!(spec.annotations[6].text, "R 42432.50");
        assert_eq!(spec.annotations[6].position.0, 3.5);
        assert_eq!(spec.annotations[6].color, PlotColor::Red);
    }

    #[test]
    fn test_spec_text() {
        let spec = spec();
        assert_eq!(spec.title, "-- My 5 Year Software Engineering Salary Forecast --");
        assert_eq!(spec.x_label, "Work Experience (years)");
        assert_eq!(spec.y_label, "Salary (ZAR)");
    }

    #[test]
    fn test_spec_bounds_cover_points() {
        let spec = spec();
        let ((x0, x1), (y0, y1)) = spec.bounds().unwrap();
        assert!(x0 < 2. && x1 > 10.5);
        assert!(y0 < 26867. && y1 > 81279.);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0., 1., 3), vec![0., 0.5, 1.]);
        assert_eq!(linspace(2., 2., 10), vec![2.]);
    }
}

use itertools::{Itertools, MinMaxResult};
use serde::Deserialize;

use std::fs::File;
use std::path::Path;

/// Years of work experience.
pub const YEARS: [f64; 5] = [2., 4., 6., 8., 10.];
/// Monthly salary (ZAR) at each entry of [`YEARS`].
pub const SALARIES: [f64; 5] = [26867., 38360., 49049., 61178., 81279.];

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    pub experience: f64,
    pub salary: f64,
}

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("x and y have different lengths: {len_x} vs {len_y}")]
    LengthMismatch { len_x: usize, len_y: usize },
    #[error("dataset is empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::salaries()
    }
}

impl Dataset {
    /// The built-in experience/salary data.
    pub fn salaries() -> Self {
        let samples = YEARS
            .iter()
            .zip(SALARIES.iter())
            .map(|(&experience, &salary)| Sample { experience, salary })
            .collect();
        Self { samples }
    }

    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self, DatasetError> {
        if x.len() != y.len() {
            return Err(DatasetError::LengthMismatch { len_x: x.len(), len_y: y.len() });
        }
        if x.is_empty() {
            return Err(DatasetError::Empty);
        }
        let samples =
            x.iter().zip(y).map(|(&experience, &salary)| Sample { experience, salary }).collect();
        Ok(Self { samples })
    }

    /// Reads a CSV file with an `experience,salary` header.
    pub fn from_csv(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let samples = rdr.deserialize::<Sample>().collect::<Result<Vec<_>, _>>()?;
        if samples.is_empty() {
            return Err(DatasetError::Empty);
        }
        tracing::debug!(samples = samples.len(), "read dataset");
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.experience).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.salary).collect()
    }

    /// `(min, max)` of the experience values.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        match self.samples.iter().map(|s| s.experience).minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(x) => Some((x, x)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Dataset, DatasetError};

    #[test]
    fn test_builtin_salaries() {
        let data = Dataset::default();
        assert_eq!(data.len(), 5);
        assert_eq!(data.xs(), vec![2., 4., 6., 8., 10.]);
        assert_eq!(data.ys(), vec![26867., 38360., 49049., 61178., 81279.]);
        assert_eq!(data.x_range(), Some((2., 10.)));
    }

    #[test]
    fn test_from_xy_mismatch() {
        assert!(matches!(
            Dataset::from_xy(&[1., 2.], &[1.]),
            Err(DatasetError::LengthMismatch { len_x: 2, len_y: 1 })
        ));
        assert!(matches!(Dataset::from_xy(&[], &[]), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_from_reader() {
        let csv = "experience, salary\n1, 100\n3, 300.5\n";
        let data = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.xs(), vec![1., 3.]);
        assert_eq!(data.ys(), vec![100., 300.5]);
    }

    #[test]
    fn test_from_reader_empty() {
        let csv = "experience,salary\n";
        assert!(matches!(Dataset::from_reader(csv.as_bytes()), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_from_reader_bad_value() {
        let csv = "experience,salary\n1,abc\n";
        assert!(matches!(Dataset::from_reader(csv.as_bytes()), Err(DatasetError::Csv(_))));
    }
}

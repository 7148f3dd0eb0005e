use salaryrs_core::dataset::{Dataset, DatasetError};
use salaryrs_core::fit::FitError;
use salaryrs_core::forecast::Forecast as SalaryForecast;
use salaryrs_core::plot::{png, PlotError, PlotSpec};
use salaryrs_core::report;

use std::path::PathBuf;

/* =================== Public configuration types =================== */

#[derive(Debug, Clone)]
pub struct Config {
    pub verbosity: u8,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub enum Action {
    Forecast(Forecast),
}

#[derive(Debug, Clone)]
pub struct Forecast {
    /// `None` uses the built-in dataset.
    pub data: Option<PathBuf>,
    pub at: f64,
    pub degree: usize,
    pub output: PathBuf,
    pub size: (u32, u32),
    pub display: bool,
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("fit error: {0}")]
    Fit(#[from] FitError),
    #[error("plot error: {0}")]
    Plot(#[from] PlotError),
}

/* =================== Entry point =================== */

impl Config {
    pub fn run(&self) -> Result<(), CmdError> {
        match &self.action {
            Action::Forecast(f) => {
                let line = self.run_forecast(f)?;
                println!("{line}");
                Ok(())
            },
        }
    }
}

/* =================== Actions =================== */

impl Config {
    /// Fits, plots and returns the report line. Printing is left to `run`.
    fn run_forecast(&self, f: &Forecast) -> Result<String, CmdError> {
        let dataset = match &f.data {
            Some(path) => Dataset::from_csv(path)?,
            None => Dataset::salaries(),
        };
        tracing::info!(samples = dataset.len(), at = f.at, degree = f.degree, "fitting");

        let forecast = SalaryForecast::compute(&dataset, f.at, f.degree)?;

        let spec = PlotSpec::from_forecast(&forecast);
        png::render(&spec, &f.output, f.size)?;

        if f.display {
            // presentation only, the image is already written
            if let Err(e) = salaryrs_gui::show(spec) {
                tracing::warn!("could not open plot window: {e}");
            }
        }

        Ok(report::polynomial_forecast(&forecast))
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, CmdError, Config, Forecast};
    use std::io::Write;
    use std::path::PathBuf;

    fn config(data: Option<PathBuf>) -> Config {
        Config {
            verbosity: 0,
            action: Action::Forecast(Forecast {
                data,
                at: 5.0,
                degree: 2,
                output: std::env::temp_dir().join("salaryrs_config_test.png"),
                size: (320, 240),
                display: false,
            }),
        }
    }

    #[test]
    #[ignore = "needs system fonts for text rendering"]
    fn test_builtin_forecast_line() {
        let cfg = config(None);
        let Action::Forecast(f) = &cfg.action;
        let line = cfg.run_forecast(f).unwrap();
        assert_eq!(line, "My monthly salary forecast after 5 years of experience is R 42432.50");
        assert!(f.output.exists());
        let _ = std::fs::remove_file(&f.output);
    }

    #[test]
    fn test_overflowing_prediction_is_an_error() {
        let mut cfg = config(None);
        let Action::Forecast(f) = &mut cfg.action;
        f.at = 1e300;
        let Action::Forecast(f) = &cfg.action;
        match cfg.run_forecast(f) {
            Err(CmdError::Fit(e)) => assert!(!e.is_degenerate()),
            other => panic!("expected fit error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_data_file() {
        let cfg = config(Some(PathBuf::from("/definitely/not/here.csv")));
        let Action::Forecast(f) = &cfg.action;
        assert!(matches!(cfg.run_forecast(f), Err(CmdError::Dataset(_))));
    }

    #[test]
    fn test_degenerate_data_file() {
        let path = std::env::temp_dir().join("salaryrs_degenerate.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "experience,salary\n3,100\n3,200\n3,300").unwrap();
        drop(file);

        let cfg = config(Some(path.clone()));
        let Action::Forecast(f) = &cfg.action;
        match cfg.run_forecast(f) {
            Err(CmdError::Fit(e)) => assert!(e.is_degenerate()),
            other => panic!("expected fit error, got {other:?}"),
        }
        let _ = std::fs::remove_file(&path);
    }
}

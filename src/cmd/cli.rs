use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

use salaryrs_core::features::DEFAULT_DEGREE;
use salaryrs_core::forecast::DEFAULT_AT;
use salaryrs_core::plot::{DEFAULT_OUTPUT, PLOT_HEIGHT, PLOT_WIDTH};

use crate::cmd::config::{Action, Config, Forecast as ForecastCfg};

fn parse_degree(s: &str) -> Result<usize, String> {
    let degree: usize = s.parse().map_err(|e| format!("{e}"))?;
    if degree == 0 {
        return Err("degree must be at least 1".to_owned());
    }
    Ok(degree)
}

fn parse_years(s: &str) -> Result<f64, String> {
    let years: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !years.is_finite() {
        return Err("experience must be a finite number".to_owned());
    }
    Ok(years)
}

#[derive(Debug, Parser)]
#[command(
    name = "salaryrs",
    about = "Linear and polynomial salary forecast from years of experience",
    version
)]
pub struct Cli {
    /// Image file to write
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT,
        value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Years of experience to predict the salary for
    #[arg(long = "at", value_name = "YEARS", default_value_t = DEFAULT_AT, value_parser = parse_years)]
    pub at: f64,

    /// Degree of the polynomial model
    #[arg(long = "degree", default_value_t = DEFAULT_DEGREE, value_parser = parse_degree)]
    pub degree: usize,

    /// CSV file with `experience,salary` columns instead of the built-in data
    #[arg(long = "data", value_name = "CSV", value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Do not open the plot window
    #[arg(long = "no-display")]
    pub no_display: bool,

    /// Image width in pixels
    #[arg(long = "width", default_value_t = PLOT_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long = "height", default_value_t = PLOT_HEIGHT)]
    pub height: u32,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

// -------- Map CLI -> Config/Action types --------

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            verbosity: self.verbose,
            action: Action::Forecast(ForecastCfg {
                data: self.data,
                at: self.at,
                degree: self.degree,
                output: self.output,
                size: (self.width, self.height),
                display: !self.no_display,
            }),
        }
    }
}

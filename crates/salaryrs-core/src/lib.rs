pub mod dataset;
pub mod features;
pub mod fit;
pub mod forecast;
pub mod plot;
pub mod report;
pub mod stats;

pub use dataset::{Dataset, DatasetError, Sample};
pub use fit::{FitError, FitKind, FitModel, FitResult, LinearFit, PolyFit};
pub use forecast::{Forecast, Prediction};
pub use plot::{PlotError, PlotSpec};

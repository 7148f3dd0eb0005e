pub mod png;
pub mod spec;

pub use spec::{Annotation, LineStyle, PlotColor, PlotSpec, Series, SeriesKind};

pub const DEFAULT_OUTPUT: &str = "Years_Salaries.png";
pub const PLOT_WIDTH: u32 = 1024;
pub const PLOT_HEIGHT: u32 = 768;

#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error("drawing error: {0}")]
    Drawing(String),
    #[error("nothing to draw: plot has no points")]
    Empty,
}

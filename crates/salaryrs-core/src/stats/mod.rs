pub mod linreg;
pub mod polyreg;
pub mod stats;

pub use linreg::LinReg;
pub use polyreg::PolyReg;
pub use stats::{adjusted_r2, aic_from_rss, r2_from_predictions, rmse, rss, tss};

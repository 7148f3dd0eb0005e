pub mod fiterror;
pub mod fitkind;
pub mod fitmodel;
pub mod linfit;
pub mod polyfit;

pub use fiterror::{FitError, FitResult};
pub use fitkind::FitKind;
pub use fitmodel::FitModel;
pub use linfit::LinearFit;
pub use polyfit::PolyFit;

use itertools::Itertools;

/// Shared input checks: equal lengths, finite values, at least `needed`
/// points spread over at least `needed` distinct x values.
pub(crate) fn check_input(x: &[f64], y: &[f64], needed: usize) -> FitResult<()> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch { len_x: x.len(), len_y: y.len() });
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(FitError::NonFinite);
    }
    if x.len() < needed {
        tracing::debug!(len = x.len(), needed, "not enough points to fit");
        return Err(FitError::NotEnoughPoints { len: x.len(), needed });
    }
    let distinct = x.iter().copied().sorted_by(|a, b| a.total_cmp(b)).dedup().count();
    if distinct < needed {
        tracing::debug!(distinct, needed, "degenerate x values");
        return Err(FitError::DegenerateX { distinct, needed });
    }
    Ok(())
}

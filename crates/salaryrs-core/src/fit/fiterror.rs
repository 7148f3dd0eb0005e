use crate::fit::fitkind::FitKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("x and y have different lengths: {len_x} vs {len_y}")]
    LengthMismatch { len_x: usize, len_y: usize },
    #[error("not enough points: got {len}, need at least {needed}")]
    NotEnoughPoints { len: usize, needed: usize },
    #[error("degenerate x: {distinct} distinct value(s), need at least {needed}")]
    DegenerateX { distinct: usize, needed: usize },
    #[error("ill-conditioned input: normal equations are singular")]
    Singular,
    #[error("input contains non-finite values")]
    NonFinite,
    #[error("{kind} prediction at x = {at} is not finite")]
    NonFinitePrediction { kind: FitKind, at: f64 },
    #[error("invalid polynomial degree {0}, must be at least 1")]
    InvalidDegree(usize),
}

impl FitError {
    /// Insufficient or degenerate data, as opposed to malformed input.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            FitError::NotEnoughPoints { .. } | FitError::DegenerateX { .. } | FitError::Singular
        )
    }
}

pub type FitResult<T> = Result<T, FitError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitKind {
    Linear,
    Poly,
}

impl std::fmt::Display for FitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitKind::Linear => write!(f, "Linear"),
            FitKind::Poly => write!(f, "Polynomial"),
        }
    }
}

impl FitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitKind::Linear => "linear",
            FitKind::Poly => "poly",
        }
    }
}

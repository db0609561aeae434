/// degenerate-point strategy for the Weiszfeld iteration. the fixed-point
/// update divides by the distance to each input, so an estimate landing on
/// an input point must terminate or exclude rather than divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// exclude inputs closer than the convergence tolerance from the
    /// current pass. near-coincident points silently lose their pull, and
    /// a pass that excludes everything fails with DegenerateIteration.
    Skip,
    /// return the input point itself once the estimate falls within
    /// SNAP_RADIUS of it. terminates exactly at the known fixed-point
    /// degeneracy of the iteration.
    #[default]
    Snap,
}

impl std::str::FromStr for Policy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "snap" => Ok(Self::Snap),
            other => Err(format!("unknown policy: {}", other)),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Snap => write!(f, "snap"),
        }
    }
}

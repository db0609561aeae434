use crate::Distance;

/// failure modes of the facility solvers. a solver either returns a
/// valid point or one of these, never a partial result.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SolverError {
    /// both solvers require at least one input point.
    #[error("empty point set")]
    EmptyInput,
    /// skip-policy reweighting excluded every input point, leaving the
    /// weighted mean undefined.
    #[error("every point within {0} of the estimate, reweighting is degenerate")]
    DegenerateIteration(Distance),
}

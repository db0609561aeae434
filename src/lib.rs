//! Optimal facility location over 2D point sets.
//!
//! Two optima are computed for a set of customer coordinates: the taxicab
//! (L1) optimum, which is the coordinate-wise median, and the Euclidean
//! optimum, the geometric median approximated by Weiszfeld's fixed-point
//! iteration.

pub mod geometry;
pub mod solver;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Coordinates, distances, tolerances, and accumulated service costs.
pub type Distance = f64;
/// Inverse-distance reweighting terms in the Weiszfeld iteration.
pub type Weight = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// WEISZFELD ITERATION
// ============================================================================
/// Default iteration budget. Exhausting it returns the running estimate
/// as-is, an accepted approximation rather than an error.
pub const WEISZFELD_ITERATIONS: usize = 1000;
/// Default componentwise convergence tolerance between successive estimates.
pub const WEISZFELD_TOLERANCE: Distance = 1e-6;
/// Radius inside which the estimate is considered to sit exactly on an input
/// point, terminating the iteration under the snap policy.
pub const SNAP_RADIUS: Distance = 1e-10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO, locations and targets off.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

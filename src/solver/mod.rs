mod error;
mod median;
mod policy;
mod weiszfeld;

pub use error::*;
pub use median::*;
pub use policy::*;
pub use weiszfeld::*;

use crate::geometry::Point;
use crate::Distance;

/// the taxicab-optimal facility: coordinate-wise upper median.
pub fn manhattan(points: &[Point]) -> Result<Point, SolverError> {
    Median::from(points).solve()
}

/// the Euclidean-optimal facility: geometric median approximated by
/// Weiszfeld's iteration under the default snap policy.
pub fn euclidean(
    points: &[Point],
    iterations: usize,
    tolerance: Distance,
) -> Result<Point, SolverError> {
    Weiszfeld::from((points, iterations, tolerance)).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WEISZFELD_ITERATIONS;
    use crate::WEISZFELD_TOLERANCE;

    fn customers() -> Vec<Point> {
        [(2., 3.), (6., 7.), (3., 4.), (5., 1.), (4., 2.)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn is_sample_manhattan_exact() {
        let optimum = manhattan(&customers()).unwrap();
        assert!(optimum == Point::from((4., 3.)), "{}", optimum);
    }

    #[test]
    fn is_sample_euclidean_stable() {
        let ref points = customers();
        let a = euclidean(points, WEISZFELD_ITERATIONS, WEISZFELD_TOLERANCE).unwrap();
        let b = euclidean(points, WEISZFELD_ITERATIONS, WEISZFELD_TOLERANCE).unwrap();
        assert!(a == b, "{} {}", a, b);
    }
}

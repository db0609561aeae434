use super::error::SolverError;
use crate::geometry::Point;
use crate::Distance;

/// coordinate-wise median solver. under taxicab distance the two axes
/// decouple, so the optimum is the median of the xs paired with the
/// median of the ys, sorted and picked independently per axis.
pub struct Median<'a>(&'a [Point]);

impl<'a> From<&'a [Point]> for Median<'a> {
    fn from(points: &'a [Point]) -> Self {
        Self(points)
    }
}

impl Median<'_> {
    /// the upper-median facility location.
    ///
    /// even N picks index N/2, the upper of the two middle elements,
    /// rather than interpolating between them. callers wanting the
    /// interpolated median must average indices N/2 - 1 and N/2.
    pub fn solve(&self) -> Result<Point, SolverError> {
        match self.0.len() {
            0 => Err(SolverError::EmptyInput),
            _ => Ok(Point::from((
                self.upper(self.0.iter().map(Point::x).collect()),
                self.upper(self.0.iter().map(Point::y).collect()),
            ))),
        }
    }

    /// sort one axis ascending and pick the upper median.
    fn upper(&self, mut values: Vec<Distance>) -> Distance {
        values.sort_by(|a, b| a.partial_cmp(b).expect("comparable coordinates"));
        values[values.len() / 2]
    }
}

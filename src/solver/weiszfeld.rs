use super::error::SolverError;
use super::policy::Policy;
use crate::geometry::Euclidean;
use crate::geometry::Metric;
use crate::geometry::Point;
use crate::Distance;
use crate::Weight;

/// outcome of one reweighting pass: either the estimate landed exactly
/// on an input point, or the pass produced the next estimate.
enum Step {
    Snapped(Point),
    Moved(Point),
}

/// Weiszfeld's fixed-point iteration for the geometric median: starting
/// from the centroid, repeatedly replace the estimate with the
/// inverse-distance-weighted mean of the inputs until successive
/// estimates agree within tolerance.
pub struct Weiszfeld<'a> {
    points: &'a [Point],
    policy: Policy,
    iterations: usize,
    tolerance: Distance,
}

impl<'a> From<(&'a [Point], usize, Distance)> for Weiszfeld<'a> {
    fn from((points, iterations, tolerance): (&'a [Point], usize, Distance)) -> Self {
        Self {
            points,
            iterations,
            tolerance,
            policy: Policy::default(),
        }
    }
}

impl Weiszfeld<'_> {
    /// select the degenerate-point strategy.
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// run the iteration to convergence, snap, or budget exhaustion,
    /// whichever comes first. exhaustion returns the running estimate
    /// as an accepted approximation, never an error.
    pub fn solve(&self) -> Result<Point, SolverError> {
        let mut estimate = self.centroid()?;
        for i in 0..self.iterations {
            match self.reweight(&estimate)? {
                Step::Snapped(point) => {
                    log::debug!("snapped onto input after {} iterations", i);
                    return Ok(point);
                }
                Step::Moved(next) if self.converged(&estimate, &next) => {
                    log::debug!("converged after {} iterations", i + 1);
                    return Ok(next);
                }
                Step::Moved(next) => estimate = next,
            }
        }
        Ok(estimate)
    }

    /// arithmetic mean of the inputs, the canonical starting estimate.
    fn centroid(&self) -> Result<Point, SolverError> {
        match self.points.len() {
            0 => Err(SolverError::EmptyInput),
            n => Ok(Point::from((
                self.points.iter().map(Point::x).sum::<Distance>() / n as Distance,
                self.points.iter().map(Point::y).sum::<Distance>() / n as Distance,
            ))),
        }
    }

    /// one fixed-point update: each input pulls the estimate toward
    /// itself with weight inversely proportional to its distance.
    fn reweight(&self, estimate: &Point) -> Result<Step, SolverError> {
        let mut numer = (0., 0.);
        let mut denom = Weight::default();
        for point in self.points {
            let distance = Euclidean.distance(estimate, point);
            match self.policy {
                Policy::Snap if distance < crate::SNAP_RADIUS => {
                    return Ok(Step::Snapped(*point));
                }
                Policy::Skip if distance < self.tolerance => continue,
                _ => {}
            }
            let weight = 1. / distance;
            numer.0 += weight * point.x();
            numer.1 += weight * point.y();
            denom += weight;
        }
        if denom == 0. {
            Err(SolverError::DegenerateIteration(self.tolerance))
        } else {
            Ok(Step::Moved(Point::from((numer.0 / denom, numer.1 / denom))))
        }
    }

    /// componentwise convergence: both coordinate deltas inside tolerance.
    fn converged(&self, previous: &Point, next: &Point) -> bool {
        (next.x() - previous.x()).abs() < self.tolerance
            && (next.y() - previous.y()).abs() < self.tolerance
    }
}

use crate::Arbitrary;
use crate::Distance;

/// a location in the plane. no identity beyond value equality, so
/// points are Copy and compared by coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Distance, Distance);

impl Point {
    pub fn x(&self) -> Distance {
        self.0
    }
    pub fn y(&self) -> Distance {
        self.1
    }
}

impl From<(Distance, Distance)> for Point {
    fn from((x, y): (Distance, Distance)) -> Self {
        Self(x, y)
    }
}

impl Arbitrary for Point {
    fn random() -> Self {
        Self(rand::random::<Distance>(), rand::random::<Distance>())
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.0, self.1)
    }
}

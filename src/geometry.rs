//! Minimal 2D point type.
//!
//! `spec.md` §6 treats the point type as an external collaborator: "equality,
//! ordering (for use as a key in a mapping from points to time windows),
//! accessors for `x` and `y`". This is the smallest realization of that
//! contract, not a general vector-math library, which is explicitly out of
//! scope (`spec.md` §1).

use ordered_float::NotNan;
use std::fmt;

/// A point in the Euclidean plane, usable as a `BTreeMap`/`HashMap` key.
///
/// Coordinates are `NotNan<f64>` so the type gets a total order and `Eq` for
/// free, the same approach `ordered-float` consumers in the metaheuristics
/// ecosystem use for score/key types that are conceptually floats but need
/// `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point2D {
    x: NotNan<f64>,
    y: NotNan<f64>,
}

impl Point2D {
    /// Creates a point from finite coordinates.
    ///
    /// # Panics
    /// Panics if `x` or `y` is NaN.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: NotNan::new(x).expect("x must not be NaN"),
            y: NotNan::new(y).expect("y must not be NaN"),
        }
    }

    pub fn x(&self) -> f64 {
        self.x.into_inner()
    }

    pub fn y(&self) -> f64 {
        self.y.into_inner()
    }

    /// Squared Euclidean distance to `other`, the cost metric used
    /// throughout the original TSP/TSPTW demos.
    pub fn squared_distance(&self, other: &Point2D) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x(), self.y())
    }
}

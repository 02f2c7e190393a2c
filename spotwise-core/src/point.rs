//! Planar positions and straight-line travel.
//!
//! Agents and spots live on a flat plane; travel between two positions is the
//! Euclidean length of the segment joining them. There is no path planning.

use geo::Coord;

/// A position on the plane.
///
/// `x` and `y` are plain Cartesian coordinates. The alias keeps call sites
/// readable while staying interchangeable with the wider `geo` ecosystem.
pub type Point = Coord<f64>;

/// Straight-line distance between two points.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use spotwise_core::distance;
///
/// let d = distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert!((d - 5.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn distance(from: Point, to: Point) -> f64 {
    let delta = to - from;
    delta.x.hypot(delta.y)
}

/// Length of the walk from `start` through `path` in the given order.
///
/// An empty path costs nothing: the agent never leaves its start.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use spotwise_core::route_cost;
///
/// let start = Coord { x: 0.0, y: 0.0 };
/// let path = [Coord { x: 1.0, y: 0.0 }, Coord { x: 2.0, y: 0.0 }];
/// assert!((route_cost(start, &path) - 2.0).abs() < f64::EPSILON);
/// assert_eq!(route_cost(start, &[]), 0.0);
/// ```
#[must_use]
pub fn route_cost(start: Point, path: &[Point]) -> f64 {
    path.iter()
        .fold((start, 0.0), |(previous, total), &next| {
            (next, total + distance(previous, next))
        })
        .1
}

/// Whether both coordinates are finite numbers.
pub(crate) fn is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

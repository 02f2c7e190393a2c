//! Test-only helpers shared by unit and behaviour tests across the workspace.

use std::collections::HashSet;

use geo::Coord;

use crate::{
    AllocationError, AllocationRequest, AllocationResponse, Allocator, Assignment, Point,
};

/// Shorthand for a point literal.
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Coord { x, y }
}

/// Convert `(x, y)` pairs into points.
#[must_use]
pub fn points(pairs: &[(f64, f64)]) -> Vec<Point> {
    pairs.iter().map(|&(x, y)| point(x, y)).collect()
}

/// Whether `assignment` places each of `spots` on exactly one route, at the
/// right location, with every route in ascending input order.
#[must_use]
pub fn is_partition_of(assignment: &Assignment, spots: &[Point]) -> bool {
    let mut seen = HashSet::new();
    for route in assignment.routes() {
        let ordered = route
            .spots
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.index < b.index));
        if !ordered {
            return false;
        }
        for spot in &route.spots {
            if spots.get(spot.index) != Some(&spot.location) || !seen.insert(spot.index) {
                return false;
            }
        }
    }
    seen.len() == spots.len()
}

/// `Allocator` returning a canned response regardless of the request.
///
/// Invalid requests are still rejected so callers exercise their error paths.
#[derive(Debug, Clone)]
pub struct FixedAllocator {
    response: AllocationResponse,
}

impl FixedAllocator {
    /// Wrap the response to hand back on every call.
    #[must_use]
    pub const fn new(response: AllocationResponse) -> Self {
        Self { response }
    }
}

impl Allocator for FixedAllocator {
    fn allocate(&self, request: &AllocationRequest) -> Result<AllocationResponse, AllocationError> {
        request.validate()?;
        Ok(self.response.clone())
    }
}

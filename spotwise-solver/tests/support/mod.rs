//! Shared helpers for the solver integration tests.
//!
//! Not every test target uses every helper.
#![allow(dead_code, reason = "each test target uses a different subset of helpers")]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spotwise_core::{Point, route_cost};

/// Smallest achievable longest-route length, found by recursive enumeration.
///
/// This walks the same search space as the exhaustive allocator but shares
/// none of its code, so tests can use it as an independent oracle.
#[must_use]
pub fn reference_makespan(agent_starts: &[Point], spots: &[Point]) -> f64 {
    let mut routes: Vec<Vec<Point>> = vec![Vec::new(); agent_starts.len()];
    descend(agent_starts, spots, &mut routes)
}

fn descend(agent_starts: &[Point], remaining: &[Point], routes: &mut [Vec<Point>]) -> f64 {
    let Some((&spot, rest)) = remaining.split_first() else {
        return agent_starts
            .iter()
            .zip(routes.iter())
            .map(|(&start, path)| route_cost(start, path))
            .fold(0.0, f64::max);
    };
    let mut best = f64::INFINITY;
    for agent in 0..routes.len() {
        if let Some(route) = routes.get_mut(agent) {
            route.push(spot);
        }
        best = best.min(descend(agent_starts, rest, routes));
        if let Some(route) = routes.get_mut(agent) {
            route.pop();
        }
    }
    best
}

/// Deterministic scattered points for benchmarks and stress tests.
///
/// Coordinates are drawn uniformly from `[0, extent)` on both axes using a
/// seeded `ChaCha8` generator.
#[must_use]
pub fn scattered_points(count: usize, extent: f64, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point {
            x: rng.gen_range(0.0..extent),
            y: rng.gen_range(0.0..extent),
        })
        .collect()
}

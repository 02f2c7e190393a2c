//! `ExhaustiveAllocator`: brute-force min-max allocation.
//!
//! Every function from spots to agents is scored, `agents ^ spots` candidates
//! in total, so the search is exact but only tractable for small instances.

use std::time::Instant;

use spotwise_core::{
    AllocationError, AllocationRequest, AllocationResponse, Allocator, Assignment, Diagnostics,
    Point,
};

mod enumeration;

pub use enumeration::search_space_size;

use enumeration::{BestCandidate, CandidateScorer, LabelOdometer, scan};

/// Search spaces above this size are logged as a warning before the search.
const LARGE_SEARCH_SPACE: u64 = 50_000_000;

/// Configuration for [`ExhaustiveAllocator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhaustiveConfig {
    /// Split the enumeration across the rayon thread pool.
    ///
    /// The result is identical to a sequential run, including tie-breaks.
    /// Ignored when the crate is built without the `parallel` feature.
    pub parallel: bool,
    /// Smallest search space worth parallelising.
    pub parallel_threshold: u64,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: 4_096,
        }
    }
}

/// Exact allocator minimising the longest agent route.
///
/// Ties are resolved in favour of the candidate enumerated first, where
/// enumeration follows Cartesian-product order over per-spot agent labels
/// (the last spot's label varies fastest).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use spotwise_core::{AllocationRequest, Allocator};
/// use spotwise_solver::ExhaustiveAllocator;
///
/// let request = AllocationRequest {
///     agents: vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 0.0 }],
///     spots: vec![Coord { x: 1.0, y: 0.0 }, Coord { x: 9.0, y: 0.0 }],
/// };
/// let response = ExhaustiveAllocator::default().allocate(&request).unwrap();
/// assert!((response.score - 1.0).abs() < 1e-12);
/// assert_eq!(response.diagnostics.candidates_evaluated, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveAllocator {
    config: ExhaustiveConfig,
}

impl ExhaustiveAllocator {
    /// Construct an allocator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an allocator with explicit configuration.
    #[must_use]
    pub const fn with_config(config: ExhaustiveConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExhaustiveConfig {
        &self.config
    }

    fn search(&self, agent_starts: &[Point], spots: &[Point]) -> BestCandidate {
        let size = search_space_size(agent_starts.len(), spots.len());
        match size {
            Some(candidates) if candidates > LARGE_SEARCH_SPACE => log::warn!(
                "exhaustive search over {candidates} candidates; expect a long run"
            ),
            Some(candidates) => log::debug!(
                "exhaustive search over {candidates} candidates for {} agents and {} spots",
                agent_starts.len(),
                spots.len()
            ),
            None => log::warn!(
                "exhaustive search space for {} agents and {} spots exceeds u64; expect a very long run",
                agent_starts.len(),
                spots.len()
            ),
        }

        if self.config.parallel
            && let Some(candidates) = size
            && candidates >= self.config.parallel_threshold
        {
            return parallel_search(agent_starts, spots, candidates);
        }
        sequential_search(agent_starts, spots)
    }
}

impl Allocator for ExhaustiveAllocator {
    fn allocate(&self, request: &AllocationRequest) -> Result<AllocationResponse, AllocationError> {
        request.validate()?;
        let started_at = Instant::now();

        let best = self.search(&request.agents, &request.spots);
        let assignment = Assignment::from_labels(&request.agents, &request.spots, &best.labels)
            .map_err(|_| AllocationError::InvalidInput)?;
        let score = assignment.makespan();
        log::debug!(
            "best candidate {} of {} scores {score}",
            best.index,
            best.evaluated
        );

        Ok(AllocationResponse {
            assignment,
            score,
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                candidates_evaluated: best.evaluated,
            },
        })
    }
}

/// Partition `spots` among agents so the longest route is as short as
/// possible.
///
/// Agent `i` starts at `agent_starts[i]` and visits its spots in input order.
/// The search is exhaustive over `agents ^ spots` candidates and runs on the
/// calling thread.
///
/// # Errors
///
/// Returns [`AllocationError::InvalidInput`] when `agent_starts` is empty or a
/// coordinate is not finite.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use spotwise_solver::optimize;
///
/// let agents = [Coord { x: 0.0, y: 0.0 }];
/// let spots = [Coord { x: 1.0, y: 0.0 }, Coord { x: 2.0, y: 0.0 }];
/// let assignment = optimize(&agents, &spots).unwrap();
/// assert_eq!(assignment.route(0).unwrap().spots.len(), 2);
/// assert!((assignment.makespan() - 2.0).abs() < 1e-12);
/// ```
pub fn optimize(agent_starts: &[Point], spots: &[Point]) -> Result<Assignment, AllocationError> {
    let request = AllocationRequest::new(agent_starts, spots);
    ExhaustiveAllocator::new()
        .allocate(&request)
        .map(|response| response.assignment)
}

fn sequential_search(agent_starts: &[Point], spots: &[Point]) -> BestCandidate {
    let mut scorer = CandidateScorer::new(agent_starts, spots);
    let odometer = LabelOdometer::new(agent_starts.len(), spots.len());
    scan(&mut scorer, odometer, 0, None)
}

#[cfg(feature = "parallel")]
fn parallel_search(agent_starts: &[Point], spots: &[Point], candidates: u64) -> BestCandidate {
    use rayon::prelude::*;

    let workers = u64::try_from(rayon::current_num_threads()).unwrap_or(1);
    let block_len = candidates.div_ceil(workers.saturating_mul(4).max(1)).max(1);
    let block_count = candidates.div_ceil(block_len);
    log::debug!("splitting {candidates} candidates into {block_count} blocks of {block_len}");

    (0..block_count)
        .into_par_iter()
        .map(|block| {
            let first = block.saturating_mul(block_len);
            let limit = block_len.min(candidates.saturating_sub(first));
            let odometer = LabelOdometer::starting_at(agent_starts.len(), spots.len(), first);
            let mut scorer = CandidateScorer::new(agent_starts, spots);
            scan(&mut scorer, odometer, first, Some(limit))
        })
        .reduce_with(BestCandidate::merge)
        .unwrap_or_else(|| sequential_search(agent_starts, spots))
}

#[cfg(not(feature = "parallel"))]
fn parallel_search(agent_starts: &[Point], spots: &[Point], _candidates: u64) -> BestCandidate {
    log::warn!("parallel search requested but the `parallel` feature is disabled");
    sequential_search(agent_starts, spots)
}

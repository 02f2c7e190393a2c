//! `GreedyAllocator`: a fast, approximate alternative to the exhaustive search.
//!
//! Spots are taken in input order and each is appended to the agent whose
//! route would be shortest after the append. This runs in `agents * spots`
//! steps but gives no optimality guarantee, so it must be chosen explicitly.

use std::time::Instant;

use spotwise_core::{
    AllocationError, AllocationRequest, AllocationResponse, Allocator, Assignment, Diagnostics,
    distance,
};

/// Approximate allocator appending each spot to the least-loaded agent.
///
/// The returned assignment is always a valid partition. Its longest route is
/// never shorter than the exhaustive optimum and may be longer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAllocator;

impl Allocator for GreedyAllocator {
    #[expect(
        clippy::float_arithmetic,
        reason = "greedy insertion compares accumulated floating-point route lengths"
    )]
    fn allocate(&self, request: &AllocationRequest) -> Result<AllocationResponse, AllocationError> {
        request.validate()?;
        let started_at = Instant::now();

        let mut tails = request.agents.clone();
        let mut costs = vec![0.0_f64; request.agents.len()];
        let mut labels = Vec::with_capacity(request.spots.len());

        for &spot in &request.spots {
            let mut chosen: Option<(usize, f64)> = None;
            for (agent, (&tail, &cost)) in tails.iter().zip(&costs).enumerate() {
                let extended = cost + distance(tail, spot);
                if chosen.is_none_or(|(_, best)| extended < best) {
                    chosen = Some((agent, extended));
                }
            }
            let (agent, extended) = chosen.ok_or(AllocationError::InvalidInput)?;
            if let (Some(tail), Some(cost)) = (tails.get_mut(agent), costs.get_mut(agent)) {
                *tail = spot;
                *cost = extended;
            }
            labels.push(agent);
        }

        let assignment = Assignment::from_labels(&request.agents, &request.spots, &labels)
            .map_err(|_| AllocationError::InvalidInput)?;
        let score = assignment.makespan();
        log::debug!(
            "greedy allocation of {} spots across {} agents scores {score}",
            request.spots.len(),
            request.agents.len()
        );

        Ok(AllocationResponse {
            assignment,
            score,
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                candidates_evaluated: 1,
            },
        })
    }
}

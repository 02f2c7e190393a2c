use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Assignment;
use crate::point::{Point, is_finite};

/// Parameters for an allocation request.
///
/// The request captures where each agent starts and which spots must be
/// visited. Both lists are ordered: agent `i` is identified by its position in
/// `agents`, and spot order fixes the order in which an agent visits the spots
/// it receives.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use spotwise_core::AllocationRequest;
///
/// let request = AllocationRequest {
///     agents: vec![Coord { x: 0.0, y: 0.0 }],
///     spots: vec![Coord { x: 1.0, y: 0.0 }],
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationRequest {
    /// Start position of each agent.
    pub agents: Vec<Point>,
    /// Spots to distribute, in visiting order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spots: Vec<Point>,
}

/// Detailed reasons an [`AllocationRequest`] is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationRequestValidationError {
    /// There is no agent to assign spots to.
    #[error("at least one agent is required")]
    NoAgents,
    /// An agent start position has a NaN or infinite coordinate.
    #[error("agent {index} has a non-finite start position")]
    NonFiniteAgent {
        /// Index of the offending agent.
        index: usize,
    },
    /// A spot has a NaN or infinite coordinate.
    #[error("spot {index} has a non-finite position")]
    NonFiniteSpot {
        /// Index of the offending spot.
        index: usize,
    },
}

impl AllocationRequest {
    /// Build a request from borrowed position lists.
    #[must_use]
    pub fn new(agents: &[Point], spots: &[Point]) -> Self {
        Self {
            agents: agents.to_vec(),
            spots: spots.to_vec(),
        }
    }

    /// Validate the request, reporting which input is at fault.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: missing agents, then non-finite agent
    /// positions, then non-finite spot positions.
    pub fn validate_detailed(&self) -> Result<(), AllocationRequestValidationError> {
        if self.agents.is_empty() {
            return Err(AllocationRequestValidationError::NoAgents);
        }
        if let Some(index) = self.agents.iter().position(|&p| !is_finite(p)) {
            return Err(AllocationRequestValidationError::NonFiniteAgent { index });
        }
        if let Some(index) = self.spots.iter().position(|&p| !is_finite(p)) {
            return Err(AllocationRequestValidationError::NonFiniteSpot { index });
        }
        Ok(())
    }

    /// Validate the request for allocators.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::InvalidInput`] for any problem reported by
    /// [`AllocationRequest::validate_detailed`].
    pub fn validate(&self) -> Result<(), AllocationError> {
        self.validate_detailed()
            .map_err(|_| AllocationError::InvalidInput)
    }
}

/// Statistics gathered while allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent inside the allocator.
    pub solve_time: Duration,
    /// Candidate partitions scored before returning.
    pub candidates_evaluated: u64,
}

/// Response from a successful allocation.
///
/// Contains the chosen [`Assignment`] and its score, the longest route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationResponse {
    /// Spots per agent.
    pub assignment: Assignment,
    /// Longest route length across all agents.
    pub score: f64,
    /// Search statistics.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Allocator::allocate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// The request cannot be allocated, e.g. it names no agents.
    #[error("invalid input")]
    InvalidInput,
}

/// Distribute spots across agents.
///
/// Implementations should return [`AllocationError::InvalidInput`] for invalid
/// requests rather than panicking. Allocators must be `Send + Sync` to operate
/// safely across threads.
pub trait Allocator: Send + Sync {
    /// Allocate a request, producing an assignment or an error.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::InvalidInput`] when the request fails
    /// validation.
    fn allocate(&self, request: &AllocationRequest) -> Result<AllocationResponse, AllocationError>;
}

//! Partitions of spots across a fleet of agents.
//!
//! An [`Assignment`] is total: every agent owns a route, possibly empty, and
//! every input spot sits on exactly one route. Spots keep their input order on
//! each route, so a route's cost is fully determined by the partition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::point::{Point, route_cost};

/// A target location together with its position in the input sequence.
///
/// The index is the spot's identity; two spots may share a location.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spot {
    /// Position of the spot in the caller's input list.
    pub index: usize,
    /// Where the spot is.
    pub location: Point,
}

/// The ordered spots one agent visits, starting from its own position.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use spotwise_core::{AgentRoute, Spot};
///
/// let mut route = AgentRoute::new(0, Coord { x: 0.0, y: 0.0 });
/// assert_eq!(route.cost(), 0.0);
///
/// route.spots.push(Spot { index: 0, location: Coord { x: 3.0, y: 4.0 } });
/// assert!((route.cost() - 5.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentRoute {
    /// Agent index, matching the order of agent start positions.
    pub agent: usize,
    /// Where the agent starts.
    pub start: Point,
    /// Spots to visit, in input order.
    pub spots: Vec<Spot>,
}

impl AgentRoute {
    /// Construct a route with no spots.
    #[must_use]
    pub const fn new(agent: usize, start: Point) -> Self {
        Self {
            agent,
            start,
            spots: Vec::new(),
        }
    }

    /// Spot locations in visiting order.
    #[must_use]
    pub fn locations(&self) -> Vec<Point> {
        self.spots.iter().map(|spot| spot.location).collect()
    }

    /// Total travel distance of the route; zero when it has no spots.
    #[must_use]
    pub fn cost(&self) -> f64 {
        route_cost(self.start, &self.locations())
    }

    /// Whether the agent has nothing to visit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

/// Errors returned by [`Assignment::from_labels`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The label vector does not cover every spot exactly once.
    #[error("expected {spots} agent labels, one per spot, but got {labels}")]
    LabelCountMismatch {
        /// Number of spots supplied.
        spots: usize,
        /// Number of labels supplied.
        labels: usize,
    },
    /// A spot was labelled with an agent that does not exist.
    #[error("spot {spot} is assigned to agent {agent}, but only {agents} agents exist")]
    UnknownAgent {
        /// Index of the offending spot.
        spot: usize,
        /// Agent index found in the label vector.
        agent: usize,
        /// Number of agents available.
        agents: usize,
    },
}

/// A total mapping from agent index to that agent's route.
///
/// Routes are stored in agent order, so `routes()[i].agent == i` always holds.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use spotwise_core::Assignment;
///
/// # fn main() -> Result<(), spotwise_core::AssignmentError> {
/// let agents = [Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 0.0 }];
/// let spots = [Coord { x: 1.0, y: 0.0 }, Coord { x: 9.0, y: 0.0 }];
/// let assignment = Assignment::from_labels(&agents, &spots, &[0, 1])?;
///
/// assert_eq!(assignment.agent_count(), 2);
/// assert!((assignment.makespan() - 1.0).abs() < f64::EPSILON);
/// assert_eq!(assignment.labels(), vec![0, 1]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Assignment {
    routes: Vec<AgentRoute>,
}

impl Assignment {
    /// An assignment in which no agent has any spot.
    #[must_use]
    pub fn empty(agent_starts: &[Point]) -> Self {
        Self {
            routes: agent_starts
                .iter()
                .enumerate()
                .map(|(agent, &start)| AgentRoute::new(agent, start))
                .collect(),
        }
    }

    /// Build the assignment induced by giving spot `i` to agent `labels[i]`.
    ///
    /// Each agent's spots keep their relative input order.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::LabelCountMismatch`] when `labels` and
    /// `spots` differ in length, and [`AssignmentError::UnknownAgent`] when a
    /// label is not a valid agent index.
    pub fn from_labels(
        agent_starts: &[Point],
        spots: &[Point],
        labels: &[usize],
    ) -> Result<Self, AssignmentError> {
        if labels.len() != spots.len() {
            return Err(AssignmentError::LabelCountMismatch {
                spots: spots.len(),
                labels: labels.len(),
            });
        }
        let mut assignment = Self::empty(agent_starts);
        for (index, (&location, &agent)) in spots.iter().zip(labels).enumerate() {
            let route =
                assignment
                    .routes
                    .get_mut(agent)
                    .ok_or(AssignmentError::UnknownAgent {
                        spot: index,
                        agent,
                        agents: agent_starts.len(),
                    })?;
            route.spots.push(Spot { index, location });
        }
        Ok(assignment)
    }

    /// Routes in agent order.
    #[must_use]
    pub fn routes(&self) -> &[AgentRoute] {
        &self.routes
    }

    /// The route of a single agent, if the index exists.
    #[must_use]
    pub fn route(&self, agent: usize) -> Option<&AgentRoute> {
        self.routes.get(agent)
    }

    /// Number of agents covered by the assignment.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.routes.len()
    }

    /// Number of spots distributed across all routes.
    #[must_use]
    pub fn spot_count(&self) -> usize {
        self.routes.iter().map(|route| route.spots.len()).sum()
    }

    /// The longest route cost, i.e. the score being minimised.
    ///
    /// Zero when no agent has anything to visit.
    #[must_use]
    pub fn makespan(&self) -> f64 {
        self.routes
            .iter()
            .map(AgentRoute::cost)
            .fold(0.0, f64::max)
    }

    /// The agent owning each spot, indexed by spot.
    #[must_use]
    pub fn labels(&self) -> Vec<usize> {
        let mut labels = vec![0; self.spot_count()];
        for route in &self.routes {
            for spot in &route.spots {
                if let Some(slot) = labels.get_mut(spot.index) {
                    *slot = route.agent;
                }
            }
        }
        labels
    }
}

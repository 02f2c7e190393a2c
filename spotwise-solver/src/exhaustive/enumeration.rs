//! Candidate enumeration and scoring for the exhaustive search.
//!
//! A candidate is a label vector giving each spot an agent index. Candidates
//! are visited in Cartesian-product order: the label of the last spot varies
//! fastest, so candidate `k` is `k` written in base `agents` with spot 0 as the
//! most significant digit.

use spotwise_core::{Point, distance};

/// Number of candidate partitions, `agents ^ spots`.
///
/// Returns `None` when the count does not fit in a `u64`. With no agents and
/// at least one spot there are no candidates at all.
///
/// # Examples
/// ```
/// use spotwise_solver::search_space_size;
///
/// assert_eq!(search_space_size(3, 4), Some(81));
/// assert_eq!(search_space_size(2, 0), Some(1));
/// assert_eq!(search_space_size(2, 64), None);
/// ```
#[must_use]
pub fn search_space_size(agents: usize, spots: usize) -> Option<u64> {
    let base = u64::try_from(agents).ok()?;
    let exponent = u32::try_from(spots).ok()?;
    base.checked_pow(exponent)
}

/// Steps through label vectors in Cartesian-product order.
#[derive(Debug, Clone)]
pub(crate) struct LabelOdometer {
    labels: Vec<usize>,
    agents: usize,
}

impl LabelOdometer {
    /// Position the odometer on the first candidate, all spots on agent 0.
    pub(crate) fn new(agents: usize, spots: usize) -> Self {
        Self {
            labels: vec![0; spots],
            agents,
        }
    }

    /// Position the odometer on candidate `index`.
    ///
    /// Indices beyond the search space wrap around; callers bound their
    /// ranges with [`search_space_size`].
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "decoding a base-N candidate index needs quotient and remainder"
    )]
    pub(crate) fn starting_at(agents: usize, spots: usize, index: u64) -> Self {
        let mut odometer = Self::new(agents, spots);
        let Ok(base) = u64::try_from(agents) else {
            return odometer;
        };
        if base == 0 {
            return odometer;
        }
        let mut remaining = index;
        for label in odometer.labels.iter_mut().rev() {
            *label = usize::try_from(remaining % base).unwrap_or_default();
            remaining /= base;
        }
        odometer
    }

    /// The label vector under the odometer.
    pub(crate) fn current(&self) -> &[usize] {
        &self.labels
    }

    /// Move to the next candidate.
    ///
    /// Returns `false` once every candidate has been visited; the odometer is
    /// then back on the first candidate.
    pub(crate) fn advance(&mut self) -> bool {
        for label in self.labels.iter_mut().rev() {
            let next = label.saturating_add(1);
            if next < self.agents {
                *label = next;
                return true;
            }
            *label = 0;
        }
        false
    }
}

/// Scores label vectors against fixed agent and spot positions.
///
/// Scratch buffers are reused between candidates so scoring does not
/// allocate.
#[derive(Debug, Clone)]
pub(crate) struct CandidateScorer<'a> {
    agent_starts: &'a [Point],
    spots: &'a [Point],
    tails: Vec<Point>,
    costs: Vec<f64>,
}

impl<'a> CandidateScorer<'a> {
    pub(crate) fn new(agent_starts: &'a [Point], spots: &'a [Point]) -> Self {
        Self {
            agent_starts,
            spots,
            tails: agent_starts.to_vec(),
            costs: vec![0.0; agent_starts.len()],
        }
    }

    /// The longest route produced by `labels`.
    ///
    /// Each agent walks from its start through its spots in input order;
    /// agents without spots contribute zero.
    #[expect(
        clippy::float_arithmetic,
        reason = "route lengths accumulate floating-point distances"
    )]
    pub(crate) fn makespan(&mut self, labels: &[usize]) -> f64 {
        self.tails.copy_from_slice(self.agent_starts);
        self.costs.fill(0.0);
        for (&spot, &agent) in self.spots.iter().zip(labels) {
            if let (Some(tail), Some(cost)) = (self.tails.get_mut(agent), self.costs.get_mut(agent))
            {
                *cost += distance(*tail, spot);
                *tail = spot;
            }
        }
        self.costs.iter().copied().fold(0.0, f64::max)
    }
}

/// Lowest-scoring candidate seen by a search, with its global index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BestCandidate {
    pub(crate) score: f64,
    pub(crate) index: u64,
    pub(crate) labels: Vec<usize>,
    pub(crate) evaluated: u64,
}

impl BestCandidate {
    /// Combine two partial results, keeping the lower score and, on ties,
    /// the earlier candidate.
    pub(crate) fn merge(self, other: Self) -> Self {
        let evaluated = self.evaluated.saturating_add(other.evaluated);
        let keep_self = self
            .score
            .total_cmp(&other.score)
            .then(self.index.cmp(&other.index))
            .is_le();
        let winner = if keep_self { self } else { other };
        Self {
            evaluated,
            ..winner
        }
    }
}

/// Score `limit` candidates starting at `first_index`, or every remaining
/// candidate when `limit` is `None`.
///
/// Strict `<` keeps the first minimum in enumeration order.
pub(crate) fn scan(
    scorer: &mut CandidateScorer<'_>,
    mut odometer: LabelOdometer,
    first_index: u64,
    limit: Option<u64>,
) -> BestCandidate {
    let mut best = BestCandidate {
        score: f64::INFINITY,
        index: first_index,
        labels: odometer.current().to_vec(),
        evaluated: 0,
    };
    let mut index = first_index;
    loop {
        let score = scorer.makespan(odometer.current());
        best.evaluated = best.evaluated.saturating_add(1);
        if score < best.score {
            best.score = score;
            best.index = index;
            best.labels.copy_from_slice(odometer.current());
        }
        if limit.is_some_and(|limit| best.evaluated >= limit) || !odometer.advance() {
            break;
        }
        index = index.saturating_add(1);
    }
    best
}

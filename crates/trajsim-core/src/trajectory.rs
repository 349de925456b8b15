//! Recorded trajectories and the samples that bundle them.
//!
//! A [`TrajectorySet`] is a dense mapping from [`AgentId`] to that agent's
//! [`Trajectory`]. Every trajectory in a set has the same length; the
//! constructors enforce this, so downstream scoring can index any agent at
//! any tick without bounds surprises.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::id::{AgentId, TickId};

/// A 2D point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// x coordinate.
    pub x: f64,
    /// y coordinate.
    pub y: f64,
}

impl Position {
    /// Create a position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Position) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// The ordered positions of one body, one per recorded tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory(Vec<Position>);

impl Trajectory {
    /// Create an empty trajectory with room for `capacity` ticks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append the position for the next recorded tick.
    pub fn push(&mut self, position: Position) {
        self.0.push(position);
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no ticks have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position at recorded tick `tick`, if present.
    pub fn get(&self, tick: usize) -> Option<Position> {
        self.0.get(tick).copied()
    }

    /// All positions in tick order.
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Iterate positions in tick order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Position>> for Trajectory {
    fn from(positions: Vec<Position>) -> Self {
        Self(positions)
    }
}

impl FromIterator<Position> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Trajectories of every agent in one generation, indexed by [`AgentId`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Trajectory>", into = "Vec<Trajectory>")]
pub struct TrajectorySet {
    trajectories: Vec<Trajectory>,
}

impl TrajectorySet {
    /// Create a set of `agents` empty trajectories, each with room for
    /// `ticks` positions.
    pub fn new(agents: usize, ticks: usize) -> Self {
        Self {
            trajectories: (0..agents).map(|_| Trajectory::with_capacity(ticks)).collect(),
        }
    }

    /// Build a set from existing trajectories, in agent order.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidArgument`] if the trajectories do not
    /// all have the same length, or if there are more than `u32::MAX`.
    pub fn from_trajectories(trajectories: Vec<Trajectory>) -> Result<Self, SimError> {
        AgentId::checked_count(trajectories.len())?;
        if let Some(first) = trajectories.first() {
            let expected = first.len();
            if let Some((agent, bad)) = trajectories
                .iter()
                .enumerate()
                .find(|(_, t)| t.len() != expected)
            {
                return Err(SimError::invalid(format!(
                    "trajectory of agent {agent} has {} ticks, expected {expected}",
                    bad.len()
                )));
            }
        }
        Ok(Self { trajectories })
    }

    /// Append one tick: `positions[i]` goes to agent `i`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidArgument`] if `positions` does not hold
    /// exactly one entry per agent.
    pub fn record(
        &mut self,
        positions: impl ExactSizeIterator<Item = Position>,
    ) -> Result<(), SimError> {
        if positions.len() != self.trajectories.len() {
            return Err(SimError::invalid(format!(
                "recorded {} positions for {} agents",
                positions.len(),
                self.trajectories.len()
            )));
        }
        for (trajectory, position) in self.trajectories.iter_mut().zip(positions) {
            trajectory.push(position);
        }
        Ok(())
    }

    /// Number of agents.
    pub fn agent_count(&self) -> usize {
        self.trajectories.len()
    }

    /// Number of recorded ticks (0 for an empty set).
    pub fn tick_count(&self) -> usize {
        self.trajectories.first().map_or(0, Trajectory::len)
    }

    /// Whether the set holds no agents.
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// The trajectory of `agent`, if present.
    pub fn get(&self, agent: AgentId) -> Option<&Trajectory> {
        self.trajectories.get(agent.index())
    }

    /// Position of `agent` at recorded tick `tick`.
    pub fn position(&self, agent: AgentId, tick: TickId) -> Option<Position> {
        self.get(agent)?.get(tick.0 as usize)
    }

    /// Iterate `(agent, trajectory)` pairs in agent order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Trajectory)> + '_ {
        (0..=u32::MAX)
            .zip(&self.trajectories)
            .map(|(i, t)| (AgentId(i), t))
    }

    /// Trajectories in agent order.
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }
}

impl TryFrom<Vec<Trajectory>> for TrajectorySet {
    type Error = SimError;

    fn try_from(trajectories: Vec<Trajectory>) -> Result<Self, Self::Error> {
        Self::from_trajectories(trajectories)
    }
}

impl From<TrajectorySet> for Vec<Trajectory> {
    fn from(set: TrajectorySet) -> Self {
        set.trajectories
    }
}

/// One full trajectory generation: the trajectories plus the radius of
/// every agent, in agent order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Per-agent trajectories.
    pub trajectories: TrajectorySet,
    /// Per-agent radii.
    pub radii: Vec<f64>,
}

impl Sample {
    /// Bundle trajectories and radii.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidArgument`] if there is not exactly one
    /// radius per agent.
    pub fn new(trajectories: TrajectorySet, radii: Vec<f64>) -> Result<Self, SimError> {
        if radii.len() != trajectories.agent_count() {
            return Err(SimError::invalid(format!(
                "{} radii for {} agents",
                radii.len(),
                trajectories.agent_count()
            )));
        }
        Ok(Self {
            trajectories,
            radii,
        })
    }
}

//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimError;

/// Identifies a body within one trajectory generation.
///
/// `AgentId(n)` is the n-th body placed; trajectories, radii and body
/// arenas are all indexed in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl AgentId {
    /// The arena index of this agent.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Check that `agents` bodies fit in the id space.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidArgument`] if `agents` exceeds `u32::MAX`.
    pub fn checked_count(agents: usize) -> Result<u32, SimError> {
        u32::try_from(agents).map_err(|_| {
            SimError::invalid(format!("{agents} agents exceed the limit of {}", u32::MAX))
        })
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_id_index_matches_inner() {
        assert_eq!(AgentId(7).index(), 7);
        assert_eq!(AgentId::from(3u32), AgentId(3));
    }

    #[test]
    fn agent_count_is_bounded_by_id_width() {
        assert_eq!(AgentId::checked_count(12).unwrap(), 12);
        assert_eq!(AgentId::checked_count(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn agent_count_past_id_width_is_rejected() {
        assert!(matches!(
            AgentId::checked_count(u32::MAX as usize + 1),
            Err(SimError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn ids_display_as_bare_numbers() {
        assert_eq!(AgentId(12).to_string(), "12");
        assert_eq!(TickId(40).to_string(), "40");
    }
}

//! Error type for trajectory generation and collision scoring.

use std::error::Error;
use std::fmt;

/// Errors from placement, generation, and scoring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// A caller-supplied argument or configuration value is unusable:
    /// a zero agent/tick/trajectory count, an invalid config, a ragged
    /// trajectory set, or a radii list that does not match the agents.
    InvalidArgument {
        /// Human-readable description of the rejected input.
        reason: String,
    },
    /// Placement of one body ran out of its configured retry budget.
    PlacementExhausted {
        /// Index of the body that could not be placed.
        agent: u32,
        /// Number of candidate positions tried.
        attempts: u64,
    },
}

impl SimError {
    /// Shorthand for [`SimError::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::PlacementExhausted { agent, attempts } => {
                write!(
                    f,
                    "could not place agent {agent} after {attempts} attempts"
                )
            }
        }
    }
}

impl Error for SimError {}

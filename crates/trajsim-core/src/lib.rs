//! Core types for the trajsim multi-agent trajectory simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model shared by the engine and the command-line front end:
//! agent and tick identifiers, bodies, trajectories, samples, and the
//! error type returned by generation and scoring.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod body;
pub mod error;
pub mod id;
pub mod trajectory;

pub use body::{Body, Rgb};
pub use error::SimError;
pub use id::{AgentId, TickId};
pub use trajectory::{Position, Sample, Trajectory, TrajectorySet};

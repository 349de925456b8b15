//! trajsim: a deterministic multi-agent trajectory simulator.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the trajsim sub-crates. Adding `trajsim` as a single dependency is
//! enough to generate and score datasets.
//!
//! # Quick start
//!
//! ```rust
//! use trajsim::prelude::*;
//!
//! // Four samples of six agents, 50 recorded ticks each.
//! let samples = generate(42, 4, 6, 50).unwrap();
//! assert_eq!(samples.len(), 4);
//!
//! for sample in &samples {
//!     assert_eq!(sample.trajectories.tick_count(), 50);
//!     let hits = count_collisions(&sample.trajectories, &sample.radii).unwrap();
//!     assert!(hits <= 50 * 15);
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trajsim-core` | Ids, bodies, trajectories, samples, `SimError` |
//! | [`engine`] | `trajsim-engine` | Config, placement, physics, generation, scoring |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model (`trajsim-core`).
pub use trajsim_core as types;

/// Simulation engine (`trajsim-engine`).
///
/// [`engine::Simulation`] for tick-by-tick stepping, [`engine::generate_with`]
/// for seeded batches, [`engine::count_collisions`] for offline scoring.
pub use trajsim_engine as engine;

/// Common imports for typical trajsim usage.
///
/// ```rust
/// use trajsim::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use trajsim_core::{AgentId, Body, Position, Rgb, Sample, TickId, Trajectory, TrajectorySet};

    // Errors
    pub use trajsim_core::SimError;
    pub use trajsim_engine::ConfigError;

    // Engine
    pub use trajsim_engine::{
        collisions_per_tick, count_collisions, generate, generate_trajectory, generate_with,
        NeighbourReads, PlacementRule, SimConfig, Simulation,
    };
}

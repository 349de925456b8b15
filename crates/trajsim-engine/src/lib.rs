//! Placement, physics, generation and collision scoring for trajsim.
//!
//! # Pipeline
//!
//! 1. [`placement::place_bodies`] draws start positions, radii and
//!    velocities from a caller-supplied RNG.
//! 2. [`Simulation`] advances the body arena one tick at a time via
//!    [`physics::advance`] (Euler step, wall reflection, repulsion).
//! 3. [`generate_trajectory`] / [`generate_with`] run the warm-up, record
//!    trajectories, and bundle them into samples.
//! 4. [`count_collisions`] scores finished trajectories offline.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod collision;
pub mod config;
pub mod generate;
pub mod physics;
pub mod placement;
pub mod simulation;

pub use collision::{collisions_per_tick, count_collisions, in_collision, sample_collisions};
pub use config::{ConfigError, NeighbourReads, PlacementRule, SimConfig};
pub use generate::{generate, generate_trajectory, generate_with};
pub use simulation::Simulation;

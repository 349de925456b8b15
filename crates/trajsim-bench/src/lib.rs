//! Benchmark profiles for the trajsim simulator.
//!
//! - [`reference_profile`]: the default 800x800 field (10 agents is the
//!   typical dataset setting)
//! - [`crowded_profile`]: a 240x240 field where repulsion fires on most ticks
//! - [`reference_sample`]: a pre-generated sample for scoring benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use trajsim_core::{Sample, SimError};
use trajsim_engine::{generate_with, SimConfig};

/// The default simulation config.
pub fn reference_profile() -> SimConfig {
    SimConfig::default()
}

/// A small field that keeps bodies within repulsion range of each other.
pub fn crowded_profile() -> SimConfig {
    SimConfig {
        width: 240,
        height: 240,
        ..SimConfig::default()
    }
}

/// Generate one sample of `n_agents` over `traj_len` ticks from `config`.
pub fn reference_sample(
    config: &SimConfig,
    seed: u64,
    n_agents: usize,
    traj_len: usize,
) -> Result<Sample, SimError> {
    let mut samples = generate_with(config, seed, 1, n_agents, traj_len)?;
    samples
        .pop()
        .ok_or_else(|| SimError::invalid("generation returned no samples"))
}

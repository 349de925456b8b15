//! Offline collision scoring of recorded trajectories.
//!
//! Two agents collide at a tick when their centres are strictly closer
//! than the sum of their radii. The scan is O(ticks × agents²) with no
//! spatial index.

use trajsim_core::{Position, Sample, SimError, TrajectorySet};

/// Whether circles of radius `ra` at `a` and `rb` at `b` overlap.
pub fn in_collision(a: Position, b: Position, ra: f64, rb: f64) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Total number of colliding `(tick, unordered agent pair)` combinations.
///
/// # Errors
///
/// Returns [`SimError::InvalidArgument`] if `radii` does not hold exactly
/// one entry per agent.
pub fn count_collisions(trajectories: &TrajectorySet, radii: &[f64]) -> Result<u64, SimError> {
    Ok(collisions_per_tick(trajectories, radii)?.iter().sum())
}

/// Number of colliding agent pairs at each recorded tick.
///
/// # Errors
///
/// Same as [`count_collisions`].
pub fn collisions_per_tick(
    trajectories: &TrajectorySet,
    radii: &[f64],
) -> Result<Vec<u64>, SimError> {
    let agents = trajectories.trajectories();
    if radii.len() != agents.len() {
        return Err(SimError::invalid(format!(
            "{} radii for {} agents",
            radii.len(),
            agents.len()
        )));
    }

    let per_tick = (0..trajectories.tick_count())
        .map(|tick| {
            let mut hits = 0u64;
            for i in 0..agents.len() {
                let a = agents[i].positions()[tick];
                for j in (i + 1)..agents.len() {
                    let b = agents[j].positions()[tick];
                    if in_collision(a, b, radii[i], radii[j]) {
                        hits += 1;
                    }
                }
            }
            hits
        })
        .collect();
    Ok(per_tick)
}

/// Collision count of a generated [`Sample`].
///
/// # Errors
///
/// Same as [`count_collisions`].
pub fn sample_collisions(sample: &Sample) -> Result<u64, SimError> {
    count_collisions(&sample.trajectories, &sample.radii)
}

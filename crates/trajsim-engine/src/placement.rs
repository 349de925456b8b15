//! Random initial placement of bodies.
//!
//! Each body gets a uniformly random integer start position inside the
//! field (one radius away from every wall), a radius, a velocity whose
//! components are both non-zero integers in `[-max_speed, max_speed]`, and
//! a random color. Draws happen in a fixed order per body (x, y, radius,
//! vx, vy, color) so that a seeded RNG reproduces the same bodies.

use rand::Rng;
use trajsim_core::{AgentId, Body, Rgb, SimError};

use crate::config::{PlacementRule, SimConfig};

/// Attempt count after which an unbounded placement loop logs a warning.
const SLOW_PLACEMENT_ATTEMPTS: u64 = 10_000;

/// Place `n_agents` bodies according to `config`.
///
/// Bodies are returned in placement order, which is the agent order used by
/// every other part of the simulator.
///
/// # Errors
///
/// - [`SimError::InvalidArgument`] if `n_agents` exceeds `u32::MAX`, or if
///   the axis-aligned rule is selected and the field has fewer distinct
///   integer coordinates than `n_agents`.
/// - [`SimError::PlacementExhausted`] if `max_placement_attempts` is set and
///   a body could not be placed within it.
pub fn place_bodies<R: Rng + ?Sized>(
    config: &SimConfig,
    n_agents: usize,
    rng: &mut R,
) -> Result<Vec<Body>, SimError> {
    let count = AgentId::checked_count(n_agents)?;
    if config.placement == PlacementRule::AxisAligned {
        let slots = config.x_slots().min(config.y_slots());
        if u64::from(count) > slots {
            return Err(SimError::invalid(format!(
                "cannot place {n_agents} agents on distinct coordinates: only {slots} available"
            )));
        }
    }

    let mut bodies: Vec<Body> = Vec::with_capacity(n_agents);
    for agent in 0..count {
        let (x, y) = draw_position(config, &bodies, agent, rng)?;
        let radius = draw_radius(config, rng);
        let (vx, vy) = draw_velocity(config, rng);
        let color = draw_color(rng);
        bodies.push(Body::new(x, y, vx, vy, radius).with_color(color));
    }

    tracing::trace!(agents = n_agents, "placed bodies");
    Ok(bodies)
}

fn draw_position<R: Rng + ?Sized>(
    config: &SimConfig,
    placed: &[Body],
    agent: u32,
    rng: &mut R,
) -> Result<(f64, f64), SimError> {
    let r = i64::from(config.max_radius);
    let x_max = i64::from(config.width) - r;
    let y_max = i64::from(config.height) - r;

    let mut attempts: u64 = 0;
    loop {
        if let Some(limit) = config.max_placement_attempts {
            if attempts >= limit {
                return Err(SimError::PlacementExhausted {
                    agent,
                    attempts,
                });
            }
        }
        attempts += 1;
        if attempts == SLOW_PLACEMENT_ATTEMPTS {
            tracing::warn!(agent, attempts, "placement is retrying unusually often");
        }

        let x = rng.random_range(r..=x_max) as f64;
        let y = rng.random_range(r..=y_max) as f64;
        if !blocked(config, placed, x, y) {
            return Ok((x, y));
        }
    }
}

fn blocked(config: &SimConfig, placed: &[Body], x: f64, y: f64) -> bool {
    match config.placement {
        PlacementRule::AxisAligned => placed.iter().any(|b| b.x == x || b.y == y),
        PlacementRule::CircleOverlap => {
            let r = f64::from(config.max_radius);
            placed.iter().any(|b| {
                let dx = b.x - x;
                let dy = b.y - y;
                let reach = b.radius + r;
                dx * dx + dy * dy < reach * reach
            })
        }
    }
}

fn draw_radius<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> f64 {
    match config.min_radius {
        Some(min) => f64::from(rng.random_range(min..=config.max_radius)),
        None => f64::from(config.max_radius),
    }
}

fn draw_velocity<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> (f64, f64) {
    let s = i64::from(config.max_speed);
    loop {
        let vx = rng.random_range(-s..=s);
        let vy = rng.random_range(-s..=s);
        if vx != 0 && vy != 0 {
            return (vx as f64, vy as f64);
        }
    }
}

fn draw_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb {
        r: rng.random_range(0..=255),
        g: rng.random_range(0..=255),
        b: rng.random_range(0..=255),
    }
}

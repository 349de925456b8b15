//! Per-tick kinematics: Euler integration, wall reflection, and
//! short-range repulsion.
//!
//! One call to [`advance`] moves every body in the arena by one tick.
//! Each body writes only its own position and velocity; neighbours are
//! read by index. Which neighbour positions are visible (already moved
//! this tick or not) is selected by [`NeighbourReads`].

use trajsim_core::{Body, Position};

use crate::config::{NeighbourReads, SimConfig};

/// Distance substituted for an exact zero so the repulsion direction
/// never divides by zero.
pub const MIN_DISTANCE: f64 = 1e-4;

/// Advance every body in `bodies` by one tick.
pub fn advance(bodies: &mut [Body], config: &SimConfig) {
    match config.neighbour_reads {
        NeighbourReads::Sequential => advance_sequential(bodies, config),
        NeighbourReads::Snapshot => advance_snapshot(bodies, config),
    }
}

fn advance_sequential(bodies: &mut [Body], config: &SimConfig) {
    for i in 0..bodies.len() {
        integrate(&mut bodies[i], config);

        let me = bodies[i].position();
        let velocity = (bodies[i].vx, bodies[i].vy);
        let neighbours = bodies
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, b)| b.position());
        let (vx, vy) = repel(me, velocity, neighbours, config);

        let body = &mut bodies[i];
        body.vx = clamp_speed(vx, config.max_speed);
        body.vy = clamp_speed(vy, config.max_speed);
    }
}

fn advance_snapshot(bodies: &mut [Body], config: &SimConfig) {
    for body in bodies.iter_mut() {
        integrate(body, config);
    }
    let snapshot: Vec<Position> = bodies.iter().map(Body::position).collect();

    for (i, body) in bodies.iter_mut().enumerate() {
        let neighbours = snapshot
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, p)| *p);
        let (vx, vy) = repel(snapshot[i], (body.vx, body.vy), neighbours, config);
        body.vx = clamp_speed(vx, config.max_speed);
        body.vy = clamp_speed(vy, config.max_speed);
    }
}

/// Move `body` one unit-time step and flip any velocity component whose
/// leading edge has crossed a wall. Positions are never clamped, so a body
/// may sit up to one step past a wall before heading back.
fn integrate(body: &mut Body, config: &SimConfig) {
    body.x += body.vx;
    body.y += body.vy;

    let width = f64::from(config.width);
    let height = f64::from(config.height);
    if body.x + body.radius > width || body.x - body.radius < 0.0 {
        body.vx = -body.vx;
    }
    if body.y + body.radius > height || body.y - body.radius < 0.0 {
        body.vy = -body.vy;
    }
}

/// Apply the repulsion of every neighbour within range to `velocity`.
///
/// Contributions are subtracted one neighbour at a time, in iteration
/// order.
fn repel(
    me: Position,
    velocity: (f64, f64),
    neighbours: impl Iterator<Item = Position>,
    config: &SimConfig,
) -> (f64, f64) {
    let (mut vx, mut vy) = velocity;
    for other in neighbours {
        let dx = other.x - me.x;
        let dy = other.y - me.y;
        let mut distance = (dx * dx + dy * dy).sqrt();
        if distance == 0.0 {
            distance = MIN_DISTANCE;
        }
        if distance < config.repulsion_range {
            let force = repulsion_force(distance, config.repulsion_scale);
            vx -= force * dx / distance;
            vy -= force * dy / distance;
        }
    }
    (vx, vy)
}

/// Magnitude of the repulsion between two bodies `distance` apart.
///
/// Grows slowly with distance; within the default 50-unit range it stays
/// between 1.0 and about 1.05.
pub fn repulsion_force(distance: f64, scale: f64) -> f64 {
    (distance / scale).exp()
}

/// Clamp a velocity component to `[-max_speed, max_speed]` on the side its
/// sign is on.
pub fn clamp_speed(v: f64, max_speed: u32) -> f64 {
    let max = f64::from(max_speed);
    if v < 0.0 {
        v.max(-max)
    } else {
        v.min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f64, y: f64, vx: f64, vy: f64) -> Body {
        Body::new(x, y, vx, vy, 20.0)
    }

    #[test]
    fn lone_body_moves_in_a_straight_line() {
        let cfg = SimConfig::default();
        let mut bodies = vec![body(100.0, 200.0, 2.0, -1.0)];
        advance(&mut bodies, &cfg);
        advance(&mut bodies, &cfg);
        assert_eq!(bodies[0].position(), Position::new(104.0, 198.0));
        assert_eq!((bodies[0].vx, bodies[0].vy), (2.0, -1.0));
    }

    #[test]
    fn wall_flips_velocity_without_clamping_position() {
        let cfg = SimConfig::default();
        // Right edge at 779 + 20 = 799; one step of +2 puts it at 801.
        let mut bodies = vec![body(779.0, 400.0, 2.0, 1.0)];
        advance(&mut bodies, &cfg);
        assert_eq!(bodies[0].x, 781.0);
        assert_eq!(bodies[0].vx, -2.0);
        assert_eq!(bodies[0].vy, 1.0);

        advance(&mut bodies, &cfg);
        assert_eq!(bodies[0].x, 779.0);
        assert_eq!(bodies[0].vx, -2.0);
    }

    #[test]
    fn floor_and_ceiling_reflect_independently() {
        let cfg = SimConfig::default();
        let mut bodies = vec![body(400.0, 21.0, 1.0, -2.0)];
        advance(&mut bodies, &cfg);
        assert_eq!(bodies[0].vy, 2.0);
        assert_eq!(bodies[0].vx, 1.0);
    }

    #[test]
    fn neighbours_push_each_other_apart() {
        let cfg = SimConfig::default();
        let mut bodies = vec![body(400.0, 400.0, 1.0, 1.0), body(430.0, 400.0, -1.0, 1.0)];
        advance(&mut bodies, &cfg);
        // Body 0 is pushed towards -x, body 1 towards +x.
        assert!(bodies[0].vx < 1.0);
        assert!(bodies[1].vx > -1.0);
    }

    #[test]
    fn distant_bodies_do_not_interact() {
        let cfg = SimConfig::default();
        let mut bodies = vec![body(100.0, 100.0, 1.0, 1.0), body(300.0, 300.0, -1.0, -1.0)];
        advance(&mut bodies, &cfg);
        assert_eq!((bodies[0].vx, bodies[0].vy), (1.0, 1.0));
        assert_eq!((bodies[1].vx, bodies[1].vy), (-1.0, -1.0));
    }

    #[test]
    fn coincident_bodies_stay_finite() {
        let cfg = SimConfig::default();
        let mut bodies = vec![body(400.0, 400.0, 0.0, 0.0), body(400.0, 400.0, 0.0, 0.0)];
        advance(&mut bodies, &cfg);
        for b in &bodies {
            assert!(b.x.is_finite() && b.y.is_finite());
            assert!(b.vx.is_finite() && b.vy.is_finite());
        }
    }

    #[test]
    fn velocity_is_clamped_after_repulsion() {
        let cfg = SimConfig::default();
        let mut bodies = vec![
            body(400.0, 400.0, -2.0, -2.0),
            body(401.0, 401.0, 2.0, 2.0),
            body(402.0, 402.0, 2.0, 2.0),
        ];
        for _ in 0..20 {
            advance(&mut bodies, &cfg);
            for b in &bodies {
                assert!(b.vx.abs() <= 2.0 && b.vy.abs() <= 2.0, "{b:?}");
            }
        }
    }

    #[test]
    fn clamp_speed_keeps_sign() {
        assert_eq!(clamp_speed(-3.5, 2), -2.0);
        assert_eq!(clamp_speed(3.5, 2), 2.0);
        assert_eq!(clamp_speed(-1.5, 2), -1.5);
        assert_eq!(clamp_speed(0.0, 2), 0.0);
    }

    #[test]
    fn repulsion_force_grows_with_distance() {
        assert_eq!(repulsion_force(0.0, 1000.0), 1.0);
        assert!(repulsion_force(49.0, 1000.0) > repulsion_force(10.0, 1000.0));
        assert!(repulsion_force(49.0, 1000.0) < 1.06);
    }

    #[test]
    fn snapshot_reads_are_order_independent() {
        let cfg = SimConfig {
            neighbour_reads: NeighbourReads::Snapshot,
            ..SimConfig::default()
        };
        let a = body(400.0, 400.0, 1.0, 2.0);
        let b = body(420.0, 410.0, -2.0, 1.0);
        let c = body(410.0, 430.0, 1.0, -1.0);

        let mut forward = vec![a.clone(), b.clone(), c.clone()];
        let mut reversed = vec![c, b, a];
        for _ in 0..5 {
            advance(&mut forward, &cfg);
            advance(&mut reversed, &cfg);
        }
        for (f, r) in forward.iter().zip(reversed.iter().rev()) {
            assert!((f.x - r.x).abs() < 1e-9);
            assert!((f.y - r.y).abs() < 1e-9);
            assert!((f.vx - r.vx).abs() < 1e-9);
            assert!((f.vy - r.vy).abs() < 1e-9);
        }
    }

    #[test]
    fn sequential_reads_see_moved_neighbours() {
        let seq = SimConfig::default();
        let snap = SimConfig {
            neighbour_reads: NeighbourReads::Snapshot,
            ..SimConfig::default()
        };
        let start = vec![body(400.0, 400.0, 2.0, 1.0), body(430.0, 405.0, -2.0, 1.0)];

        let mut a = start.clone();
        let mut b = start;
        advance(&mut a, &seq);
        advance(&mut b, &snap);
        // Body 1 sees the same moved body 0 either way; body 0 does not.
        assert_eq!(a[0].position(), b[0].position());
        assert_ne!(a[0].vx, b[0].vx);
    }
}

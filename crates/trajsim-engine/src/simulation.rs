//! Lockstep simulation over a body arena.
//!
//! [`Simulation`] owns the bodies of one trajectory generation and
//! advances them one tick per [`step()`](Simulation::step) call.
//! [`record()`](Simulation::record) runs the warm-up and then captures
//! the trajectories, which is what batch generation uses.

use rand::Rng;
use trajsim_core::{AgentId, Body, SimError, TickId, TrajectorySet};

use crate::config::SimConfig;
use crate::physics;
use crate::placement;

/// A running multi-agent simulation.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimConfig,
    bodies: Vec<Body>,
    tick: TickId,
}

impl Simulation {
    /// Validate `config` and place `n_agents` random bodies.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidArgument`] for an invalid config or a
    /// zero agent count, and propagates placement failures.
    pub fn new<R: Rng + ?Sized>(
        config: SimConfig,
        n_agents: usize,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        config.validate()?;
        if n_agents == 0 {
            return Err(SimError::invalid("n_agents must be at least 1"));
        }
        let bodies = placement::place_bodies(&config, n_agents, rng)?;
        Ok(Self {
            config,
            bodies,
            tick: TickId(0),
        })
    }

    /// Start a simulation from caller-supplied bodies.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidArgument`] for an invalid config or more
    /// than `u32::MAX` bodies.
    pub fn from_bodies(config: SimConfig, bodies: Vec<Body>) -> Result<Self, SimError> {
        config.validate()?;
        AgentId::checked_count(bodies.len())?;
        Ok(Self {
            config,
            bodies,
            tick: TickId(0),
        })
    }

    /// Advance all bodies by one tick. Returns the new tick count.
    pub fn step(&mut self) -> TickId {
        physics::advance(&mut self.bodies, &self.config);
        self.tick = TickId(self.tick.0 + 1);
        self.tick
    }

    /// Run the configured warm-up, then record `traj_len` ticks.
    ///
    /// The recorded position for a tick is the position at the start of
    /// that tick, before any body has moved.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidArgument`] if `traj_len` is zero.
    pub fn record(&mut self, traj_len: usize) -> Result<TrajectorySet, SimError> {
        if traj_len == 0 {
            return Err(SimError::invalid("traj_len must be at least 1"));
        }
        for _ in 0..self.config.start_buffer {
            self.step();
        }

        let mut set = TrajectorySet::new(self.bodies.len(), traj_len);
        for _ in 0..traj_len {
            set.record(self.bodies.iter().map(Body::position))?;
            self.step();
        }
        Ok(set)
    }

    /// The body arena, in agent order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Radii of all bodies, in agent order.
    pub fn radii(&self) -> Vec<f64> {
        self.bodies.iter().map(|b| b.radius).collect()
    }

    /// Number of ticks simulated so far, warm-up included.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// The configuration this simulation runs with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Consume the simulation, returning its bodies.
    pub fn into_bodies(self) -> Vec<Body> {
        self.bodies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use trajsim_core::{AgentId, Position};

    #[test]
    fn step_advances_tick() {
        let mut sim =
            Simulation::from_bodies(SimConfig::default(), vec![Body::new(100.0, 100.0, 1.0, 1.0, 20.0)])
                .unwrap();
        assert_eq!(sim.tick(), TickId(0));
        assert_eq!(sim.step(), TickId(1));
        assert_eq!(sim.bodies()[0].position(), Position::new(101.0, 101.0));
    }

    #[test]
    fn record_skips_warm_up() {
        let cfg = SimConfig {
            start_buffer: 3,
            ..SimConfig::default()
        };
        let mut sim =
            Simulation::from_bodies(cfg, vec![Body::new(100.0, 100.0, 2.0, 1.0, 20.0)]).unwrap();
        let set = sim.record(4).unwrap();

        assert_eq!(set.tick_count(), 4);
        let t = set.get(AgentId(0)).unwrap();
        assert_eq!(t.get(0), Some(Position::new(106.0, 103.0)));
        assert_eq!(t.get(3), Some(Position::new(112.0, 106.0)));
        assert_eq!(sim.tick(), TickId(7));
    }

    #[test]
    fn zero_agents_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = Simulation::new(SimConfig::default(), 0, &mut rng).unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument { .. }));
    }

    #[test]
    fn zero_length_recording_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut sim = Simulation::new(SimConfig::default(), 2, &mut rng).unwrap();
        assert!(sim.record(0).is_err());
        assert_eq!(sim.tick(), TickId(0));
    }

    #[test]
    fn invalid_config_surfaces_as_invalid_argument() {
        let cfg = SimConfig {
            max_speed: 0,
            ..SimConfig::default()
        };
        let err = Simulation::from_bodies(cfg, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("max_speed"));
    }

    #[test]
    fn radii_follow_agent_order() {
        let bodies = vec![
            Body::new(100.0, 100.0, 1.0, 1.0, 12.0),
            Body::new(300.0, 300.0, 1.0, 1.0, 18.0),
        ];
        let sim = Simulation::from_bodies(SimConfig::default(), bodies).unwrap();
        assert_eq!(sim.radii(), vec![12.0, 18.0]);
    }
}

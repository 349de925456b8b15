//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] collects every constant that shapes a run: field size,
//! body radius and speed, the repulsion law, warm-up length, and the two
//! behavioral switches ([`PlacementRule`], [`NeighbourReads`]) whose
//! defaults reproduce the reference dataset generator.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use trajsim_core::SimError;

// ── PlacementRule ──────────────────────────────────────────────────

/// How a candidate start position is tested against bodies already placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementRule {
    /// Reject a candidate that shares an exact x OR an exact y coordinate
    /// with any placed body. Loose; does not prevent circle overlap.
    #[default]
    AxisAligned,
    /// Reject a candidate whose centre is closer than the sum of radii to
    /// any placed body. Same test the collision scorer uses.
    CircleOverlap,
}

// ── NeighbourReads ─────────────────────────────────────────────────

/// Which neighbour positions a body sees during its repulsion pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighbourReads {
    /// Bodies update in index order; body `i` sees the already-moved
    /// positions of bodies `< i` and the previous-tick positions of
    /// bodies `> i`. Results depend on agent order.
    #[default]
    Sequential,
    /// All bodies integrate and reflect first, then every body's repulsion
    /// reads the same post-integration snapshot. Order independent.
    Snapshot,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The field is narrower or shorter than one body diameter.
    FieldTooSmall {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
        /// Configured maximum radius.
        max_radius: u32,
    },
    /// Radius bounds are unusable.
    InvalidRadius {
        /// Description of which bound is wrong.
        reason: String,
    },
    /// `max_speed` is zero, so no non-zero velocity can be drawn.
    ZeroMaxSpeed,
    /// A repulsion parameter is NaN, infinite, zero, or negative.
    InvalidRepulsion {
        /// Name of the offending parameter.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// `max_placement_attempts` is `Some(0)`.
    ZeroPlacementAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldTooSmall {
                width,
                height,
                max_radius,
            } => write!(
                f,
                "field {width}x{height} cannot hold a body of radius {max_radius}"
            ),
            Self::InvalidRadius { reason } => write!(f, "invalid radius: {reason}"),
            Self::ZeroMaxSpeed => write!(f, "max_speed must be at least 1"),
            Self::InvalidRepulsion { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::ZeroPlacementAttempts => {
                write!(f, "max_placement_attempts must be at least 1 when set")
            }
        }
    }
}

impl Error for ConfigError {}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::invalid(format!("config: {e}"))
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Parameters of one simulator run.
///
/// Deserializes from JSON with every field optional; missing fields take
/// the values of [`SimConfig::default()`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Field width. Default: 800.
    pub width: u32,
    /// Field height. Default: 800.
    pub height: u32,
    /// Body radius, and the upper bound when radii are randomized. Default: 20.
    pub max_radius: u32,
    /// Lower radius bound. `Some` enables uniform integer radii in
    /// `[min_radius, max_radius]`. Default: `None` (every body gets `max_radius`).
    pub min_radius: Option<u32>,
    /// Per-axis speed bound. Default: 2.
    pub max_speed: u32,
    /// Neighbours strictly closer than this repel. Default: 50.
    pub repulsion_range: f64,
    /// Divisor in the repulsion force `exp(distance / repulsion_scale)`. Default: 1000.
    pub repulsion_scale: f64,
    /// Ticks simulated before recording starts. Default: 10.
    pub start_buffer: usize,
    /// Start-position overlap rule. Default: [`PlacementRule::AxisAligned`].
    pub placement: PlacementRule,
    /// Within-tick neighbour read semantics. Default: [`NeighbourReads::Sequential`].
    pub neighbour_reads: NeighbourReads,
    /// Candidate positions tried per body before giving up. Default: `None` (unbounded).
    pub max_placement_attempts: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            max_radius: 20,
            min_radius: None,
            max_speed: 2,
            repulsion_range: 50.0,
            repulsion_scale: 1000.0,
            start_buffer: 10,
            placement: PlacementRule::AxisAligned,
            neighbour_reads: NeighbourReads::Sequential,
            max_placement_attempts: None,
        }
    }
}

impl SimConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_radius == 0 {
            return Err(ConfigError::InvalidRadius {
                reason: "max_radius must be at least 1".into(),
            });
        }
        if let Some(min) = self.min_radius {
            if min == 0 || min > self.max_radius {
                return Err(ConfigError::InvalidRadius {
                    reason: format!(
                        "min_radius {min} must be in [1, max_radius={}]",
                        self.max_radius
                    ),
                });
            }
        }
        let diameter = u64::from(self.max_radius) * 2;
        if u64::from(self.width) < diameter || u64::from(self.height) < diameter {
            return Err(ConfigError::FieldTooSmall {
                width: self.width,
                height: self.height,
                max_radius: self.max_radius,
            });
        }
        if self.max_speed == 0 {
            return Err(ConfigError::ZeroMaxSpeed);
        }
        for (name, value) in [
            ("repulsion_range", self.repulsion_range),
            ("repulsion_scale", self.repulsion_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidRepulsion { name, value });
            }
        }
        if self.max_placement_attempts == Some(0) {
            return Err(ConfigError::ZeroPlacementAttempts);
        }
        Ok(())
    }

    /// Number of distinct integer x coordinates a body centre can start on.
    pub(crate) fn x_slots(&self) -> u64 {
        u64::from(self.width) - 2 * u64::from(self.max_radius) + 1
    }

    /// Number of distinct integer y coordinates a body centre can start on.
    pub(crate) fn y_slots(&self) -> u64 {
        u64::from(self.height) - 2 * u64::from(self.max_radius) + 1
    }
}

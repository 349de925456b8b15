//! Simulated circular bodies.

use serde::{Deserialize, Serialize};

use crate::trajectory::Position;

/// Display color of a body. Has no effect on the physics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A circular agent moving in the 2D field.
///
/// Bodies live in a `Vec<Body>` arena owned by one simulation. During a
/// tick each body reads the positions of the others by index and writes
/// only its own state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Centre x coordinate.
    pub x: f64,
    /// Centre y coordinate.
    pub y: f64,
    /// Velocity along x, in units per tick.
    pub vx: f64,
    /// Velocity along y, in units per tick.
    pub vy: f64,
    /// Body radius.
    pub radius: f64,
    /// Cosmetic color.
    pub color: Rgb,
}

impl Body {
    /// Create a body with the default (black) color.
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            radius,
            color: Rgb::default(),
        }
    }

    /// Set the cosmetic color.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Current centre position.
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Euclidean distance between the centres of `self` and `other`.
    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position().distance_to(other.position())
    }
}

//! Turtle state and operations for 2D interpretation.

use crate::error::{LSystemError, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The cursor of the drawing turtle.
///
/// A plain value: snapshots pushed on `[` are independent copies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the pen.
    pub position: Vec2,

    /// Current heading in radians, measured from the +X axis towards +Y.
    pub heading: f32,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Unit vector pointing along the heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// Rotates the heading by `angle` radians.
    pub fn turn(&mut self, angle: f32) {
        self.heading += angle;
    }

    /// Moves `distance` along the heading and returns the point left behind.
    pub fn advance(&mut self, distance: f32) -> Vec2 {
        let start = self.position;
        self.position += self.direction() * distance;
        start
    }
}

/// Drawing parameters for one render.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Length of one `F` segment.
    pub step_length: f32,

    /// Rotation applied by `+` and `-`, in degrees.
    pub turn_angle: f32,

    /// Generation the parameters belong to. Informational for the interpreter.
    pub generation_count: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            step_length: 200.0,
            turn_angle: 30.0,
            generation_count: 0,
        }
    }
}

impl Parameters {
    pub fn new(step_length: f32, turn_angle: f32) -> Self {
        Self {
            step_length,
            turn_angle,
            generation_count: 0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_step_length(self.step_length)?;
        validate_angle(self.turn_angle)
    }

    pub fn turn_angle_radians(&self) -> f32 {
        self.turn_angle.to_radians()
    }
}

pub(crate) fn validate_step_length(len: f32) -> Result<()> {
    if len.is_finite() && len > 0.0 {
        Ok(())
    } else {
        Err(LSystemError::InvalidStepLength(len))
    }
}

pub(crate) fn validate_angle(angle: f32) -> Result<()> {
    if angle.is_finite() {
        Ok(())
    } else {
        Err(LSystemError::InvalidAngle(angle))
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    // --- Drawing ---
    /// Move forward one step and emit a line (`F`).
    Draw,
    /// Move forward one step without drawing.
    Move,

    // --- Rotation ---
    /// Rotate by `sign * turn_angle` (`+` / `-`).
    Turn(f32),
    /// Turn 180 degrees.
    TurnAround,

    // --- Flow Control ---
    /// Save the cursor onto the stack (`[`).
    Push,
    /// Restore the most recently pushed cursor (`]`).
    Pop,
    /// No-op: symbol has no registered meaning.
    Ignore,
}

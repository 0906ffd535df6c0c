//! Spin Hex - a ball bouncing inside a spinning hexagon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vector kernel, hexagon, collisions, step)
//! - `stepper`: Fixed-timestep accumulator for frame-driven callers
//! - `settings`: Headless driver settings
//!
//! Rendering is not part of this crate. A renderer calls [`sim::Simulation::step`]
//! and reads [`sim::Simulation::snapshot`].

pub mod settings;
pub mod sim;
pub mod stepper;

pub use settings::DriverSettings;
pub use sim::{Simulation, Snapshot};
pub use stepper::FixedStepper;

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed to the stepper (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Nominal viewport; the hexagon sits at its center
    pub const VIEWPORT_WIDTH: f64 = 800.0;
    pub const VIEWPORT_HEIGHT: f64 = 600.0;

    /// Hexagon defaults
    pub const HEX_SIDES: usize = 6;
    pub const HEX_RADIUS: f64 = 200.0; // center to vertex
    pub const HEX_ANGULAR_SPEED: f64 = 0.5; // radians/s

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    /// Start offset from the hexagon center (screen coords, y grows downward)
    pub const BALL_START_OFFSET: (f64, f64) = (0.0, -150.0);
    pub const BALL_START_VELOCITY: (f64, f64) = (100.0, 0.0);

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f64 = 500.0;
    /// Velocity multiplier applied once per step
    pub const DAMPING: f64 = 0.99;
    /// Fraction of normal approach speed kept after a wall bounce
    pub const RESTITUTION: f64 = 0.9;
}

/// Normalized angle to [-π, π)
///
/// Constant time for any finite input. Non-finite input is returned as is.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

//! Simulation state and the read-only snapshot handed to renderers

use serde::{Deserialize, Serialize};

use super::geom::Vector2;
use super::hexagon::Hexagon;
use crate::consts::*;

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vector2,
    pub vel: Vector2,
    pub radius: f64,
}

impl Ball {
    pub fn new(pos: Vector2, vel: Vector2, radius: f64) -> Self {
        Self { pos, vel, radius }
    }

    /// Ball placed at its start offset from `hexagon`'s center
    pub fn at_start(hexagon: &Hexagon) -> Self {
        let (ox, oy) = BALL_START_OFFSET;
        let (vx, vy) = BALL_START_VELOCITY;
        Self::new(
            hexagon.center + Vector2::new(ox, oy),
            Vector2::new(vx, vy),
            BALL_RADIUS,
        )
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}

/// Physical constants, fixed for the life of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Downward acceleration (pixels/s²)
    pub gravity: f64,
    /// Velocity multiplier applied once per step
    pub damping: f64,
    /// Restitution coefficient for wall bounces
    pub restitution: f64,
    /// Timestep the driver is expected to pass to `step`
    pub fixed_dt: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            damping: DAMPING,
            restitution: RESTITUTION,
            fixed_dt: SIM_DT,
        }
    }
}

/// Read-only view of the simulation for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_center: Vector2,
    pub ball_radius: f64,
    /// Hexagon vertices in edge order
    pub hexagon_vertices: [Vector2; HEX_SIDES],
    pub ball_velocity: Vector2,
    pub hexagon_rotation: f64,
    pub time_ticks: u64,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub ball: Ball,
    pub hexagon: Hexagon,
    pub params: PhysicsParams,
    /// Steps taken so far
    pub time_ticks: u64,
    /// Sum of every `dt` passed to `step` (seconds)
    pub elapsed: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// Reference setup: ball above the center of a hexagon centered on the
    /// nominal viewport
    pub fn new() -> Self {
        let hexagon = Hexagon::default();
        let ball = Ball::at_start(&hexagon);
        Self::with_parts(ball, hexagon, PhysicsParams::default())
    }

    /// Build a simulation from explicit parts (scenarios, tests)
    pub fn with_parts(ball: Ball, hexagon: Hexagon, params: PhysicsParams) -> Self {
        Self {
            ball,
            hexagon,
            params,
            time_ticks: 0,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds. See [`super::tick::tick`].
    pub fn step(&mut self, dt: f64) {
        super::tick::tick(self, dt);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_center: self.ball.pos,
            ball_radius: self.ball.radius,
            hexagon_vertices: self.hexagon.vertices(),
            ball_velocity: self.ball.vel,
            hexagon_rotation: self.hexagon.rotation,
            time_ticks: self.time_ticks,
        }
    }
}

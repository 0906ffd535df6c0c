//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Fixed edge iteration order (0 through 5)
//! - No rendering, platform or I/O dependencies

pub mod collision;
pub mod geom;
pub mod hexagon;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, ball_segment_collision, resolve_moving_wall};
pub use geom::{Vector2, closest_point_on_segment, rotating_point_velocity};
pub use hexagon::Hexagon;
pub use state::{Ball, PhysicsParams, Simulation, Snapshot};
pub use tick::tick;

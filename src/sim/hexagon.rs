//! Rotating regular hexagon
//!
//! Only the center, circumradius, current rotation and angular speed are
//! stored. Vertices and edges are derived on demand so they always form a
//! regular hexagon around `center`.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::geom::{Vector2, rotating_point_velocity};
use crate::consts::*;
use crate::{normalize_angle, polar_to_cartesian};

/// A regular hexagon spinning about its fixed center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hexagon {
    /// Fixed center of rotation
    pub center: Vector2,
    /// Distance from center to each vertex
    pub radius: f64,
    /// Current rotation (radians, normalized to [-π, π))
    pub rotation: f64,
    /// Rotation rate (radians/sec)
    pub angular_speed: f64,
}

impl Default for Hexagon {
    fn default() -> Self {
        Self::new(
            Vector2::new(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0),
            HEX_RADIUS,
            HEX_ANGULAR_SPEED,
        )
    }
}

impl Hexagon {
    pub fn new(center: Vector2, radius: f64, angular_speed: f64) -> Self {
        Self {
            center,
            radius,
            rotation: 0.0,
            angular_speed,
        }
    }

    /// Advance rotation by `angular_speed * dt`
    pub fn rotate(&mut self, dt: f64) {
        self.rotation = normalize_angle(self.rotation + self.angular_speed * dt);
    }

    /// Current vertices in order; vertex `i` sits at `rotation + i·2π/6`
    pub fn vertices(&self) -> [Vector2; HEX_SIDES] {
        std::array::from_fn(|i| {
            let angle = self.rotation + i as f64 * TAU / HEX_SIDES as f64;
            self.center + polar_to_cartesian(self.radius, angle)
        })
    }

    /// Edge `i` runs from vertex `i` to vertex `(i + 1) % 6`
    pub fn edges(&self) -> [(Vector2, Vector2); HEX_SIDES] {
        let v = self.vertices();
        std::array::from_fn(|i| (v[i], v[(i + 1) % HEX_SIDES]))
    }

    /// Instantaneous velocity of the hexagon's body at `point`
    #[inline]
    pub fn velocity_at(&self, point: Vector2) -> Vector2 {
        rotating_point_velocity(self.center, self.angular_speed, point)
    }
}

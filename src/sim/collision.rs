//! Collision detection and response against rotating straight walls
//!
//! Detection treats each hexagon edge as a segment and measures the ball
//! center against its closest point. Response happens in the wall's
//! instantaneous rest frame so a spinning wall can push the ball along.

use super::geom::{Vector2, closest_point_on_segment};

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the wall to the ball center
    pub point: Vector2,
    /// Surface normal at collision (pointing from wall toward ball center)
    pub normal: Vector2,
    /// Penetration depth (for position correction)
    pub penetration: f64,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vector2::ZERO,
            normal: Vector2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check a ball against the segment `a`-`b`
///
/// A hit needs the center strictly closer than `ball_radius`. When the center
/// lies exactly on the segment the normal falls back to `perp(b - a)`.
pub fn ball_segment_collision(
    ball_pos: Vector2,
    ball_radius: f64,
    a: Vector2,
    b: Vector2,
) -> CollisionResult {
    let closest = closest_point_on_segment(a, b, ball_pos);
    let diff = ball_pos - closest;
    let dist = diff.length();

    if dist >= ball_radius {
        return CollisionResult::miss();
    }

    let normal = if dist != 0.0 {
        diff.normalize_or_zero()
    } else {
        (b - a).perp().normalize_or_zero()
    };

    CollisionResult {
        hit: true,
        point: closest,
        normal,
        penetration: ball_radius - dist,
    }
}

/// Bounce `velocity` off a wall moving at `wall_vel`
///
/// Works on the relative velocity: if it is approaching along `normal`, its
/// normal component is reversed and scaled by `restitution`; a separating or
/// sliding ball comes back unchanged. Returns the new absolute velocity.
pub fn resolve_moving_wall(
    velocity: Vector2,
    normal: Vector2,
    wall_vel: Vector2,
    restitution: f64,
) -> Vector2 {
    let rel_vel = velocity - wall_vel;
    let dot = rel_vel.dot(normal);
    if dot >= 0.0 {
        return velocity;
    }
    let rel_vel = rel_vel - normal * ((1.0 + restitution) * dot);
    rel_vel + wall_vel
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> (Vector2, Vector2) {
        // Horizontal wall along y = 100, ball lives above it (smaller y)
        (Vector2::new(-50.0, 100.0), Vector2::new(50.0, 100.0))
    }

    #[test]
    fn test_segment_collision_hit() {
        let (a, b) = floor();
        let result = ball_segment_collision(Vector2::new(10.0, 94.0), 10.0, a, b);
        assert!(result.hit);
        assert!((result.penetration - 4.0).abs() < 1e-12);
        assert!((result.normal - Vector2::new(0.0, -1.0)).length() < 1e-12);
        assert!((result.point - Vector2::new(10.0, 100.0)).length() < 1e-12);
    }

    #[test]
    fn test_segment_collision_touching_is_miss() {
        let (a, b) = floor();
        let result = ball_segment_collision(Vector2::new(0.0, 90.0), 10.0, a, b);
        assert!(!result.hit);
    }

    #[test]
    fn test_segment_collision_endpoint() {
        let (a, b) = floor();
        // Beyond the right end, diagonally close to the endpoint
        let result = ball_segment_collision(Vector2::new(54.0, 97.0), 10.0, a, b);
        assert!(result.hit);
        assert_eq!(result.point, b);
        assert!((result.penetration - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_collision_center_on_edge() {
        let (a, b) = floor();
        let result = ball_segment_collision(Vector2::new(0.0, 100.0), 10.0, a, b);
        assert!(result.hit);
        assert!((result.penetration - 10.0).abs() < 1e-12);
        // perp((100, 0)) = (0, 100)
        assert!((result.normal - Vector2::new(0.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_resolve_static_wall() {
        let normal = Vector2::new(0.0, -1.0);
        let v = resolve_moving_wall(Vector2::new(30.0, 200.0), normal, Vector2::ZERO, 0.9);
        assert!((v - Vector2::new(30.0, -180.0)).length() < 1e-9);
    }

    #[test]
    fn test_resolve_elastic_keeps_speed() {
        let normal = Vector2::new(1.0, 1.0).normalize();
        let before = Vector2::new(-40.0, -10.0);
        let after = resolve_moving_wall(before, normal, Vector2::ZERO, 1.0);
        assert!((after.length() - before.length()).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_separating_untouched() {
        let normal = Vector2::new(0.0, -1.0);
        let v = Vector2::new(25.0, -3.0);
        assert_eq!(resolve_moving_wall(v, normal, Vector2::ZERO, 0.9), v);
        // Pure sliding along the wall
        let v = Vector2::new(25.0, 0.0);
        assert_eq!(resolve_moving_wall(v, normal, Vector2::ZERO, 0.9), v);
    }

    #[test]
    fn test_resolve_moving_wall_pushes_ball() {
        // Wall moving up into a resting ball
        let normal = Vector2::new(0.0, -1.0);
        let wall_vel = Vector2::new(0.0, -20.0);
        let v = resolve_moving_wall(Vector2::ZERO, normal, wall_vel, 1.0);
        // Elastic bounce in the wall frame: rel (0, 20) -> (0, -20), plus wall
        assert!((v - Vector2::new(0.0, -40.0)).length() < 1e-9);
    }
}

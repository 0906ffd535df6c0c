//! 2D vector kernel
//!
//! `Vector2` is glam's f64 vector. glam already provides the arithmetic the
//! simulation needs (`+`, `-`, scalar `*`, `dot`, `length`,
//! `normalize_or_zero`, `perp`); this module adds the segment projection and
//! rigid-rotation helpers on top.

use glam::DVec2;

/// Immutable 2D value type used throughout the simulation
pub type Vector2 = DVec2;

/// Closest point to `p` on the segment `a`-`b`
///
/// Projects onto the infinite line through `a` and `b`, then clamps the line
/// parameter to [0, 1]. `a` and `b` must be distinct.
#[inline]
pub fn closest_point_on_segment(a: Vector2, b: Vector2, p: Vector2) -> Vector2 {
    let ab = b - a;
    let t = ((p - a).dot(ab) / ab.dot(ab)).clamp(0.0, 1.0);
    a + ab * t
}

/// Linear velocity of `point` on a rigid body spinning about `center`
///
/// 2D form of `ω × r`: `perp(r) * ω` with `r = point - center`.
#[inline]
pub fn rotating_point_velocity(center: Vector2, angular_speed: f64, point: Vector2) -> Vector2 {
    (point - center).perp() * angular_speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vector2::ZERO.normalize_or_zero(), Vector2::ZERO);
        let n = Vector2::new(3.0, 4.0).normalize_or_zero();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perp_is_counter_clockwise() {
        assert_eq!(Vector2::new(1.0, 2.0).perp(), Vector2::new(-2.0, 1.0));
    }

    #[test]
    fn test_closest_point_interior() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(10.0, 0.0);
        let c = closest_point_on_segment(a, b, Vector2::new(4.0, 7.0));
        assert_eq!(c, Vector2::new(4.0, 0.0));
    }

    #[test]
    fn test_closest_point_clamps_to_endpoints() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(10.0, 0.0);
        assert_eq!(closest_point_on_segment(a, b, Vector2::new(-5.0, 3.0)), a);
        assert_eq!(closest_point_on_segment(a, b, Vector2::new(15.0, -3.0)), b);
    }

    #[test]
    fn test_rotating_point_velocity() {
        // Point to the right of center, spinning counter-clockwise (math axes)
        let v = rotating_point_velocity(Vector2::new(1.0, 1.0), 2.0, Vector2::new(4.0, 1.0));
        assert!((v - Vector2::new(0.0, 6.0)).length() < 1e-12);
    }
}

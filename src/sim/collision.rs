//! Collision detection and response
//!
//! Circles against rectangular walls, circles against each other, and shot
//! segments against circles. Reflection comes in two flavors: vector
//! reflection for velocities, and heading mirrors for the angle-based movers.

use glam::Vec2;
use std::f32::consts::PI;

use super::rect::Rect;
use crate::normalize_angle;

/// Result of a circle-vs-wall check
#[derive(Debug, Clone, Copy)]
pub struct WallHit {
    /// Surface normal pointing away from the wall, toward the circle center
    pub normal: Vec2,
    /// How far the circle must move along `normal` to clear the wall
    pub penetration: f32,
}

/// Check a circle against a rectangular wall
///
/// Returns the hit normal and penetration depth, or `None` when clear. A
/// center inside the rect resolves toward the nearest face.
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> Option<WallHit> {
    let closest = rect.closest_point(center);
    let delta = center - closest;
    let dist_sq = delta.length_squared();

    if dist_sq > radius * radius {
        return None;
    }

    if dist_sq > 1e-6 {
        let dist = dist_sq.sqrt();
        return Some(WallHit {
            normal: delta / dist,
            penetration: radius - dist,
        });
    }

    // Center is inside the rect: push out through the nearest face
    let to_left = center.x - rect.left();
    let to_right = rect.right() - center.x;
    let to_top = center.y - rect.top();
    let to_bottom = rect.bottom() - center.y;

    let (depth, normal) = [
        (to_left, Vec2::NEG_X),
        (to_right, Vec2::X),
        (to_top, Vec2::NEG_Y),
        (to_bottom, Vec2::Y),
    ]
    .into_iter()
    .min_by(|a, b| a.0.total_cmp(&b.0))
    .unwrap_or((to_left, Vec2::NEG_X));

    Some(WallHit {
        normal,
        penetration: depth + radius,
    })
}

/// Euclidean overlap check for two circles
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let r = ra + rb;
    a.distance_squared(b) < r * r
}

/// Earliest intersection of segment [a, b] with a circle
///
/// Solves the quadratic |a + t(b-a) - c|² = r² and returns the smallest
/// t in [0, 1], or `None` on a miss. A degenerate segment degrades to a
/// point-in-circle test.
pub fn segment_circle_intersection(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> Option<f32> {
    let d = b - a;
    let f = a - center;

    let qa = d.length_squared();
    if qa < 1e-8 {
        return (f.length_squared() <= radius * radius).then_some(0.0);
    }

    let qb = 2.0 * f.dot(d);
    let qc = f.length_squared() - radius * radius;
    let discriminant = qb * qb - 4.0 * qa * qc;

    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t1 = (-qb - sqrt_d) / (2.0 * qa);
    let t2 = (-qb + sqrt_d) / (2.0 * qa);

    if (0.0..=1.0).contains(&t1) {
        Some(t1)
    } else if (0.0..=1.0).contains(&t2) {
        Some(t2)
    } else {
        None
    }
}

/// Reflect a velocity off a surface: v' = v - 2(v·n)n
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Mirror a heading across a vertical surface (left/right wall face)
#[inline]
pub fn mirror_heading_x(theta: f32) -> f32 {
    normalize_angle(PI - theta)
}

/// Mirror a heading across a horizontal surface (top/bottom wall face)
#[inline]
pub fn mirror_heading_y(theta: f32) -> f32 {
    normalize_angle(-theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_circle_rect_face_hit() {
        let rect = Rect::new(100.0, 100.0, 200.0, 20.0);

        // Approaching the left face
        let hit = circle_rect_collision(Vec2::new(95.0, 110.0), 8.0, &rect).unwrap();
        assert_eq!(hit.normal, Vec2::NEG_X);
        assert!((hit.penetration - 3.0).abs() < 1e-4);

        // Approaching the bottom face
        let hit = circle_rect_collision(Vec2::new(200.0, 125.0), 8.0, &rect).unwrap();
        assert_eq!(hit.normal, Vec2::Y);
        assert!((hit.penetration - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_circle_rect_miss() {
        let rect = Rect::new(100.0, 100.0, 200.0, 20.0);
        assert!(circle_rect_collision(Vec2::new(90.0, 110.0), 8.0, &rect).is_none());
        assert!(circle_rect_collision(Vec2::new(200.0, 140.0), 8.0, &rect).is_none());
    }

    #[test]
    fn test_circle_rect_corner_normal() {
        let rect = Rect::new(100.0, 100.0, 200.0, 20.0);
        // Diagonal approach to the top-left corner
        let hit = circle_rect_collision(Vec2::new(96.0, 96.0), 8.0, &rect).unwrap();
        assert!(hit.normal.x < 0.0 && hit.normal.y < 0.0);
        assert!((hit.normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_circle_rect_center_inside() {
        let rect = Rect::new(100.0, 100.0, 200.0, 20.0);
        // Center inside, nearest face is the top
        let hit = circle_rect_collision(Vec2::new(200.0, 105.0), 8.0, &rect).unwrap();
        assert_eq!(hit.normal, Vec2::NEG_Y);
        assert!((hit.penetration - 13.0).abs() < 1e-4);
    }

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(
            Vec2::new(0.0, 0.0),
            10.0,
            Vec2::new(15.0, 0.0),
            10.0
        ));
        assert!(!circles_overlap(
            Vec2::new(0.0, 0.0),
            10.0,
            Vec2::new(25.0, 0.0),
            10.0
        ));
    }

    #[test]
    fn test_segment_circle_crossing() {
        // Horizontal segment straight through a circle at the origin
        let t = segment_circle_intersection(
            Vec2::new(-20.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::ZERO,
            5.0,
        )
        .unwrap();
        // Entry point at x = -5 is t = 15/40
        assert!((t - 0.375).abs() < 1e-4);
    }

    #[test]
    fn test_segment_circle_miss() {
        assert!(
            segment_circle_intersection(
                Vec2::new(-20.0, 10.0),
                Vec2::new(20.0, 10.0),
                Vec2::ZERO,
                5.0,
            )
            .is_none()
        );
        // Segment pointing away, circle behind the start
        assert!(
            segment_circle_intersection(
                Vec2::new(10.0, 0.0),
                Vec2::new(20.0, 0.0),
                Vec2::ZERO,
                5.0,
            )
            .is_none()
        );
    }

    #[test]
    fn test_segment_starting_inside_circle() {
        let t = segment_circle_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::ZERO,
            5.0,
        )
        .unwrap();
        assert!((0.0..=1.0).contains(&t));
    }

    #[test]
    fn test_degenerate_segment_is_point_test() {
        let p = Vec2::new(3.0, 0.0);
        assert_eq!(segment_circle_intersection(p, p, Vec2::ZERO, 5.0), Some(0.0));
        let q = Vec2::new(8.0, 0.0);
        assert!(segment_circle_intersection(q, q, Vec2::ZERO, 5.0).is_none());
    }

    #[test]
    fn test_reflect_axis() {
        let v = reflect(Vec2::new(100.0, 40.0), Vec2::NEG_X);
        assert!((v.x + 100.0).abs() < 1e-4);
        assert!((v.y - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_heading_mirrors() {
        use std::f32::consts::FRAC_PI_4;
        // Heading up-right off a right wall goes up-left
        let m = mirror_heading_x(FRAC_PI_4);
        assert!((m - 3.0 * FRAC_PI_4).abs() < 1e-5);
        // Heading up-right off the top goes down-right
        let m = mirror_heading_y(FRAC_PI_4);
        assert!((m + FRAC_PI_4).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_reflect_preserves_speed(
            vx in -300.0f32..300.0,
            vy in -300.0f32..300.0,
            theta in -3.0f32..3.0,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::new(theta.cos(), theta.sin());
            let r = reflect(v, n);
            prop_assert!((v.length() - r.length()).abs() < v.length().max(1.0) * 1e-4);
        }

        #[test]
        fn prop_mirror_involution(theta in -3.0f32..3.0) {
            prop_assert!((mirror_heading_x(mirror_heading_x(theta)) - theta).abs() < 1e-4);
            prop_assert!((mirror_heading_y(mirror_heading_y(theta)) - theta).abs() < 1e-4);
        }
    }
}

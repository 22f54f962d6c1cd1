//! Distance and joint-angle math on landmarks
//!
//! Angles use the dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|),
//! measured in the image plane.

use super::landmarks::Landmark;

/// Vectors shorter than this are treated as degenerate
const EPSILON: f32 = 1e-6;

/// Euclidean 3D distance (z participates, 0 when absent)
pub fn distance(a: Landmark, b: Landmark) -> f32 {
    (a.to_vector() - b.to_vector()).norm()
}

/// Angle at `center` between `center→p1` and `center→p2`, radians in [0, π].
///
/// Degenerate vectors yield 0, never NaN.
pub fn angle_between(p1: Landmark, center: Landmark, p2: Landmark) -> f32 {
    let v1 = p1.to_planar() - center.to_planar();
    let v2 = p2.to_planar() - center.to_planar();

    let mag1 = v1.norm();
    let mag2 = v2.norm();

    if mag1 < EPSILON || mag2 < EPSILON {
        return 0.0;
    }

    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos_angle.acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn p(x: f32, y: f32) -> Landmark {
        Landmark::new(x, y, 0.0)
    }

    #[test]
    fn test_distance_includes_depth() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(0.0, 3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_straight_line() {
        let angle = angle_between(p(0.0, 0.0), p(0.5, 0.0), p(1.0, 0.0));
        assert!((angle - PI).abs() < 1e-4);
    }

    #[test]
    fn test_right_angle() {
        let angle = angle_between(p(0.0, 0.0), p(0.5, 0.0), p(0.5, 0.5));
        assert!((angle - PI / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_coincident_points() {
        let angle = angle_between(p(0.3, 0.3), p(0.3, 0.3), p(0.9, 0.1));
        assert_eq!(angle, 0.0);
        assert_eq!(distance(p(0.3, 0.3), p(0.3, 0.3)), 0.0);
    }
}

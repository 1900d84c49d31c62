//! Angle math for the clock face.
//!
//! All angles are in degrees, measured clockwise from 12 o'clock. Points live in a
//! screen-style frame where y grows downward.

/// A position in the widget's local frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

/// Clock angle of `point` as seen from `center`, in [0, 360).
///
/// A point exactly on the center has no direction and maps to 0.
pub fn pointer_angle(point: Point, center: Point) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    normalize(dy.atan2(dx).to_degrees() + 90.0)
}

/// Wrap any angle into [0, 360). Non-finite input maps to 0.
pub fn normalize(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let r = angle % 360.0;
    if r >= 0.0 {
        return r;
    }
    // tiny negatives round up to exactly 360.0
    let wrapped = r + 360.0;
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unsigned smallest rotation between two directions, in [0, 180].
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if !diff.is_finite() {
        return 0.0;
    }
    diff.min(360.0 - diff)
}

/// Signed rotation that takes `from` to `to` the short way round, in (-180, 180].
///
/// Positive is clockwise.
pub fn shortest_signed_delta(from: f64, to: f64) -> f64 {
    let delta = normalize(to - from);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_pointer_angle_cardinal_points() {
        let c = Point::ORIGIN;
        assert!(approx(pointer_angle(Point::new(0.0, -1.0), c), 0.0));
        assert!(approx(pointer_angle(Point::new(1.0, 0.0), c), 90.0));
        assert!(approx(pointer_angle(Point::new(0.0, 1.0), c), 180.0));
        assert!(approx(pointer_angle(Point::new(-1.0, 0.0), c), 270.0));
    }

    #[test]
    fn test_pointer_angle_off_origin_center() {
        let c = Point::new(10.0, 10.0);
        assert!(approx(pointer_angle(Point::new(10.0, 5.0), c), 0.0));
        assert!(approx(pointer_angle(Point::new(15.0, 15.0), c), 135.0));
    }

    #[test]
    fn test_pointer_angle_at_center_is_zero() {
        let c = Point::new(3.0, -2.0);
        assert_eq!(pointer_angle(c, c), 0.0);
    }

    #[test]
    fn test_pointer_angle_just_left_of_noon_stays_below_360() {
        let a = pointer_angle(Point::new(-1e-12, -1.0), Point::ORIGIN);
        assert!((0.0..360.0).contains(&a));
        assert!(a > 359.0);
    }

    #[test]
    fn test_normalize_range_and_idempotence() {
        for x in [
            -1e-17, -720.5, -360.0, -1.0, 0.0, 359.999, 360.0, 725.0, 1e9, -1e9,
        ] {
            let n = normalize(x);
            assert!((0.0..360.0).contains(&n), "normalize({x}) = {n}");
            assert_eq!(normalize(n), n);
        }
    }

    #[test]
    fn test_normalize_known_values() {
        assert_eq!(normalize(370.0), 10.0);
        assert_eq!(normalize(-10.0), 350.0);
        assert_eq!(normalize(720.0), 0.0);
    }

    #[test]
    fn test_normalize_non_finite() {
        assert_eq!(normalize(f64::NAN), 0.0);
        assert_eq!(normalize(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_angular_difference_symmetric_and_bounded() {
        let samples = [0.0, 1.0, 90.0, 179.0, 180.0, 181.0, 359.0, 725.0, -45.0];
        for &a in &samples {
            for &b in &samples {
                let d = angular_difference(a, b);
                assert!((0.0..=180.0).contains(&d));
                assert_eq!(d, angular_difference(b, a));
            }
        }
    }

    #[test]
    fn test_angular_difference_wraps() {
        assert!(approx(angular_difference(359.0, 1.0), 2.0));
        assert!(approx(angular_difference(0.0, 180.0), 180.0));
        assert!(approx(angular_difference(10.0, 730.0), 0.0));
    }

    #[test]
    fn test_shortest_signed_delta() {
        assert!(approx(shortest_signed_delta(350.0, 10.0), 20.0));
        assert!(approx(shortest_signed_delta(10.0, 350.0), -20.0));
        assert!(approx(shortest_signed_delta(0.0, 180.0), 180.0));
        assert!(approx(shortest_signed_delta(180.0, 0.0), 180.0));
        assert!(approx(shortest_signed_delta(90.0, 90.0), 0.0));
    }

    #[test]
    fn test_shortest_signed_delta_range() {
        for from in (0..360).step_by(15) {
            for to in (0..360).step_by(15) {
                let d = shortest_signed_delta(from as f64, to as f64);
                assert!(d > -180.0 && d <= 180.0);
            }
        }
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
    }
}

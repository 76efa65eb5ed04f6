//! Small float helpers shared by the table entities.

use glam::Vec2;
use std::f32::consts::TAU;

/// Tolerance for float equality; absorbs accumulated rounding.
pub const FLOAT_TOLERANCE: f32 = 4.0 * f32::EPSILON;

pub fn approx_eq(a: f32, b: f32) -> bool {
    (b - a).abs() < FLOAT_TOLERANCE
}

/// Wrap an angle into `[0, 2π)`
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Unit step for a ball travelling at `angle`.
///
/// Angle 0 moves along +y, π/2 along +x.
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), angle.cos())
}

fn is_even(value: f32) -> bool {
    value.rem_euclid(2.0) == 0.0
}

/// Snap to the nearest odd integer, so a sprite has a centre pixel.
pub fn make_odd(value: f32) -> f32 {
    let rounded = value.round();
    if !is_even(rounded) {
        rounded
    } else if value >= rounded {
        rounded + 1.0
    } else {
        rounded - 1.0
    }
}

/// Largest odd integer not above `value`
pub fn make_odd_down(value: f32) -> f32 {
    let floor = value.floor();
    if is_even(floor) {
        floor - 1.0
    } else {
        floor
    }
}

/// Smallest odd integer not below `value`
pub fn make_odd_up(value: f32) -> f32 {
    let ceil = value.ceil();
    if is_even(ceil) {
        ceil + 1.0
    } else {
        ceil
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_approx_eq_tolerance() {
        assert!(approx_eq(1.0, 1.0 + f32::EPSILON));
        assert!(!approx_eq(1.0, 1.0 + 8.0 * f32::EPSILON));
        assert!(approx_eq(0.0, 0.0));
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(-0.5 * PI) - 1.5 * PI).abs() < 1e-6);
        assert!((normalize_angle(2.5 * PI) - 0.5 * PI).abs() < 1e-6);
        assert_eq!(normalize_angle(0.0), 0.0);
        let tiny = normalize_angle(-1e-9);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn test_heading_quadrants() {
        let right = heading(0.5 * PI);
        assert!((right.x - 1.0).abs() < 1e-6 && right.y.abs() < 1e-6);
        let down = heading(0.0);
        assert!(down.x.abs() < 1e-6 && (down.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_make_odd_nearest() {
        assert_eq!(make_odd(15.0), 15.0);
        assert_eq!(make_odd(11.0), 11.0);
        assert_eq!(make_odd(66.0), 67.0);
        assert_eq!(make_odd(66.4), 67.0);
        assert_eq!(make_odd(65.6), 65.0);
    }

    #[test]
    fn test_make_odd_directed() {
        assert_eq!(make_odd_down(156.0), 155.0);
        assert_eq!(make_odd_down(155.9), 155.0);
        assert_eq!(make_odd_up(1034.0), 1035.0);
        assert_eq!(make_odd_up(1033.2), 1035.0);
        assert_eq!(make_odd_up(1035.0), 1035.0);
    }
}

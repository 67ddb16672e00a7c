//! Angle and coordinate math shared by the partitioner and the tracker.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock. On a Y-down
//! surface that means rotating by -90° before handing them to `cos`/`sin`.

use std::f64::consts::PI;

/// Angle substituted when the pointer direction is undefined.
pub const FALLBACK_ANGLE: f64 = 0.0;

pub const FULL_TURN: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Degrees (0 = up, clockwise) to radians in screen space (0 = right).
pub fn to_radians(degrees: f64) -> f64 {
    (degrees - 90.0) * PI / 180.0
}

pub fn polar_point(center: Point, radius: f64, degrees: f64) -> Point {
    let rad = to_radians(degrees);
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Angle from `center` to `pointer`, in `[0, 360)`.
///
/// A pointer sitting on the center (or carrying NaN/inf) has no direction;
/// [`FALLBACK_ANGLE`] is returned instead.
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    let (dx, dy) = (pointer.x - center.x, pointer.y - center.y);
    if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
        return FALLBACK_ANGLE;
    }

    let angle = dy.atan2(dx) * 180.0 / PI + 90.0;
    // a hair left of up gives about -1e-14, which plus 360 rounds to 360
    normalize(if angle < 0.0 { angle + FULL_TURN } else { angle })
}

/// Wraps any angle into `[0, 360)`.
pub fn normalize(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

use crate::angle::{FULL_TURN, Point};
use crate::error::InvalidConfig;

/// Fixed ring geometry for one menu instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingConfig {
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    slice_count: usize,
}

impl RingConfig {
    pub fn new(
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        slice_count: usize,
    ) -> Result<Self, InvalidConfig> {
        if slice_count < 1 {
            return Err(InvalidConfig::NoSlices);
        }
        if !center.is_finite() || !inner_radius.is_finite() || !outer_radius.is_finite() {
            return Err(InvalidConfig::NonFinite);
        }
        if inner_radius < 0.0 || outer_radius < 0.0 {
            return Err(InvalidConfig::NegativeRadius {
                inner: inner_radius,
                outer: outer_radius,
            });
        }
        if inner_radius >= outer_radius {
            return Err(InvalidConfig::InvertedRadii {
                inner: inner_radius,
                outer: outer_radius,
            });
        }

        Ok(Self {
            center,
            inner_radius,
            outer_radius,
            slice_count,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn slice_count(&self) -> usize {
        self.slice_count
    }

    pub fn slice_angle(&self) -> f64 {
        FULL_TURN / self.slice_count as f64
    }

    /// Radius halfway through the band, where sector content is anchored.
    pub fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> Point {
        Point::new(200.0, 200.0)
    }

    #[test]
    fn accepts_valid_ring() {
        let ring = RingConfig::new(center(), 120.0, 200.0, 5).unwrap();
        assert_eq!(ring.slice_angle(), 72.0);
        assert_eq!(ring.mid_radius(), 160.0);
    }

    #[test]
    fn zero_inner_radius_is_a_pie() {
        assert!(RingConfig::new(center(), 0.0, 10.0, 3).is_ok());
    }

    #[test]
    fn rejects_invalid_rings() {
        let cases = vec![
            ((120.0, 200.0, 0), InvalidConfig::NoSlices),
            (
                (200.0, 200.0, 4),
                InvalidConfig::InvertedRadii {
                    inner: 200.0,
                    outer: 200.0,
                },
            ),
            (
                (250.0, 200.0, 4),
                InvalidConfig::InvertedRadii {
                    inner: 250.0,
                    outer: 200.0,
                },
            ),
            (
                (-1.0, 200.0, 4),
                InvalidConfig::NegativeRadius {
                    inner: -1.0,
                    outer: 200.0,
                },
            ),
            ((f64::NAN, 200.0, 4), InvalidConfig::NonFinite),
        ];

        for ((inner, outer, count), expected) in cases {
            assert_eq!(
                RingConfig::new(center(), inner, outer, count),
                Err(expected)
            );
        }
    }

    #[test]
    fn rejects_non_finite_center() {
        let err = RingConfig::new(Point::new(f64::INFINITY, 0.0), 1.0, 2.0, 1).unwrap_err();
        assert_eq!(err, InvalidConfig::NonFinite);
    }
}

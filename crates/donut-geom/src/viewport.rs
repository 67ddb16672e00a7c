//! Device-to-ring coordinate conversion.
//!
//! The ring lives in a square logical space (`0..size` on both axes). Hosts
//! render that square into some on-screen box and must map pointer
//! positions back before tracking; a wrong factor desyncs the follower.

use crate::angle::Point;

/// On-screen box of the surface the ring is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Box at the origin, as seen by a widget's own event coordinates.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Independent horizontal and vertical scaling, as when the logical
    /// square is stretched over the whole box.
    pub fn stretch(&self, client: Point, size: f64) -> Option<Point> {
        if self.is_degenerate() {
            return None;
        }
        let (x, y) = (client.x - self.left, client.y - self.top);
        Some(Point::new(x / self.width * size, y / self.height * size))
    }

    /// Uniform scale for a centered square fit inside the box.
    pub fn fit(&self, size: f64) -> Option<Fit> {
        if self.is_degenerate() || size <= 0.0 {
            return None;
        }
        let scale = self.width.min(self.height) / size;
        let offset = Point::new(
            self.left + (self.width - size * scale) / 2.0,
            self.top + (self.height - size * scale) / 2.0,
        );
        Some(Fit { scale, offset })
    }
}

/// Logical square placed inside a viewport with aspect ratio preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub scale: f64,
    pub offset: Point,
}

impl Fit {
    pub fn to_ring(&self, device: Point) -> Point {
        Point::new(
            (device.x - self.offset.x) / self.scale,
            (device.y - self.offset.y) / self.scale,
        )
    }
}

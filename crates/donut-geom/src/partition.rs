use crate::angle::{self, Point, polar_point};
use crate::path::{Path, Sweep};
use crate::ring::RingConfig;

/// Vertical offset of the icon glyph above the anchor.
pub const ICON_OFFSET: f64 = 10.0;
/// Vertical offset of the label text below the anchor.
pub const LABEL_OFFSET: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Sector {
    pub fn of(ring: &RingConfig, index: usize) -> Self {
        let start_angle = index as f64 * ring.slice_angle();
        Self {
            index,
            start_angle,
            end_angle: start_angle + ring.slice_angle(),
        }
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Half-open: a boundary angle belongs to the sector that starts there.
    pub fn contains_angle(&self, degrees: f64) -> bool {
        let degrees = angle::normalize(degrees);
        degrees >= self.start_angle && degrees < self.end_angle
    }
}

/// Static geometry of one washer-wedge sector.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorGeometry {
    pub sector: Sector,
    pub inner_start: Point,
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_end: Point,
    pub anchor: Point,
    pub path: Path,
}

impl SectorGeometry {
    pub fn calculate(ring: &RingConfig, index: usize) -> Self {
        let sector = Sector::of(ring, index);
        let (center, inner, outer) = (ring.center(), ring.inner_radius(), ring.outer_radius());
        let (start, end) = (sector.start_angle, sector.end_angle);

        let inner_start = polar_point(center, inner, start);
        let outer_start = polar_point(center, outer, start);
        let outer_end = polar_point(center, outer, end);
        let inner_end = polar_point(center, inner, end);

        // outer edge sweeps forward, inner edge sweeps back to the start
        let path = Path::new()
            .move_to(inner_start)
            .line_to(outer_start)
            .arc(center, outer, start, end, Sweep::Clockwise)
            .line_to(inner_end)
            .arc(center, inner, end, start, Sweep::CounterClockwise)
            .close();

        Self {
            sector,
            inner_start,
            outer_start,
            outer_end,
            inner_end,
            anchor: polar_point(center, ring.mid_radius(), sector.mid_angle()),
            path,
        }
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            self.inner_start,
            self.outer_start,
            self.outer_end,
            self.inner_end,
        ]
    }

    pub fn icon_position(&self) -> Point {
        self.anchor.offset(0.0, -ICON_OFFSET)
    }

    pub fn label_position(&self) -> Point {
        self.anchor.offset(0.0, LABEL_OFFSET)
    }
}

/// All static sectors of a ring, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayout {
    ring: RingConfig,
    sectors: Vec<SectorGeometry>,
}

impl RingLayout {
    pub fn new(ring: RingConfig) -> Self {
        let sectors = (0..ring.slice_count())
            .map(|i| SectorGeometry::calculate(&ring, i))
            .collect();
        Self { ring, sectors }
    }

    pub fn ring(&self) -> &RingConfig {
        &self.ring
    }

    pub fn sectors(&self) -> &[SectorGeometry] {
        &self.sectors
    }

    pub fn get(&self, index: usize) -> Option<&SectorGeometry> {
        self.sectors.get(index)
    }

    /// Index of the static sector whose region contains `point`, if any.
    pub fn sector_at(&self, point: Point) -> Option<usize> {
        if !point.is_finite() {
            return None;
        }
        let dist = point.distance_to(self.ring.center());
        if dist < self.ring.inner_radius() || dist > self.ring.outer_radius() {
            return None;
        }

        let degrees = angle::pointer_angle(self.ring.center(), point);
        let hit = self
            .sectors
            .iter()
            .find(|g| g.sector.contains_angle(degrees))
            // the last end angle can round a hair below 360
            .or_else(|| self.sectors.last())?;
        Some(hit.sector.index)
    }
}

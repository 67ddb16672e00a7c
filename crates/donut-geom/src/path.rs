//! Surface-independent path commands.
//!
//! Arcs keep both their SVG endpoint form and their center form so the same
//! path can be written as SVG path data or replayed on a cairo context.

use crate::angle::{FULL_TURN, Point, polar_point};
use derive_more::Deref;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Clockwise,
    CounterClockwise,
}

impl Sweep {
    /// SVG `sweep-flag`; on a Y-down surface a positive-angle sweep is clockwise.
    pub fn flag(self) -> u8 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f64,
    /// Degrees, clockwise from up. Not normalized.
    pub start_angle: f64,
    pub end_angle: f64,
    pub sweep: Sweep,
    pub to: Point,
}

impl ArcSegment {
    pub fn span(&self) -> f64 {
        (self.end_angle - self.start_angle).abs()
    }

    pub fn large_arc(&self) -> bool {
        self.span() > FULL_TURN / 2.0
    }

    /// Angle of the arc at parameter `t` in `[0, 1]`, following the sweep.
    pub fn angle_at(&self, t: f64) -> f64 {
        self.start_angle + (self.end_angle - self.start_angle) * t
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Arc(ArcSegment),
    Close,
}

#[derive(Debug, Clone, PartialEq, Default, Deref)]
pub struct Path(Vec<PathCommand>);

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, to: Point) -> Self {
        self.0.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(mut self, to: Point) -> Self {
        self.0.push(PathCommand::LineTo(to));
        self
    }

    /// Arc around `center` from `start_angle` to `end_angle`; the end point is
    /// derived from the angles so the arc always lands on the circle.
    pub fn arc(
        mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        sweep: Sweep,
    ) -> Self {
        self.0.push(PathCommand::Arc(ArcSegment {
            center,
            radius,
            start_angle,
            end_angle,
            sweep,
            to: polar_point(center, radius, end_angle),
        }));
        self
    }

    pub fn close(mut self) -> Self {
        self.0.push(PathCommand::Close);
        self
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcSegment> {
        self.0.iter().filter_map(|cmd| match cmd {
            PathCommand::Arc(arc) => Some(arc),
            _ => None,
        })
    }
}

pub(crate) struct Coord(pub f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // round away float noise such as 1.2e-14 and never print "-0"
        let rounded = (self.0 * 1e6).round() / 1e6;
        let value = if rounded == 0.0 { 0.0 } else { rounded };
        write!(f, "{value}")
    }
}

fn write_arc(f: &mut fmt::Formatter<'_>, arc: &ArcSegment, to: Point, large: bool) -> fmt::Result {
    write!(
        f,
        "A {r} {r} 0 {large} {sweep} {x} {y}",
        r = Coord(arc.radius),
        large = u8::from(large),
        sweep = arc.sweep.flag(),
        x = Coord(to.x),
        y = Coord(to.y),
    )
}

/// SVG path data, e.g. `M 200 80 L 200 0 A 200 200 0 0 1 390.2 138.2 ...`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", Coord(p.x), Coord(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", Coord(p.x), Coord(p.y))?,
                PathCommand::Arc(arc) if arc.span() >= FULL_TURN => {
                    // identical endpoints make a single SVG arc vanish
                    let half = polar_point(arc.center, arc.radius, arc.angle_at(0.5));
                    write_arc(f, arc, half, false)?;
                    f.write_str(" ")?;
                    write_arc(f, arc, arc.to, false)?;
                }
                PathCommand::Arc(arc) => write_arc(f, arc, arc.to, arc.large_arc())?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::assert_close;

    const CENTER: Point = Point { x: 200.0, y: 200.0 };

    #[test]
    fn writes_svg_path_data() {
        let path = Path::new()
            .move_to(Point::new(200.0, 80.0))
            .line_to(Point::new(200.0, 0.0))
            .arc(CENTER, 200.0, 0.0, 90.0, Sweep::Clockwise)
            .close();

        assert_eq!(
            path.to_string(),
            "M 200 80 L 200 0 A 200 200 0 0 1 400 200 Z"
        );
    }

    #[test]
    fn counter_clockwise_arc_clears_sweep_flag() {
        let path = Path::new()
            .move_to(Point::new(300.0, 200.0))
            .arc(CENTER, 100.0, 90.0, 0.0, Sweep::CounterClockwise);

        assert_eq!(path.to_string(), "M 300 200 A 100 100 0 0 0 200 100");
    }

    #[test]
    fn large_arc_flag_follows_span() {
        let path = Path::new().arc(CENTER, 100.0, 0.0, 270.0, Sweep::Clockwise);
        assert!(path.to_string().starts_with("A 100 100 0 1 1"));
    }

    #[test]
    fn full_turn_is_split_in_two() {
        let path = Path::new()
            .move_to(Point::new(200.0, 100.0))
            .arc(CENTER, 100.0, 0.0, 360.0, Sweep::Clockwise);

        assert_eq!(
            path.to_string(),
            "M 200 100 A 100 100 0 0 1 200 300 A 100 100 0 0 1 200 100"
        );
    }

    #[test]
    fn arc_end_lands_on_circle() {
        let path = Path::new()
            .move_to(polar_point(CENTER, 50.0, -30.0))
            .arc(CENTER, 50.0, -30.0, 30.0, Sweep::Clockwise);

        let arc = path.arcs().next().unwrap();
        assert_close(arc.to.distance_to(CENTER), 50.0);
        assert_close(arc.angle_at(0.5), 0.0);
        assert!(!arc.large_arc());
    }
}

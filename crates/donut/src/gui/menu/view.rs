use super::model::State;
use super::{ICON_FONT, LABEL_FONT, RING_STROKE_WIDTH};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use donut_geom::angle::to_radians;
use donut_geom::svg::Style;
use donut_geom::viewport::Viewport;
use donut_geom::{MenuEntry, Path, PathCommand, Point, SectorGeometry, Sweep};
use palette::Srgba;
use std::f64::consts::PI;

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

/// Replays a geometry path on the cairo context. Angles in degrees
/// clockwise from up become cairo radians, where increasing angles also
/// run clockwise on screen.
fn trace(cr: &Context, path: &Path) {
    for cmd in path.iter() {
        match cmd {
            PathCommand::MoveTo(p) => cr.move_to(p.x, p.y),
            PathCommand::LineTo(p) => cr.line_to(p.x, p.y),
            PathCommand::Arc(arc) => {
                let (start, end) = (to_radians(arc.start_angle), to_radians(arc.end_angle));
                match arc.sweep {
                    Sweep::Clockwise => cr.arc(arc.center.x, arc.center.y, arc.radius, start, end),
                    Sweep::CounterClockwise => {
                        cr.arc_negative(arc.center.x, arc.center.y, arc.radius, start, end)
                    }
                }
            }
            PathCommand::Close => cr.close_path(),
        }
    }
}

struct SectorRenderer<'a> {
    geometry: &'a SectorGeometry,
    entry: &'a MenuEntry,
    style: &'a Style,
    hovered: bool,
}

impl<'a> SectorRenderer<'a> {
    fn new(
        geometry: &'a SectorGeometry,
        entry: &'a MenuEntry,
        style: &'a Style,
        hovered: bool,
    ) -> Self {
        Self {
            geometry,
            entry,
            style,
            hovered,
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_region(cr, colors)?;
        set_color(cr, colors.text);
        draw_text(
            cr,
            &self.entry.icon,
            ICON_FONT,
            self.style.icon_size,
            self.geometry.icon_position(),
        )?;
        draw_text(
            cr,
            &self.entry.label,
            LABEL_FONT,
            self.style.label_size,
            self.geometry.label_position(),
        )
    }

    fn draw_region(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_color(cr, if self.hovered { colors.hovered } else { colors.slice });
        trace(cr, &self.geometry.path);
        cr.fill()
    }
}

/// Centers text horizontally on `at.x` with its baseline on `at.y`, the way
/// SVG's `text-anchor="middle"` places it.
fn draw_text(
    cr: &Context,
    text: &str,
    font: &str,
    size: f64,
    at: Point,
) -> Result<(), cairo::Error> {
    cr.select_font_face(font, cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(size);
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(at.x - ext.x_advance() / 2.0, at.y);
        cr.show_text(text)?;
    }
    Ok(())
}

pub fn draw(
    cr: &Context,
    state: &State,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let Some(fit) = Viewport::sized(width, height).fit(state.size) else {
        return Ok(());
    };

    cr.save()?;
    cr.translate(fit.offset.x, fit.offset.y);
    cr.scale(fit.scale, fit.scale);

    draw_ring_outline(cr, state, colors)?;

    let active = state.menu.follower().active_index;
    for (i, (geometry, entry)) in state.menu.items().enumerate() {
        SectorRenderer::new(geometry, entry, &state.style, active == Some(i)).draw(cr, colors)?;
    }

    draw_follower(cr, state, colors)?;
    cr.restore()
}

fn draw_ring_outline(
    cr: &Context,
    state: &State,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let ring = state.menu.ring();
    set_color(cr, colors.ring);
    cr.set_line_width(RING_STROKE_WIDTH);
    cr.new_path();
    cr.arc(
        ring.center().x,
        ring.center().y,
        ring.outer_radius(),
        0.0,
        2.0 * PI,
    );
    cr.stroke()
}

fn draw_follower(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let follower = state.menu.follower();
    let Some(arc) = follower.arc.as_ref().filter(|_| follower.is_visible()) else {
        return Ok(());
    };

    set_color(cr, colors.follower);
    cr.set_line_width(colors.follower_width);
    cr.set_line_cap(cairo::LineCap::Round);
    cr.new_path();
    trace(cr, &arc.path);
    cr.stroke()
}

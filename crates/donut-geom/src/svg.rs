//! Standalone SVG rendering of a menu: background outline, follower arc,
//! and one group per sector holding its region, icon and label.

use crate::menu::Menu;
use crate::path::Coord;
use palette::Srgba;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Colors and sizes shared by the SVG writer and the desktop renderer.
///
/// Colors are `{ red, green, blue, alpha }` tables with channels in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub ring_stroke: Srgba<f64>,
    pub slice_fill: Srgba<f64>,
    pub text: Srgba<f64>,
    pub follower_stroke: Srgba<f64>,
    pub follower_width: f64,
    pub icon_size: f64,
    pub label_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            ring_stroke: Srgba::new(1.0, 1.0, 1.0, 0.2),
            slice_fill: Srgba::new(1.0, 1.0, 1.0, 0.1),
            text: Srgba::new(1.0, 1.0, 1.0, 0.9),
            follower_stroke: Srgba::new(1.0, 1.0, 1.0, 0.9),
            follower_width: 3.0,
            icon_size: 24.0,
            label_size: 14.0,
        }
    }
}

struct Rgba(Srgba<f64>);

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.0.into_components();
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "rgba({}, {}, {}, {})",
            channel(r),
            channel(g),
            channel(b),
            Coord(a.clamp(0.0, 1.0))
        )
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes the menu as an SVG document over a `size`x`size` view box.
pub fn render(menu: &Menu, size: f64, style: &Style) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_document(&mut out, menu, size, style)?;
    Ok(out)
}

fn write_document(out: &mut String, menu: &Menu, size: f64, style: &Style) -> fmt::Result {
    let ring = menu.ring();
    let center = ring.center();

    writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {s} {s}" width="100%" height="100%">"#,
        s = Coord(size)
    )?;
    writeln!(
        out,
        r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}"/>"#,
        Coord(center.x),
        Coord(center.y),
        Coord(ring.outer_radius()),
        Rgba(style.ring_stroke)
    )?;

    let follower = menu.follower();
    let d = follower
        .arc
        .as_ref()
        .map(|arc| format!(r#" d="{}""#, arc.path))
        .unwrap_or_default();
    writeln!(
        out,
        r#"  <path class="following-border"{d} fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" opacity="{}"/>"#,
        Rgba(style.follower_stroke),
        Coord(style.follower_width),
        u8::from(follower.is_visible())
    )?;

    for (geometry, entry) in menu.items() {
        let (icon, label) = (geometry.icon_position(), geometry.label_position());
        writeln!(out, "  <g>")?;
        writeln!(
            out,
            r#"    <path class="menu-slice" d="{}" fill="{}" cursor="pointer"/>"#,
            geometry.path,
            Rgba(style.slice_fill)
        )?;
        writeln!(
            out,
            r#"    <text class="menu-icon" x="{}" y="{}" text-anchor="middle" font-size="{}" fill="{}" pointer-events="none">{}</text>"#,
            Coord(icon.x),
            Coord(icon.y),
            Coord(style.icon_size),
            Rgba(style.text),
            escape(&entry.icon)
        )?;
        writeln!(
            out,
            r#"    <text class="menu-label" x="{}" y="{}" text-anchor="middle" font-size="{}" fill="{}" pointer-events="none">{}</text>"#,
            Coord(label.x),
            Coord(label.y),
            Coord(style.label_size),
            Rgba(style.text),
            escape(&entry.label)
        )?;
        writeln!(out, "  </g>")?;
    }

    writeln!(out, "</svg>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Point;
    use crate::menu::{CLASSIC_SIZE, MenuEntry, default_entries};

    #[test]
    fn renders_classic_menu() {
        let menu = Menu::classic(default_entries()).unwrap();
        let svg = render(&menu, CLASSIC_SIZE, &Style::default()).unwrap();

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 400""#));
        assert!(svg.contains(
            r#"<circle cx="200" cy="200" r="200" fill="none" stroke="rgba(255, 255, 255, 0.2)"/>"#
        ));
        assert_eq!(svg.matches(r#"class="menu-slice""#).count(), 5);
        assert_eq!(svg.matches("<g>").count(), 5);
        assert!(svg.contains(">Projects</text>"));
        assert!(svg.contains(">🎯</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn hidden_follower_has_no_path_yet() {
        let menu = Menu::classic(default_entries()).unwrap();
        let svg = render(&menu, CLASSIC_SIZE, &Style::default()).unwrap();
        assert!(svg.contains(r#"<path class="following-border" fill="none""#));
        assert!(svg.contains(r#"opacity="0"/>"#));
    }

    #[test]
    fn active_follower_is_drawn() {
        let mut menu = Menu::classic(default_entries()).unwrap();
        menu.pointer_moved(Point::new(200.0, 40.0));
        let svg = render(&menu, CLASSIC_SIZE, &Style::default()).unwrap();

        let arc = menu.follower().arc.clone().unwrap();
        assert!(svg.contains(&format!(r#"class="following-border" d="{}""#, arc.path)));
        assert!(svg.contains(r#"opacity="1"/>"#));
    }

    #[test]
    fn text_is_escaped() {
        let entries = vec![MenuEntry::new("Q&A <live>", "\"?\"")];
        let menu = Menu::classic(entries).unwrap();
        let svg = render(&menu, CLASSIC_SIZE, &Style::default()).unwrap();
        assert!(svg.contains(">Q&amp;A &lt;live&gt;</text>"));
        assert!(svg.contains(">&quot;?&quot;</text>"));
    }

    #[test]
    fn style_drives_sizes_and_colors() {
        let style = Style {
            follower_stroke: Srgba::new(1.0, 0.0, 0.0, 1.0),
            follower_width: 5.0,
            icon_size: 30.0,
            ..Style::default()
        };
        let menu = Menu::classic(default_entries()).unwrap();
        let svg = render(&menu, CLASSIC_SIZE, &style).unwrap();
        assert!(svg.contains(r#"stroke="rgba(255, 0, 0, 1)" stroke-width="5""#));
        assert_eq!(svg.matches(r#"font-size="30""#).count(), 5);
    }

    #[test]
    fn partial_style_keeps_defaults() {
        let style: Style = serde_json::from_str(
            r#"{ "label_size": 18.0, "text": { "red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 0.5 } }"#,
        )
        .unwrap();
        assert_eq!(style.label_size, 18.0);
        assert_eq!(style.text, Srgba::new(0.0, 0.0, 0.0, 0.5));
        assert_eq!(style.icon_size, Style::default().icon_size);
        assert_eq!(style.ring_stroke, Style::default().ring_stroke);
    }
}

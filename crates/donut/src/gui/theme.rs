use donut_geom::svg::Style;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub ring: Srgba<f64>,
    pub slice: Srgba<f64>,
    pub hovered: Srgba<f64>,
    pub text: Srgba<f64>,
    pub follower: Srgba<f64>,
    pub follower_width: f64,
}

impl ThemeColors {
    /// Configured colors win; the theme only supplies the hover tint, which
    /// the config has no key for.
    pub fn from_context(context: &gtk::StyleContext, style: &Style) -> Self {
        Self {
            ring: style.ring_stroke,
            slice: style.slice_fill,
            hovered: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.4, 0.4, 0.8, 0.35),
                Some(0.35),
            ),
            text: style.text,
            follower: style.follower_stroke,
            follower_width: style.follower_width,
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.donut-window {
    background-color: #1b1d2a;
}
.donut-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

pub mod model;
pub mod view;

pub use model::State;
pub use view::draw;

pub const RING_STROKE_WIDTH: f64 = 1.0;
pub const ICON_FONT: &str = "Noto Color Emoji";
pub const LABEL_FONT: &str = "Sans";

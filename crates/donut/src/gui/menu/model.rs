use crate::config::{Config, ConfigError};
use donut_geom::svg::Style;
use donut_geom::viewport::Viewport;
use donut_geom::{Menu, Point};

/// Menu plus the logical size it is laid out in; the window maps pointer
/// positions into that space before handing them to the menu.
pub struct State {
    pub menu: Menu,
    pub size: f64,
    pub style: Style,
}

impl State {
    pub fn new(menu: Menu, size: f64, style: Style) -> Self {
        Self { menu, size, style }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.validate()?, config.size, config.style))
    }

    /// Returns whether anything visible changed.
    pub fn update_cursor(&mut self, cursor: Point, viewport: Viewport) -> bool {
        let Some(fit) = viewport.fit(self.size) else {
            return false;
        };

        let before = self.menu.follower().active_index;
        let effects = self.menu.pointer_moved(fit.to_ring(cursor));
        self.log_hover_change(before);

        !effects.is_empty()
    }

    pub fn clear_hover(&mut self) -> bool {
        let before = self.menu.follower().active_index;
        let effects = self.menu.pointer_left();
        self.log_hover_change(before);
        !effects.is_empty()
    }

    fn log_hover_change(&self, before: Option<usize>) {
        let after = self.menu.follower().active_index;
        if before != after {
            match self.menu.hovered_entry() {
                Some(entry) => log::debug!("Hovering '{}'", entry.label),
                None => log::debug!("Hover cleared"),
            }
        }
    }

    pub fn reload(&mut self, config: &Config) -> Result<(), ConfigError> {
        *self = Self::from_config(config)?;
        Ok(())
    }
}

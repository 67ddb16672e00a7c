use crate::angle::Point;
use crate::error::InvalidConfig;
use crate::partition::{RingLayout, SectorGeometry};
use crate::ring::RingConfig;
use crate::tracker::{Effect, FollowerState, PointerEvent, PointerTracker};
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Logical side length of the classic menu's square drawing surface.
pub const CLASSIC_SIZE: f64 = 400.0;
pub const CLASSIC_INNER_RADIUS: f64 = 120.0;
pub const CLASSIC_OUTER_RADIUS: f64 = 200.0;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Label(String);

crate::impl_string_newtype!(Label);

/// Icon glyph: an emoji or a short string.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Glyph(String);

crate::impl_string_newtype!(Glyph);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: Label,
    pub icon: Glyph,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: Label::new(label),
            icon: Glyph::new(icon),
        }
    }
}

pub fn default_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("Projects", "🎯"),
        MenuEntry::new("About", "👤"),
        MenuEntry::new("Skills", "⚡"),
        MenuEntry::new("Contact", "✉️"),
        MenuEntry::new("Blog", "📝"),
    ]
}

/// One menu instance: fixed ring and entries, precomputed sectors, and the
/// follower state driven by pointer events.
#[derive(Debug, Clone)]
pub struct Menu {
    entries: Vec<MenuEntry>,
    layout: RingLayout,
    tracker: PointerTracker,
}

impl Menu {
    pub fn new(ring: RingConfig, entries: Vec<MenuEntry>) -> Result<Self, InvalidConfig> {
        if entries.len() != ring.slice_count() {
            return Err(InvalidConfig::EntryCount {
                expected: ring.slice_count(),
                actual: entries.len(),
            });
        }

        Ok(Self {
            entries,
            layout: RingLayout::new(ring),
            tracker: PointerTracker::new(ring),
        })
    }

    /// One slice per entry.
    pub fn with_entries(
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        entries: Vec<MenuEntry>,
    ) -> Result<Self, InvalidConfig> {
        let ring = RingConfig::new(center, inner_radius, outer_radius, entries.len())?;
        Self::new(ring, entries)
    }

    /// The 400x400 layout: centered ring, radii 120 and 200.
    pub fn classic(entries: Vec<MenuEntry>) -> Result<Self, InvalidConfig> {
        let half = CLASSIC_SIZE / 2.0;
        Self::with_entries(
            Point::new(half, half),
            CLASSIC_INNER_RADIUS,
            CLASSIC_OUTER_RADIUS,
            entries,
        )
    }

    pub fn ring(&self) -> &RingConfig {
        self.layout.ring()
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn layout(&self) -> &RingLayout {
        &self.layout
    }

    pub fn follower(&self) -> &FollowerState {
        self.tracker.state()
    }

    /// Sectors paired with the entries they display.
    pub fn items(&self) -> impl Iterator<Item = (&SectorGeometry, &MenuEntry)> {
        self.layout.sectors().iter().zip(&self.entries)
    }

    pub fn hovered_entry(&self) -> Option<&MenuEntry> {
        self.follower()
            .active_index
            .and_then(|i| self.entries.get(i))
    }

    pub fn handle(&mut self, event: PointerEvent) -> Vec<Effect> {
        self.tracker.handle(event)
    }

    /// For hosts without per-sector pointer events: derives enter/leave from
    /// hit testing, then forwards the move.
    pub fn pointer_moved(&mut self, pointer: Point) -> Vec<Effect> {
        let current = self.follower().active_index;
        let hit = self.layout.sector_at(pointer);
        let mut effects = Vec::new();

        if hit != current {
            if let Some(old) = current {
                effects.extend(self.handle(PointerEvent::Leave(old)));
            }
            if let Some(new) = hit {
                effects.extend(self.handle(PointerEvent::Enter(new)));
            }
        }
        effects.extend(self.handle(PointerEvent::Move(pointer)));
        effects
    }

    pub fn pointer_left(&mut self) -> Vec<Effect> {
        self.handle(PointerEvent::ContainerLeave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Menu {
        Menu::classic(default_entries()).unwrap()
    }

    #[test]
    fn classic_menu_has_five_slices() {
        let menu = classic();
        assert_eq!(menu.ring().slice_count(), 5);
        assert_eq!(menu.ring().slice_angle(), 72.0);
        assert_eq!(menu.items().count(), 5);
        assert_eq!(menu.entries()[0].label.as_str(), "Projects");
    }

    #[test]
    fn entry_count_must_match_slices() {
        let ring = RingConfig::new(Point::new(0.0, 0.0), 1.0, 2.0, 3).unwrap();
        let err = Menu::new(ring, default_entries()).unwrap_err();
        assert_eq!(
            err,
            InvalidConfig::EntryCount {
                expected: 3,
                actual: 5
            }
        );
    }

    #[test]
    fn empty_menu_is_rejected() {
        assert_eq!(
            Menu::classic(Vec::new()).unwrap_err(),
            InvalidConfig::NoSlices
        );
    }

    #[test]
    fn entering_a_sector_tracks_immediately() {
        let mut menu = classic();
        let effects = menu.pointer_moved(Point::new(200.0, 40.0));

        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], Effect::ShowFollower);
        assert!(matches!(effects[1], Effect::SetFollowerPath(_)));
        assert_eq!(menu.hovered_entry().map(|e| e.label.as_str()), Some("Projects"));
    }

    #[test]
    fn moving_between_sectors_switches_active() {
        let mut menu = classic();
        menu.pointer_moved(Point::new(200.0, 40.0));
        let effects = menu.pointer_moved(Point::new(360.0, 200.0));

        assert_eq!(effects[0], Effect::HideFollower);
        assert_eq!(effects[1], Effect::ShowFollower);
        assert_eq!(menu.follower().active_index, Some(1));
    }

    #[test]
    fn moving_into_the_hole_hides() {
        let mut menu = classic();
        menu.pointer_moved(Point::new(200.0, 40.0));
        let effects = menu.pointer_moved(Point::new(200.0, 190.0));

        assert_eq!(effects, vec![Effect::HideFollower]);
        assert!(!menu.follower().is_visible());
        assert_eq!(menu.hovered_entry(), None);
    }

    #[test]
    fn leaving_the_surface_hides() {
        let mut menu = classic();
        menu.pointer_moved(Point::new(200.0, 40.0));
        assert_eq!(menu.pointer_left(), vec![Effect::HideFollower]);
        assert!(menu.pointer_left().is_empty());
    }

    #[test]
    fn entries_deserialize_from_json() {
        let entry: MenuEntry =
            serde_json::from_str(r#"{"label": "Docs", "icon": "📚"}"#).unwrap();
        assert_eq!(entry, MenuEntry::new("Docs", "📚"));
    }
}

//! Geometry engine for a radial "donut" menu.
//!
//! [`partition`] lays out N equal annular sectors once; [`tracker`] turns
//! pointer positions into a floating highlight arc one slice wide. Both use
//! the angle convention in [`angle`]: 0° is up and angles grow clockwise.

pub mod angle;
pub mod error;
pub mod macros;
pub mod menu;
pub mod partition;
pub mod path;
pub mod ring;
pub mod svg;
pub mod tracker;
pub mod viewport;

pub use angle::Point;
pub use error::InvalidConfig;
pub use menu::{Menu, MenuEntry};
pub use partition::{RingLayout, Sector, SectorGeometry};
pub use path::{ArcSegment, Path, PathCommand, Sweep};
pub use ring::RingConfig;
pub use tracker::{Effect, FollowerArc, FollowerState, PointerEvent, PointerTracker};

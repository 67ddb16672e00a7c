//! Pointer tracking for the follower highlight.
//!
//! State transitions are pure: [`FollowerState::apply`] takes an event and
//! returns the next state plus the visual effects a host must perform.
//! [`PointerTracker`] holds the state for hosts that prefer mutation.

use crate::angle::{self, Point, polar_point};
use crate::path::{Path, Sweep};
use crate::ring::RingConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered static sector `i`.
    Enter(usize),
    /// Pointer left static sector `i`.
    Leave(usize),
    /// Pointer moved, in ring coordinates.
    Move(Point),
    /// Pointer left the whole menu surface.
    ContainerLeave,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowFollower,
    HideFollower,
    SetFollowerPath(Path),
}

/// The floating highlight: one outer arc, `slice_angle` wide, centered on
/// the pointer. Start and end are left unnormalized and may fall outside
/// `[0, 360)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowerArc {
    pub angle: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: Path,
}

impl FollowerArc {
    pub fn calculate(ring: &RingConfig, pointer: Point) -> Self {
        let angle = angle::pointer_angle(ring.center(), pointer);
        let half = ring.slice_angle() / 2.0;
        let (start_angle, end_angle) = (angle - half, angle + half);

        let path = Path::new()
            .move_to(polar_point(ring.center(), ring.outer_radius(), start_angle))
            .arc(
                ring.center(),
                ring.outer_radius(),
                start_angle,
                end_angle,
                Sweep::Clockwise,
            );

        Self {
            angle,
            start_angle,
            end_angle,
            path,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FollowerState {
    pub active_index: Option<usize>,
    pub current_angle: Option<f64>,
    /// Last emitted arc. Kept while hidden, the way a hidden element keeps
    /// its path data, so a re-entry shows it until the first move.
    pub arc: Option<FollowerArc>,
}

impl FollowerState {
    pub fn is_visible(&self) -> bool {
        self.active_index.is_some()
    }

    pub fn apply(mut self, event: PointerEvent, ring: &RingConfig) -> (Self, Vec<Effect>) {
        let effects = match event {
            PointerEvent::Enter(index) => self.activate(index),
            PointerEvent::Leave(index) if self.active_index == Some(index) => self.deactivate(),
            PointerEvent::Leave(_) => Vec::new(),
            PointerEvent::ContainerLeave => self.deactivate(),
            PointerEvent::Move(pointer) => self.track_pointer(ring, pointer),
        };
        (self, effects)
    }

    fn activate(&mut self, index: usize) -> Vec<Effect> {
        self.active_index = Some(index);
        vec![Effect::ShowFollower]
    }

    fn deactivate(&mut self) -> Vec<Effect> {
        let was_active = self.active_index.take().is_some();
        self.current_angle = None;
        if was_active {
            vec![Effect::HideFollower]
        } else {
            Vec::new()
        }
    }

    fn track_pointer(&mut self, ring: &RingConfig, pointer: Point) -> Vec<Effect> {
        if self.active_index.is_none() {
            return Vec::new();
        }
        let arc = FollowerArc::calculate(ring, pointer);
        self.current_angle = Some(arc.angle);
        let effect = Effect::SetFollowerPath(arc.path.clone());
        self.arc = Some(arc);
        vec![effect]
    }
}

#[derive(Debug, Clone)]
pub struct PointerTracker {
    ring: RingConfig,
    state: FollowerState,
}

impl PointerTracker {
    pub fn new(ring: RingConfig) -> Self {
        Self {
            ring,
            state: FollowerState::default(),
        }
    }

    pub fn ring(&self) -> &RingConfig {
        &self.ring
    }

    pub fn state(&self) -> &FollowerState {
        &self.state
    }

    pub fn handle(&mut self, event: PointerEvent) -> Vec<Effect> {
        let (state, effects) = std::mem::take(&mut self.state).apply(event, &self.ring);
        self.state = state;
        effects
    }

    pub fn activate(&mut self, index: usize) -> Vec<Effect> {
        self.handle(PointerEvent::Enter(index))
    }

    /// Hides the follower regardless of which sector was active.
    pub fn deactivate(&mut self) -> Vec<Effect> {
        self.handle(PointerEvent::ContainerLeave)
    }

    pub fn track_pointer(&mut self, x: f64, y: f64) -> Vec<Effect> {
        self.handle(PointerEvent::Move(Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{FULL_TURN, assert_close};

    fn tracker() -> PointerTracker {
        let ring = RingConfig::new(Point::new(200.0, 200.0), 120.0, 200.0, 5).unwrap();
        PointerTracker::new(ring)
    }

    #[test]
    fn activation_shows_without_geometry() {
        let mut t = tracker();
        assert_eq!(t.activate(2), vec![Effect::ShowFollower]);
        assert_eq!(t.state().active_index, Some(2));
        assert!(t.state().is_visible());
        assert_eq!(t.state().arc, None);
        assert_eq!(t.state().current_angle, None);
    }

    #[test]
    fn pointer_straight_up() {
        let mut t = tracker();
        t.activate(0);
        let effects = t.track_pointer(200.0, 0.0);

        let arc = t.state().arc.clone().unwrap();
        assert_close(arc.angle, 0.0);
        assert_close(arc.start_angle, -36.0);
        assert_close(arc.end_angle, 36.0);
        assert_eq!(t.state().current_angle, Some(arc.angle));
        assert_eq!(effects, vec![Effect::SetFollowerPath(arc.path.clone())]);

        // single clockwise outer arc, no sides
        assert_eq!(arc.path.len(), 2);
        let outer = arc.path.arcs().next().unwrap();
        assert_eq!(outer.sweep, Sweep::Clockwise);
        assert_eq!(outer.radius, 200.0);
        assert_close(outer.to.x, 200.0 + 200.0 * 36f64.to_radians().sin());
        assert_close(outer.to.y, 200.0 - 200.0 * 36f64.to_radians().cos());
    }

    #[test]
    fn tracking_is_idempotent() {
        let mut t = tracker();
        t.activate(1);
        let first = t.track_pointer(321.0, 87.5);
        let state = t.state().clone();
        let second = t.track_pointer(321.0, 87.5);
        assert_eq!(first, second);
        assert_eq!(&state, t.state());
    }

    #[test]
    fn inactive_tracking_is_a_no_op() {
        let mut t = tracker();
        t.activate(0);
        t.track_pointer(200.0, 0.0);
        let before = t.state().arc.clone();

        assert_eq!(t.deactivate(), vec![Effect::HideFollower]);
        assert!(t.track_pointer(400.0, 200.0).is_empty());
        assert!(!t.state().is_visible());
        assert_eq!(t.state().arc, before);
    }

    #[test]
    fn deactivate_is_idempotent() {
        let mut t = tracker();
        t.activate(3);
        t.deactivate();
        let state = t.state().clone();
        assert!(t.deactivate().is_empty());
        assert_eq!(&state, t.state());
    }

    #[test]
    fn leave_only_clears_the_active_sector() {
        let ring = *tracker().ring();
        let state = FollowerState::default();

        let (state, _) = state.apply(PointerEvent::Enter(2), &ring);
        let (state, effects) = state.apply(PointerEvent::Leave(1), &ring);
        assert!(effects.is_empty());
        assert_eq!(state.active_index, Some(2));

        let (state, effects) = state.apply(PointerEvent::Leave(2), &ring);
        assert_eq!(effects, vec![Effect::HideFollower]);
        assert_eq!(state.active_index, None);
    }

    #[test]
    fn pointer_outside_ring_still_tracks() {
        let mut t = tracker();
        t.activate(0);
        t.track_pointer(5000.0, 200.0);
        assert_close(t.state().current_angle.unwrap(), 90.0);
    }

    #[test]
    fn pointer_on_center_uses_fallback() {
        let mut t = tracker();
        t.activate(0);
        t.track_pointer(200.0, 200.0);
        assert_eq!(t.state().current_angle, Some(angle::FALLBACK_ANGLE));
    }

    #[test]
    fn follower_is_always_one_slice_wide() {
        let mut t = tracker();
        t.activate(0);
        for step in 0..36 {
            let p = polar_point(Point::new(200.0, 200.0), 160.0, step as f64 * 10.0 + 3.0);
            t.track_pointer(p.x, p.y);
            let arc = t.state().arc.as_ref().unwrap();
            assert_close(arc.end_angle - arc.start_angle, 72.0);
            assert_close((arc.start_angle + arc.end_angle) / 2.0, arc.angle);
        }
    }

    #[test]
    fn continuous_motion_only_jumps_at_wraparound() {
        let mut t = tracker();
        t.activate(2);

        let center = Point::new(200.0, 200.0);
        let mut previous: Option<f64> = None;
        let mut wraps = 0;
        for step in 0..=720 {
            // two full laps starting from sector 2
            let p = polar_point(center, 170.0, 150.0 + step as f64);
            t.track_pointer(p.x, p.y);
            let angle = t.state().current_angle.unwrap();
            assert!((0.0..FULL_TURN).contains(&angle));
            if let Some(prev) = previous {
                let delta = angle - prev;
                if delta < -180.0 {
                    wraps += 1;
                    assert_close(delta + FULL_TURN, 1.0);
                } else {
                    assert!((delta - 1.0).abs() < 1e-6, "jump of {delta} at step {step}");
                }
            }
            previous = Some(angle);
        }
        assert_eq!(wraps, 2);
    }
}

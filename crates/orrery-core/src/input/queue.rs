//! Input events the simulation understands. The delivery mechanism
//! (host event listeners, window callbacks) is a collaborator concern;
//! keyboard shortcuts arrive already mapped to intents.

use glam::Vec2;

use crate::ephemeris::Date;

/// A tap must end within this many milliseconds of its start.
pub const TAP_MAX_DURATION_MS: f64 = 300.0;
/// ...and within this normalized-coordinate distance of its start.
pub const TAP_MAX_TRAVEL: f32 = 0.04;

/// User intents, decoupled from any particular control wiring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    TogglePause,
    SpeedUp,
    SlowDown,
    TimeForward,
    TimeReverse,
    /// Unfocus button, Escape key, or info-panel close.
    Unfocus,
    SetDate(Date),
    /// Viewport resize: new aspect ratio and minimap canvas size.
    Resize { aspect: f32, minimap_size: f32 },
    ToggleLabels(bool),
    ToggleOrbits(bool),
    ToggleEffects(bool),
    ToggleBelts(bool),
    ToggleMusic,
    /// Audio collaborator callbacks (playback is fire-and-forget).
    AudioStarted,
    AudioDenied,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at normalized device coordinates.
    PointerDown { ndc: Vec2, time_ms: f64 },
    /// Pointer released at normalized device coordinates.
    PointerUp { ndc: Vec2, time_ms: f64 },
    Intent(Intent),
}

/// Queue of pending input events; the collaborator writes, the frame
/// loop drains.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn push_intent(&mut self, intent: Intent) {
        self.events.push(InputEvent::Intent(intent));
    }

    /// Drain all pending events, clearing the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Classifies pointer gestures: a quick, short press is a tap (pick),
/// anything longer or farther is a drag (camera control, ignored here).
#[derive(Debug, Default)]
pub struct TapTracker {
    down: Option<(Vec2, f64)>,
}

impl TapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_down(&mut self, ndc: Vec2, time_ms: f64) {
        self.down = Some((ndc, time_ms));
    }

    /// Returns the pick coordinate if the gesture qualifies as a tap.
    pub fn on_up(&mut self, ndc: Vec2, time_ms: f64) -> Option<Vec2> {
        let (start, start_ms) = self.down.take()?;
        let quick = time_ms - start_ms < TAP_MAX_DURATION_MS;
        let short = ndc.distance(start) < TAP_MAX_TRAVEL;
        (quick && short).then_some(ndc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push_intent(Intent::TogglePause);
        q.push(InputEvent::PointerDown { ndc: Vec2::ZERO, time_ms: 0.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn quick_still_press_is_a_tap() {
        let mut taps = TapTracker::new();
        taps.on_down(Vec2::new(0.1, 0.2), 1000.0);
        let pick = taps.on_up(Vec2::new(0.11, 0.2), 1100.0);
        assert!(pick.is_some());
    }

    #[test]
    fn long_press_is_a_drag() {
        let mut taps = TapTracker::new();
        taps.on_down(Vec2::ZERO, 1000.0);
        assert!(taps.on_up(Vec2::ZERO, 1500.0).is_none());
    }

    #[test]
    fn travelled_press_is_a_drag() {
        let mut taps = TapTracker::new();
        taps.on_down(Vec2::ZERO, 1000.0);
        assert!(taps.on_up(Vec2::new(0.5, 0.0), 1050.0).is_none());
    }

    #[test]
    fn up_without_down_is_ignored() {
        let mut taps = TapTracker::new();
        assert!(taps.on_up(Vec2::ZERO, 10.0).is_none());
    }
}

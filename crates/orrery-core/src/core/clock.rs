//! Simulation clock: signed, unbounded time accumulator with a fixed
//! speed ladder, direction flip, and pause.
//!
//! Orbital angles are resampled from `time()` every frame, so the
//! accumulator is the single source of truth for orbital position.

/// Fixed ascending speed magnitudes (multiples of real time).
pub const SPEED_STEPS: [f64; 7] = [0.1, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0];

/// Ladder index for 1.0x, the startup speed.
pub const DEFAULT_SPEED_INDEX: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeDirection {
    Forward,
    Reverse,
}

#[derive(Debug, Clone)]
pub struct SimulationClock {
    /// Accumulated simulation time in sim units. Signed and unbounded.
    accumulated: f64,
    speed_index: usize,
    direction: TimeDirection,
    paused: bool,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            accumulated: 0.0,
            speed_index: DEFAULT_SPEED_INDEX,
            direction: TimeDirection::Forward,
            paused: false,
        }
    }

    /// Current accumulated simulation time.
    pub fn time(&self) -> f64 {
        self.accumulated
    }

    /// Signed rate applied to real-time deltas: 0 while paused,
    /// otherwise ladder magnitude with the direction sign.
    pub fn effective_rate(&self) -> f64 {
        if self.paused {
            return 0.0;
        }
        let magnitude = SPEED_STEPS[self.speed_index];
        match self.direction {
            TimeDirection::Forward => magnitude,
            TimeDirection::Reverse => -magnitude,
        }
    }

    /// Advance by a wall-clock delta in seconds. No-op while paused.
    pub fn advance(&mut self, real_dt: f64) {
        if !self.paused {
            self.accumulated += real_dt * self.effective_rate();
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip future advances without touching already-accumulated time.
    pub fn set_direction(&mut self, direction: TimeDirection) {
        self.direction = direction;
    }

    pub fn direction(&self) -> TimeDirection {
        self.direction
    }

    /// Walk the speed ladder by `delta` steps, clamped at both ends.
    /// Stepping past an end is a no-op, not an error.
    pub fn step_speed(&mut self, delta: i32) {
        let idx = self.speed_index as i64 + delta as i64;
        self.speed_index = idx.clamp(0, SPEED_STEPS.len() as i64 - 1) as usize;
    }

    /// Unsigned ladder magnitude, for the UI speed readout.
    pub fn speed_magnitude(&self) -> f64 {
        SPEED_STEPS[self.speed_index]
    }

    /// Signed speed for display ("-2x" while reversed).
    pub fn signed_speed(&self) -> f64 {
        match self.direction {
            TimeDirection::Forward => self.speed_magnitude(),
            TimeDirection::Reverse => -self.speed_magnitude(),
        }
    }

    /// Zero the accumulator. Used by date changes so the displayed date
    /// equals the selected date at the moment of the change.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_scales_by_rate() {
        let mut clock = SimulationClock::new();
        clock.advance(2.0); // 1.0x forward
        assert!((clock.time() - 2.0).abs() < 1e-12);
        clock.step_speed(1); // 2.0x
        clock.advance(1.0);
        assert!((clock.time() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn pause_freezes_accumulator() {
        let mut clock = SimulationClock::new();
        clock.advance(1.0);
        clock.toggle_pause();
        clock.advance(100.0);
        assert!((clock.time() - 1.0).abs() < 1e-12);
        assert_eq!(clock.effective_rate(), 0.0);
    }

    #[test]
    fn reverse_then_advance_is_symmetric() {
        let mut forward = SimulationClock::new();
        let mut reverse = SimulationClock::new();
        forward.advance(3.0);
        reverse.set_direction(TimeDirection::Reverse);
        reverse.advance(3.0);
        assert!((forward.time() + reverse.time()).abs() < 1e-12);
    }

    #[test]
    fn direction_flip_preserves_magnitude() {
        let mut clock = SimulationClock::new();
        clock.step_speed(2); // 4.0x
        clock.set_direction(TimeDirection::Reverse);
        assert!((clock.speed_magnitude() - 4.0).abs() < 1e-12);
        assert!((clock.signed_speed() + 4.0).abs() < 1e-12);
    }

    #[test]
    fn speed_ladder_clamps_at_ends() {
        let mut clock = SimulationClock::new();
        clock.step_speed(-100);
        assert!((clock.speed_magnitude() - SPEED_STEPS[0]).abs() < 1e-12);
        clock.step_speed(-1); // no-op past the end
        assert!((clock.speed_magnitude() - SPEED_STEPS[0]).abs() < 1e-12);
        clock.step_speed(100);
        assert!((clock.speed_magnitude() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn reset_zeroes_time_only() {
        let mut clock = SimulationClock::new();
        clock.step_speed(1);
        clock.advance(5.0);
        clock.reset();
        assert_eq!(clock.time(), 0.0);
        assert!((clock.speed_magnitude() - 2.0).abs() < 1e-12);
    }
}

//! Tick gating: turns wall-clock time into discrete movement steps.

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic seconds. The origin is arbitrary.
pub trait TimeSource {
    fn now(&self) -> f64;
}

/// Hand-driven time for tests. Clones share the same reading.
#[derive(Clone, Default)]
pub struct ManualTime {
    now: Rc<Cell<f64>>,
}

impl ManualTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

pub struct GameClock<S: TimeSource> {
    source: S,
    last_tick: f64,
    floor: f64,
}

impl<S: TimeSource> GameClock<S> {
    /// `floor` bounds the tick rate from below so the interval stays finite.
    pub fn new(source: S, floor: f64) -> Self {
        let last_tick = source.now();
        Self { source, last_tick, floor }
    }

    /// Call once per frame. Returns true, and restarts the interval, once
    /// `1 / ticks_per_second` seconds have passed since the last tick.
    pub fn should_advance(&mut self, ticks_per_second: f64) -> bool {
        let now = self.source.now();
        if now - self.last_tick >= 1.0 / ticks_per_second.max(self.floor) {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.last_tick = self.source.now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let time = ManualTime::new();
        let mut clock = GameClock::new(time.clone(), 0.1);
        assert!(!clock.should_advance(4.0));
        time.advance(0.2);
        assert!(!clock.should_advance(4.0));
        time.advance(0.1);
        assert!(clock.should_advance(4.0));
        assert!(!clock.should_advance(4.0));
    }

    #[test]
    fn long_gap_yields_single_tick() {
        let time = ManualTime::new();
        let mut clock = GameClock::new(time.clone(), 0.1);
        time.advance(10.0);
        assert!(clock.should_advance(8.0));
        assert!(!clock.should_advance(8.0));
    }

    #[test]
    fn zero_rate_uses_floor() {
        let time = ManualTime::new();
        let mut clock = GameClock::new(time.clone(), 0.1);
        time.advance(9.9);
        assert!(!clock.should_advance(0.0));
        time.advance(0.2);
        assert!(clock.should_advance(0.0));
    }

    #[test]
    fn reset_restarts_the_interval() {
        let time = ManualTime::new();
        let mut clock = GameClock::new(time.clone(), 0.1);
        time.advance(0.9);
        clock.reset();
        time.advance(0.5);
        assert!(!clock.should_advance(1.0));
        time.advance(0.6);
        assert!(clock.should_advance(1.0));
    }
}

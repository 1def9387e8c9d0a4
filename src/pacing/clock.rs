use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Time source for the pacer's deadline bookkeeping.
///
/// Production code uses [`MonotonicClock`]; tests drive a [`ManualClock`] so
/// tick scenarios run without real time passing.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The system monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A hand-advanced clock. Cloning shares the underlying time, so a test can
/// keep one handle while the pacer owns the other.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_starts_frozen() {
        let clock = ManualClock::new();
        let before = clock.now();
        assert_eq!(before, clock.now());
    }

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new();
        let before = clock.now();
        clock.advance_ms(250);
        assert_eq!(clock.now() - before, Duration::from_millis(250));
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance_ms(100);
        assert_eq!(clock.now(), handle.now());
    }
}

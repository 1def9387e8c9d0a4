use std::time::{Duration, Instant};

use log::debug;

use super::clock::{Clock, MonotonicClock};
use super::config::PacerConfig;
use super::error::PacerError;
use super::event::{DisplayPayload, PacerEvent};
use super::focus::split_at_pivot;
use super::timing::tick_interval_ms;

/// Observable pacer state.
///
/// `Ready` and `Paused` differ only in cursor position; `Finished` is held
/// until the next `load`/`start`/`reset` so the display can offer a restart
/// affordance, with the cursor already back at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacerState {
    Idle,
    Ready,
    Paused,
    Running,
    Finished,
}

/// The pacing engine: converts a token list, a rate, and a chunk size into a
/// sequence of timed display events.
///
/// Scheduling is deadline-based against an injected [`Clock`]. The pacer
/// holds at most one pending deadline; `start` replaces any existing one, and
/// `pause`/`reset` clear it before returning, so no tick can fire after
/// either call. The caller drives time by invoking [`Pacer::poll`], using
/// [`Pacer::time_until_tick`] as its wait timeout.
pub struct Pacer<C: Clock = MonotonicClock> {
    tokens: Vec<String>,
    cursor: usize,
    running: bool,
    finished: bool,
    config: PacerConfig,
    next_tick_at: Option<Instant>,
    clock: C,
}

impl Pacer<MonotonicClock> {
    pub fn new(config: PacerConfig) -> Self {
        Self::with_clock(config, MonotonicClock)
    }
}

impl Default for Pacer<MonotonicClock> {
    fn default() -> Self {
        Self::new(PacerConfig::default())
    }
}

impl<C: Clock> Pacer<C> {
    pub fn with_clock(config: PacerConfig, clock: C) -> Self {
        Self {
            tokens: Vec::new(),
            cursor: 0,
            running: false,
            finished: false,
            config,
            next_tick_at: None,
            clock,
        }
    }

    /// Replaces the token sequence wholesale and rewinds to the beginning.
    /// Valid from any state; an active run is stopped.
    pub fn load(&mut self, tokens: Vec<String>) {
        debug!("load: {} tokens", tokens.len());
        self.tokens = tokens;
        self.cursor = 0;
        self.running = false;
        self.finished = false;
        self.next_tick_at = None;
    }

    /// Begins (or resumes) periodic ticking. A cursor at or past the end
    /// wraps to 0 first, so starting after Finished replays from the first
    /// token. Any pre-existing deadline is replaced; there is never more
    /// than one pending tick. Starting with no tokens loaded still runs and
    /// finishes on the first tick.
    pub fn start(&mut self) {
        if self.cursor >= self.tokens.len() {
            self.cursor = 0;
        }
        self.running = true;
        self.finished = false;
        self.next_tick_at = Some(self.clock.now() + self.tick_interval());
        debug!(
            "start: cursor {} of {}, interval {:?}",
            self.cursor,
            self.tokens.len(),
            self.tick_interval()
        );
    }

    /// Stops ticking and keeps the cursor. Idempotent; once this returns no
    /// further tick can fire until `start` is called again.
    pub fn pause(&mut self) {
        if self.running {
            debug!("pause at cursor {}", self.cursor);
        }
        self.running = false;
        self.next_tick_at = None;
    }

    /// Clears the token sequence and returns to the idle placeholder state.
    pub fn reset(&mut self) -> PacerEvent {
        debug!("reset");
        self.tokens.clear();
        self.cursor = 0;
        self.running = false;
        self.finished = false;
        self.next_tick_at = None;
        PacerEvent::Ready
    }

    /// Sets the target rate in tokens per minute. A rate of 0 is rejected
    /// and nothing changes. While running, the next tick moves to one new
    /// interval from now; the elapsed part of the current interval is
    /// discarded, not prorated, and the cursor does not move.
    pub fn set_rate(&mut self, rate: u32) -> Result<(), PacerError> {
        if rate == 0 {
            return Err(PacerError::InvalidRate(rate));
        }
        self.config.rate = rate;
        self.reschedule_if_running();
        Ok(())
    }

    /// Sets the number of tokens per tick. 0 is rejected and nothing
    /// changes. Same reschedule semantics as [`Pacer::set_rate`].
    pub fn set_chunk_size(&mut self, chunk_size: usize) -> Result<(), PacerError> {
        if chunk_size == 0 {
            return Err(PacerError::InvalidChunkSize(chunk_size));
        }
        self.config.chunk_size = chunk_size;
        self.reschedule_if_running();
        Ok(())
    }

    /// Nudges the rate by `delta`, clamped to the configured range. The
    /// key-binding path: always succeeds, same reschedule semantics as
    /// [`Pacer::set_rate`].
    pub fn adjust_rate(&mut self, delta: i32) {
        let new_rate = (self.config.rate as i64 + delta as i64).clamp(
            *self.config.rate_range.start() as i64,
            *self.config.rate_range.end() as i64,
        ) as u32;
        self.config.rate = new_rate;
        self.reschedule_if_running();
    }

    /// Nudges the chunk size by `delta`, clamped to the configured range.
    pub fn adjust_chunk_size(&mut self, delta: i32) {
        let new_size = (self.config.chunk_size as i64 + delta as i64).clamp(
            *self.config.chunk_size_range.start() as i64,
            *self.config.chunk_size_range.end() as i64,
        ) as usize;
        self.config.chunk_size = new_size;
        self.reschedule_if_running();
    }

    fn reschedule_if_running(&mut self) {
        if self.running {
            self.next_tick_at = Some(self.clock.now() + self.tick_interval());
        }
    }

    /// Drains every tick whose deadline has passed, in order. Each tick's
    /// effects (cursor advance, event emission) commit before the next fires.
    pub fn poll(&mut self) -> Vec<PacerEvent> {
        let mut events = Vec::new();
        while let Some(deadline) = self.next_tick_at {
            if self.clock.now() < deadline {
                break;
            }
            let interval = self.tick_interval();
            events.push(self.tick());
            if self.running {
                // Periodic scheduling from the deadline, not from now, so
                // a late poll does not stretch the cadence.
                self.next_tick_at = Some(deadline + interval);
            }
        }
        events
    }

    fn tick(&mut self) -> PacerEvent {
        if self.cursor >= self.tokens.len() {
            debug!("finished after {} tokens", self.tokens.len());
            self.running = false;
            self.finished = true;
            self.next_tick_at = None;
            self.cursor = 0;
            return PacerEvent::Finished;
        }

        let chunk_size = self.config.chunk_size;
        let end = (self.cursor + chunk_size).min(self.tokens.len());
        let payload = if chunk_size == 1 {
            DisplayPayload::Focused(split_at_pivot(&self.tokens[self.cursor]))
        } else {
            DisplayPayload::Plain(self.tokens[self.cursor..end].join(" "))
        };

        // The stored cursor may overshoot the length; only the slice above
        // is clamped. The next tick's exhaustion check uses the raw value.
        self.cursor += chunk_size;

        PacerEvent::Display {
            payload,
            progress: self.progress(),
        }
    }

    /// Fraction of the stream consumed, in 0.0..=1.0 (0.0 with no tokens).
    pub fn progress(&self) -> f64 {
        if self.tokens.is_empty() {
            0.0
        } else {
            (self.cursor as f64 / self.tokens.len() as f64).min(1.0)
        }
    }

    pub fn state(&self) -> PacerState {
        if self.running {
            PacerState::Running
        } else if self.finished {
            PacerState::Finished
        } else if self.tokens.is_empty() {
            PacerState::Idle
        } else if self.cursor == 0 {
            PacerState::Ready
        } else {
            PacerState::Paused
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn rate(&self) -> u32 {
        self.config.rate
    }

    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(tick_interval_ms(self.config.rate, self.config.chunk_size))
    }

    /// Time left until the pending deadline, or `None` when not running.
    /// Zero when the deadline has already passed; the caller should then
    /// `poll` immediately.
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.next_tick_at
            .map(|deadline| deadline.saturating_duration_since(self.clock.now()))
    }
}

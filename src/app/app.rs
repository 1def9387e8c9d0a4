use std::time::Duration;

use crate::app::mode::AppMode;
use crate::app::render_state::RenderState;
use crate::pacing::{
    tokenize, Clock, DisplayPayload, MonotonicClock, Pacer, PacerConfig, PacerEvent, PacerState,
};

/// Application glue between the pacing engine and the terminal UI: owns the
/// pacer, maps key presses to pacer operations, and folds pacer events into
/// the snapshot the renderer draws from.
pub struct App<C: Clock = MonotonicClock> {
    pacer: Pacer<C>,
    payload: Option<DisplayPayload>,
    progress: f64,
    quit: bool,
}

impl App<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_pacer(Pacer::new(PacerConfig::default()))
    }
}

impl Default for App<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> App<C> {
    pub fn with_pacer(pacer: Pacer<C>) -> Self {
        Self {
            pacer,
            payload: None,
            progress: 0.0,
            quit: false,
        }
    }

    /// Tokenizes `text` and hands it to the pacer, replacing any previous
    /// document and clearing the display.
    pub fn load_text(&mut self, text: &str) {
        self.pacer.load(tokenize(text));
        self.payload = None;
        self.progress = 0.0;
    }

    pub fn handle_keypress(&mut self, key: char) {
        match key {
            ' ' => self.toggle_play(),
            'r' => {
                let event = self.pacer.reset();
                self.apply(event);
            }
            '+' | '=' => self.pacer.adjust_rate(25),
            '-' | '_' => self.pacer.adjust_rate(-25),
            ']' => self.pacer.adjust_chunk_size(1),
            '[' => self.pacer.adjust_chunk_size(-1),
            'q' => self.quit = true,
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.pacer.is_running() {
            self.pacer.pause();
        } else {
            self.pacer.start();
        }
    }

    /// Drains every pacer tick that has come due and applies it to the
    /// display snapshot. Call whenever the event-loop wait times out.
    pub fn advance(&mut self) {
        for event in self.pacer.poll() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: PacerEvent) {
        match event {
            PacerEvent::Display { payload, progress } => {
                self.payload = Some(payload);
                self.progress = progress;
            }
            // The last chunk stays on screen; the mode change is enough for
            // the UI to swap in the restart hint.
            PacerEvent::Finished => {}
            PacerEvent::Ready => {
                self.payload = None;
                self.progress = 0.0;
            }
        }
    }

    pub fn mode(&self) -> AppMode {
        if self.quit {
            return AppMode::Quit;
        }
        match self.pacer.state() {
            PacerState::Idle | PacerState::Ready => AppMode::Ready,
            PacerState::Running => AppMode::Reading,
            PacerState::Paused => AppMode::Paused,
            PacerState::Finished => AppMode::Finished,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Wait budget for the event loop: time until the next pacer tick while
    /// reading, unbounded otherwise.
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.pacer.time_until_tick()
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode(),
            payload: self.payload.clone(),
            progress: self.progress,
            rate: self.pacer.rate(),
            chunk_size: self.pacer.chunk_size(),
        }
    }
}

use crate::app::mode::AppMode;
use crate::pacing::DisplayPayload;

/// Snapshot handed to the UI each frame.
pub struct RenderState {
    pub mode: AppMode,
    /// The chunk currently on screen, if any.
    pub payload: Option<DisplayPayload>,
    /// Fraction of the stream consumed, 0.0..=1.0.
    pub progress: f64,
    pub rate: u32,
    pub chunk_size: usize,
}

impl RenderState {
    /// Hint text for the bottom bar, matching the current mode.
    pub fn status_hint(&self) -> &'static str {
        match self.mode {
            AppMode::Ready => "space start · +/- rate · [/] chunk · q quit",
            AppMode::Reading => "space pause · +/- rate · [/] chunk · q quit",
            AppMode::Paused => "space resume · r reset · q quit",
            AppMode::Finished => "space restart · r reset · q quit",
            AppMode::Quit => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_hint_offers_resume_when_paused() {
        let state = RenderState {
            mode: AppMode::Paused,
            payload: None,
            progress: 0.4,
            rate: 300,
            chunk_size: 1,
        };
        assert!(state.status_hint().contains("resume"));
    }

    #[test]
    fn test_status_hint_offers_restart_when_finished() {
        let state = RenderState {
            mode: AppMode::Finished,
            payload: None,
            progress: 1.0,
            rate: 300,
            chunk_size: 1,
        };
        assert!(state.status_hint().contains("restart"));
    }
}

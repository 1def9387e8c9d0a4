use super::focus::FocusSplit;

/// What a renderer should put on screen for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayPayload {
    /// A single token split around its focus point (chunk size 1).
    Focused(FocusSplit),
    /// A chunk of tokens joined by single spaces (chunk size > 1).
    Plain(String),
}

impl DisplayPayload {
    /// The payload as flat text, ignoring the focus structure.
    pub fn text(&self) -> String {
        match self {
            DisplayPayload::Focused(split) => {
                format!("{}{}{}", split.prefix, split.pivot, split.suffix)
            }
            DisplayPayload::Plain(text) => text.clone(),
        }
    }
}

/// Events emitted by the pacer as it advances.
#[derive(Debug, Clone, PartialEq)]
pub enum PacerEvent {
    /// One chunk is due on screen; progress is in 0.0..=1.0.
    Display {
        payload: DisplayPayload,
        progress: f64,
    },
    /// The token stream is exhausted; the display should offer a restart.
    Finished,
    /// The pacer was reset; the display should show its idle placeholder.
    Ready,
}

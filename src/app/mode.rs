/// What the display should be doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Nothing loaded, or loaded and waiting at the first token.
    Ready,
    /// Tokens flowing.
    Reading,
    /// Stopped mid-stream; start resumes where it left off.
    Paused,
    /// Stream exhausted; start replays from the first token.
    Finished,
    /// Tear down the terminal and exit.
    Quit,
}

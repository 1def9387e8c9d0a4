use thiserror::Error;

/// Validation failures at the pacer's API boundary.
///
/// A rejected call leaves the pacer untouched; none of these are fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PacerError {
    #[error("rate must be positive, got {0}")]
    InvalidRate(u32),

    #[error("chunk size must be at least 1, got {0}")]
    InvalidChunkSize(usize),
}

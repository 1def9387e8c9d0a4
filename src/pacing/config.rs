use std::ops::RangeInclusive;

/// Pacing parameters and the bounds the key bindings clamp to.
#[derive(Debug, Clone, PartialEq)]
pub struct PacerConfig {
    /// Target token throughput in tokens per minute (default 300).
    pub rate: u32,

    /// Allowed range for rate adjustments.
    pub rate_range: RangeInclusive<u32>,

    /// Tokens displayed per tick (default 1).
    pub chunk_size: usize,

    /// Allowed range for chunk size adjustments.
    pub chunk_size_range: RangeInclusive<usize>,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            rate: 300,
            rate_range: 100..=1000,
            chunk_size: 1,
            chunk_size_range: 1..=5,
        }
    }
}

/// Milliseconds between ticks for the given rate and chunk size.
///
/// Displaying `chunk_size` tokens per tick at this interval yields exactly
/// `rate` tokens per minute: the token throughput tracks the rate, not the
/// tick throughput. Uses floating-point division with rounding, not integer
/// truncation, so odd rates land on the nearest millisecond.
pub fn tick_interval_ms(rate: u32, chunk_size: usize) -> u64 {
    (60_000.0 / rate.max(1) as f64 * chunk_size as f64).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_interval_chunk_of_one() {
        // 300 tokens/min = 200ms per token (60,000 / 300 = 200)
        assert_eq!(tick_interval_ms(300, 1), 200);
        assert_eq!(tick_interval_ms(600, 1), 100);
    }

    #[test]
    fn test_tick_interval_chunk_of_three() {
        // Three tokens per tick at 300/min means one tick every 600ms
        assert_eq!(tick_interval_ms(300, 3), 600);
    }

    #[test]
    fn test_tick_interval_rounds_165() {
        // 60,000 / 165 = 363.636... -> rounds to 364, truncation would give 363
        assert_eq!(tick_interval_ms(165, 1), 364);
    }

    #[test]
    fn test_tick_interval_rounds_350() {
        // 60,000 / 350 = 171.428... -> rounds to 171
        assert_eq!(tick_interval_ms(350, 1), 171);
    }

    #[test]
    fn test_tick_interval_throughput_law() {
        // interval * rate / 60,000 == chunk_size for exact divisions
        for &rate in &[100u32, 200, 300, 500, 600, 1000] {
            for chunk in 1usize..=5 {
                let interval = tick_interval_ms(rate, chunk);
                let tokens_per_minute = chunk as f64 * 60_000.0 / interval as f64;
                assert!(
                    (tokens_per_minute - rate as f64).abs() < 1.0,
                    "rate {} chunk {} interval {} drifts",
                    rate,
                    chunk,
                    interval
                );
            }
        }
    }
}

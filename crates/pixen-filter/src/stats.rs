//! Window statistics
//!
//! Pure scalar reductions over a flattened window of samples. The filter
//! engine gathers each neighborhood into a scratch buffer and applies one
//! of these reducers per output sample.

/// Statistic computed over each window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStat {
    /// Arithmetic mean, rounded to nearest
    Mean,
    /// Median (element at index `len / 2` of the sorted window)
    Median,
}

/// Mean of a window, rounded to nearest.
///
/// The sum is accumulated in u64 so that no window size can wrap.
/// The result of averaging 8-bit samples is always in [0, 255].
///
/// # Panics
///
/// Panics in debug builds if `samples` is empty.
pub fn window_mean(samples: &[u8]) -> u8 {
    debug_assert!(!samples.is_empty());
    let sum: u64 = samples.iter().map(|&v| u64::from(v)).sum();
    let n = samples.len() as u64;
    ((sum + n / 2) / n) as u8
}

/// Median of a window.
///
/// Sorts the scratch buffer in place and picks the element at index
/// `len / 2`. For even-length windows this selects a single sample
/// rather than averaging the two middle values, matching the behavior
/// the filters have always had.
///
/// # Panics
///
/// Panics in debug builds if `samples` is empty.
pub fn window_median(samples: &mut [u8]) -> u8 {
    debug_assert!(!samples.is_empty());
    samples.sort_unstable();
    samples[samples.len() / 2]
}

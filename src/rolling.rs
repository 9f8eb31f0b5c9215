//! Shared sliding-window reductions.
//!
//! Every windowed indicator goes through this module so warm-up and
//! alignment rules stay identical across indicators: output `i` is
//! defined only when the full trailing window `[i - period + 1, i]`
//! exists and contains no NaN. Undefined positions hold NaN.
//!
//! The NaN rule lets derived series (RSI deltas, stochastic %K) flow
//! through a second windowed pass with their warm-up regions intact.

use crate::Price;

/// Tracks whether the trailing window still contains a NaN.
///
/// Mean and sum state skip NaN values entirely; this marker is what
/// invalidates the affected windows instead.
#[derive(Clone, Copy)]
struct NanHorizon(Option<usize>);

impl NanHorizon {
    fn new() -> Self {
        Self(None)
    }

    #[inline]
    fn observe(&mut self, index: usize, value: Price) {
        if value.is_nan() {
            self.0 = Some(index);
        }
    }

    /// `true` if no NaN falls inside the window ending at `index`.
    #[inline]
    fn window_clear(self, index: usize, period: usize) -> bool {
        self.0.is_none_or(|nan_index| nan_index + period <= index)
    }
}

/// Rolling arithmetic mean over a trailing `period`-value window.
///
/// Maintained as a running sum, O(n) over the series. Rounding drift
/// from incremental add/subtract is negligible for chart-length series.
pub(crate) fn rolling_mean(values: &[Price], period: usize) -> Vec<Price> {
    #[allow(clippy::cast_precision_loss)]
    let period_reciprocal = 1.0 / period as f64;

    let mut out = vec![f64::NAN; values.len()];
    let mut sum = 0.0;
    let mut horizon = NanHorizon::new();

    for (i, &value) in values.iter().enumerate() {
        horizon.observe(i, value);
        if !value.is_nan() {
            sum += value;
        }

        if i >= period {
            let evicted = values[i - period];
            if !evicted.is_nan() {
                sum -= evicted;
            }
        }

        if i + 1 >= period && horizon.window_clear(i, period) {
            out[i] = sum * period_reciprocal;
        }
    }

    out
}

/// Rolling sample standard deviation (ddof = 1) over a trailing window.
///
/// Uses running sum and sum of squares; the variance is clamped at zero
/// before the square root to absorb floating-point cancellation. A
/// window of 1 has no sample deviation, so `period == 1` yields NaN at
/// every position.
pub(crate) fn rolling_std(values: &[Price], period: usize) -> Vec<Price> {
    let mut out = vec![f64::NAN; values.len()];
    if period < 2 {
        return out;
    }

    #[allow(clippy::cast_precision_loss)]
    let period_f = period as f64;
    let ddof = period_f - 1.0;

    let mut sum = 0.0;
    let mut sum_of_squares = 0.0;
    let mut horizon = NanHorizon::new();

    for (i, &value) in values.iter().enumerate() {
        horizon.observe(i, value);
        if !value.is_nan() {
            sum += value;
            sum_of_squares += value * value;
        }

        if i >= period {
            let evicted = values[i - period];
            if !evicted.is_nan() {
                sum -= evicted;
                sum_of_squares -= evicted * evicted;
            }
        }

        if i + 1 >= period && horizon.window_clear(i, period) {
            let variance = (sum_of_squares - sum * sum / period_f) / ddof;
            out[i] = variance.max(0.0).sqrt();
        }
    }

    out
}

/// Rolling minimum over a trailing `period`-value window.
pub(crate) fn rolling_min(values: &[Price], period: usize) -> Vec<Price> {
    rolling_extreme(values, period, f64::INFINITY, f64::min)
}

/// Rolling maximum over a trailing `period`-value window.
pub(crate) fn rolling_max(values: &[Price], period: usize) -> Vec<Price> {
    rolling_extreme(values, period, f64::NEG_INFINITY, f64::max)
}

/// Window rescan, O(n·period). Bounded chart series keep this cheap and
/// it avoids the bookkeeping of a monotonic deque.
fn rolling_extreme(
    values: &[Price],
    period: usize,
    identity: Price,
    pick: fn(Price, Price) -> Price,
) -> Vec<Price> {
    let mut out = vec![f64::NAN; values.len()];
    let mut horizon = NanHorizon::new();

    for (i, &value) in values.iter().enumerate() {
        horizon.observe(i, value);

        if i + 1 >= period && horizon.window_clear(i, period) {
            out[i] = values[i + 1 - period..=i]
                .iter()
                .copied()
                .fold(identity, pick);
        }
    }

    out
}

/// Reassigns `values[i]` to position `i + offset` (plots ahead of the
/// current bar). The first `offset` positions become NaN.
pub(crate) fn shift_forward(values: &[Price], offset: usize) -> Vec<Price> {
    let mut out = vec![f64::NAN; values.len()];
    for i in offset..values.len() {
        out[i] = values[i - offset];
    }
    out
}

/// Reassigns `values[i]` to position `i - offset` (plots behind the
/// current bar). The last `offset` positions become NaN.
pub(crate) fn shift_backward(values: &[Price], offset: usize) -> Vec<Price> {
    let mut out = vec![f64::NAN; values.len()];
    for i in 0..values.len().saturating_sub(offset) {
        out[i] = values[i + offset];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_approx;

    mod mean {
        use super::*;

        #[test]
        fn warm_up_region_is_nan() {
            let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 3);
            assert!(out[0].is_nan());
            assert!(out[1].is_nan());
            assert_eq!(out[2], 2.0);
            assert_eq!(out[3], 3.0);
        }

        #[test]
        fn shorter_than_period_is_all_nan() {
            let out = rolling_mean(&[1.0, 2.0], 5);
            assert!(out.iter().all(|v| v.is_nan()));
        }

        #[test]
        fn period_one_is_identity() {
            let out = rolling_mean(&[4.0, 8.0, 6.0], 1);
            assert_eq!(out, vec![4.0, 8.0, 6.0]);
        }

        #[test]
        fn empty_input_gives_empty_output() {
            assert!(rolling_mean(&[], 3).is_empty());
        }

        #[test]
        fn nan_poisons_overlapping_windows_only() {
            let values = [1.0, f64::NAN, 3.0, 4.0, 5.0];
            let out = rolling_mean(&values, 2);
            assert!(out[0].is_nan());
            assert!(out[1].is_nan()); // window [1, NaN]
            assert!(out[2].is_nan()); // window [NaN, 3]
            assert_eq!(out[3], 3.5); // window [3, 4] is clear again
            assert_eq!(out[4], 4.5);
        }

        #[test]
        fn leading_nan_delays_first_defined_index() {
            // Mirrors a delta series: undefined first element.
            let values = [f64::NAN, 2.0, 4.0, 6.0];
            let out = rolling_mean(&values, 3);
            assert!(out[..3].iter().all(|v| v.is_nan()));
            assert_eq!(out[3], 4.0);
        }
    }

    mod std_dev {
        use super::*;

        #[test]
        fn matches_sample_deviation() {
            // stdev([1, 2, 3, 4]) with ddof = 1 is sqrt(5/3)
            let out = rolling_std(&[1.0, 2.0, 3.0, 4.0], 4);
            assert_approx!(out[3], (5.0_f64 / 3.0).sqrt());
        }

        #[test]
        fn constant_window_has_zero_deviation() {
            let out = rolling_std(&[7.0, 7.0, 7.0], 3);
            assert_eq!(out[2], 0.0);
        }

        #[test]
        fn warm_up_region_is_nan() {
            let out = rolling_std(&[1.0, 2.0, 3.0], 3);
            assert!(out[0].is_nan());
            assert!(out[1].is_nan());
        }

        #[test]
        fn period_one_is_undefined() {
            let out = rolling_std(&[1.0, 2.0, 3.0], 1);
            assert!(out.iter().all(|v| v.is_nan()));
        }

        #[test]
        fn slides_with_the_window() {
            // stdev([2, 4]) = stdev([4, 6]) = sqrt(2)
            let out = rolling_std(&[2.0, 4.0, 6.0], 2);
            assert_approx!(out[1], 2.0_f64.sqrt());
            assert_approx!(out[2], 2.0_f64.sqrt());
        }
    }

    mod extremes {
        use super::*;

        #[test]
        fn min_and_max_track_the_window() {
            let values = [3.0, 1.0, 4.0, 1.5, 5.0];
            let min = rolling_min(&values, 3);
            let max = rolling_max(&values, 3);
            assert_eq!(min[2], 1.0);
            assert_eq!(max[2], 4.0);
            assert_eq!(min[4], 1.5);
            assert_eq!(max[4], 5.0);
        }

        #[test]
        fn warm_up_region_is_nan() {
            let out = rolling_max(&[1.0, 2.0, 3.0], 3);
            assert!(out[0].is_nan());
            assert!(out[1].is_nan());
            assert_eq!(out[2], 3.0);
        }

        #[test]
        fn nan_in_window_is_nan_out() {
            let out = rolling_min(&[1.0, f64::NAN, 3.0], 2);
            assert!(out[1].is_nan());
            assert!(out[2].is_nan());
        }
    }

    mod shifts {
        use super::*;

        #[test]
        fn forward_shift_plots_ahead() {
            let out = shift_forward(&[1.0, 2.0, 3.0, 4.0], 2);
            assert!(out[0].is_nan());
            assert!(out[1].is_nan());
            assert_eq!(out[2], 1.0);
            assert_eq!(out[3], 2.0);
        }

        #[test]
        fn backward_shift_plots_behind() {
            let out = shift_backward(&[1.0, 2.0, 3.0, 4.0], 2);
            assert_eq!(out[0], 3.0);
            assert_eq!(out[1], 4.0);
            assert!(out[2].is_nan());
            assert!(out[3].is_nan());
        }

        #[test]
        fn offset_beyond_length_is_all_nan() {
            assert!(shift_forward(&[1.0, 2.0], 5).iter().all(|v| v.is_nan()));
            assert!(shift_backward(&[1.0, 2.0], 5).iter().all(|v| v.is_nan()));
        }

        #[test]
        fn zero_offset_is_identity() {
            assert_eq!(shift_forward(&[1.0, 2.0], 0), vec![1.0, 2.0]);
            assert_eq!(shift_backward(&[1.0, 2.0], 0), vec![1.0, 2.0]);
        }
    }
}

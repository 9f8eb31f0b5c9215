use std::fmt::Display;

use crate::{
    Indicator, IndicatorError, Price, PriceSeries, PriceSource, error::require_period,
};

/// Average Directional Index (ADX).
///
/// Wilder's trend-strength measure, 0–100. Directional movement and
/// true range are accumulated with Wilder's smoothing
/// (`s ← s − s/period + x`, seeded by the sum of the first `period`
/// changes), folded into the directional indices and then into
/// `DX = 100 × |+DI − −DI| / (+DI + −DI)`; the ADX line is the
/// Wilder-smoothed average of DX, seeded by the mean of its first
/// `period` values.
///
/// The first defined output sits at index `2 × period − 1`; everything
/// before is NaN.
///
/// # Degenerate windows
///
/// While the smoothed true range is zero (a perfectly flat market) the
/// directional indices divide zero by zero and the output is NaN,
/// consistent with the crate-wide IEEE-754 policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Adx {
    period: usize,
}

impl Adx {
    /// Wilder's standard lookback.
    pub const DEFAULT_PERIOD: usize = 14;

    /// ADX with an explicit lookback.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if `period` is zero.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        Ok(Self {
            period: require_period("period", period)?,
        })
    }

    /// Smoothing lookback (number of bars).
    #[must_use]
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Default for Adx {
    fn default() -> Self {
        Self {
            period: Self::DEFAULT_PERIOD,
        }
    }
}

impl Indicator for Adx {
    type Output = Vec<Price>;

    #[allow(clippy::cast_precision_loss)]
    fn compute(&self, series: &PriceSeries) -> Self::Output {
        let n = series.len();
        let period = self.period;
        let mut out = vec![f64::NAN; n];
        // First ADX value lands at index 2·period − 1.
        if n < 2 * period {
            return out;
        }

        let highs = series.highs();
        let lows = series.lows();
        // tr[0] is the high-low fallback and is never used: Wilder's
        // sums start at the first bar-to-bar change.
        let true_range = series.values(PriceSource::TrueRange);

        let mut plus_dm = vec![0.0; n];
        let mut minus_dm = vec![0.0; n];
        for i in 1..n {
            let up_move = highs[i] - highs[i - 1];
            let down_move = lows[i - 1] - lows[i];
            if up_move > down_move && up_move > 0.0 {
                plus_dm[i] = up_move;
            }
            if down_move > up_move && down_move > 0.0 {
                minus_dm[i] = down_move;
            }
        }

        let period_f = period as f64;

        // Wilder smoothing, seeded with plain sums over the first
        // `period` changes.
        let mut smoothed_tr: f64 = true_range[1..=period].iter().sum();
        let mut smoothed_plus: f64 = plus_dm[1..=period].iter().sum();
        let mut smoothed_minus: f64 = minus_dm[1..=period].iter().sum();

        let mut dx = vec![f64::NAN; n];
        for i in period..n {
            if i > period {
                smoothed_tr = smoothed_tr - smoothed_tr / period_f + true_range[i];
                smoothed_plus = smoothed_plus - smoothed_plus / period_f + plus_dm[i];
                smoothed_minus = smoothed_minus - smoothed_minus / period_f + minus_dm[i];
            }

            let plus_di = 100.0 * smoothed_plus / smoothed_tr;
            let minus_di = 100.0 * smoothed_minus / smoothed_tr;
            dx[i] = 100.0 * (plus_di - minus_di).abs() / (plus_di + minus_di);
        }

        let mut adx = dx[period..2 * period].iter().sum::<f64>() / period_f;
        out[2 * period - 1] = adx;
        for i in 2 * period..n {
            adx = (adx * (period_f - 1.0) + dx[i]) / period_f;
            out[i] = adx;
        }

        out
    }
}

impl Display for Adx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ADX({})", self.period)
    }
}

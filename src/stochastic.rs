use std::fmt::Display;

use serde::Serialize;

use crate::{
    Indicator, IndicatorError, Price, PriceSeries, error::require_period,
    rolling::{rolling_max, rolling_mean, rolling_min},
};

/// Stochastic oscillator output.
///
/// `%K` warms up over `k_period - 1` bars; `%D` adds another
/// `d_period - 1` on top.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StochasticSeries {
    /// `%K`: close position inside the trailing high/low range, 0–100.
    pub percent_k: Vec<Price>,
    /// `%D`: simple rolling mean of `%K`.
    pub percent_d: Vec<Price>,
}

/// Stochastic Oscillator.
///
/// Locates the close within the trailing `k_period` high/low range:
///
/// ```text
/// %K = 100 × (close − min(low)) / (max(high) − min(low))
/// %D = SMA(%K, d_period)
/// ```
///
/// # Degenerate windows
///
/// A flat window (`max(high) == min(low)`) divides zero by zero and
/// `%K` is NaN for that position, consistent with the crate-wide
/// IEEE-754 policy (see [`Rsi`]).
///
/// [`Rsi`]: crate::Rsi
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stochastic {
    k_period: usize,
    d_period: usize,
}

impl Stochastic {
    /// Default `%K` lookback.
    pub const DEFAULT_K_PERIOD: usize = 14;
    /// Default `%D` smoothing.
    pub const DEFAULT_D_PERIOD: usize = 3;

    /// Oscillator with explicit periods.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if either period is zero.
    pub fn new(k_period: usize, d_period: usize) -> Result<Self, IndicatorError> {
        Ok(Self {
            k_period: require_period("k_period", k_period)?,
            d_period: require_period("d_period", d_period)?,
        })
    }

    /// `%K` lookback (number of bars).
    #[must_use]
    pub fn k_period(&self) -> usize {
        self.k_period
    }

    /// `%D` smoothing window (number of `%K` values).
    #[must_use]
    pub fn d_period(&self) -> usize {
        self.d_period
    }
}

impl Default for Stochastic {
    fn default() -> Self {
        Self {
            k_period: Self::DEFAULT_K_PERIOD,
            d_period: Self::DEFAULT_D_PERIOD,
        }
    }
}

impl Indicator for Stochastic {
    type Output = StochasticSeries;

    fn compute(&self, series: &PriceSeries) -> Self::Output {
        let lowest_low = rolling_min(&series.lows(), self.k_period);
        let highest_high = rolling_max(&series.highs(), self.k_period);

        let percent_k: Vec<Price> = series
            .closes()
            .iter()
            .zip(lowest_low.iter().zip(&highest_high))
            .map(|(&close, (&low, &high))| 100.0 * (close - low) / (high - low))
            .collect();

        let percent_d = rolling_mean(&percent_k, self.d_period);

        StochasticSeries {
            percent_k,
            percent_d,
        }
    }
}

impl Display for Stochastic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stoch({}, {})", self.k_period, self.d_period)
    }
}

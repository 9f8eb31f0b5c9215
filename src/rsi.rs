use std::fmt::Display;

use crate::{
    Indicator, IndicatorError, Price, PriceSeries, PriceSource, error::require_period,
    rolling::rolling_mean,
};

/// Relative Strength Index (RSI).
///
/// Per-bar price changes are split into gains and losses, averaged
/// over a simple trailing `period`-bar window, then folded into
/// `100 − 100 / (1 + RS)` with `RS = avg gain / avg loss`.
///
/// The averages here are plain rolling means, not Wilder's recursive
/// smoothing — matching the chart the dashboard always displayed.
///
/// The first change needs a previous bar, so the first defined output
/// is at index `period` (one later than SMA's warm-up).
///
/// # Degenerate windows
///
/// Division follows IEEE-754: a window with gains but no losses gives
/// `RS = +∞` and the RSI saturates to exactly `100`; a completely flat
/// window gives `0 / 0` and the output is NaN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rsi {
    period: usize,
    source: PriceSource,
}

impl Rsi {
    /// Default lookback.
    pub const DEFAULT_PERIOD: usize = 14;

    /// RSI of the closing price.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if `period` is zero.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        Self::with_source(period, PriceSource::Close)
    }

    /// RSI of an arbitrary price source.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if `period` is zero.
    pub fn with_source(period: usize, source: PriceSource) -> Result<Self, IndicatorError> {
        Ok(Self {
            period: require_period("period", period)?,
            source,
        })
    }

    /// Lookback length (number of price changes averaged).
    #[must_use]
    pub fn period(&self) -> usize {
        self.period
    }

    /// Price source extracted from each bar.
    #[must_use]
    pub fn source(&self) -> PriceSource {
        self.source
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self {
            period: Self::DEFAULT_PERIOD,
            source: PriceSource::Close,
        }
    }
}

impl Indicator for Rsi {
    type Output = Vec<Price>;

    fn compute(&self, series: &PriceSeries) -> Self::Output {
        let values = series.values(self.source);
        let n = values.len();

        // Index 0 has no previous bar; the NaN flows through the
        // rolling means and extends the warm-up by one position.
        let mut gains = vec![f64::NAN; n];
        let mut losses = vec![f64::NAN; n];
        for i in 1..n {
            let delta = values[i] - values[i - 1];
            if delta > 0.0 {
                gains[i] = delta;
                losses[i] = 0.0;
            } else {
                gains[i] = 0.0;
                losses[i] = -delta;
            }
        }

        let avg_gain = rolling_mean(&gains, self.period);
        let avg_loss = rolling_mean(&losses, self.period);

        avg_gain
            .iter()
            .zip(&avg_loss)
            .map(|(&gain, &loss)| {
                let rs = gain / loss;
                100.0 - 100.0 / (1.0 + rs)
            })
            .collect()
    }
}

impl Display for Rsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RSI({}, {})", self.period, self.source)
    }
}

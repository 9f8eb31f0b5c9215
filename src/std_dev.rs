use std::fmt::Display;

use crate::{
    Indicator, IndicatorError, Price, PriceSeries, PriceSource, error::require_period,
    rolling::rolling_std,
};

/// Rolling standard deviation.
///
/// Sample standard deviation (ddof = 1) of the configured price over
/// each trailing `period`-bar window, with the same warm-up rule as
/// [`Sma`]: the first `period - 1` positions are NaN. Plotted as a
/// volatility subchart; also the σ behind [`BollingerBands`].
///
/// [`Sma`]: crate::Sma
/// [`BollingerBands`]: crate::BollingerBands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StdDev {
    period: usize,
    source: PriceSource,
}

impl StdDev {
    /// Default window length.
    pub const DEFAULT_PERIOD: usize = 20;

    /// Standard deviation of the closing price.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if `period` is zero.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        Self::with_source(period, PriceSource::Close)
    }

    /// Standard deviation of an arbitrary price source.
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

    /// Window length (number of bars).
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

impl Default for StdDev {
    fn default() -> Self {
        Self {
            period: Self::DEFAULT_PERIOD,
            source: PriceSource::Close,
        }
    }
}

impl Indicator for StdDev {
    type Output = Vec<Price>;

    fn compute(&self, series: &PriceSeries) -> Self::Output {
        rolling_std(&series.values(self.source), self.period)
    }
}

impl Display for StdDev {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StdDev({}, {})", self.period, self.source)
    }
}

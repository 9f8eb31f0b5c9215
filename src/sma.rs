use std::fmt::Display;

use crate::{
    Indicator, IndicatorError, Price, PriceSeries, PriceSource, error::require_period,
    rolling::rolling_mean,
};

/// Simple Moving Average (SMA).
///
/// The unweighted mean of the configured price over each trailing
/// `period`-bar window. The first `period - 1` output positions are
/// NaN (insufficient history).
///
/// # Example
///
/// ```
/// use chartdeck_ta::Sma;
/// # use chartdeck_ta::{Bar, PriceSeries};
/// # use chrono::NaiveDate;
///
/// let sma = Sma::new(3)?;
/// # let bars: Vec<Bar> = [10.0, 20.0, 30.0]
/// #     .iter()
/// #     .enumerate()
/// #     .map(|(i, &c)| {
/// #         let date = NaiveDate::from_ymd_opt(2024, 1, i as u32 + 1).unwrap();
/// #         Bar::new(date, c, c, c, c)
/// #     })
/// #     .collect();
/// # let series = PriceSeries::new(bars);
/// let out = sma.compute(&series);
///
/// assert!(out[0].is_nan());
/// assert!(out[1].is_nan());
/// assert_eq!(out[2], 20.0);
/// # Ok::<(), chartdeck_ta::IndicatorError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sma {
    period: usize,
    source: PriceSource,
}

impl Sma {
    /// Default window length for dashboard overlays.
    pub const DEFAULT_PERIOD: usize = 20;

    /// SMA of the closing price.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if `period` is zero.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        Self::with_source(period, PriceSource::Close)
    }

    /// SMA of an arbitrary price source.
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

impl Default for Sma {
    fn default() -> Self {
        Self {
            period: Self::DEFAULT_PERIOD,
            source: PriceSource::Close,
        }
    }
}

impl Indicator for Sma {
    type Output = Vec<Price>;

    fn compute(&self, series: &PriceSeries) -> Self::Output {
        rolling_mean(&series.values(self.source), self.period)
    }
}

impl Display for Sma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SMA({}, {})", self.period, self.source)
    }
}

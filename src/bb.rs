use std::fmt::Display;

use serde::Serialize;

use crate::{
    Indicator, IndicatorError, Price, PriceSeries, PriceSource, error::require_period,
    rolling::{rolling_mean, rolling_std},
};

/// Bollinger Bands output: three aligned series.
///
/// ```text
/// middle = SMA(period)
/// upper  = middle + k × σ
/// lower  = middle − k × σ
/// ```
///
/// where `σ` is the rolling sample standard deviation over the same
/// window. All three share the SMA warm-up region, so at every defined
/// index `upper ≥ middle ≥ lower`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BollingerSeries {
    /// Middle band: SMA of the window.
    pub middle: Vec<Price>,
    /// Upper band: `middle + k × σ`.
    pub upper: Vec<Price>,
    /// Lower band: `middle − k × σ`.
    pub lower: Vec<Price>,
}

/// Bollinger Bands (BB).
///
/// A volatility envelope around a simple moving average. The band
/// offset is `multiplier × σ` with `σ` the rolling sample standard
/// deviation (ddof = 1) of the same trailing window.
///
/// # Example
///
/// ```
/// use chartdeck_ta::BollingerBands;
/// # use chartdeck_ta::{Bar, PriceSeries};
/// # use chrono::NaiveDate;
///
/// let bb = BollingerBands::new(20)?; // 20 bars, 2σ
/// # let bars: Vec<Bar> = (0..25)
/// #     .map(|i| {
/// #         let date = NaiveDate::from_ymd_opt(2024, 1, i + 1).unwrap();
/// #         let c = 100.0 + f64::from(i % 5);
/// #         Bar::new(date, c, c, c, c)
/// #     })
/// #     .collect();
/// # let series = PriceSeries::new(bars);
/// let bands = bb.compute(&series);
///
/// assert_eq!(bands.middle.len(), series.len());
/// assert!(bands.upper[24] >= bands.lower[24]);
/// # Ok::<(), chartdeck_ta::IndicatorError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BollingerBands {
    period: usize,
    multiplier: f64,
    source: PriceSource,
}

impl BollingerBands {
    /// Standard Bollinger window.
    pub const DEFAULT_PERIOD: usize = 20;
    /// Standard band offset, in standard deviations.
    pub const DEFAULT_MULTIPLIER: f64 = 2.0;

    /// Bands over the closing price with the standard 2σ offset.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if `period` is zero.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        Self::with_multiplier(period, Self::DEFAULT_MULTIPLIER)
    }

    /// Bands with a custom standard-deviation multiplier.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if `period` is zero,
    /// [`IndicatorError::InvalidMultiplier`] if `multiplier` is not a
    /// positive finite number.
    pub fn with_multiplier(period: usize, multiplier: f64) -> Result<Self, IndicatorError> {
        if !(multiplier > 0.0 && multiplier.is_finite()) {
            return Err(IndicatorError::InvalidMultiplier {
                name: "multiplier",
                value: multiplier,
            });
        }

        Ok(Self {
            period: require_period("period", period)?,
            multiplier,
            source: PriceSource::Close,
        })
    }

    /// Window length (number of bars).
    #[must_use]
    pub fn period(&self) -> usize {
        self.period
    }

    /// Band offset in standard deviations.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: Self::DEFAULT_PERIOD,
            multiplier: Self::DEFAULT_MULTIPLIER,
            source: PriceSource::Close,
        }
    }
}

impl Indicator for BollingerBands {
    type Output = BollingerSeries;

    fn compute(&self, series: &PriceSeries) -> Self::Output {
        let values = series.values(self.source);
        let middle = rolling_mean(&values, self.period);
        let sigma = rolling_std(&values, self.period);

        let upper = middle
            .iter()
            .zip(&sigma)
            .map(|(&mean, &sd)| self.multiplier.mul_add(sd, mean))
            .collect();
        let lower = middle
            .iter()
            .zip(&sigma)
            .map(|(&mean, &sd)| self.multiplier.mul_add(-sd, mean))
            .collect();

        BollingerSeries {
            middle,
            upper,
            lower,
        }
    }
}

impl Display for BollingerBands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BB({}, {}, {})", self.period, self.source, self.multiplier)
    }
}

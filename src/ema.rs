use std::fmt::Display;

use crate::{
    Indicator, IndicatorError, Price, PriceSeries, PriceSource, error::require_period,
};

/// Exponential smoothing with `α = 2 / (span + 1)`, seeded with the
/// first value:
///
/// ```text
/// ewm[0] = values[0]
/// ewm[i] = α × values[i] + (1 − α) × ewm[i − 1]
/// ```
///
/// Defined from index 0 — there is no warm-up gap. Callers must not
/// pass NaN values; the recursion would carry it forward.
pub(crate) fn ewm(values: &[Price], span: usize) -> Vec<Price> {
    #[allow(clippy::cast_precision_loss)]
    let alpha = 2.0 / (span + 1) as f64;

    let mut out = Vec::with_capacity(values.len());
    let mut previous = match values.first() {
        Some(&first) => first,
        None => return out,
    };
    out.push(previous);

    for &value in &values[1..] {
        previous = alpha.mul_add(value - previous, previous);
        out.push(previous);
    }

    out
}

/// Exponential Moving Average (EMA).
///
/// A weighted moving average that gives more weight to recent prices,
/// with smoothing factor `α = 2 / (span + 1)`. Unlike [`Sma`], the EMA
/// is seeded with the first price and defined from the first bar: the
/// output has no NaN warm-up region regardless of span.
///
/// [`Sma`]: crate::Sma
///
/// # Example
///
/// ```
/// use chartdeck_ta::Ema;
/// # use chartdeck_ta::{Bar, PriceSeries};
/// # use chrono::NaiveDate;
///
/// let ema = Ema::new(3)?; // α = 0.5
/// # let bars: Vec<Bar> = [4.0, 8.0]
/// #     .iter()
/// #     .enumerate()
/// #     .map(|(i, &c)| {
/// #         let date = NaiveDate::from_ymd_opt(2024, 1, i as u32 + 1).unwrap();
/// #         Bar::new(date, c, c, c, c)
/// #     })
/// #     .collect();
/// # let series = PriceSeries::new(bars);
/// let out = ema.compute(&series);
///
/// assert_eq!(out[0], 4.0); // seeded with the first close
/// assert_eq!(out[1], 6.0); // 8 × 0.5 + 4 × 0.5
/// # Ok::<(), chartdeck_ta::IndicatorError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ema {
    span: usize,
    source: PriceSource,
}

impl Ema {
    /// Default span for dashboard overlays.
    pub const DEFAULT_SPAN: usize = 20;

    /// EMA of the closing price.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if `span` is zero.
    pub fn new(span: usize) -> Result<Self, IndicatorError> {
        Self::with_source(span, PriceSource::Close)
    }

    /// EMA of an arbitrary price source.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if `span` is zero.
    pub fn with_source(span: usize, source: PriceSource) -> Result<Self, IndicatorError> {
        Ok(Self {
            span: require_period("span", span)?,
            source,
        })
    }

    /// Smoothing span (bars).
    #[must_use]
    pub fn span(&self) -> usize {
        self.span
    }

    /// Price source extracted from each bar.
    #[must_use]
    pub fn source(&self) -> PriceSource {
        self.source
    }
}

impl Default for Ema {
    fn default() -> Self {
        Self {
            span: Self::DEFAULT_SPAN,
            source: PriceSource::Close,
        }
    }
}

impl Indicator for Ema {
    type Output = Vec<Price>;

    fn compute(&self, series: &PriceSeries) -> Self::Output {
        ewm(&series.values(self.source), self.span)
    }
}

impl Display for Ema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EMA({}, {})", self.span, self.source)
    }
}

use crate::PriceSeries;

use std::fmt::{Debug, Display};

/// A batch technical indicator.
///
/// Indicators hold only their parameters and are pure: [`compute`]
/// reads an immutable [`PriceSeries`] and returns freshly allocated
/// output, so the same series always yields bit-identical results and
/// indicators can run in any order, or in parallel, over one series.
///
/// Per-bar outputs are aligned one-to-one with the input bars; warm-up
/// positions hold NaN.
///
/// [`compute`]: Indicator::compute
///
/// # Example
///
/// ```
/// use chartdeck_ta::{Indicator, PriceSeries, Sma};
/// # use chartdeck_ta::Bar;
/// # use chrono::NaiveDate;
///
/// fn overlay(series: &PriceSeries, indicator: &impl Indicator<Output = Vec<f64>>) -> Vec<f64> {
///     indicator.compute(series)
/// }
///
/// # let bars: Vec<Bar> = (0..4)
/// #     .map(|i| {
/// #         let date = NaiveDate::from_ymd_opt(2024, 1, i + 1).unwrap();
/// #         Bar::new(date, 1.0, 1.0, 1.0, f64::from(i))
/// #     })
/// #     .collect();
/// # let series = PriceSeries::new(bars);
/// let sma = Sma::new(2)?;
/// assert_eq!(overlay(&series, &sma).len(), series.len());
/// # Ok::<(), chartdeck_ta::IndicatorError>(())
/// ```
pub trait Indicator: Sized + Clone + Display + Debug {
    /// Computed output shape. `Vec<f64>` for single-series indicators,
    /// a struct of series for composite ones (e.g. Bollinger Bands).
    type Output: Send + Sync + Debug;

    /// Computes the indicator over the whole series.
    fn compute(&self, series: &PriceSeries) -> Self::Output;
}

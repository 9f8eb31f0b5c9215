use std::fmt::Display;

use serde::Serialize;

use crate::{Indicator, Price, PriceSeries};

const LABELS: [&str; 7] = [
    "0.0%", "23.6%", "38.2%", "50.0%", "61.8%", "78.6%", "100.0%",
];
const RATIOS: [f64; 7] = [0.0, 0.236, 0.382, 0.5, 0.618, 0.786, 1.0];

/// Fibonacci retracement levels.
///
/// Seven horizontal price levels between the series' global maximum
/// high (`0.0%`) and global minimum low (`100.0%`), in descending price
/// order. Not a per-bar series — the levels are drawn as horizontal
/// reference lines across the whole chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FibonacciLevels {
    levels: [(&'static str, Price); 7],
}

impl FibonacciLevels {
    /// Price level for a retracement label, e.g. `"61.8%"`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<Price> {
        self.levels
            .iter()
            .find(|(name, _)| *name == label)
            .map(|&(_, price)| price)
    }

    /// `(label, price)` pairs from `0.0%` (max high) down to `100.0%`
    /// (min low).
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Price)> + '_ {
        self.levels.iter().copied()
    }
}

/// Fibonacci Retracement.
///
/// The only indicator here whose output is not positionally aligned
/// with the input: it summarizes the whole series into a fixed set of
/// scalar levels at the standard retracement ratios
/// (23.6 / 38.2 / 50 / 61.8 / 78.6 %) of the global high-low range.
///
/// An empty series has no extremes; every level is then NaN.
///
/// # Example
///
/// ```
/// use chartdeck_ta::FibonacciRetracement;
/// # use chartdeck_ta::{Bar, PriceSeries};
/// # use chrono::NaiveDate;
///
/// # let bars: Vec<Bar> = (0..3)
/// #     .map(|i| {
/// #         let date = NaiveDate::from_ymd_opt(2024, 1, i + 1).unwrap();
/// #         Bar::new(date, 100.0, 110.0 + f64::from(i) * 5.0, 90.0, 100.0)
/// #     })
/// #     .collect();
/// # let series = PriceSeries::new(bars);
/// let levels = FibonacciRetracement.compute(&series);
///
/// assert_eq!(levels.get("0.0%"), Some(120.0)); // global max high
/// assert_eq!(levels.get("100.0%"), Some(90.0)); // global min low
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FibonacciRetracement;

impl Indicator for FibonacciRetracement {
    type Output = FibonacciLevels;

    fn compute(&self, series: &PriceSeries) -> Self::Output {
        // Folding from NaN ignores the seed (f64::max(NaN, x) = x) and
        // leaves NaN only for an empty series.
        let max_high = series
            .bars()
            .iter()
            .fold(f64::NAN, |acc, bar| acc.max(bar.high));
        let min_low = series
            .bars()
            .iter()
            .fold(f64::NAN, |acc, bar| acc.min(bar.low));
        let range = max_high - min_low;

        let mut levels = [("", 0.0); 7];
        for (i, (slot, (label, ratio))) in levels
            .iter_mut()
            .zip(LABELS.iter().zip(RATIOS))
            .enumerate()
        {
            // Endpoints are the extremes themselves, never recomputed
            // through the range, so they compare equal to the inputs.
            let price = match i {
                0 => max_high,
                6 => min_low,
                _ => ratio.mul_add(-range, max_high),
            };
            *slot = (*label, price);
        }

        FibonacciLevels { levels }
    }
}

impl Display for FibonacciRetracement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FibRetracement")
    }
}

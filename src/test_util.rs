// src/test_util.rs

use crate::{Bar, PriceSeries};
use chrono::{Days, NaiveDate};

/// Asserts that two `f64` values are approximately equal using a
/// relative epsilon of `4 * f64::EPSILON`.
macro_rules! assert_approx {
    ($actual:expr, $expected:expr) => {{
        let (a, e) = ($actual, $expected);
        assert!(
            (a - e).abs() < e.abs() * 4.0 * f64::EPSILON,
            "assert_approx failed: actual={a}, expected={e}, diff={}",
            (a - e).abs(),
        );
    }};
}

pub(crate) use assert_approx;

/// Trading day `day` of a synthetic calendar starting 2024-01-01.
pub fn date(day: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(day - 1))
        .unwrap()
}

/// Series with OHLC all equal to the given closes, on consecutive dates.
pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar::new(date(i as u64 + 1), close, close, close, close))
        .collect();
    PriceSeries::new(bars)
}

/// Series from `(open, high, low, close)` tuples, on consecutive dates.
pub fn series_from_ohlc(ohlc: &[(f64, f64, f64, f64)]) -> PriceSeries {
    let bars = ohlc
        .iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| {
            Bar::new(date(i as u64 + 1), open, high, low, close)
        })
        .collect();
    PriceSeries::new(bars)
}

/// Ramp series: close at bar `i` (0-based) is `base + i`, with high one
/// above and low one below the close. Handy for verifying window edges
/// and shift offsets exactly.
pub fn ramp_series(len: usize, base: f64) -> PriceSeries {
    let bars = (0..len)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let close = base + i as f64;
            Bar::new(date(i as u64 + 1), close, close + 1.0, close - 1.0, close)
        })
        .collect();
    PriceSeries::new(bars)
}

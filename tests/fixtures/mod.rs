#![allow(dead_code)]

use chartdeck_ta::{Bar, PriceSeries};
use chrono::NaiveDate;
use serde::{Deserialize, de::DeserializeOwned};

/// OHLCV bar parsed from the synthetic daily fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Single reference value with its date.
#[derive(Debug, Deserialize)]
pub struct RefValue {
    pub date: NaiveDate,
    pub expected: f64,
}

/// Bollinger reference row.
#[derive(Debug, Deserialize)]
pub struct RefBands {
    pub date: NaiveDate,
    pub middle: f64,
    pub upper: f64,
    pub lower: f64,
}

/// MACD reference row.
#[derive(Debug, Deserialize)]
pub struct RefMacd {
    pub date: NaiveDate,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Stochastic reference row.
#[derive(Debug, Deserialize)]
pub struct RefStoch {
    pub date: NaiveDate,
    pub percent_k: f64,
    pub percent_d: f64,
}

const OHLCV_PATH: &str = "tests/fixtures/data/daily-ohlcv.csv";

/// Load the fixture bars as a [`PriceSeries`].
pub fn load_price_series() -> PriceSeries {
    let bars: Vec<Bar> = load_records::<RefBar>(OHLCV_PATH, "invalid OHLCV record")
        .into_iter()
        .map(|r| Bar::new(r.date, r.open, r.high, r.low, r.close).with_volume(r.volume))
        .collect();
    PriceSeries::new(bars)
}

/// Load single-value reference data (SMA, EMA, RSI, ADX).
pub fn load_ref_values(path: &str) -> Vec<RefValue> {
    load_records(path, "invalid reference record")
}

pub fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Walk an output series against dated reference values: positions with
/// a reference row must match within tolerance, every other position
/// must be the NaN sentinel, and every reference row must be consumed.
pub fn assert_series_matches(
    series: &PriceSeries,
    output: &[f64],
    reference: &[RefValue],
    tolerance: f64,
    context: &str,
) {
    assert_eq!(output.len(), series.len(), "{context}: output misaligned");

    let mut ref_idx = 0;
    for (bar, &actual) in series.bars().iter().zip(output) {
        if ref_idx < reference.len() && bar.date == reference[ref_idx].date {
            assert_near(
                actual,
                reference[ref_idx].expected,
                tolerance,
                &format!("{context} at {}", bar.date),
            );
            ref_idx += 1;
        } else {
            assert!(
                actual.is_nan(),
                "{context} at {}: expected NaN warm-up, got {actual}",
                bar.date
            );
        }
    }

    assert_eq!(
        ref_idx,
        reference.len(),
        "{context}: not all reference values checked: {ref_idx}/{}",
        reference.len()
    );
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::PriceSource;

/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// One trading day's OHLC(V) record.
///
/// The price invariant `low ≤ open, close ≤ high` is an upstream
/// contract; indicators assume it but never enforce it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Calendar date of the trading day. Only ordering matters.
    pub date: NaiveDate,
    /// Opening price.
    pub open: Price,
    /// Highest price of the day.
    pub high: Price,
    /// Lowest price of the day.
    pub low: Price,
    /// Closing price.
    pub close: Price,
    /// Trade volume, if the provider supplies it. Unused by the
    /// indicators in this crate.
    #[serde(default)]
    pub volume: Option<f64>,
}

impl Bar {
    /// Bar without volume.
    #[must_use]
    pub fn new(date: NaiveDate, open: Price, high: Price, low: Price, close: Price) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    /// Sets the volume.
    #[must_use]
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// An immutable, date-ordered sequence of daily bars.
///
/// Constructed once per chart request from the external price provider,
/// already restricted to the requested date range. Bars must be strictly
/// ascending by date with no duplicates; this is the provider's contract
/// and is checked with a debug assertion only.
///
/// All indicators are read-only consumers of a `PriceSeries` and return
/// freshly allocated output aligned one-to-one with its bars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Wraps an ordered bar sequence.
    #[must_use]
    pub fn new(bars: Vec<Bar>) -> Self {
        debug_assert!(
            bars.windows(2).all(|pair| pair[0].date < pair[1].date),
            "bars must be strictly ascending by date with no duplicates",
        );

        Self { bars }
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// `true` if the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The underlying bars, in date order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Closing prices, one per bar.
    #[must_use]
    pub fn closes(&self) -> Vec<Price> {
        self.bars.iter().map(|bar| bar.close).collect()
    }

    /// High prices, one per bar.
    #[must_use]
    pub fn highs(&self) -> Vec<Price> {
        self.bars.iter().map(|bar| bar.high).collect()
    }

    /// Low prices, one per bar.
    #[must_use]
    pub fn lows(&self) -> Vec<Price> {
        self.bars.iter().map(|bar| bar.low).collect()
    }

    /// Extracts the configured price from every bar, threading the
    /// previous close for sources that need it (true range).
    pub(crate) fn values(&self, source: PriceSource) -> Vec<Price> {
        let mut prev_close = None;
        self.bars
            .iter()
            .map(|bar| {
                let value = source.extract(bar, prev_close);
                prev_close = Some(bar.close);
                value
            })
            .collect()
    }
}

impl From<Vec<Bar>> for PriceSeries {
    fn from(bars: Vec<Bar>) -> Self {
        Self::new(bars)
    }
}

use std::fmt::Display;

use serde::Serialize;

use crate::{
    Indicator, IndicatorError, Price, PriceSeries, PriceSource, ema::ewm, error::require_period,
};

/// MACD output: three aligned series, all defined from the first bar
/// (inherited from the EMA's no-warm-up seeding).
///
/// `histogram` is exactly `macd − signal` at every index.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MacdSeries {
    /// `EMA(fast) − EMA(slow)` of the close.
    pub macd: Vec<Price>,
    /// EMA of the MACD line itself, seeded at its first value.
    pub signal: Vec<Price>,
    /// `macd − signal`.
    pub histogram: Vec<Price>,
}

/// Moving Average Convergence Divergence (MACD).
///
/// The difference between a fast and a slow EMA of the close, with a
/// signal line that is an EMA of that difference:
///
/// ```text
/// macd      = EMA(close, fast) − EMA(close, slow)
/// signal    = EMA(macd, signal_span)
/// histogram = macd − signal
/// ```
///
/// # Example
///
/// ```
/// use chartdeck_ta::Macd;
///
/// let macd = Macd::default(); // 12 / 26 / 9
/// assert_eq!(macd.to_string(), "MACD(12, 26, 9)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
}

impl Macd {
    /// Default fast EMA span.
    pub const DEFAULT_FAST: usize = 12;
    /// Default slow EMA span.
    pub const DEFAULT_SLOW: usize = 26;
    /// Default signal EMA span.
    pub const DEFAULT_SIGNAL: usize = 9;

    /// MACD with explicit spans.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if any span is zero.
    pub fn new(fast: usize, slow: usize, signal: usize) -> Result<Self, IndicatorError> {
        Ok(Self {
            fast: require_period("fast", fast)?,
            slow: require_period("slow", slow)?,
            signal: require_period("signal", signal)?,
        })
    }

    /// Fast EMA span.
    #[must_use]
    pub fn fast(&self) -> usize {
        self.fast
    }

    /// Slow EMA span.
    #[must_use]
    pub fn slow(&self) -> usize {
        self.slow
    }

    /// Signal EMA span.
    #[must_use]
    pub fn signal(&self) -> usize {
        self.signal
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast: Self::DEFAULT_FAST,
            slow: Self::DEFAULT_SLOW,
            signal: Self::DEFAULT_SIGNAL,
        }
    }
}

impl Indicator for Macd {
    type Output = MacdSeries;

    fn compute(&self, series: &PriceSeries) -> Self::Output {
        let closes = series.values(PriceSource::Close);

        let fast = ewm(&closes, self.fast);
        let slow = ewm(&closes, self.slow);
        let macd: Vec<Price> = fast.iter().zip(&slow).map(|(&f, &s)| f - s).collect();

        let signal = ewm(&macd, self.signal);
        let histogram = macd.iter().zip(&signal).map(|(&m, &s)| m - s).collect();

        MacdSeries {
            macd,
            signal,
            histogram,
        }
    }
}

impl Display for Macd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MACD({}, {}, {})", self.fast, self.slow, self.signal)
    }
}

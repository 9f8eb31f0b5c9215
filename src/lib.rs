//! Batch technical analysis indicators for daily OHLC price series.
//!
//! Every indicator is a pure function from an immutable [`PriceSeries`]
//! to one or more output series, positionally aligned with the input.
//! Positions without enough trailing history hold [`f64::NAN`] — the
//! single undefined-value sentinel used across the crate. A series
//! shorter than any window produces an all-NaN output, never an error.
//!
//! Each indicator type ([`Sma`], [`Rsi`], [`Macd`], …) exposes an
//! inherent [`compute`](Sma::compute) method — no trait import needed.
//! Import [`Indicator`] only for generic code.
//!
//! # Example
//!
//! ```
//! use chartdeck_ta::{Bar, PriceSeries, Sma};
//! use chrono::NaiveDate;
//!
//! let bars: Vec<Bar> = (0..5)
//!     .map(|i| {
//!         let date = NaiveDate::from_ymd_opt(2024, 1, i + 1).unwrap();
//!         let close = 100.0 + f64::from(i);
//!         Bar::new(date, close, close, close, close)
//!     })
//!     .collect();
//! let series = PriceSeries::new(bars);
//!
//! let sma = Sma::new(3)?;
//! let out = sma.compute(&series);
//!
//! assert_eq!(out.len(), series.len());
//! assert!(out[1].is_nan()); // warm-up
//! assert_eq!(out[2], 101.0);
//! # Ok::<(), chartdeck_ta::IndicatorError>(())
//! ```

mod adx;
mod bb;
mod ema;
mod error;
mod fibonacci;
mod ichimoku;
mod indicator;
mod macd;
mod price_source;
mod rolling;
mod rsi;
mod series;
mod sma;
mod std_dev;
mod stochastic;

pub use crate::error::IndicatorError;
pub use crate::indicator::Indicator;
pub use crate::price_source::PriceSource;
pub use crate::series::{Bar, Price, PriceSeries};

pub use crate::adx::Adx;
pub use crate::bb::{BollingerBands, BollingerSeries};
pub use crate::ema::Ema;
pub use crate::fibonacci::{FibonacciLevels, FibonacciRetracement};
pub use crate::ichimoku::{Ichimoku, IchimokuSeries};
pub use crate::macd::{Macd, MacdSeries};
pub use crate::rsi::Rsi;
pub use crate::sma::Sma;
pub use crate::std_dev::StdDev;
pub use crate::stochastic::{Stochastic, StochasticSeries};

macro_rules! impl_indicator_methods {
    ($type:ty, $output:ty) => {
        impl $type {
            /// See [`Indicator::compute`].
            #[must_use]
            pub fn compute(&self, series: &PriceSeries) -> $output {
                <Self as Indicator>::compute(self, series)
            }
        }
    };
}

impl_indicator_methods!(Sma, Vec<Price>);
impl_indicator_methods!(Ema, Vec<Price>);
impl_indicator_methods!(BollingerBands, BollingerSeries);
impl_indicator_methods!(Rsi, Vec<Price>);
impl_indicator_methods!(Macd, MacdSeries);
impl_indicator_methods!(Stochastic, StochasticSeries);
impl_indicator_methods!(FibonacciRetracement, FibonacciLevels);
impl_indicator_methods!(Ichimoku, IchimokuSeries);
impl_indicator_methods!(StdDev, Vec<Price>);
impl_indicator_methods!(Adx, Vec<Price>);

#[cfg(test)]
mod test_util;

use std::fmt::Display;

use serde::Serialize;

use crate::{
    Indicator, IndicatorError, Price, PriceSeries, error::require_period,
    rolling::{rolling_max, rolling_min, shift_backward, shift_forward},
};

/// Ichimoku Cloud output: five aligned series.
///
/// The two senkou spans are displaced *forward* by the kijun period so
/// the cloud plots ahead of the current price; the chikou span is the
/// close displaced *backward* by the same amount. The directions are
/// opposite on purpose — standard Ichimoku plotting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IchimokuSeries {
    /// Conversion line: midpoint of the trailing tenkan-period high/low.
    pub tenkan_sen: Vec<Price>,
    /// Base line: midpoint of the trailing kijun-period high/low.
    pub kijun_sen: Vec<Price>,
    /// Leading span A: `(tenkan + kijun) / 2`, shifted forward.
    pub senkou_span_a: Vec<Price>,
    /// Leading span B: senkou-period high/low midpoint, shifted forward.
    pub senkou_span_b: Vec<Price>,
    /// Lagging span: the close, shifted backward.
    pub chikou_span: Vec<Price>,
}

/// Ichimoku Cloud.
///
/// Midpoint lines over three lookbacks (standard 9 / 26 / 52) plus the
/// displaced cloud spans. The displacement equals the kijun period —
/// 26 bars with the defaults.
///
/// # Example
///
/// ```
/// use chartdeck_ta::Ichimoku;
///
/// let ichimoku = Ichimoku::default();
/// assert_eq!(ichimoku.to_string(), "Ichimoku(9, 26, 52)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ichimoku {
    tenkan_period: usize,
    kijun_period: usize,
    senkou_period: usize,
}

impl Ichimoku {
    /// Default conversion-line lookback.
    pub const DEFAULT_TENKAN: usize = 9;
    /// Default base-line lookback, also the cloud displacement.
    pub const DEFAULT_KIJUN: usize = 26;
    /// Default leading-span-B lookback.
    pub const DEFAULT_SENKOU: usize = 52;

    /// Cloud with explicit lookbacks. The displacement is
    /// `kijun_period`.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidPeriod`] if any period is zero.
    pub fn new(
        tenkan_period: usize,
        kijun_period: usize,
        senkou_period: usize,
    ) -> Result<Self, IndicatorError> {
        Ok(Self {
            tenkan_period: require_period("tenkan_period", tenkan_period)?,
            kijun_period: require_period("kijun_period", kijun_period)?,
            senkou_period: require_period("senkou_period", senkou_period)?,
        })
    }

    /// Conversion-line lookback.
    #[must_use]
    pub fn tenkan_period(&self) -> usize {
        self.tenkan_period
    }

    /// Base-line lookback; also the cloud displacement.
    #[must_use]
    pub fn kijun_period(&self) -> usize {
        self.kijun_period
    }

    /// Leading-span-B lookback.
    #[must_use]
    pub fn senkou_period(&self) -> usize {
        self.senkou_period
    }

    fn midpoint_line(highs: &[Price], lows: &[Price], period: usize) -> Vec<Price> {
        rolling_max(highs, period)
            .iter()
            .zip(&rolling_min(lows, period))
            .map(|(&high, &low)| f64::midpoint(high, low))
            .collect()
    }
}

impl Default for Ichimoku {
    fn default() -> Self {
        Self {
            tenkan_period: Self::DEFAULT_TENKAN,
            kijun_period: Self::DEFAULT_KIJUN,
            senkou_period: Self::DEFAULT_SENKOU,
        }
    }
}

impl Indicator for Ichimoku {
    type Output = IchimokuSeries;

    fn compute(&self, series: &PriceSeries) -> Self::Output {
        let highs = series.highs();
        let lows = series.lows();
        let displacement = self.kijun_period;

        let tenkan_sen = Self::midpoint_line(&highs, &lows, self.tenkan_period);
        let kijun_sen = Self::midpoint_line(&highs, &lows, self.kijun_period);

        let span_a_raw: Vec<Price> = tenkan_sen
            .iter()
            .zip(&kijun_sen)
            .map(|(&tenkan, &kijun)| f64::midpoint(tenkan, kijun))
            .collect();
        let senkou_span_a = shift_forward(&span_a_raw, displacement);

        let span_b_raw = Self::midpoint_line(&highs, &lows, self.senkou_period);
        let senkou_span_b = shift_forward(&span_b_raw, displacement);

        let chikou_span = shift_backward(&series.closes(), displacement);

        IchimokuSeries {
            tenkan_sen,
            kijun_sen,
            senkou_span_a,
            senkou_span_b,
            chikou_span,
        }
    }
}

impl Display for Ichimoku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ichimoku({}, {}, {})",
            self.tenkan_period, self.kijun_period, self.senkou_period
        )
    }
}

//! One full chart request: every indicator computed over the same
//! immutable fixture series, the way the dashboard's presentation layer
//! consumes them.

mod fixtures;

use chartdeck_ta::{
    Adx, BollingerBands, Ema, FibonacciRetracement, Ichimoku, Macd, Rsi, Sma, StdDev, Stochastic,
};
use fixtures::load_price_series;

#[test]
fn all_per_bar_outputs_align_with_the_input() {
    let series = load_price_series();
    let n = series.len();

    assert_eq!(Sma::default().compute(&series).len(), n);
    assert_eq!(Ema::default().compute(&series).len(), n);
    assert_eq!(StdDev::default().compute(&series).len(), n);
    assert_eq!(Rsi::default().compute(&series).len(), n);
    assert_eq!(Adx::default().compute(&series).len(), n);

    let bands = BollingerBands::default().compute(&series);
    assert_eq!(bands.middle.len(), n);
    assert_eq!(bands.upper.len(), n);
    assert_eq!(bands.lower.len(), n);

    let macd = Macd::default().compute(&series);
    assert_eq!(macd.macd.len(), n);
    assert_eq!(macd.signal.len(), n);
    assert_eq!(macd.histogram.len(), n);

    let stoch = Stochastic::default().compute(&series);
    assert_eq!(stoch.percent_k.len(), n);
    assert_eq!(stoch.percent_d.len(), n);

    let cloud = Ichimoku::default().compute(&series);
    assert_eq!(cloud.tenkan_sen.len(), n);
    assert_eq!(cloud.kijun_sen.len(), n);
    assert_eq!(cloud.senkou_span_a.len(), n);
    assert_eq!(cloud.senkou_span_b.len(), n);
    assert_eq!(cloud.chikou_span.len(), n);
}

#[test]
fn fibonacci_levels_bracket_the_fixture_extremes() {
    let series = load_price_series();
    let levels = FibonacciRetracement.compute(&series);

    let max_high = series
        .bars()
        .iter()
        .fold(f64::NAN, |acc, bar| acc.max(bar.high));
    let min_low = series
        .bars()
        .iter()
        .fold(f64::NAN, |acc, bar| acc.min(bar.low));

    assert_eq!(levels.get("0.0%"), Some(max_high));
    assert_eq!(levels.get("100.0%"), Some(min_low));
    for (label, price) in levels.iter() {
        if label != "0.0%" && label != "100.0%" {
            assert!(
                price > min_low && price < max_high,
                "{label} = {price} outside ({min_low}, {max_high})"
            );
        }
    }
}

#[test]
fn ichimoku_chikou_is_the_shifted_close_on_fixture_data() {
    let series = load_price_series();
    let cloud = Ichimoku::default().compute(&series);
    let closes = series.closes();

    for i in 0..series.len() - 26 {
        assert_eq!(cloud.chikou_span[i], closes[i + 26], "chikou broken at {i}");
    }
}

#[test]
fn indicators_do_not_disturb_the_series() {
    let series = load_price_series();
    let snapshot = series.clone();

    let _ = Sma::default().compute(&series);
    let _ = Macd::default().compute(&series);
    let _ = Ichimoku::default().compute(&series);
    let _ = FibonacciRetracement.compute(&series);

    assert_eq!(series, snapshot);
}

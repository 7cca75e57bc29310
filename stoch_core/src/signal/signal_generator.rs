use crate::common::{
    enums::Signal,
    utils::{opt_gt, opt_lt},
};
use crate::kline::price_bar::{IndicatorRow, SignalRow};

/// Classify one bar from the previous and current %K/%D values.
///
/// BUY: %K crosses above %D while %K is below `oversold`.
/// SELL: %K crosses below %D while %K is above `overbought`.
/// Any comparison against an undefined value is false, so missing
/// history or a flat range always yields `Signal::Neutral`.
pub fn classify(prev: &IndicatorRow, cur: &IndicatorRow, overbought: f64, oversold: f64) -> Signal {
    let (pk, pd) = (prev.percent_k, prev.percent_d);
    let (k, d) = (cur.percent_k, cur.percent_d);

    if pk.is_none() || pd.is_none() {
        return Signal::Neutral;
    }
    if opt_lt(pk, pd) && opt_gt(k, d) && opt_lt(k, Some(oversold)) {
        Signal::Buy
    } else if opt_gt(pk, pd) && opt_lt(k, d) && opt_gt(k, Some(overbought)) {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Attach a signal to every row. The first row has no predecessor and is
/// always neutral.
pub fn generate_signals(rows: &[IndicatorRow], overbought: f64, oversold: f64) -> Vec<SignalRow> {
    let first = rows.first().map(|row| SignalRow {
        row: *row,
        signal: Signal::Neutral,
    });

    first
        .into_iter()
        .chain(rows.windows(2).map(|pair| SignalRow {
            row: pair[1],
            signal: classify(&pair[0], &pair[1], overbought, oversold),
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kline::price_bar::PriceBar;
    use chrono::NaiveDate;

    fn row(k: Option<f64>, d: Option<f64>) -> IndicatorRow {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        IndicatorRow {
            bar: PriceBar::new(date, 1.0, 1.0, 1.0, 1.0),
            percent_k: k,
            percent_d: d,
        }
    }

    fn signals(rows: &[IndicatorRow]) -> Vec<Signal> {
        generate_signals(rows, 80.0, 20.0).iter().map(|r| r.signal).collect()
    }

    #[test]
    fn test_bullish_cross_in_oversold() {
        let rows = [row(Some(10.0), Some(12.0)), row(Some(15.0), Some(13.0))];
        assert_eq!(signals(&rows), vec![Signal::Neutral, Signal::Buy]);
    }

    #[test]
    fn test_bullish_cross_outside_oversold_is_neutral() {
        let rows = [row(Some(40.0), Some(45.0)), row(Some(50.0), Some(44.0))];
        assert_eq!(signals(&rows), vec![Signal::Neutral, Signal::Neutral]);
    }

    #[test]
    fn test_bearish_cross_in_overbought() {
        let rows = [row(Some(92.0), Some(88.0)), row(Some(85.0), Some(87.0))];
        assert_eq!(signals(&rows), vec![Signal::Neutral, Signal::Sell]);
    }

    #[test]
    fn test_threshold_bounds_are_strict() {
        let rows = [row(Some(10.0), Some(12.0)), row(Some(20.0), Some(13.0))];
        assert_eq!(signals(&rows)[1], Signal::Neutral);
        let rows = [row(Some(92.0), Some(88.0)), row(Some(80.0), Some(87.0))];
        assert_eq!(signals(&rows)[1], Signal::Neutral);
    }

    #[test]
    fn test_undefined_previous_is_neutral() {
        let rows = [row(Some(10.0), None), row(Some(15.0), Some(13.0))];
        assert_eq!(signals(&rows)[1], Signal::Neutral);
        let rows = [row(None, Some(12.0)), row(Some(15.0), Some(13.0))];
        assert_eq!(signals(&rows)[1], Signal::Neutral);
    }

    #[test]
    fn test_undefined_current_is_neutral() {
        let rows = [row(Some(10.0), Some(12.0)), row(None, Some(13.0))];
        assert_eq!(signals(&rows)[1], Signal::Neutral);
        let rows = [row(Some(92.0), Some(88.0)), row(Some(85.0), None)];
        assert_eq!(signals(&rows)[1], Signal::Neutral);
    }

    #[test]
    fn test_no_cross_is_neutral() {
        let rows = [row(Some(10.0), Some(12.0)), row(Some(11.0), Some(12.0))];
        assert_eq!(signals(&rows)[1], Signal::Neutral);
    }

    #[test]
    fn test_length_preserved() {
        assert!(generate_signals(&[], 80.0, 20.0).is_empty());
        let rows = [row(None, None)];
        assert_eq!(signals(&rows), vec![Signal::Neutral]);
        let rows = vec![row(Some(50.0), Some(50.0)); 7];
        assert_eq!(generate_signals(&rows, 80.0, 20.0).len(), 7);
    }

    #[test]
    fn test_signal_row_keeps_indicator_values() {
        let rows = [row(Some(10.0), Some(12.0)), row(Some(15.0), Some(13.0))];
        let out = generate_signals(&rows, 80.0, 20.0);
        assert_eq!(out[1].row, rows[1]);
    }
}

use tracing::debug;

use crate::common::enums::Signal;
use crate::config::stoch_config::StochConfig;
use crate::kline::price_bar::{PriceBar, SignalRow};
use crate::math::stochastic::compute_stochastic;
use crate::signal::signal_generator::generate_signals;

/// Runs the indicator and signal stages over a date-ordered bar series
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: StochConfig,
}

impl Analyzer {
    pub fn new(config: StochConfig) -> Self {
        Self { config }
    }

    /// Compute %K/%D and signals for `bars`. Pure: same input, same output.
    pub fn run(&self, bars: &[PriceBar]) -> Vec<SignalRow> {
        let conf = &self.config;
        if bars.len() < conf.min_history() {
            debug!(
                bars = bars.len(),
                needed = conf.min_history(),
                "not enough history for a defined %D"
            );
        }

        let indicators = compute_stochastic(bars, conf.k_window, conf.d_window);
        let rows = generate_signals(&indicators, conf.overbought, conf.oversold);

        let counts = signal_counts(&rows);
        debug!(
            bars = rows.len(),
            buy = counts.buy,
            sell = counts.sell,
            "stochastic signals computed"
        );
        rows
    }
}

/// The latest row, in sequence order, carrying a BUY or SELL
pub fn last_signal(rows: &[SignalRow]) -> Option<&SignalRow> {
    rows.iter().rev().find(|row| row.signal.is_actionable())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalCounts {
    pub buy: usize,
    pub sell: usize,
}

pub fn signal_counts(rows: &[SignalRow]) -> SignalCounts {
    rows.iter().fold(SignalCounts::default(), |mut acc, row| {
        match row.signal {
            Signal::Buy => acc.buy += 1,
            Signal::Sell => acc.sell += 1,
            Signal::Neutral => {}
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    // Fixed 0..10 range per bar, so %K is simply close * 10 once the
    // window is full.
    fn bars(closes: &[f64]) -> Vec<PriceBar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PriceBar::new(start() + Days::new(i as u64), c, 10.0, 0.0, c))
            .collect()
    }

    fn swing() -> Vec<PriceBar> {
        bars(&[5.0, 5.0, 5.0, 1.0, 0.5, 1.5, 5.0, 9.5, 9.8, 8.5])
    }

    fn analyzer(k_window: usize, d_window: usize) -> Analyzer {
        Analyzer::new(StochConfig::new(k_window, d_window, 80.0, 20.0).unwrap())
    }

    #[test]
    fn test_buy_then_sell() {
        let rows = analyzer(3, 2).run(&swing());
        let signals: Vec<Signal> = rows.iter().map(|r| r.signal).collect();
        assert_eq!(signals[5], Signal::Buy);
        assert_eq!(signals[9], Signal::Sell);
        assert_eq!(signal_counts(&rows), SignalCounts { buy: 1, sell: 1 });

        let last = last_signal(&rows).unwrap();
        assert_eq!(last.signal, Signal::Sell);
        assert_eq!(last.date(), start() + Days::new(9));
    }

    #[test]
    fn test_last_signal_picks_latest() {
        let mut input = swing();
        input.pop();
        let rows = analyzer(3, 2).run(&input);
        let last = last_signal(&rows).unwrap();
        assert_eq!(last.signal, Signal::Buy);
        assert_eq!(last.date(), start() + Days::new(5));
    }

    #[test]
    fn test_no_signal() {
        let rows = analyzer(3, 3).run(&bars(&[7.0; 5]));
        assert!(rows.iter().all(|r| r.signal == Signal::Neutral));
        assert!(last_signal(&rows).is_none());
    }

    #[test]
    fn test_constant_range_has_no_signal() {
        let input: Vec<PriceBar> = (0..5)
            .map(|i| PriceBar::new(start() + Days::new(i), 7.0, 10.0, 5.0, 7.0))
            .collect();
        let rows = analyzer(3, 3).run(&input);
        assert_eq!(rows.len(), 5);
        assert!(rows[0].row.percent_k.is_none() && rows[1].row.percent_k.is_none());
        for row in &rows[2..] {
            assert!((row.row.percent_k.unwrap() - 40.0).abs() < 1e-9);
        }
        assert!(rows.iter().all(|r| r.signal == Signal::Neutral));
        assert!(last_signal(&rows).is_none());
    }

    #[test]
    fn test_max_window_is_all_neutral() {
        let rows = Analyzer::new(StochConfig::new(usize::MAX, 3, 80.0, 20.0).unwrap()).run(&swing());
        assert_eq!(rows.len(), 10);
        assert!(rows
            .iter()
            .all(|r| r.row.percent_k.is_none() && r.signal == Signal::Neutral));
        assert!(last_signal(&rows).is_none());
    }

    #[test]
    fn test_short_series_is_all_neutral() {
        let rows = Analyzer::new(StochConfig::default()).run(&swing());
        assert_eq!(rows.len(), 10);
        assert!(rows
            .iter()
            .all(|r| r.row.percent_k.is_none() && r.row.percent_d.is_none()));
        assert!(last_signal(&rows).is_none());
    }

    #[test]
    fn test_d_window_one_never_crosses() {
        let rows = analyzer(3, 1).run(&swing());
        for row in &rows {
            assert_eq!(row.row.percent_k, row.row.percent_d);
        }
        assert!(last_signal(&rows).is_none());
    }

    #[test]
    fn test_empty_input() {
        let rows = analyzer(3, 2).run(&[]);
        assert!(rows.is_empty());
        assert!(last_signal(&rows).is_none());
    }

    #[test]
    fn test_run_is_deterministic() {
        let a = analyzer(3, 2);
        let input = swing();
        assert_eq!(a.run(&input), a.run(&input));
    }
}

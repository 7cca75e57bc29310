use std::collections::VecDeque;

use crate::common::utils::{rolling_max, rolling_mean, rolling_min};
use crate::kline::price_bar::{IndicatorRow, PriceBar};

/// %K for one bar given its window extremes. A flat window has no
/// defined position, so it yields `None` instead of dividing by zero.
fn percent_k(close: f64, lowest: f64, highest: f64) -> Option<f64> {
    let range = highest - lowest;
    if range == 0.0 {
        return None;
    }
    let k = 100.0 * (close - lowest) / range;
    k.is_finite().then_some(k)
}

/// Compute %K and %D for every bar of a date-ordered series.
///
/// `percent_k[i]` looks at bars `[i + 1 - k_window, i]` only; `percent_d[i]`
/// is the mean of the last `d_window` %K values and is undefined if any of
/// them is. Output has the same length and order as `bars`.
pub fn compute_stochastic(bars: &[PriceBar], k_window: usize, d_window: usize) -> Vec<IndicatorRow> {
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();

    let highest = rolling_max(&highs, k_window);
    let lowest = rolling_min(&lows, k_window);

    let k_line: Vec<Option<f64>> = bars
        .iter()
        .zip(lowest.iter().zip(highest.iter()))
        .map(|(bar, (lo, hi))| match (lo, hi) {
            (Some(lo), Some(hi)) => percent_k(bar.close, *lo, *hi),
            _ => None,
        })
        .collect();
    let d_line = rolling_mean(&k_line, d_window);

    bars.iter()
        .zip(k_line.into_iter().zip(d_line))
        .map(|(bar, (percent_k, percent_d))| IndicatorRow {
            bar: *bar,
            percent_k,
            percent_d,
        })
        .collect()
}

const MAX_PREALLOC: usize = 1024;

/// Streaming form of [`compute_stochastic`]: feed bars one at a time in
/// date order and get the same rows back.
#[derive(Debug, Clone)]
pub struct StochasticModel {
    k_window: usize,
    d_window: usize,
    highs: VecDeque<f64>,
    lows: VecDeque<f64>,
    k_values: VecDeque<Option<f64>>,
}

impl StochasticModel {
    pub fn new(k_window: usize, d_window: usize) -> Self {
        Self {
            k_window,
            d_window,
            highs: VecDeque::with_capacity(k_window.min(MAX_PREALLOC)),
            lows: VecDeque::with_capacity(k_window.min(MAX_PREALLOC)),
            k_values: VecDeque::with_capacity(d_window.min(MAX_PREALLOC)),
        }
    }

    pub fn add(&mut self, bar: &PriceBar) -> IndicatorRow {
        self.highs.push_back(bar.high);
        self.lows.push_back(bar.low);
        if self.highs.len() > self.k_window {
            self.highs.pop_front();
            self.lows.pop_front();
        }

        let k = if self.k_window > 0 && self.highs.len() == self.k_window {
            let highest = self.highs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let lowest = self.lows.iter().copied().fold(f64::INFINITY, f64::min);
            percent_k(bar.close, lowest, highest)
        } else {
            None
        };

        self.k_values.push_back(k);
        if self.k_values.len() > self.d_window {
            self.k_values.pop_front();
        }

        let d = if self.d_window > 0 && self.k_values.len() == self.d_window {
            self.k_values
                .iter()
                .copied()
                .sum::<Option<f64>>()
                .map(|total| total / self.d_window as f64)
        } else {
            None
        };

        IndicatorRow {
            bar: *bar,
            percent_k: k,
            percent_d: d,
        }
    }
}

use chrono::NaiveDate;

use crate::common::{
    enums::Signal,
    stoch_exception::{ErrCode, StochError},
};

/// One OHLC row of the input series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }

    /// Sanity check of the bar's price relations. The indicator pipeline
    /// assumes these hold but never calls this itself.
    pub fn check(&self) -> Result<(), StochError> {
        let min_price = self.open.min(self.close);
        let max_price = self.open.max(self.close);

        if self.low < 0.0 {
            return Err(StochError::new(
                format!("{} low price={} is below zero", self.date, self.low),
                ErrCode::KlDataInvalid,
            ));
        }
        if self.low > min_price {
            return Err(StochError::new(
                format!(
                    "{} low price={} is not min of [low={}, open={}, high={}, close={}]",
                    self.date, self.low, self.low, self.open, self.high, self.close
                ),
                ErrCode::KlDataInvalid,
            ));
        }
        if self.high < max_price || self.high < self.low {
            return Err(StochError::new(
                format!(
                    "{} high price={} is not max of [low={}, open={}, high={}, close={}]",
                    self.date, self.high, self.low, self.open, self.high, self.close
                ),
                ErrCode::KlDataInvalid,
            ));
        }
        Ok(())
    }
}

/// A bar with its %K and %D values. `None` means undefined: not enough
/// history yet, or a flat high-low range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRow {
    pub bar: PriceBar,
    pub percent_k: Option<f64>,
    pub percent_d: Option<f64>,
}

/// An indicator row with its crossover signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalRow {
    pub row: IndicatorRow,
    pub signal: Signal,
}

impl SignalRow {
    pub fn date(&self) -> NaiveDate {
        self.row.bar.date
    }
}

use crate::common::stoch_exception::{ErrCode, StochError};

/// Stochastic oscillator and signal configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StochConfig {
    /// Lookback window for %K
    pub k_window: usize,
    /// Moving average window for %D
    pub d_window: usize,
    pub overbought: f64,
    pub oversold: f64,
}

impl Default for StochConfig {
    fn default() -> Self {
        Self {
            k_window: 14,
            d_window: 3,
            overbought: 80.0,
            oversold: 20.0,
        }
    }
}

impl StochConfig {
    pub fn new(
        k_window: usize,
        d_window: usize,
        overbought: f64,
        oversold: f64,
    ) -> Result<Self, StochError> {
        let config = Self {
            k_window,
            d_window,
            overbought,
            oversold,
        };
        config.check()?;
        Ok(config)
    }

    pub fn check(&self) -> Result<(), StochError> {
        if self.k_window == 0 {
            return Err(StochError::new("k_window must be >= 1", ErrCode::ParaError));
        }
        if self.d_window == 0 {
            return Err(StochError::new("d_window must be >= 1", ErrCode::ParaError));
        }
        if !self.overbought.is_finite() {
            return Err(StochError::new(
                format!("overbought={} is not a finite number", self.overbought),
                ErrCode::ParaError,
            ));
        }
        if !self.oversold.is_finite() {
            return Err(StochError::new(
                format!("oversold={} is not a finite number", self.oversold),
                ErrCode::ParaError,
            ));
        }
        Ok(())
    }

    /// Thresholds are accepted in any order; callers may want to warn.
    pub fn thresholds_inverted(&self) -> bool {
        self.overbought <= self.oversold
    }

    /// Bars needed before the first defined %D, saturating at `usize::MAX`
    pub fn min_history(&self) -> usize {
        self.k_window.saturating_add(self.d_window).saturating_sub(1)
    }
}

//! CLI argument parsing.
//!
//! ```bash
//! stoch_cli prices.csv
//! stoch_cli prices.csv --k-window 10 --d-window 5 --overbought 85 --oversold 15
//! ```

use std::path::PathBuf;

use clap::Parser;
use stoch_core::StochConfig;

use crate::error::{CliError, Result};

/// Simple Stochastic Oscillator strategy
#[derive(Parser, Debug, Clone)]
#[command(name = "stoch_cli")]
#[command(author, version, about = "Simple Stochastic Oscillator strategy")]
pub struct Args {
    /// Path to CSV with OHLC data
    pub csv: PathBuf,

    /// Lookback window for %K
    #[arg(long, default_value_t = 14)]
    pub k_window: usize,

    /// Moving average window for %D
    #[arg(long, default_value_t = 3)]
    pub d_window: usize,

    /// Overbought threshold
    #[arg(long, default_value_t = 80.0)]
    pub overbought: f64,

    /// Oversold threshold
    #[arg(long, default_value_t = 20.0)]
    pub oversold: f64,

    /// Reject bars whose high/low do not bracket open and close
    #[arg(long)]
    pub strict: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build a validated core configuration from the flags.
    pub fn to_config(&self) -> Result<StochConfig> {
        StochConfig::new(self.k_window, self.d_window, self.overbought, self.oversold).map_err(|e| {
            CliError::InvalidArgument {
                argument: self.offending_flag().to_string(),
                reason: e.msg,
            }
        })
    }

    fn offending_flag(&self) -> &'static str {
        if self.k_window == 0 {
            "--k-window"
        } else if self.d_window == 0 {
            "--d-window"
        } else if !self.overbought.is_finite() {
            "--overbought"
        } else {
            "--oversold"
        }
    }
}

//! Command-line front end for the stochastic oscillator signal pipeline.
//!
//! Loads OHLC bars from CSV, runs [`stoch_core::Analyzer`] and reports the
//! most recent BUY/SELL signal.

pub mod args;
pub mod csv_loader;
pub mod error;
pub mod report;

pub use error::{CliError, Result};

use stoch_core::{last_signal, Analyzer};
use tracing::{info, warn};

use crate::args::Args;

/// Full run for parsed arguments; returns the line to print.
pub fn run(args: &Args) -> Result<String> {
    let config = args.to_config()?;
    if config.thresholds_inverted() {
        warn!(
            overbought = config.overbought,
            oversold = config.oversold,
            "overbought threshold is not above oversold"
        );
    }

    let bars = csv_loader::load_bars(&args.csv)?;
    if args.strict {
        csv_loader::validate_bars(&bars)?;
    }

    let rows = Analyzer::new(config).run(&bars);
    let last = last_signal(&rows);
    if let Some(row) = last {
        info!(date = %row.date(), signal = %row.signal, "latest signal");
    }
    Ok(report::format_report(last))
}

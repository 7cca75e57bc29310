//! Formats the single line printed on stdout.

use stoch_core::SignalRow;

pub const NO_SIGNAL_MESSAGE: &str = "No recent signals";

/// `YYYY-MM-DD -> BUY|SELL`, or the fixed no-signal message.
pub fn format_report(last: Option<&SignalRow>) -> String {
    match last {
        Some(row) => format!("{} -> {}", row.date().format("%Y-%m-%d"), row.signal),
        None => NO_SIGNAL_MESSAGE.to_string(),
    }
}

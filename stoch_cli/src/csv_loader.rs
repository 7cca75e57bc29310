//! Reads OHLC bars from a headered CSV file.
//!
//! The columns `Date`, `Open`, `High`, `Low` and `Close` are required and
//! matched case-sensitively; any other column is ignored. Dates may carry a
//! time of day, which is dropped. Bars come back sorted by date ascending,
//! keeping file order for equal dates.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use stoch_core::PriceBar;
use tracing::debug;

use crate::error::{CliError, Result};

pub const REQUIRED_COLUMNS: [&str; 5] = ["Date", "Open", "High", "Low", "Close"];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
}

/// Load and date-sort the bars of the CSV at `path`.
pub fn load_bars<P: AsRef<Path>>(path: P) -> Result<Vec<PriceBar>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let bars = load_bars_from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), bars = bars.len(), "loaded price bars");
    Ok(bars)
}

/// Load and date-sort bars from any CSV source.
pub fn load_bars_from_reader<R: Read>(reader: R) -> Result<Vec<PriceBar>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    check_headers(&headers)?;

    let mut bars = Vec::new();
    for result in rdr.records() {
        let record = result?;
        bars.push(parse_record(&record, &headers)?);
    }

    bars.sort_by_key(|bar| bar.date);
    Ok(bars)
}

/// Run [`PriceBar::check`] over every bar, failing on the first bad one.
pub fn validate_bars(bars: &[PriceBar]) -> Result<()> {
    for bar in bars {
        bar.check()?;
    }
    Ok(())
}

fn check_headers(headers: &StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CliError::CsvParse {
                message: format!("missing required column '{column}'"),
                line: Some(1),
            });
        }
    }
    Ok(())
}

fn parse_record(record: &StringRecord, headers: &StringRecord) -> Result<PriceBar> {
    let line = record.position().map(|p| p.line());
    let raw: CsvRecord = record.deserialize(Some(headers))?;

    let date = parse_date(raw.date.trim()).ok_or_else(|| CliError::CsvParse {
        message: format!("cannot parse '{}' as a date", raw.date),
        line,
    })?;

    for (name, value) in [
        ("Open", raw.open),
        ("High", raw.high),
        ("Low", raw.low),
        ("Close", raw.close),
    ] {
        if !value.is_finite() {
            return Err(CliError::CsvParse {
                message: format!("{name} value {value} is not a finite number"),
                line,
            });
        }
    }

    Ok(PriceBar::new(date, raw.open, raw.high, raw.low, raw.close))
}

/// Parse a calendar date, accepting a trailing time of day.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

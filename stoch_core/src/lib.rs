pub mod analyzer;
pub mod common;
pub mod config;
pub mod kline;
pub mod math;
pub mod signal;

pub use analyzer::analyzer::{last_signal, signal_counts, Analyzer, SignalCounts};
pub use common::enums::Signal;
pub use common::stoch_exception::{ErrCode, StochError};
pub use config::stoch_config::StochConfig;
pub use kline::price_bar::{IndicatorRow, PriceBar, SignalRow};
pub use math::stochastic::{compute_stochastic, StochasticModel};
pub use signal::signal_generator::generate_signals;

use strum_macros::{Display, EnumString};

/// Per-bar trading signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
pub enum Signal {
    #[strum(serialize = "BUY")]
    Buy,
    #[strum(serialize = "SELL")]
    Sell,
    #[default]
    #[strum(serialize = "NONE")]
    Neutral,
}

impl Signal {
    /// Check if this signal should be reported
    pub fn is_actionable(&self) -> bool {
        matches!(self, Signal::Buy | Signal::Sell)
    }
}

use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Error codes for the stochastic pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    #[strum(serialize = "PARA_ERROR")]
    ParaError = 5,
    #[strum(serialize = "KL_DATA_INVALID")]
    KlDataInvalid = 203,
}

/// Failure raised by the core. Undefined indicator values are not errors
/// and never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{errcode}: {msg}")]
pub struct StochError {
    pub errcode: ErrCode,
    pub msg: String,
}

impl StochError {
    pub fn new(message: impl Into<String>, code: ErrCode) -> Self {
        Self {
            errcode: code,
            msg: message.into(),
        }
    }
}

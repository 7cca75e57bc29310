pub mod enums;
pub mod stoch_exception;
pub mod utils;

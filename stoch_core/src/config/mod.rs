pub mod stoch_config;

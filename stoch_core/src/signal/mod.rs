pub mod signal_generator;

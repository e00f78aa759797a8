//! Configuration file parsing and validation

pub mod precheck_toml;

pub use precheck_toml::{CONFIG_FILE, ColorOption, Config, GuardConfig, OutputConfig, OutputFormat};

//! Logger configuration
//!
//! - `parse`: console band and file sink spec strings
//! - `file`: the `LoggerConfig` document and its sources (file, environment)

mod file;
mod parse;

pub use file::{
    ConsoleSettings, LoggerConfig, CONFIG_ENV, CONSOLE_ENV, CONSOLE_LEVELS_ENV, FILES_ENV,
    PREFIX_ENV, SYSLOG_ENV,
};
pub use parse::{parse_band, parse_file_specs, FileSinkSpec};

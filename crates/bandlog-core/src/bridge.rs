//! `log` facade backend
//!
//! Lets crates that log through the `log` macros reach the same sinks. The
//! record target becomes the tag.

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

use crate::dispatcher::Dispatcher;
use crate::global;
use crate::level::Severity;

/// Map a `log` level onto a severity
pub fn severity_for(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Severe,
        Level::Warn => Severity::Warning,
        Level::Info => Severity::Info,
        Level::Debug | Level::Trace => Severity::Debug,
    }
}

/// Forwards `log` records into a dispatcher
#[derive(Debug, Clone, Copy)]
pub struct LogBridge {
    dispatcher: &'static Dispatcher,
}

impl LogBridge {
    pub fn new(dispatcher: &'static Dispatcher) -> Self {
        Self { dispatcher }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        let severity = severity_for(metadata.level());
        self.dispatcher.console().fires(severity)
            || self.dispatcher.matching_sinks(severity).next().is_some()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        self.dispatcher
            .log(severity_for(record.level()), record.target(), &message);
    }

    // Every sink write is already flushed.
    fn flush(&self) {}
}

/// Install the process-wide dispatcher as the `log` backend
pub fn install_log_bridge(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(global::dispatcher())))?;
    log::set_max_level(max_level);
    Ok(())
}

//! Error details attached to a log call

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt::Write as _;

/// Message and trace text of an error attached to a log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    message: String,
    trace: String,
}

impl ErrorDetail {
    /// Create a detail from already rendered text
    pub fn new(message: impl Into<String>, trace: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: trace.into(),
        }
    }

    /// Render an error and its `source()` chain
    ///
    /// The trace holds the error's display line, one `Caused by:` line per
    /// source, and the current backtrace when `RUST_BACKTRACE` enables it.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let message = err.to_string();
        let mut trace = message.clone();
        trace.push('\n');

        let mut source = err.source();
        while let Some(cause) = source {
            let _ = writeln!(trace, "Caused by: {}", cause);
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            let _ = writeln!(trace, "{}", backtrace);
        }

        Self { message, trace }
    }

    /// The error's own message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace text, without color codes
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Trace text guaranteed to end with a newline
    pub(crate) fn trace_block(&self) -> String {
        let mut block = self.trace.clone();
        if !block.ends_with('\n') {
            block.push('\n');
        }
        block
    }
}

impl<E: Error + 'static> From<&E> for ErrorDetail {
    fn from(err: &E) -> Self {
        Self::from_error(err)
    }
}

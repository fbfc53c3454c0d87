//! Logger trait definition

use std::sync::Arc;

use crate::detail::ErrorDetail;
use crate::level::Severity;

/// Severity-leveled logging handle
///
/// Implementations:
/// - `TaggedLogger`: routes through a `Dispatcher` under a fixed tag
/// - `NoOpLogger`: silent logger for testing
pub trait Logger: Send + Sync {
    /// Log a message
    fn log(&self, severity: Severity, message: &str);

    /// Log a message followed by an error trace
    fn log_detail(&self, severity: Severity, message: &str, detail: &ErrorDetail);

    fn fatal(&self, message: &str) {
        self.log(Severity::Fatal, message);
    }

    fn severe(&self, message: &str) {
        self.log(Severity::Severe, message);
    }

    fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Convenience macros for logging through a `Logger` value
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_severe {
    ($logger:expr, $($arg:tt)*) => {
        $logger.severe(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

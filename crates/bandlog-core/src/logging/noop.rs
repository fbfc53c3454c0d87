//! No-op logger implementation

use super::traits::Logger;
use crate::detail::ErrorDetail;
use crate::level::Severity;

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn log(&self, _severity: Severity, _message: &str) {}
    fn log_detail(&self, _severity: Severity, _message: &str, _detail: &ErrorDetail) {}
}

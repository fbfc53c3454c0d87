//! Console band policy

use crate::level::Severity;

/// Console settings, fixed once the dispatcher is built
///
/// A severity fires when `severity.rank() <= min.rank()` and
/// `severity.rank() >= max.rank()`: `min` is the least severe and `max` the
/// most severe level printed. Unlike the sink registry there is no bucket
/// scan; both ends are compared directly against the severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsolePolicy {
    pub enabled: bool,
    pub min_level: Severity,
    pub max_level: Severity,
    pub syslog: bool,
}

impl Default for ConsolePolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            min_level: Severity::Debug,
            max_level: Severity::Fatal,
            syslog: false,
        }
    }
}

impl ConsolePolicy {
    pub fn new(min_level: Severity, max_level: Severity) -> Self {
        Self {
            min_level,
            max_level,
            ..Self::default()
        }
    }

    /// A policy that never prints
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_syslog(mut self, syslog: bool) -> Self {
        self.syslog = syslog;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether a line at `severity` is printed on the console
    pub fn fires(&self, severity: Severity) -> bool {
        self.enabled
            && severity.rank() <= self.min_level.rank()
            && severity.rank() >= self.max_level.rank()
    }
}

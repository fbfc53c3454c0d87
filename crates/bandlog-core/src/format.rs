//! Canonical line formatting

use chrono::Local;

use crate::level::Severity;

/// Timestamp layout of every log line (`dd-MM-yyyy HH:mm:ss`)
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Source of line timestamps
pub trait Timestamp: Send + Sync {
    /// Current time, already formatted
    fn timestamp(&self) -> String;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Timestamp for LocalClock {
    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// A clock that always returns the same text
///
/// Useful for testing.
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Timestamp for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

/// Build the canonical line:
/// `[timestamp]\t[prefix]\t[SEVERITY]\t[tag]\tmessage`
///
/// The prefix segment is only present in syslog mode.
pub fn format_line(
    timestamp: &str,
    syslog_prefix: Option<&str>,
    severity: Severity,
    tag: &str,
    message: &str,
) -> String {
    match syslog_prefix {
        Some(prefix) => format!(
            "[{}]\t[{}]\t[{}]\t[{}]\t{}",
            timestamp, prefix, severity, tag, message
        ),
        None => format!("[{}]\t[{}]\t[{}]\t{}", timestamp, severity, tag, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_format_line() {
        let line = format_line("01-02-2024 03:04:05", None, Severity::Warning, "net", "conn lost");
        assert_eq!(line, "[01-02-2024 03:04:05]\t[WARNING]\t[net]\tconn lost");
    }

    #[test]
    fn test_format_line_syslog() {
        let line = format_line("01-02-2024 03:04:05", Some(""), Severity::Info, "db", "ready");
        assert_eq!(line, "[01-02-2024 03:04:05]\t[]\t[INFO]\t[db]\tready");
    }

    #[test]
    fn test_local_clock_layout() {
        let ts = LocalClock.timestamp();
        assert_eq!(ts.len(), "dd-MM-yyyy HH:mm:ss".len());
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }
}

//! Severity levels

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// ANSI sequence that ends a decorated line
pub const RESET: &str = "\u{1B}[0m";

/// Ordered log severity
///
/// Declaration order is the rank: `Fatal` is rank 0 (most severe) and `Debug`
/// is the highest rank (least severe). The derived `Ord` follows rank, so
/// `Severity::Fatal < Severity::Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Fatal,
    Severe,
    Warning,
    Info,
    Debug,
}

impl Severity {
    /// Every severity, in rank order
    pub const ALL: [Severity; 5] = [
        Severity::Fatal,
        Severity::Severe,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
    ];

    /// Number of severities
    pub const COUNT: usize = Self::ALL.len();

    /// Numeric rank, 0 = most severe
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Look up a severity by rank
    pub fn from_rank(rank: usize) -> Option<Self> {
        Self::ALL.get(rank).copied()
    }

    /// Upper-case display name used in log lines
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Severe => "SEVERE",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// ANSI color prefix for decorated output
    pub fn color(self) -> &'static str {
        match self {
            Severity::Fatal => "\u{1B}[30m\u{1B}[41m",
            Severity::Severe => "\u{1B}[31m",
            Severity::Warning => "\u{1B}[33m",
            Severity::Info => "\u{1B}[36m",
            Severity::Debug => "\u{1B}[32m",
        }
    }

    /// This severity and every less severe one, in rank order
    pub fn and_below(self) -> impl Iterator<Item = Severity> {
        Self::ALL.into_iter().skip(self.rank())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| LogError::InvalidLevel(name.to_string()))
    }
}

//! A single banded, optionally decorated destination

use std::io::Write;
use std::path::Path;

use parking_lot::Mutex;

use super::target::SinkTarget;
use crate::detail::ErrorDetail;
use crate::error::LogResult;
use crate::level::{Severity, RESET};

/// One output destination with its severity band and decoration mode
///
/// `min_level` is the bucket the sink is normally registered under and
/// `max_level` is the most severe level the sink still accepts. The target is
/// owned exclusively and guarded by its own lock, so a line and its flush are
/// never interleaved with another thread's write.
///
/// Writes are best effort: I/O failures are discarded and never reach the
/// caller.
#[derive(Debug)]
pub struct Sink {
    min_level: Severity,
    max_level: Severity,
    decorated: bool,
    target: Mutex<SinkTarget>,
}

impl Sink {
    /// Build a sink around an already open target
    pub fn new(
        min_level: Severity,
        max_level: Severity,
        target: SinkTarget,
        decorated: bool,
    ) -> Self {
        Self {
            min_level,
            max_level,
            decorated,
            target: Mutex::new(target),
        }
    }

    /// Open an append-mode file sink, creating parent directories
    pub fn open_file(
        min_level: Severity,
        max_level: Severity,
        path: impl AsRef<Path>,
        decorated: bool,
    ) -> LogResult<Self> {
        let target = SinkTarget::file(path)?;
        Ok(Self::new(min_level, max_level, target, decorated))
    }

    /// Wrap a writer as a stream sink
    pub fn stream(
        min_level: Severity,
        max_level: Severity,
        writer: impl Write + Send + 'static,
        decorated: bool,
    ) -> Self {
        Self::new(min_level, max_level, SinkTarget::stream(writer), decorated)
    }

    pub fn min_level(&self) -> Severity {
        self.min_level
    }

    pub fn max_level(&self) -> Severity {
        self.max_level
    }

    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    /// Whether the per-sink ceiling admits `severity`
    pub fn admits(&self, severity: Severity) -> bool {
        self.max_level.rank() <= severity.rank()
    }

    pub fn describe(&self) -> String {
        self.target.lock().describe()
    }

    /// Write one line, wrapped in color and reset when decorated
    pub fn write(&self, severity: Severity, line: &str) {
        let mut target = self.target.lock();
        let _ = if self.decorated {
            target.write_parts(&[severity.color(), line, RESET, "\n"])
        } else {
            target.write_parts(&[line, "\n"])
        };
    }

    /// Write a line followed by the error trace
    ///
    /// When decorated, the color opens before the line and the reset follows
    /// the trace; the trace text itself is written as is.
    pub fn write_with_detail(&self, severity: Severity, line: &str, detail: &ErrorDetail) {
        let trace = detail.trace_block();
        let mut target = self.target.lock();
        let _ = if self.decorated {
            target.write_parts(&[severity.color(), line, "\n", trace.as_str(), RESET])
        } else {
            target.write_parts(&[line, "\n", trace.as_str()])
        };
    }
}

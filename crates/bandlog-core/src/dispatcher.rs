//! Log call dispatch
//!
//! A single call formats its line once, fans it out to every matching sink
//! in registry order, then decides on its own whether and how to print it on
//! the console. Nothing in this path reports failure: each write is one best
//! effort attempt, and I/O errors are dropped.

use std::fmt;
use std::io::Write;

use parking_lot::Mutex;

use crate::console::{console_decorated, ConsolePolicy, Environment, SystemEnvironment};
use crate::detail::ErrorDetail;
use crate::format::{format_line, LocalClock, Timestamp};
use crate::level::{Severity, RESET};
use crate::registry::Registry;
use crate::sink::{Sink, SinkTarget};

/// Routes log calls to the registered sinks and the console
///
/// Built once with its complete sink set, then shared by reference (it is
/// `Send + Sync`). See [`crate::global`] for the process-wide instance.
///
/// # Example
///
/// ```
/// use bandlog_core::{ConsolePolicy, Dispatcher, MemoryWriter, Registry, Severity, Sink};
///
/// let capture = MemoryWriter::new();
/// let mut registry = Registry::new();
/// registry.register(
///     Severity::Debug,
///     Sink::stream(Severity::Debug, Severity::Fatal, capture.clone(), false),
/// );
///
/// let dispatcher = Dispatcher::new(registry, ConsolePolicy::disabled());
/// dispatcher.log(Severity::Info, "net", "connected");
/// assert!(capture.contents().ends_with("\t[INFO]\t[net]\tconnected\n"));
/// ```
pub struct Dispatcher {
    registry: Registry,
    console: ConsolePolicy,
    syslog_prefix: String,
    clock: Box<dyn Timestamp>,
    environment: Box<dyn Environment>,
    stdout: Mutex<SinkTarget>,
    stderr: Mutex<SinkTarget>,
}

impl Dispatcher {
    /// Create a dispatcher printing to the process stdout/stderr
    pub fn new(registry: Registry, console: ConsolePolicy) -> Self {
        Self {
            registry,
            console,
            syslog_prefix: String::new(),
            clock: Box::new(LocalClock),
            environment: Box::new(SystemEnvironment),
            stdout: Mutex::new(SinkTarget::stdout()),
            stderr: Mutex::new(SinkTarget::stderr()),
        }
    }

    /// Replace the timestamp source
    pub fn with_clock(mut self, clock: impl Timestamp + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the environment probe used for console decoration
    pub fn with_environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Box::new(environment);
        self
    }

    /// Redirect console lines and console traces
    pub fn with_console_output(
        mut self,
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Self {
        self.stdout = Mutex::new(SinkTarget::stream(out));
        self.stderr = Mutex::new(SinkTarget::stream(err));
        self
    }

    /// Set the process identifier shown in syslog mode
    pub fn with_syslog_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.syslog_prefix = prefix.into();
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn console(&self) -> &ConsolePolicy {
        &self.console
    }

    pub fn syslog_prefix(&self) -> &str {
        &self.syslog_prefix
    }

    /// Log a message
    pub fn log(&self, severity: Severity, tag: &str, message: &str) {
        self.dispatch(severity, tag, message, None);
    }

    /// Log a message followed by an error trace
    pub fn log_with_error(
        &self,
        severity: Severity,
        tag: &str,
        message: &str,
        detail: &ErrorDetail,
    ) {
        self.dispatch(severity, tag, message, Some(detail));
    }

    /// Log an error, using its own message as the line text
    pub fn log_error(&self, severity: Severity, tag: &str, detail: &ErrorDetail) {
        self.dispatch(severity, tag, detail.message(), Some(detail));
    }

    /// Format once, fan out to matching sinks, then evaluate the console
    pub fn dispatch(
        &self,
        severity: Severity,
        tag: &str,
        message: &str,
        detail: Option<&ErrorDetail>,
    ) {
        let line = self.format(severity, tag, message);

        for sink in self.matching_sinks(severity) {
            match detail {
                Some(detail) => sink.write_with_detail(severity, &line, detail),
                None => sink.write(severity, &line),
            }
        }

        self.write_console(severity, &line, detail);
    }

    /// The canonical line for a call, stamped with the current time
    pub fn format(&self, severity: Severity, tag: &str, message: &str) -> String {
        let prefix = self.console.syslog.then_some(self.syslog_prefix.as_str());
        format_line(&self.clock.timestamp(), prefix, severity, tag, message)
    }

    /// Sinks a line at `severity` is written to, in write order
    pub fn matching_sinks(&self, severity: Severity) -> impl Iterator<Item = &Sink> + '_ {
        self.registry.matching_sinks(severity)
    }

    /// Whether the console would color its output right now
    pub fn console_is_decorated(&self) -> bool {
        console_decorated(
            self.console.syslog,
            &self.environment.os_name(),
            self.environment.ide_present(),
        )
    }

    fn write_console(&self, severity: Severity, line: &str, detail: Option<&ErrorDetail>) {
        if !self.console.fires(severity) {
            return;
        }

        {
            let mut out = self.stdout.lock();
            let _ = if self.console_is_decorated() {
                out.write_parts(&[severity.color(), line, RESET, "\n"])
            } else if self.console.syslog {
                let bracket = format!("[{}]", self.syslog_prefix);
                out.write_parts(&[bracket.as_str(), line, "\n"])
            } else {
                out.write_parts(&[line, "\n"])
            };
        }

        if let Some(detail) = detail {
            let trace = detail.trace_block();
            let _ = self.stderr.lock().write_parts(&[trace.as_str()]);
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("sinks", &self.registry.len())
            .field("console", &self.console)
            .field("syslog_prefix", &self.syslog_prefix)
            .finish()
    }
}

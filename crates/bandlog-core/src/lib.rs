//! Bandlog Core
//!
//! Leveled, tagged log routing. One log call is formatted once, fanned out to
//! every registered sink whose severity band admits it, and then printed on
//! the console under a separate band and an environment-dependent color
//! policy.
//!
//! ## Routing
//!
//! Sinks are registered under a severity *bucket* (normally their minimum
//! level). A line at severity `S` scans the buckets from `S` down to `DEBUG`
//! and keeps every sink there whose ceiling is at least as severe as `S`:
//!
//! ```rust
//! use bandlog_core::{ConsolePolicy, Dispatcher, MemoryWriter, Registry, Severity, Sink};
//!
//! let problems = MemoryWriter::new();
//! let mut registry = Registry::new();
//! // WARNING and above, up to SEVERE: FATAL is left to another sink.
//! registry.register(
//!     Severity::Warning,
//!     Sink::stream(Severity::Warning, Severity::Severe, problems.clone(), false),
//! );
//!
//! let dispatcher = Dispatcher::new(registry, ConsolePolicy::disabled());
//! dispatcher.log(Severity::Severe, "db", "replica lagging");
//! dispatcher.log(Severity::Info, "db", "checkpoint done");
//! assert_eq!(problems.contents().lines().count(), 1);
//! ```
//!
//! ## Process-wide use
//!
//! ```rust,ignore
//! use bandlog_core::{global, LoggerConfig, Severity};
//!
//! global::init(&LoggerConfig::load()?)?;
//! global::log(Severity::Info, "main", "started");
//! bandlog_core::warning_log!("main", "{} workers idle", 3);
//! ```

pub mod bridge;
pub mod config;
pub mod console;
pub mod detail;
pub mod dispatcher;
pub mod error;
pub mod format;
pub mod global;
pub mod level;
pub mod logging;
pub mod registry;
pub mod sink;

// Re-export commonly used types
pub use level::{Severity, RESET};
pub use error::{LogError, LogResult};
pub use detail::ErrorDetail;
pub use format::{format_line, FixedClock, LocalClock, Timestamp};
pub use sink::{MemoryWriter, Sink, SinkTarget};
pub use registry::Registry;
pub use console::{
    console_decorated, ConsolePolicy, Environment, FixedEnvironment, SystemEnvironment,
};
pub use dispatcher::Dispatcher;
pub use config::{FileSinkSpec, LoggerConfig};
pub use logging::{Logger, NoOpLogger, SharedLogger, TaggedLogger};
pub use bridge::{install_log_bridge, LogBridge};

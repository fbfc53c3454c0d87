//! Process-wide dispatcher
//!
//! The dispatcher is built exactly once, either explicitly through [`init`] /
//! [`install`] at startup, or lazily from [`LoggerConfig::load`] on the first
//! log call. Concurrent first use still constructs it only once. Sinks cannot
//! be added afterwards.

use std::error::Error;

use once_cell::sync::OnceCell;

use crate::config::LoggerConfig;
use crate::console::ConsolePolicy;
use crate::detail::ErrorDetail;
use crate::dispatcher::Dispatcher;
use crate::error::{LogError, LogResult};
use crate::level::Severity;
use crate::logging::TaggedLogger;
use crate::registry::Registry;

static DISPATCHER: OnceCell<Dispatcher> = OnceCell::new();

/// Build the dispatcher from `config` and install it
///
/// Fails with the configuration error, or with `AlreadyInitialized` if a
/// dispatcher is already in place (including one built lazily by an earlier
/// log call).
pub fn init(config: &LoggerConfig) -> LogResult<()> {
    install(config.build()?)
}

/// Install a fully built dispatcher
pub fn install(dispatcher: Dispatcher) -> LogResult<()> {
    DISPATCHER
        .set(dispatcher)
        .map_err(|_| LogError::AlreadyInitialized)
}

/// Whether the process-wide dispatcher exists yet
pub fn is_initialized() -> bool {
    DISPATCHER.get().is_some()
}

/// The process-wide dispatcher, built on first use if needed
pub fn dispatcher() -> &'static Dispatcher {
    DISPATCHER.get_or_init(load_or_default)
}

fn load_or_default() -> Dispatcher {
    build_or_default(LoggerConfig::load())
}

/// Build from a loaded config, or fall back to the console defaults
fn build_or_default(loaded: LogResult<LoggerConfig>) -> Dispatcher {
    match loaded.and_then(|config| config.build()) {
        Ok(dispatcher) => dispatcher,
        Err(err) => {
            eprintln!("bandlog: {}; falling back to console defaults", err);
            Dispatcher::new(Registry::new(), ConsolePolicy::default())
        }
    }
}

/// Log a message
pub fn log(severity: Severity, tag: &str, message: &str) {
    dispatcher().log(severity, tag, message);
}

/// Log a message followed by the error's trace
pub fn log_with_error(severity: Severity, tag: &str, message: &str, err: &(dyn Error + 'static)) {
    dispatcher().log_with_error(severity, tag, message, &ErrorDetail::from_error(err));
}

/// Log an error, using its own message as the line text
pub fn log_error(severity: Severity, tag: &str, err: &(dyn Error + 'static)) {
    dispatcher().log_error(severity, tag, &ErrorDetail::from_error(err));
}

/// A logger bound to `tag` on the process-wide dispatcher
pub fn tagged(tag: impl Into<String>) -> TaggedLogger<'static> {
    TaggedLogger::new(dispatcher(), tag)
}

/// Convenience macros for logging through the process-wide dispatcher
#[macro_export]
macro_rules! fatal_log {
    ($tag:expr, $($arg:tt)*) => {
        $crate::global::log($crate::Severity::Fatal, $tag, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! severe_log {
    ($tag:expr, $($arg:tt)*) => {
        $crate::global::log($crate::Severity::Severe, $tag, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warning_log {
    ($tag:expr, $($arg:tt)*) => {
        $crate::global::log($crate::Severity::Warning, $tag, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! info_log {
    ($tag:expr, $($arg:tt)*) => {
        $crate::global::log($crate::Severity::Info, $tag, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($tag:expr, $($arg:tt)*) => {
        $crate::global::log($crate::Severity::Debug, $tag, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FixedClock;
    use crate::logging::Logger;
    use crate::sink::{MemoryWriter, Sink};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    fn quiet_config() -> LoggerConfig {
        let mut config = LoggerConfig::default();
        config.console.enabled = false;
        config
    }

    #[test]
    fn test_fallback_on_malformed_config() {
        let mut config = LoggerConfig::default();
        config.console.levels = "LOUD:FATAL".to_string();
        config.files = vec!["DEBUG:FATAL:never-opened.log".to_string()];

        let built = build_or_default(Ok(config));
        assert_eq!(*built.console(), ConsolePolicy::default());
        assert_eq!(built.registry().len(), 0);

        let built = build_or_default(Err(LogError::Parse("bad yaml".to_string())));
        assert_eq!(*built.console(), ConsolePolicy::default());
        assert!(built.registry().is_empty());
    }

    #[test]
    fn test_build_from_valid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all.log");
        let mut config = quiet_config();
        config.files = vec![format!("DEBUG:FATAL:{}", path.display())];

        let built = build_or_default(Ok(config));
        assert_eq!(built.registry().len(), 1);
        assert!(!built.console().enabled);

        built.log(Severity::Info, "boot", "ready");
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .ends_with("\t[INFO]\t[boot]\tready\n"));
    }

    #[test]
    fn test_lazy_build_runs_once() {
        let cell: OnceCell<Dispatcher> = OnceCell::new();
        let builds = AtomicUsize::new(0);

        let addresses: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        let built = cell.get_or_init(|| {
                            builds.fetch_add(1, Ordering::SeqCst);
                            build_or_default(Ok(quiet_config()))
                        });
                        built as *const Dispatcher as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(addresses.iter().all(|&a| a == addresses[0]));
    }

    // The only test in the crate that touches the process-wide instance.
    #[test]
    fn test_process_wide_dispatcher() {
        let capture = MemoryWriter::new();
        let registry = Registry::new().with_sink(
            Severity::Debug,
            Sink::stream(Severity::Debug, Severity::Fatal, capture.clone(), false),
        );
        let built = Dispatcher::new(registry, ConsolePolicy::disabled())
            .with_clock(FixedClock::new("ts"));

        install(built).unwrap();
        assert!(is_initialized());
        assert!(matches!(
            init(&LoggerConfig::default()),
            Err(LogError::AlreadyInitialized)
        ));

        let first = dispatcher() as *const Dispatcher;
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| dispatcher() as *const Dispatcher as usize))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), first as usize);
        }

        log(Severity::Info, "boot", "ready");
        crate::warning_log!("boot", "{} retries left", 2);
        tagged("cache").debug("warm");

        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        log_error(Severity::Severe, "fs", &err);
        log_with_error(Severity::Fatal, "fs", "giving up", &err);

        let out = capture.contents();
        assert!(out.starts_with(
            "[ts]\t[INFO]\t[boot]\tready\n\
             [ts]\t[WARNING]\t[boot]\t2 retries left\n\
             [ts]\t[DEBUG]\t[cache]\twarm\n\
             [ts]\t[SEVERE]\t[fs]\tno such file\nno such file\n"
        ));
        assert!(out.contains("[ts]\t[FATAL]\t[fs]\tgiving up\nno such file\n"));
    }
}

//! Logger configuration document (YAML, JSON accepted)
//!
//! Looked up at `$BANDLOG_CONFIG`, else `~/.config/bandlog/config.yaml`, then
//! overridden by `BANDLOG_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::parse::{parse_band, parse_file_specs, FileSinkSpec};
use crate::console::ConsolePolicy;
use crate::dispatcher::Dispatcher;
use crate::error::{LogError, LogResult};
use crate::registry::Registry;

/// Path of the config file, when set
pub const CONFIG_ENV: &str = "BANDLOG_CONFIG";
/// `0`, `false`, `off` or `no` disables the console
pub const CONSOLE_ENV: &str = "BANDLOG_CONSOLE";
/// Console band, `MIN:MAX`
pub const CONSOLE_LEVELS_ENV: &str = "BANDLOG_CONSOLE_LEVELS";
/// Comma separated file sink entries
pub const FILES_ENV: &str = "BANDLOG_FILES";
/// `1`, `true`, `on` or `yes` enables syslog mode
pub const SYSLOG_ENV: &str = "BANDLOG_SYSLOG";
/// Syslog prefix (process identifier)
pub const PREFIX_ENV: &str = "BANDLOG_PREFIX";

/// Console section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    pub enabled: bool,
    /// Band as `MIN:MAX`
    pub levels: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            levels: "DEBUG:FATAL".to_string(),
        }
    }
}

/// Full logger configuration
///
/// ```yaml
/// console:
///   enabled: true
///   levels: "DEBUG:FATAL"
/// syslog: false
/// prefix: ""
/// files:
///   - "DEBUG:FATAL:log/all.log:1"
///   - "WARNING:FATAL:log/problems.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub console: ConsoleSettings,
    pub syslog: bool,
    pub prefix: String,
    /// File sink entries; each may itself be a comma separated list
    pub files: Vec<String>,
}

impl LoggerConfig {
    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> LogResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_yaml_string(&self) -> LogResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Read a config file; a missing file yields the defaults
    pub fn load_file(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| LogError::io(path, e))?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// `$BANDLOG_CONFIG`, else the user config directory
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        config_dir.join("bandlog").join("config.yaml")
    }

    /// Defaults, then the config file, then environment overrides
    pub fn load() -> LogResult<Self> {
        let mut config = Self::load_file(Self::default_path())?;
        config.apply_env();
        Ok(config)
    }

    /// Apply `BANDLOG_*` environment variables
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(CONSOLE_ENV) {
            self.console.enabled = !matches!(
                value.trim().to_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }
        if let Some(levels) = lookup(CONSOLE_LEVELS_ENV) {
            self.console.levels = levels;
        }
        if let Some(files) = lookup(FILES_ENV) {
            self.files = vec![files];
        }
        if let Some(value) = lookup(SYSLOG_ENV) {
            let value = value.trim().to_lowercase();
            self.syslog = matches!(value.as_str(), "1" | "true" | "on" | "yes");
        }
        if let Some(prefix) = lookup(PREFIX_ENV) {
            self.prefix = prefix;
        }
    }

    /// Parsed console policy
    pub fn console_policy(&self) -> LogResult<ConsolePolicy> {
        let (min_level, max_level) = parse_band(&self.console.levels)?;
        Ok(ConsolePolicy {
            enabled: self.console.enabled,
            min_level,
            max_level,
            syslog: self.syslog,
        })
    }

    /// Parsed file sink entries, in declaration order
    pub fn file_specs(&self) -> LogResult<Vec<FileSinkSpec>> {
        let mut specs = Vec::new();
        for entry in &self.files {
            specs.extend(parse_file_specs(entry)?);
        }
        Ok(specs)
    }

    /// Open every file sink, registering each under its minimum level
    ///
    /// Malformed entries fail the whole call. Files that cannot be opened are
    /// skipped and returned alongside the registry.
    pub fn build_registry(&self) -> LogResult<(Registry, Vec<LogError>)> {
        let specs = self.file_specs()?;
        let mut registry = Registry::new();
        let mut failures = Vec::new();

        for spec in specs {
            match spec.open() {
                Ok(sink) => registry.register(spec.min_level, sink),
                Err(err) => failures.push(err),
            }
        }

        Ok((registry, failures))
    }

    /// Build a dispatcher
    ///
    /// Configuration errors are returned. Unopenable files are reported on
    /// stderr and left out; the other sinks still work.
    pub fn build(&self) -> LogResult<Dispatcher> {
        let console = self.console_policy()?;
        let (registry, failures) = self.build_registry()?;

        for failure in failures {
            if let LogError::Io { path, source } = &failure {
                eprintln!("Could not load file: {} ({})", path.display(), source);
            } else {
                eprintln!("Could not load file: {}", failure);
            }
        }

        Ok(Dispatcher::new(registry, console).with_syslog_prefix(self.prefix.clone()))
    }
}

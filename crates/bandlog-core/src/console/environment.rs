//! Execution environment probe for console decoration

/// Name of the variable that marks a run inside an IDE console
pub const IDE_VAR: &str = "IDE";

/// Environment facts consulted on every console decision
pub trait Environment: Send + Sync {
    /// Operating system name
    fn os_name(&self) -> String;

    /// Whether the `IDE` variable is set (its value is ignored)
    fn ide_present(&self) -> bool;
}

/// Reads the live process environment on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn os_name(&self) -> String {
        std::env::consts::OS.to_string()
    }

    fn ide_present(&self) -> bool {
        std::env::var_os(IDE_VAR).is_some()
    }
}

/// Fixed answers, for tests
#[derive(Debug, Clone)]
pub struct FixedEnvironment {
    pub os_name: String,
    pub ide: bool,
}

impl FixedEnvironment {
    pub fn new(os_name: impl Into<String>, ide: bool) -> Self {
        Self {
            os_name: os_name.into(),
            ide,
        }
    }
}

impl Environment for FixedEnvironment {
    fn os_name(&self) -> String {
        self.os_name.clone()
    }

    fn ide_present(&self) -> bool {
        self.ide
    }
}

/// True for OS names that identify Windows
pub fn is_windows(os_name: &str) -> bool {
    os_name.to_lowercase().contains("win")
}

/// Whether console output should carry ANSI colors
///
/// Plain output is used in syslog mode, on Windows, and inside an IDE.
/// File and stream sinks ignore this and use their own flag.
pub fn console_decorated(syslog: bool, os_name: &str, ide_present: bool) -> bool {
    !(syslog || is_windows(os_name) || ide_present)
}

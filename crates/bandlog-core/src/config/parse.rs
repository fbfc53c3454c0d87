//! Band and file sink spec strings
//!
//! - console band: `MIN:MAX`, e.g. `DEBUG:FATAL`
//! - file sinks: comma separated `MIN:MAX:PATH[:FANCY]`, where `FANCY` of `1`
//!   turns on color decoration

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{LogError, LogResult};
use crate::level::Severity;
use crate::sink::Sink;

fn level(name: &str, context: &str) -> LogResult<Severity> {
    name.parse::<Severity>()
        .map_err(|e| LogError::configuration(format!("{} in '{}'", e, context)))
}

/// Parse a console band into `(min, max)`
pub fn parse_band(spec: &str) -> LogResult<(Severity, Severity)> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts.as_slice() {
        [min, max] => Ok((level(min, spec)?, level(max, spec)?)),
        _ => Err(LogError::configuration(format!(
            "console levels must look like MIN:MAX, got '{}'",
            spec
        ))),
    }
}

/// One parsed file sink entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSinkSpec {
    pub min_level: Severity,
    pub max_level: Severity,
    pub path: PathBuf,
    pub decorated: bool,
}

impl FileSinkSpec {
    /// Open the file and build the sink
    pub fn open(&self) -> LogResult<Sink> {
        Sink::open_file(self.min_level, self.max_level, &self.path, self.decorated)
    }
}

impl FromStr for FileSinkSpec {
    type Err = LogError;

    fn from_str(entry: &str) -> LogResult<Self> {
        let parts: Vec<&str> = entry.split(':').collect();
        if parts.len() < 3 || parts[2].trim().is_empty() {
            return Err(LogError::configuration(format!(
                "file sink must look like MIN:MAX:PATH[:1], got '{}'",
                entry
            )));
        }

        Ok(Self {
            min_level: level(parts[0], entry)?,
            max_level: level(parts[1], entry)?,
            path: PathBuf::from(parts[2].trim()),
            decorated: parts.get(3).map(|flag| flag.trim() == "1").unwrap_or(false),
        })
    }
}

impl fmt::Display for FileSinkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.min_level, self.max_level, self.path.display())?;
        if self.decorated {
            f.write_str(":1")?;
        }
        Ok(())
    }
}

/// Parse a comma separated list of file sink entries, skipping empty ones
pub fn parse_file_specs(list: &str) -> LogResult<Vec<FileSinkSpec>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse::<FileSinkSpec>)
        .collect()
}

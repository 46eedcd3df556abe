//! Configuration types of a test run

use crate::error::ConfigError;
use derive_more::Display;
use serde::{
    Deserialize,
    Serialize,
};
use std::str::FromStr;

fn default_true() -> bool {
    true
}

/// Output format of the final report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    #[display("text")]
    Text,
    #[display("json")]
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::invalid("format", s)),
        }
    }
}

/// Diagnostic log output of the framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Write log events to stdout instead of stderr
    #[serde(default)]
    pub log_to_stdout: bool,
    /// Filter directives, e.g. `"fasttest=debug"`
    #[serde(default)]
    pub log_filter: Option<String>,
    #[serde(default = "default_true")]
    pub enable_ansi: bool,
    /// Emit events as JSON lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_to_stdout: false,
            log_filter: None,
            enable_ansi: true,
            json: false,
        }
    }
}

impl LogConfig {
    /// Logging is only installed when asked for.
    pub fn is_enabled(&self) -> bool {
        self.log_to_stdout || self.log_filter.is_some()
    }
}

/// What happens when a test body panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanicConfig {
    /// Log panics as error events
    #[serde(default = "default_true")]
    pub show: bool,
    /// Include the panic message in the event
    #[serde(default = "default_true")]
    pub show_message: bool,
    /// Call the default hook, which prints to stderr
    #[serde(default)]
    pub show_default_hook: bool,
}

impl Default for PanicConfig {
    fn default() -> Self {
        Self {
            show: true,
            show_message: true,
            show_default_hook: false,
        }
    }
}

/// Options of a test run.
///
/// ```toml
/// # top-level options before any [section]
/// verbose = true
/// enable_ansi = false
/// format = "json"
///
/// [log]
/// log_filter = "fasttest=debug"
///
/// [panic]
/// show_default_hook = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// List passed and skipped tests in the report
    #[serde(default)]
    pub verbose: bool,
    /// Color the report
    #[serde(default = "default_true")]
    pub enable_ansi: bool,
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub panic: PanicConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            enable_ansi: true,
            format: ReportFormat::default(),
            log: LogConfig::default(),
            panic: PanicConfig::default(),
        }
    }
}

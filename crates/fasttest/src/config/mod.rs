//! Run configuration
//!
//! Loaded from a TOML file and overridden by environment variables, see
//! [`RunnerConfig::load`].

mod loader;
mod types;

pub use loader::CONFIG_ENV;
pub use types::{
    LogConfig,
    PanicConfig,
    ReportFormat,
    RunnerConfig,
};

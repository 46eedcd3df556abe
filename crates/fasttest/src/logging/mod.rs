//! Diagnostic logging of the framework
//!
//! The engine emits `tracing` events and spans everywhere. Nothing is
//! printed until a subscriber is installed, e.g. with [`init_tracing`].

mod panic;

pub use panic::install_panic_hook;
#[cfg(test)]
pub(crate) use panic::silence_panics;
pub(crate) use panic::{
    clear_panic_location,
    take_panic_location,
};

use crate::config::LogConfig;
use std::{
    io,
    sync::Once,
};
use tracing_subscriber::{
    EnvFilter,
    Layer,
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static GLOBAL_INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "info";

fn filter(config: &LogConfig) -> EnvFilter {
    config
        .log_filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber described by `config`.
///
/// Only the first call per process has an effect. Returns whether a
/// subscriber was installed by this call.
pub fn init_tracing(config: &LogConfig) -> bool {
    let mut installed = false;
    if !config.is_enabled() {
        return installed;
    }
    GLOBAL_INIT.call_once(|| {
        let to_stdout = config.log_to_stdout;
        let writer = move || -> Box<dyn io::Write> {
            if to_stdout {
                Box::new(io::stdout())
            } else {
                Box::new(io::stderr())
            }
        };
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_ansi(config.enable_ansi && !config.json);
        let layer = if config.json {
            layer.json().with_filter(filter(config)).boxed()
        } else {
            layer.with_filter(filter(config)).boxed()
        };
        match tracing_subscriber::registry().with(layer).try_init() {
            Ok(()) => installed = true,
            Err(err) => eprintln!("fasttest: tracing already initialized: {err}"),
        }
    });
    installed
}

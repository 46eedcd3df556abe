//! Panic hook recording where test bodies panicked

use crate::config::PanicConfig;
use std::{
    cell::RefCell,
    sync::Once,
};

static PANIC_HOOK_INIT: Once = Once::new();

thread_local! {
    static PANIC_LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Install the panic hook of the framework.
///
/// The hook remembers the `file:line:column` of the latest panic on the
/// panicking thread, which the runner attaches to the errored test. What
/// gets logged while unwinding is chosen by `config`. Only the first call
/// per process has an effect.
pub fn install_panic_hook(config: PanicConfig) {
    PANIC_HOOK_INIT.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let location = panic_info.location().map(ToString::to_string);
            match (config.show, config.show_message) {
                (false, _) => {},
                (true, true) => tracing::error!(
                    location = location.as_deref().unwrap_or("unknown"),
                    "test body panicked: {}",
                    payload_message(panic_info)
                ),
                (true, false) => tracing::error!(
                    location = location.as_deref().unwrap_or("unknown"),
                    "test body panicked"
                ),
            }
            PANIC_LOCATION.with(|slot| *slot.borrow_mut() = location);
            if config.show_default_hook {
                default_hook(panic_info);
            }
        }));
    });
}

fn payload_message<'a>(panic_info: &'a std::panic::PanicHookInfo<'_>) -> &'a str {
    let payload = panic_info.payload();
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string payload")
}

/// Forget the location of earlier panics of this thread.
pub(crate) fn clear_panic_location() {
    PANIC_LOCATION.with(|slot| slot.borrow_mut().take());
}

/// Location of the latest panic of this thread, if the hook saw one.
pub(crate) fn take_panic_location() -> Option<String> {
    PANIC_LOCATION.with(|slot| slot.borrow_mut().take())
}

/// Route panics of unit tests through the hook without printing them.
#[cfg(test)]
pub(crate) fn silence_panics() {
    install_panic_hook(PanicConfig {
        show: false,
        show_message: false,
        show_default_hook: false,
    });
}

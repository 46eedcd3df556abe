//! Printable capability of asserted values

use std::fmt;

/// Values that can show up in a failure message.
///
/// Every [`Debug`](fmt::Debug) type renders itself. Types without a useful
/// representation implement this trait returning `None`, or get wrapped in
/// [`Opaque`], and failures then fall back to a generic message.
pub trait Render {
    fn render(&self) -> Option<String>;
}

impl<T: fmt::Debug + ?Sized> Render for T {
    fn render(&self) -> Option<String> {
        Some(format!("{self:?}"))
    }
}

/// Comparable wrapper that hides its value from failure messages.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Opaque<T>(pub T);

impl<T> Render for Opaque<T> {
    fn render(&self) -> Option<String> {
        None
    }
}

//! Failure signal raised by violated assertions
//!
//! A [`Failure`] keeps the reached and expected values apart from the
//! message so the rendering can be decided late: values are only shown when
//! their type provides the [`Render`] capability.

pub mod error;
pub mod render;

pub use error::{
    TestError,
    TestResult,
};
pub use render::{
    Opaque,
    Render,
};

use crate::location::LineInfo;
use derive_more::{
    Deref,
    Display,
};
use serde::Serialize;
use std::fmt;

/// Which relation the failed check expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum FailureKind {
    #[display("EQUAL")]
    Equal,
    #[display("DIFFERENT")]
    Different,
    #[display("EXCEPTION")]
    Exception,
}

/// Structured payload of a [`Failure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub message: String,
    /// Rendered reached value, `None` when the type is not printable.
    pub reached: Option<String>,
    /// Rendered expected value, `None` when the type is not printable.
    pub expected: Option<String>,
    pub kind: FailureKind,
    /// Type name of the error the check expected, for [`FailureKind::Exception`].
    pub expected_error: Option<String>,
}

impl FailureRecord {
    fn write_details(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match (self.kind, &self.reached, &self.expected) {
            (FailureKind::Exception, _, _) => write!(
                f,
                "\t\t[EXPECTED Exception] {}",
                self.expected_error.as_deref().unwrap_or("unknown")
            ),
            (FailureKind::Equal, Some(reached), Some(expected)) => write!(
                f,
                "\t\t\t[REACHED] {reached}\n\t\t\t[EXPECTED EQUAL TO] {expected}"
            ),
            (FailureKind::Different, Some(reached), Some(expected)) => write!(
                f,
                "\t\t\t[REACHED] {reached}\n\t\t\t[EXPECTED DIFFERENT FROM] {expected}"
            ),
            (FailureKind::Equal, _, _) => write!(
                f,
                "\t\t\t[REACHED] is different from [EXPECTED]. Expected [EQUAL TO]"
            ),
            (FailureKind::Different, _, _) => write!(
                f,
                "\t\t\t[REACHED] is equal to [EXPECTED]. Expected [DIFFERENT FROM]"
            ),
        }
    }
}

/// The signal returned by a failed check.
///
/// Does not implement [`std::error::Error`] so that [`TestError`] can convert
/// from every other error type.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct Failure(Box<FailureRecord>);

impl Failure {
    /// Build the signal for a check whose condition turned out false.
    pub(crate) fn new(
        kind: FailureKind,
        reached: Option<String>,
        expected: Option<String>,
        message: Option<&str>,
        location: &LineInfo,
    ) -> Self {
        let message = message.unwrap_or_default();
        let message = if location.is_init() {
            format!("{message}\t({location})")
        } else {
            message.to_string()
        };
        Self(Box::new(FailureRecord {
            message,
            reached,
            expected,
            kind,
            expected_error: None,
        }))
    }
    pub(crate) fn with_expected_error(
        mut self,
        name: &str,
    ) -> Self {
        self.0.expected_error = Some(name.to_string());
        self
    }
    pub fn record(&self) -> &FailureRecord {
        &self.0
    }
    pub fn into_record(self) -> FailureRecord {
        *self.0
    }
}

impl fmt::Display for Failure {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        self.write_details(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failure(
        kind: FailureKind,
        reached: Option<&str>,
        expected: Option<&str>,
    ) -> Failure {
        Failure::new(
            kind,
            reached.map(String::from),
            expected.map(String::from),
            Some("values differ"),
            &LineInfo::default(),
        )
    }

    #[test]
    fn renders_printable_values() {
        let f = failure(FailureKind::Equal, Some("4"), Some("5"));
        assert_eq!(
            f.to_string(),
            "values differ\n\t\t\t[REACHED] 4\n\t\t\t[EXPECTED EQUAL TO] 5"
        );
        let f = failure(FailureKind::Different, Some("4"), Some("4"));
        assert!(f.to_string().ends_with("[EXPECTED DIFFERENT FROM] 4"));
    }

    #[test]
    fn falls_back_to_generic_message() {
        let f = failure(FailureKind::Equal, None, None);
        assert!(
            f.to_string()
                .ends_with("[REACHED] is different from [EXPECTED]. Expected [EQUAL TO]")
        );
        let f = failure(FailureKind::Different, None, None);
        assert!(f.to_string().contains("Expected [DIFFERENT FROM]"));
    }

    #[test]
    fn renders_expected_error_name() {
        let f = failure(FailureKind::Exception, None, None)
            .with_expected_error("my::DivideByZero");
        assert_eq!(f.expected_error.as_deref(), Some("my::DivideByZero"));
        assert!(f.to_string().ends_with("[EXPECTED Exception] my::DivideByZero"));
    }

    #[test]
    fn folds_location_into_message() {
        let f = Failure::new(
            FailureKind::Equal,
            None,
            None,
            Some("bad"),
            &LineInfo::new("a.rs", "check", 7),
        );
        assert_eq!(f.message, "bad\t(a.rs:7 check)");
    }
}

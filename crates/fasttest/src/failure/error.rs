//! Error type returned by test bodies

use super::Failure;
use std::fmt;

/// Everything a test body can bail out with.
///
/// An assertion [`Failure`] marks the test as failed, any other error marks
/// it as errored. Every [`std::error::Error`] converts into
/// [`TestError::Error`], so bodies can use `?` on ordinary fallible calls
/// next to assertions.
#[derive(Debug)]
pub enum TestError {
    Failure(Failure),
    Error(String),
}

/// Result of a test body.
pub type TestResult = Result<(), TestError>;

impl TestError {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

impl From<Failure> for TestError {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

impl<E: std::error::Error> From<E> for TestError {
    fn from(error: E) -> Self {
        Self::Error(error.to_string())
    }
}

impl fmt::Display for TestError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Failure(failure) => write!(f, "{failure}"),
            Self::Error(message) => write!(f, "{message}"),
        }
    }
}

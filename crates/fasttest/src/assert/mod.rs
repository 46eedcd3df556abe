//! Fluent assertion expressions
//!
//! [`assert_that`] captures a value and returns an [`Expression`] offering
//! checks. A check either passes, returning an empty expression that can
//! continue with [`Expression::and_that`], or returns a [`Failure`] that
//! carries the reached and expected values separately.
//!
//! ```rust
//! use fasttest::{assert_that, TestResult};
//!
//! fn body() -> TestResult {
//!     assert_that(2 + 2)
//!         .because("basic arithmetic")
//!         .is_equal_to(4)?
//!         .and_that("Hello")
//!         .is_equal_to_str("HELLO", true)?;
//!     Ok(())
//! }
//! assert!(body().is_ok());
//! ```

mod expect;
mod float;
mod nullable;
mod text;

pub use float::Tolerance;
pub use nullable::Nullable;

use crate::{
    failure::{
        Failure,
        FailureKind,
        Render,
    },
    location::LineInfo,
};
use std::ptr;

/// Outcome of a single check.
pub type Check = Result<Expression<()>, Failure>;

/// Capture a value for checking.
pub fn assert_that<T>(value: T) -> Expression<T> {
    Expression::new(value)
}

/// A captured value together with the message and location reported when
/// one of its checks fails.
#[derive(Debug, Clone)]
pub struct Expression<T> {
    value: T,
    message: Option<String>,
    location: LineInfo,
}

impl<T> Expression<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            message: None,
            location: LineInfo::default(),
        }
    }
    /// Message prepended to the diagnostic of failing checks.
    pub fn because(
        mut self,
        message: impl Into<String>,
    ) -> Self {
        self.message = Some(message.into());
        self
    }
    /// Source location folded into the message of failing checks.
    pub fn at(
        mut self,
        location: LineInfo,
    ) -> Self {
        self.location = location;
        self
    }
    /// Drop the current value and continue with a new one.
    pub fn and_that<U>(
        self,
        value: U,
    ) -> Expression<U> {
        Expression::new(value)
    }
    pub fn value(&self) -> &T {
        &self.value
    }
    pub fn into_inner(self) -> T {
        self.value
    }

    pub(crate) fn failure(
        &self,
        kind: FailureKind,
        reached: Option<String>,
        expected: Option<String>,
    ) -> Failure {
        Failure::new(
            kind,
            reached,
            expected,
            self.message.as_deref(),
            &self.location,
        )
    }

    pub(crate) fn check(
        &self,
        condition: bool,
        kind: FailureKind,
        reached: impl FnOnce() -> Option<String>,
        expected: impl FnOnce() -> Option<String>,
    ) -> Check {
        if condition {
            Ok(Expression::new(()))
        } else {
            Err(self.failure(kind, reached(), expected()))
        }
    }

    /// Fail unconditionally.
    pub fn fail(&self) -> Check {
        self.check(
            false,
            FailureKind::Equal,
            || false.render(),
            || true.render(),
        )
    }

    pub fn is_equal_to<U>(
        &self,
        expected: U,
    ) -> Check
    where
        T: PartialEq<U> + Render,
        U: Render,
    {
        self.check(
            self.value == expected,
            FailureKind::Equal,
            || self.value.render(),
            || expected.render(),
        )
    }

    pub fn is_not_equal_to<U>(
        &self,
        not_expected: U,
    ) -> Check
    where
        T: PartialEq<U> + Render,
        U: Render,
    {
        self.check(
            self.value != not_expected,
            FailureKind::Different,
            || self.value.render(),
            || not_expected.render(),
        )
    }

    pub fn is_null(&self) -> Check
    where
        T: Nullable,
    {
        self.check(
            self.value.is_null_value(),
            FailureKind::Equal,
            || Some(nullable::describe(&self.value)),
            || Some(nullable::NULL.to_string()),
        )
    }

    pub fn is_not_null(&self) -> Check
    where
        T: Nullable,
    {
        self.check(
            !self.value.is_null_value(),
            FailureKind::Different,
            || Some(nullable::describe(&self.value)),
            || Some(nullable::NULL.to_string()),
        )
    }
}

impl Expression<bool> {
    pub fn is_true(&self) -> Check {
        self.check(
            self.value,
            FailureKind::Equal,
            || self.value.render(),
            || true.render(),
        )
    }
    pub fn is_false(&self) -> Check {
        self.check(
            !self.value,
            FailureKind::Equal,
            || self.value.render(),
            || false.render(),
        )
    }
}

impl<T: ?Sized> Expression<&T> {
    /// Both references point at the same storage.
    pub fn is_same_as(
        &self,
        other: &T,
    ) -> Check {
        self.check(
            ptr::eq(self.value, other),
            FailureKind::Equal,
            || Some(format!("{:p}", self.value)),
            || Some(format!("{other:p}")),
        )
    }
    pub fn is_not_same_as(
        &self,
        other: &T,
    ) -> Check {
        self.check(
            !ptr::eq(self.value, other),
            FailureKind::Different,
            || Some(format!("{:p}", self.value)),
            || Some(format!("{other:p}")),
        )
    }
}

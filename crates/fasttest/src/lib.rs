//! Scenario based unit testing micro-framework.
//!
//! Tests are closures grouped under a [`ScenarioId`]. A [`RegistryManager`]
//! registers them, runs them in declaration order and files each one as
//! passed, failed, skipped or errored. Checks are written with the fluent
//! [`assert_that`] DSL, whose failures carry reached and expected values
//! for the [`ConsoleReporter`].

#[macro_use]
pub mod location;
#[macro_use]
pub mod scenario;

pub mod assert;
pub mod config;
pub mod error;
pub mod failure;
pub mod logging;
pub mod observer;
pub mod registry;
#[macro_use]
pub mod report;
pub mod test;

pub use crate::{
    assert::{
        Check,
        Expression,
        Nullable,
        Tolerance,
        assert_that,
    },
    config::{
        LogConfig,
        PanicConfig,
        ReportFormat,
        RunnerConfig,
    },
    error::ConfigError,
    failure::{
        Failure,
        FailureKind,
        FailureRecord,
        Opaque,
        Render,
        TestError,
        TestResult,
    },
    location::{
        LineInfo,
        SourceLocation,
    },
    logging::{
        init_tracing,
        install_panic_hook,
    },
    observer::{
        ConsoleObserver,
        Observer,
        TracingObserver,
    },
    registry::{
        Registry,
        RegistryManager,
        TestList,
        TestRunner,
    },
    report::{
        Color,
        ConsoleReporter,
        RunSummary,
        TestRecord,
    },
    scenario::{
        Scenario,
        ScenarioId,
    },
    test::{
        Outcome,
        TestBody,
        TestEntity,
        TestStatus,
    },
};

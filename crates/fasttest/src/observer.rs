//! Per-test notifications during a run

use crate::test::{
    TestEntity,
    TestStatus,
};
use std::{
    cell::RefCell,
    io::{
        self,
        Write,
    },
};
use tracing::{
    debug,
    error,
    info,
    warn,
};

/// Receives every test right after its status was finalized.
///
/// Called synchronously, in declaration order, before the next test runs.
pub trait Observer {
    fn notify(
        &self,
        test: &TestEntity,
    );
}

impl<F: Fn(&TestEntity)> Observer for F {
    fn notify(
        &self,
        test: &TestEntity,
    ) {
        self(test)
    }
}

/// Prints one block per test to a writer, stdout by default.
#[derive(Debug)]
pub struct ConsoleObserver<W: Write = io::Stdout> {
    out: RefCell<W>,
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl ConsoleObserver<Vec<u8>> {
    /// Everything written so far, for in-memory observers.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out.borrow()).into_owned()
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn notify(
        &self,
        test: &TestEntity,
    ) {
        let action = if test.status() == TestStatus::Skipped {
            "SKIPPING TEST"
        } else {
            "RUNNING TEST"
        };
        let mut out = self.out.borrow_mut();
        let written = writeln!(
            out,
            "{action} [{}] [{:.3}ms]:\nStatus: {}",
            test.label(),
            test.exec_time().as_secs_f64() * 1000.0,
            test.status(),
        );
        if let Err(err) = written {
            warn!(%err, "console observer failed to write");
        }
    }
}

/// Emits one tracing event per test.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn notify(
        &self,
        test: &TestEntity,
    ) {
        let label = test.label();
        let elapsed = test.exec_time();
        match test.status() {
            TestStatus::Passed => info!(label, ?elapsed, "test passed"),
            TestStatus::Skipped =>
                info!(label, reason = test.skipped_reason(), "test skipped"),
            TestStatus::Failed =>
                warn!(label, ?elapsed, reason = test.failure_reason(), "test failed"),
            TestStatus::Error =>
                error!(label, ?elapsed, error = test.error_message(), "test errored"),
            TestStatus::None => debug!(label, "test not run"),
        }
    }
}

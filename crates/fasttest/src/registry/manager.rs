//! Registration and execution of the tests of one scenario

use super::Registry;
use crate::{
    failure::TestResult,
    observer::Observer,
    scenario::ScenarioId,
    test::{
        TestEntity,
        TestStatus,
    },
};
use std::{
    cell::Ref,
    fmt,
    rc::Rc,
    time::Duration,
};
use tracing::{
    debug,
    info,
    instrument,
    warn,
};

/// Owns the registration and the run of one scenario.
///
/// All counters and categorized lists read as empty until
/// [`run_tests`](Self::run_tests) completed. The categorized lists are
/// append-only: running a second time files every test again, doubling the
/// counts.
pub struct RegistryManager {
    id: ScenarioId,
    registry: Registry,
    run: bool,
    exec_time: Duration,
    passed: Vec<usize>,
    failed: Vec<usize>,
    skipped: Vec<usize>,
    with_error: Vec<usize>,
    observers: Vec<Rc<dyn Observer>>,
}

impl RegistryManager {
    /// Manager of `id`, creating its empty slot in `registry`.
    pub fn new(
        registry: Registry,
        id: impl Into<ScenarioId>,
    ) -> Self {
        let id = id.into();
        registry.ensure_slot(&id);
        Self {
            id,
            registry,
            run: false,
            exec_time: Duration::ZERO,
            passed: Vec::new(),
            failed: Vec::new(),
            skipped: Vec::new(),
            with_error: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn id(&self) -> &ScenarioId {
        &self.id
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn add(
        &mut self,
        test: TestEntity,
    ) -> &mut Self {
        debug!(
            scenario = %self.id,
            label = test.label(),
            skipped = test.is_skipped(),
            "registering test"
        );
        self.registry.push(&self.id, test);
        self
    }
    pub fn add_test(
        &mut self,
        label: impl Into<String>,
        body: impl FnOnce() -> TestResult + 'static,
    ) -> &mut Self {
        self.add(TestEntity::new(label, body))
    }
    pub fn add_unlabeled(
        &mut self,
        body: impl FnOnce() -> TestResult + 'static,
    ) -> &mut Self {
        self.add(TestEntity::unlabeled(body))
    }
    pub fn skip_test(
        &mut self,
        label: impl Into<String>,
        body: impl FnOnce() -> TestResult + 'static,
    ) -> &mut Self {
        self.add(TestEntity::skipped(label, body))
    }
    pub fn skip_test_with_reason(
        &mut self,
        reason: impl Into<String>,
        label: impl Into<String>,
        body: impl FnOnce() -> TestResult + 'static,
    ) -> &mut Self {
        self.add(TestEntity::skipped_with_reason(reason, label, body))
    }
    pub fn skip_unlabeled(
        &mut self,
        body: impl FnOnce() -> TestResult + 'static,
    ) -> &mut Self {
        self.add(TestEntity::skipped("", body))
    }

    /// Observers are notified in the order they were added.
    pub fn add_observer(
        &mut self,
        observer: Rc<dyn Observer>,
    ) -> &mut Self {
        self.observers.push(observer);
        self
    }
    /// Detach an observer previously added, compared by identity.
    pub fn remove_observer(
        &mut self,
        observer: &Rc<dyn Observer>,
    ) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
        before != self.observers.len()
    }

    /// Run every test of the scenario in declaration order.
    #[instrument(skip(self), fields(scenario = %self.id))]
    pub fn run_tests(&mut self) {
        let count = self.registry.len(&self.id);
        info!(count, "running scenario");
        for index in 0..count {
            let Some(test) = self.registry.run_test(&self.id, index) else {
                continue;
            };
            self.exec_time += test.exec_time();
            for observer in &self.observers {
                observer.notify(&test);
            }
            let list = match test.status() {
                TestStatus::Passed => &mut self.passed,
                TestStatus::Failed => {
                    warn!(label = test.label(), "test failed");
                    &mut self.failed
                },
                TestStatus::Error => {
                    warn!(
                        label = test.label(),
                        error = test.error_message(),
                        "test raised an error"
                    );
                    &mut self.with_error
                },
                TestStatus::Skipped => &mut self.skipped,
                TestStatus::None => {
                    warn!(label = test.label(), "test did not run");
                    continue;
                },
            };
            list.push(index);
        }
        self.run = true;
        info!(
            passed = self.passed.len(),
            failed = self.failed.len(),
            skipped = self.skipped.len(),
            errors = self.with_error.len(),
            elapsed = ?self.exec_time,
            "scenario finished"
        );
    }

    pub fn has_run(&self) -> bool {
        self.run
    }

    fn gated(
        &self,
        list: &[usize],
    ) -> usize {
        if self.run { list.len() } else { 0 }
    }
    fn collect(
        &self,
        list: &[usize],
    ) -> Vec<Ref<'_, TestEntity>> {
        if !self.run {
            return Vec::new();
        }
        list.iter()
            .filter_map(|&index| self.registry.test(&self.id, index))
            .collect()
    }

    pub fn passed_count(&self) -> usize {
        self.gated(&self.passed)
    }
    pub fn failed_count(&self) -> usize {
        self.gated(&self.failed)
    }
    pub fn skipped_count(&self) -> usize {
        self.gated(&self.skipped)
    }
    pub fn with_error_count(&self) -> usize {
        self.gated(&self.with_error)
    }
    pub fn all_tests_count(&self) -> usize {
        if self.run {
            self.registry.len(&self.id)
        } else {
            0
        }
    }
    /// Sum of the execution times of every test run so far.
    pub fn all_tests_exec_time(&self) -> Duration {
        if self.run {
            self.exec_time
        } else {
            Duration::ZERO
        }
    }

    pub fn passed_tests(&self) -> Vec<Ref<'_, TestEntity>> {
        self.collect(&self.passed)
    }
    pub fn failed_tests(&self) -> Vec<Ref<'_, TestEntity>> {
        self.collect(&self.failed)
    }
    pub fn skipped_tests(&self) -> Vec<Ref<'_, TestEntity>> {
        self.collect(&self.skipped)
    }
    pub fn with_error_tests(&self) -> Vec<Ref<'_, TestEntity>> {
        self.collect(&self.with_error)
    }
    /// Every registered test, whether the scenario ran or not.
    pub fn all_tests(&self) -> Ref<'_, [TestEntity]> {
        self.registry.tests(&self.id)
    }
}

impl fmt::Debug for RegistryManager {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("RegistryManager")
            .field("id", &self.id)
            .field("run", &self.run)
            .field("tests", &self.registry.len(&self.id))
            .field("observers", &self.observers.len())
            .finish()
    }
}

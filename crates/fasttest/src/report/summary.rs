use crate::{
    failure::FailureRecord,
    registry::RegistryManager,
    scenario::ScenarioId,
    test::{
        TestEntity,
        TestStatus,
    },
};
use serde::Serialize;

/// Serializable snapshot of one test after a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestRecord {
    pub label: String,
    pub status: TestStatus,
    pub exec_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panic_location: Option<String>,
}

impl From<&TestEntity> for TestRecord {
    fn from(test: &TestEntity) -> Self {
        let message = match test.status() {
            TestStatus::Failed => Some(test.failure_reason()),
            TestStatus::Error => Some(test.error_message()),
            TestStatus::Skipped if !test.skipped_reason().is_empty() =>
                Some(test.skipped_reason()),
            _ => None,
        };
        Self {
            label: test.label().to_string(),
            status: test.status(),
            exec_time_ms: test.exec_time().as_secs_f64() * 1000.0,
            message: message.map(str::to_string),
            failure: test.failure().cloned(),
            panic_location: test.panic_location().map(str::to_string),
        }
    }
}

/// Counts and per-test records of a scenario, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub scenario: ScenarioId,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub exec_time_ms: f64,
    pub tests: Vec<TestRecord>,
}

impl RunSummary {
    pub fn from_manager(manager: &RegistryManager) -> Self {
        Self {
            scenario: manager.id().clone(),
            total: manager.all_tests_count(),
            passed: manager.passed_count(),
            failed: manager.failed_count(),
            skipped: manager.skipped_count(),
            errors: manager.with_error_count(),
            exec_time_ms: manager.all_tests_exec_time().as_secs_f64() * 1000.0,
            tests: manager.all_tests().iter().map(TestRecord::from).collect(),
        }
    }

    /// No test failed or raised an error.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Registry,
        assert_that,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn snapshots_counts_and_records() {
        let mut manager = RegistryManager::new(Registry::new(), "Snapshot");
        manager
            .add_test("ok", || Ok(()))
            .add_test("wrong", || {
                assert_that("a").because("letters").is_equal_to("b")?;
                Ok(())
            })
            .skip_test("idle", || Ok(()));
        manager.run_tests();
        let summary = RunSummary::from_manager(&manager);
        assert_eq!(
            (summary.total, summary.passed, summary.failed, summary.skipped),
            (3, 1, 1, 1)
        );
        assert!(!summary.is_success());
        let statuses: Vec<_> = summary.tests.iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            [TestStatus::Passed, TestStatus::Failed, TestStatus::Skipped]
        );
        assert_eq!(summary.tests[0].message, None);
        assert_eq!(summary.tests[2].message, None);
        let failure = summary.tests[1].failure.as_ref().unwrap();
        assert_eq!(failure.message, "letters");
        assert_eq!(failure.reached.as_deref(), Some("\"a\""));
    }

    #[test]
    fn serializes_to_json() {
        let mut manager = RegistryManager::new(Registry::new(), "Json");
        manager.add_test("ok", || Ok(()));
        manager.run_tests();
        let summary = RunSummary::from_manager(&manager);
        assert!(summary.is_success());
        let value: serde_json::Value =
            serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["scenario"], "Json");
        assert_eq!(value["passed"], 1);
        assert_eq!(value["tests"][0]["status"], "PASSED");
        assert!(value["tests"][0].get("failure").is_none());
        assert!(value["tests"][0].get("panic_location").is_none());
    }
}

use fasttest::{
    ConsoleReporter,
    FailureKind,
    Registry,
    RegistryManager,
    RunSummary,
    ScenarioId,
    TestEntity,
    TestError,
    TestResult,
    TestRunner,
    TestStatus,
    assert_that,
    line_info,
    scenario,
};
use pretty_assertions::assert_eq;
use std::{
    cell::{
        Cell,
        RefCell,
    },
    rc::Rc,
    time::Duration,
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("division by zero")]
struct DivideByZero;

fn divide(
    a: i32,
    b: i32,
) -> Result<i32, DivideByZero> {
    if b == 0 { Err(DivideByZero) } else { Ok(a / b) }
}

scenario!(Calculator, |manager| {
    manager
        .add_test("equal", || {
            assert_that(5).is_equal_to(5)?;
            Ok(())
        })
        .add_test("tolerance", || {
            assert_that(1.0_f64).is_equal_within(1.0001, 0.001)?;
            Ok(())
        })
        .add_test("division by zero", || {
            assert_that(|| divide(1, 0)).expect_error::<DivideByZero>()?;
            Ok(())
        })
        .add_test("off by one", || {
            assert_that(4).at(line_info!()).is_equal_to(5)?;
            Ok(())
        })
        .skip_test_with_reason("not implemented", "modulo", || Ok(()))
        .add_test("propagated", || {
            let value = divide(2, 0)?;
            assert_that(value).is_equal_to(0)?;
            Ok(())
        });
});

fn run_calculator() -> TestRunner {
    let mut runner = TestRunner::new();
    runner.register::<Calculator>();
    runner.run::<Calculator>();
    runner
}

#[test]
fn counts_add_up_after_a_run() {
    let runner = run_calculator();
    let manager = runner.manager::<Calculator>().unwrap();
    assert_eq!(manager.all_tests_count(), 6);
    assert_eq!(
        (
            manager.passed_count(),
            manager.failed_count(),
            manager.skipped_count(),
            manager.with_error_count()
        ),
        (3, 1, 1, 1)
    );
    let filed: usize = [
        manager.passed_tests().len(),
        manager.failed_tests().len(),
        manager.skipped_tests().len(),
        manager.with_error_tests().len(),
    ]
    .iter()
    .sum();
    assert_eq!(filed, manager.all_tests_count());
}

#[test]
fn failure_carries_reached_and_expected() {
    let runner = run_calculator();
    let manager = runner.manager::<Calculator>().unwrap();
    let failed = manager.failed_tests();
    let failure = failed[0].failure().unwrap();
    assert_eq!(failure.kind, FailureKind::Equal);
    assert_eq!(failure.reached.as_deref(), Some("4"));
    assert_eq!(failure.expected.as_deref(), Some("5"));
    assert!(failure.message.contains("scenarios.rs:"));
}

#[test]
fn other_errors_are_filed_as_errors() {
    let runner = run_calculator();
    let manager = runner.manager::<Calculator>().unwrap();
    let errors = manager.with_error_tests();
    assert_eq!(errors[0].label(), "propagated");
    assert_eq!(errors[0].error_message(), "division by zero");
}

#[test]
fn unrun_scenario_counts_nothing() {
    let mut runner = TestRunner::new();
    let manager = runner.register::<Calculator>();
    assert_eq!(manager.all_tests_count(), 0);
    assert_eq!(manager.all_tests().len(), 6);
    assert!(
        manager
            .all_tests()
            .iter()
            .all(|test| test.status() == TestStatus::None)
    );
}

#[test]
fn rerun_doubles_categorized_lists() {
    let mut runner = run_calculator();
    let manager = runner.run::<Calculator>().unwrap();
    assert_eq!(manager.passed_count(), 6);
    assert_eq!(manager.failed_count(), 2);
    assert_eq!(manager.skipped_count(), 2);
    assert_eq!(manager.with_error_count(), 2);
    assert_eq!(manager.all_tests_count(), 6);
}

#[test]
fn tolerance_bounds_float_equality() {
    assert!(assert_that(1.0_f64).is_equal_within(1.0001, 0.001).is_ok());
    assert!(assert_that(1.0_f64).is_equal_within(1.1, 0.001).is_err());
}

#[test]
fn case_insensitive_text_equality() {
    assert!(assert_that("HELLO").is_equal_to_str("Hello", true).is_ok());
    assert!(assert_that("HELLO").is_equal_to_str("Hello", false).is_err());
}

#[test]
fn wrong_or_missing_error_is_an_exception_failure() {
    #[derive(Debug, Error)]
    #[error("overflow")]
    struct Overflow;

    let failure = assert_that(|| divide(1, 1))
        .expect_error::<DivideByZero>()
        .unwrap_err();
    assert_eq!(failure.kind, FailureKind::Exception);
    assert!(failure.expected_error.as_deref().unwrap().ends_with("DivideByZero"));

    let failure = assert_that(|| Err::<(), _>(Overflow))
        .expect_error::<DivideByZero>()
        .unwrap_err();
    assert_eq!(failure.kind, FailureKind::Exception);
}

#[test]
fn skipped_bodies_never_run() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let mut manager = RegistryManager::new(Registry::new(), "skipping");
    manager.skip_test("counter", move || {
        counter.set(counter.get() + 1);
        Ok(())
    });
    manager.run_tests();
    assert_eq!(calls.get(), 0);
    let skipped = manager.skipped_tests();
    let test = &skipped[0];
    assert_eq!(test.status(), TestStatus::Skipped);
    assert_eq!(test.exec_time(), Duration::ZERO);
}

#[test]
fn observers_follow_declaration_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let mut runner = TestRunner::new();
    runner.add_observer(Rc::new(move |test: &TestEntity| {
        log.borrow_mut().push(test.label().to_string())
    }));
    runner.register::<Calculator>();
    runner.run_all();
    assert_eq!(
        *seen.borrow(),
        [
            "equal",
            "tolerance",
            "division by zero",
            "off by one",
            "modulo",
            "propagated",
        ]
    );
}

#[test]
fn scenarios_are_partitioned_by_token() {
    let registry = Registry::new();
    let mut first = RegistryManager::new(registry.clone(), "first");
    let mut second = RegistryManager::new(registry.clone(), ScenarioId::new("second"));
    first.add_unlabeled(|| Ok(())).add_unlabeled(|| Ok(()));
    second.add_unlabeled(|| -> TestResult { Err(TestError::error("nope")) });
    first.run_tests();
    second.run_tests();
    assert_eq!(registry.len(&ScenarioId::new("first")), 2);
    assert_eq!(registry.len(&ScenarioId::new("second")), 1);
    assert_eq!(first.passed_count(), 2);
    assert_eq!(second.with_error_count(), 1);
}

#[test]
fn report_and_summary_agree() {
    let runner = run_calculator();
    let manager = runner.manager::<Calculator>().unwrap();
    let report = ConsoleReporter::new(manager).with_ansi(false).render(false);
    assert!(report.contains("\tPASSED: 3/6"));
    assert!(report.contains("\tFAILED: 1/6"));
    assert!(report.contains("\t\t[off by one]"));
    let summary = RunSummary::from_manager(manager);
    assert_eq!(summary.scenario, ScenarioId::new("Calculator"));
    assert!(!summary.is_success());
}

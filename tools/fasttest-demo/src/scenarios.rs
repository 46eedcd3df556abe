//! Sample scenarios exercising every outcome

use fasttest::{
    TestRunner,
    assert_that,
    line_info_f,
    scenario,
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("division by zero")]
pub struct DivideByZero;

fn divide(
    a: f64,
    b: f64,
) -> Result<f64, DivideByZero> {
    if b == 0.0 { Err(DivideByZero) } else { Ok(a / b) }
}

scenario!(Arithmetic, |manager| {
    manager
        .add_test("addition", || {
            assert_that(2 + 2).is_equal_to(4)?;
            Ok(())
        })
        .add_test("integer division truncates", || {
            assert_that(7 / 2).because("remainder is dropped").is_equal_to(3)?;
            Ok(())
        })
        .add_test("float sum within tolerance", || {
            assert_that(0.1 + 0.2).is_equal_within(0.3, 1e-9)?;
            Ok(())
        })
        .add_test("float sum exact", || {
            assert_that(0.1 + 0.2)
                .because("binary floats are not exact")
                .at(line_info_f!())
                .is_equal_to(0.3)?;
            Ok(())
        })
        .add_test("division by zero", || {
            assert_that(|| divide(1.0, 0.0)).expect_error::<DivideByZero>()?;
            Ok(())
        });
});

scenario!(Text, |manager| {
    manager
        .add_test("ignore case", || {
            assert_that("FastTest").is_equal_to_str("fasttest", true)?;
            Ok(())
        })
        .add_test("respect case", || {
            assert_that("FastTest")
                .is_not_equal_to_str("fasttest", false)?
                .and_that(String::from("a"))
                .is_not_equal_to("b")?;
            Ok(())
        })
        .skip_test_with_reason("unicode folding is not supported", "unicode", || {
            assert_that("Straße").is_equal_to_str("STRASSE", true)?;
            Ok(())
        });
});

scenario!(Errors, |manager| {
    manager
        .add_test("parse number", || {
            let value: i32 = "forty-two".parse()?;
            assert_that(value).is_equal_to(42)?;
            Ok(())
        })
        .add_test("out of bounds", || {
            let values = vec![1, 2, 3];
            let index = values.len();
            assert_that(values[index]).is_equal_to(3)?;
            Ok(())
        })
        .add_unlabeled(|| {
            let missing: Option<u8> = None;
            assert_that(missing).is_null()?.and_that(true).is_true()?;
            Ok(())
        });
});

/// Register every sample scenario with `runner`.
pub fn register(runner: &mut TestRunner) {
    runner.register::<Arithmetic>();
    runner.register::<Text>();
    runner.register::<Errors>();
}

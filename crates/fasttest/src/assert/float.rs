use super::{
    Check,
    Expression,
};
use crate::failure::{
    FailureKind,
    Render,
};

/// Floating point types comparable within a tolerance.
pub trait Tolerance: Copy + PartialOrd + Render {
    fn abs_diff(
        self,
        other: Self,
    ) -> Self;
    fn magnitude(self) -> Self;
}

macro_rules! impl_tolerance {
    ($($t:ty),*) => {
        $(
            impl Tolerance for $t {
                fn abs_diff(
                    self,
                    other: Self,
                ) -> Self {
                    (self - other).abs()
                }
                fn magnitude(self) -> Self {
                    self.abs()
                }
            }
        )*
    };
}

impl_tolerance!(f32, f64);

impl<T: Tolerance> Expression<T> {
    /// `|value - expected| <= |tolerance|`
    pub fn is_equal_within(
        &self,
        expected: T,
        tolerance: T,
    ) -> Check {
        self.check(
            self.value.abs_diff(expected) <= tolerance.magnitude(),
            FailureKind::Equal,
            || self.value.render(),
            || expected.render(),
        )
    }

    /// `|value - not_expected| > |tolerance|`
    pub fn is_not_equal_within(
        &self,
        not_expected: T,
        tolerance: T,
    ) -> Check {
        self.check(
            self.value.abs_diff(not_expected) > tolerance.magnitude(),
            FailureKind::Different,
            || self.value.render(),
            || not_expected.render(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_that,
        failure::FailureKind,
    };

    #[test]
    fn equal_within_tolerance() {
        assert!(assert_that(1.0_f64).is_equal_within(1.0001, 0.001).is_ok());
        assert!(assert_that(1.0_f32).is_equal_within(0.9995, -0.001).is_ok());
        let failure = assert_that(1.0_f64)
            .is_equal_within(1.1, 0.001)
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::Equal);
        assert_eq!(failure.expected.as_deref(), Some("1.1"));
    }

    #[test]
    fn not_equal_within_tolerance() {
        assert!(assert_that(1.0_f64).is_not_equal_within(1.1, 0.001).is_ok());
        let failure = assert_that(1.0_f64)
            .is_not_equal_within(1.0001, 0.001)
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::Different);
    }

    #[test]
    fn nan_is_never_within_tolerance() {
        assert!(assert_that(f64::NAN).is_equal_within(f64::NAN, 1.0).is_err());
    }
}

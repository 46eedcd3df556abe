use super::{
    Check,
    Expression,
};
use crate::failure::FailureKind;

fn normalize(
    text: &str,
    ignore_case: bool,
) -> String {
    if ignore_case {
        text.to_lowercase()
    } else {
        text.to_string()
    }
}

impl<T: AsRef<str>> Expression<T> {
    /// Text equality, optionally ignoring case.
    pub fn is_equal_to_str(
        &self,
        expected: &str,
        ignore_case: bool,
    ) -> Check {
        let reached = self.value.as_ref();
        self.check(
            normalize(reached, ignore_case) == normalize(expected, ignore_case),
            FailureKind::Equal,
            || Some(format!("{reached:?}")),
            || Some(format!("{expected:?}")),
        )
    }

    /// Text inequality, optionally ignoring case.
    pub fn is_not_equal_to_str(
        &self,
        not_expected: &str,
        ignore_case: bool,
    ) -> Check {
        let reached = self.value.as_ref();
        self.check(
            normalize(reached, ignore_case) != normalize(not_expected, ignore_case),
            FailureKind::Different,
            || Some(format!("{reached:?}")),
            || Some(format!("{not_expected:?}")),
        )
    }
}

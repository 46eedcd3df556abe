//! Scenario identity
//!
//! A scenario is a named group of tests. Its [`ScenarioId`] partitions the
//! [`Registry`](crate::Registry): every scenario owns exactly one ordered
//! sequence of tests, addressed by an explicit string token.

use crate::registry::RegistryManager;
use derive_more::Display;
use serde::Serialize;

/// Stable key of a scenario inside a registry.
///
/// Keys built from the same token compare equal, distinct tokens never
/// collide.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize,
)]
#[serde(transparent)]
pub struct ScenarioId(String);

impl ScenarioId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
    /// Key of a declared [`Scenario`] type.
    pub fn of<S: Scenario>() -> Self {
        Self::new(S::NAME)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ScenarioId {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for ScenarioId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// A declared group of tests.
///
/// `describe` is called exactly once when the scenario is registered with
/// a [`TestRunner`](crate::TestRunner) and adds the scenario's tests to the
/// given manager.
pub trait Scenario {
    const NAME: &'static str;

    fn describe(manager: &mut RegistryManager);
}

/// Declare a unit struct implementing [`Scenario`].
///
/// The struct name doubles as the scenario name.
///
/// # Example
///
/// ```rust
/// use fasttest::{assert_that, scenario, TestRunner};
///
/// scenario!(Arithmetic, |manager| {
///     manager.add_test("addition", || {
///         assert_that(1 + 1).is_equal_to(2)?;
///         Ok(())
///     });
/// });
///
/// let mut runner = TestRunner::new();
/// runner.register::<Arithmetic>();
/// runner.run::<Arithmetic>();
/// assert_eq!(runner.manager::<Arithmetic>().unwrap().passed_count(), 1);
/// ```
#[macro_export]
macro_rules! scenario {
    ($(#[$meta:meta])* $vis:vis $name:ident, |$manager:ident| $body:block $(;)?) => {
        $(#[$meta])*
        $vis struct $name;

        impl $crate::Scenario for $name {
            const NAME: &'static str = stringify!($name);

            fn describe($manager: &mut $crate::RegistryManager) $body
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Parsing;
    impl Scenario for Parsing {
        const NAME: &'static str = "parsing";
        fn describe(_: &mut RegistryManager) {}
    }

    #[test]
    fn identical_tokens_share_a_key() {
        assert_eq!(ScenarioId::new("parsing"), ScenarioId::of::<Parsing>());
        assert_eq!(ScenarioId::from("a"), ScenarioId::from(String::from("a")));
    }

    #[test]
    fn distinct_tokens_do_not_collide() {
        let keys: HashSet<_> = ["a", "b", "ab", "A"]
            .into_iter()
            .map(ScenarioId::new)
            .collect();
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn displays_token() {
        assert_eq!(ScenarioId::new("io").to_string(), "io");
    }
}

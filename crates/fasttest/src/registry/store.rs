//! Scenario keyed storage of test entities

use crate::{
    scenario::ScenarioId,
    test::{
        Outcome,
        TestEntity,
    },
};
use indexmap::IndexMap;
use std::{
    cell::{
        Ref,
        RefCell,
    },
    fmt,
    rc::Rc,
    time::Instant,
};
use tracing::trace;

/// Tests of one scenario in declaration order.
pub type TestList = Vec<TestEntity>;

type Store = IndexMap<ScenarioId, TestList>;

/// Shared handle to the registry store.
///
/// Cloning the handle shares the underlying store. The store is meant for
/// single threaded use. Test bodies may read the store or register and run
/// other scenarios, but must not add tests to the scenario that is running.
#[derive(Clone, Default)]
pub struct Registry {
    store: Rc<RefCell<Store>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the empty sequence of `id` unless it exists.
    ///
    /// Returns `true` when the sequence was created by this call.
    pub fn ensure_slot(
        &self,
        id: &ScenarioId,
    ) -> bool {
        let mut store = self.store.borrow_mut();
        if store.contains_key(id) {
            false
        } else {
            trace!(scenario = %id, "creating registry slot");
            store.insert(id.clone(), TestList::new());
            true
        }
    }

    /// Append a test to the sequence of `id`, creating it on first use.
    pub fn push(
        &self,
        id: &ScenarioId,
        test: TestEntity,
    ) {
        self.store
            .borrow_mut()
            .entry(id.clone())
            .or_default()
            .push(test);
    }

    pub fn contains(
        &self,
        id: &ScenarioId,
    ) -> bool {
        self.store.borrow().contains_key(id)
    }

    /// Number of tests registered for `id`.
    pub fn len(
        &self,
        id: &ScenarioId,
    ) -> usize {
        self.store.borrow().get(id).map_or(0, Vec::len)
    }

    /// Scenario keys in the order their slots were created.
    pub fn scenarios(&self) -> Vec<ScenarioId> {
        self.store.borrow().keys().cloned().collect()
    }

    /// Read-only view of the tests of `id`; empty for unknown keys.
    pub fn tests(
        &self,
        id: &ScenarioId,
    ) -> Ref<'_, [TestEntity]> {
        Ref::map(self.store.borrow(), |store| {
            store.get(id).map_or(&[][..], Vec::as_slice)
        })
    }

    pub fn test(
        &self,
        id: &ScenarioId,
        index: usize,
    ) -> Option<Ref<'_, TestEntity>> {
        Ref::filter_map(self.store.borrow(), |store| {
            store.get(id).and_then(|tests| tests.get(index))
        })
        .ok()
    }

    /// Run the test at `index` of `id` in place.
    ///
    /// The store is only borrowed to take the body out and to record the
    /// outcome, so bodies may use the registry themselves. Returns a view of
    /// the test after it ran.
    pub(crate) fn run_test(
        &self,
        id: &ScenarioId,
        index: usize,
    ) -> Option<Ref<'_, TestEntity>> {
        let body = self.store.borrow_mut().get_mut(id)?.get_mut(index)?.take_body();
        if let Some(body) = body {
            let start = Instant::now();
            let outcome = Outcome::of(body);
            let elapsed = start.elapsed();
            self.store
                .borrow_mut()
                .get_mut(id)?
                .get_mut(index)?
                .finish(outcome, elapsed);
        }
        self.test(id, index)
    }
}

impl fmt::Debug for Registry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let store = self.store.borrow();
        f.debug_map()
            .entries(store.iter().map(|(id, tests)| (id, tests.len())))
            .finish()
    }
}

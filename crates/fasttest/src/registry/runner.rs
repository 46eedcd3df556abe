//! Runner context owning a registry and its scenario managers

use super::{
    Registry,
    RegistryManager,
};
use crate::{
    observer::Observer,
    report::RunSummary,
    scenario::{
        Scenario,
        ScenarioId,
    },
};
use derive_more::Debug;
use indexmap::IndexMap;
use std::{
    collections::HashSet,
    rc::Rc,
};
use tracing::{
    debug,
    instrument,
};

/// Explicitly created test runner.
///
/// Owns the [`Registry`] and one [`RegistryManager`] per scenario, kept in
/// registration order. A manager created through [`scenario`](Self::scenario)
/// is not described until its scenario type is registered.
#[derive(Debug, Default)]
pub struct TestRunner {
    registry: Registry,
    managers: IndexMap<ScenarioId, RegistryManager>,
    described: HashSet<ScenarioId>,
    #[debug(skip)]
    observers: Vec<Rc<dyn Observer>>,
}

impl TestRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store shared by every scenario of this runner.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register a declared scenario, describing its tests once.
    ///
    /// Registering the same scenario again returns the existing manager.
    #[instrument(skip(self), fields(scenario = S::NAME))]
    pub fn register<S: Scenario>(&mut self) -> &mut RegistryManager {
        let id = ScenarioId::of::<S>();
        let first = self.described.insert(id.clone());
        let manager = self.scenario(id);
        if first {
            S::describe(manager);
            debug!(tests = manager.all_tests().len(), "scenario described");
        }
        manager
    }

    /// Manager of `id`, created on first access.
    pub fn scenario(
        &mut self,
        id: impl Into<ScenarioId>,
    ) -> &mut RegistryManager {
        let id = id.into();
        let registry = &self.registry;
        let observers = &self.observers;
        self.managers.entry(id.clone()).or_insert_with(|| {
            let mut manager = RegistryManager::new(registry.clone(), id);
            for observer in observers {
                manager.add_observer(observer.clone());
            }
            manager
        })
    }

    pub fn get(
        &self,
        id: &ScenarioId,
    ) -> Option<&RegistryManager> {
        self.managers.get(id)
    }
    pub fn manager<S: Scenario>(&self) -> Option<&RegistryManager> {
        self.get(&ScenarioId::of::<S>())
    }
    pub fn manager_mut<S: Scenario>(&mut self) -> Option<&mut RegistryManager> {
        self.managers.get_mut(&ScenarioId::of::<S>())
    }
    pub fn managers(&self) -> impl Iterator<Item = &RegistryManager> {
        self.managers.values()
    }

    /// Attach an observer to every current and future scenario.
    pub fn add_observer(
        &mut self,
        observer: Rc<dyn Observer>,
    ) -> &mut Self {
        for manager in self.managers.values_mut() {
            manager.add_observer(observer.clone());
        }
        self.observers.push(observer);
        self
    }

    /// Run a registered scenario.
    pub fn run<S: Scenario>(&mut self) -> Option<&RegistryManager> {
        self.run_scenario(&ScenarioId::of::<S>())
    }
    pub fn run_scenario(
        &mut self,
        id: &ScenarioId,
    ) -> Option<&RegistryManager> {
        let manager = self.managers.get_mut(id)?;
        manager.run_tests();
        Some(&*manager)
    }

    /// Run every scenario in registration order.
    pub fn run_all(&mut self) {
        for manager in self.managers.values_mut() {
            manager.run_tests();
        }
    }

    pub fn summaries(&self) -> Vec<RunSummary> {
        self.managers().map(RunSummary::from_manager).collect()
    }
}

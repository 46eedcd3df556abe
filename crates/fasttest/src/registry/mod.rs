//! Test registry and execution
//!
//! - [`Registry`]: scenario keyed store of test sequences
//! - [`RegistryManager`]: registration and run of one scenario
//! - [`TestRunner`]: context owning a registry and its managers

mod manager;
mod runner;
mod store;

pub use manager::RegistryManager;
pub use runner::TestRunner;
pub use store::{
    Registry,
    TestList,
};

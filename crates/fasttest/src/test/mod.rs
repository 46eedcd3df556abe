//! Test entities and their lifecycle


pub use entity::{
    TestBody,
    TestEntity,
};
pub use outcome::Outcome;
pub use status::TestStatus;

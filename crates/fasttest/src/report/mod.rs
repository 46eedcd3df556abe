//! Result reporting
//!
//! - [`ConsoleReporter`]: colored text summary of a finished scenario
//! - [`RunSummary`]: serializable snapshot for machine readable output

mod color;
mod console;
mod summary;

pub use color::{
    Color,
    colored,
    write_colored,
};
pub use console::ConsoleReporter;
pub use summary::{
    RunSummary,
    TestRecord,
};

//! CLI command handlers.

mod compare;

pub use compare::run_compare;

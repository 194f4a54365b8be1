//! CLI command implementations.

pub mod hours;
pub mod order;
pub mod shell;

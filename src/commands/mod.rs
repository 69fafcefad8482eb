//! CLI command handlers

pub mod diagnostics;
pub mod probe;

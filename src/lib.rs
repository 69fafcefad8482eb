//! `dbprobe` - A MySQL connectivity probe
//!
//! This library probes connectivity to a MySQL-compatible server and reports
//! the outcome together with a diagnostic dump of the runtime environment.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Command line interface definitions
pub mod cli;
/// Command handlers
pub mod commands;
/// Configuration management for dbprobe
pub mod config;
pub mod connection;
pub mod diagnostics;
pub mod error;

pub use config::ProbeConfig;
pub use connection::{ProbeConnection, Prober};
pub use diagnostics::DiagnosticsReport;
pub use error::ProbeError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}

//! # Diagnostic report
//!
//! A full dump of the probe's runtime and configuration environment, printed
//! after a successful probe. This is the closest Rust analog to `phpinfo()`:
//! tool build info, probe target, server handshake version, host system,
//! process details, and the complete process environment.
//!
//! Values of environment variables with secret-looking names are redacted
//! before they ever reach the report.

use crate::config::ProbeConfig;
use chrono::{DateTime, Utc};
use std::env;
use std::fmt;

const REDACTED: &str = "[REDACTED]";

/// Env var name fragments whose values must never be printed
const SENSITIVE_MARKERS: [&str; 4] = ["PASSWORD", "SECRET", "TOKEN", "KEY"];

/// Snapshot of the runtime/configuration environment
#[derive(Debug, Clone)]
pub struct DiagnosticsReport {
    /// When the snapshot was taken
    pub generated_at: DateTime<Utc>,
    /// Probe target configuration
    pub target: ProbeConfig,
    /// Server version from the handshake, when a connection succeeded
    pub server_version: Option<(u16, u16, u16)>,
    /// Process environment, sorted by name, secrets redacted
    pub environment: Vec<(String, String)>,
    /// Process id
    pub pid: u32,
    /// Working directory, if resolvable
    pub cwd: Option<String>,
}

impl DiagnosticsReport {
    /// Collect a snapshot of the current runtime environment
    #[must_use]
    pub fn collect(target: &ProbeConfig, server_version: Option<(u16, u16, u16)>) -> Self {
        let mut environment: Vec<(String, String)> = env::vars()
            .map(|(name, value)| {
                if is_sensitive(&name) {
                    (name, REDACTED.to_string())
                } else {
                    (name, value)
                }
            })
            .collect();
        environment.sort();

        Self {
            generated_at: Utc::now(),
            target: target.clone(),
            server_version,
            environment,
            pid: std::process::id(),
            cwd: env::current_dir()
                .ok()
                .map(|p| p.display().to_string()),
        }
    }
}

fn is_sensitive(name: &str) -> bool {
    let upper = name.to_uppercase();
    SENSITIVE_MARKERS
        .iter()
        .any(|marker| upper.contains(marker))
}

impl fmt::Display for DiagnosticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== dbprobe diagnostics ===")?;
        writeln!(f, "Version:        {}", crate::VERSION)?;
        writeln!(f, "Generated:      {}", self.generated_at.to_rfc3339())?;
        writeln!(f)?;

        writeln!(f, "--- Target ---")?;
        writeln!(f, "Host:           {}:{}", self.target.host, self.target.port)?;
        writeln!(f, "User:           {}", self.target.user)?;
        writeln!(f, "Password from:  ${}", self.target.password_env)?;
        match self.server_version {
            Some((major, minor, patch)) => {
                writeln!(f, "Server version: {major}.{minor}.{patch}")?;
            }
            None => writeln!(f, "Server version: (not connected)")?,
        }
        writeln!(f)?;

        writeln!(f, "--- System ---")?;
        writeln!(f, "OS:             {}", env::consts::OS)?;
        writeln!(f, "Architecture:   {}", env::consts::ARCH)?;
        writeln!(f, "Family:         {}", env::consts::FAMILY)?;
        writeln!(f)?;

        writeln!(f, "--- Process ---")?;
        writeln!(f, "PID:            {}", self.pid)?;
        writeln!(
            f,
            "Working dir:    {}",
            self.cwd.as_deref().unwrap_or("(unknown)")
        )?;
        writeln!(f)?;

        writeln!(f, "--- Environment ({} variables) ---", self.environment.len())?;
        for (name, value) in &self.environment {
            writeln!(f, "{name}={value}")?;
        }

        Ok(())
    }
}

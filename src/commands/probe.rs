//! Probe command: connect, report the outcome, dump diagnostics
//!
//! The sequence is fixed: connect, success banner (or fatal error), close,
//! diagnostics dump. One connection, one task, no retry.

use crate::config::ProbeConfig;
use crate::connection::Prober;
use crate::diagnostics::DiagnosticsReport;
use crate::error::Result;
use tracing::{debug, info};

/// Options that override the loaded configuration
#[derive(Debug, Default, Clone)]
pub struct ProbeOverrides {
    /// Database host
    pub host: Option<String>,
    /// Database port
    pub port: Option<u16>,
    /// Database user
    pub user: Option<String>,
    /// Environment variable to read the password from
    pub password_env: Option<String>,
}

impl ProbeOverrides {
    fn apply(self, mut config: ProbeConfig) -> ProbeConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(user) = self.user {
            config.user = user;
        }
        if let Some(password_env) = self.password_env {
            config.password_env = password_env;
        }
        config
    }
}

/// Handle the probe command
///
/// On connection failure the error propagates to the caller and nothing
/// further runs: no banner, no diagnostics. On success the banner is printed
/// exactly once, the connection is released, and the diagnostic report is
/// dumped unconditionally.
pub async fn handle_probe(config_path: &str, overrides: ProbeOverrides) -> Result<()> {
    let config = overrides.apply(ProbeConfig::load(config_path)?);
    debug!(
        "Probing {}:{} as {}",
        config.host, config.port, config.user
    );

    let prober = Prober::new(config.clone());
    let conn = prober.connect().await?;

    println!("✅ Successfully connected to MySQL server");

    let server_version = conn.server_version();
    conn.close().await;

    let report = DiagnosticsReport::collect(&config, Some(server_version));
    print!("{report}");

    info!("Probe completed");
    Ok(())
}

//! # Connectivity Prober
//!
//! A single connection attempt against a MySQL-compatible server. No pooling,
//! no retry, no query execution: the probe speaks exactly one handshake and
//! one COM_QUIT.

use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};
use mysql_async::{Conn, Opts, OptsBuilder};
use tracing::{debug, info, warn};

/// One-shot connectivity prober for a configured target
#[derive(Debug, Clone)]
pub struct Prober {
    config: ProbeConfig,
}

impl Prober {
    /// Create a prober for the given target configuration
    #[must_use]
    pub const fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Get the target configuration
    #[must_use]
    pub const fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Attempt a single connection to the configured server
    ///
    /// The password is resolved from the configured environment variable at
    /// call time; an unset variable means an empty credential. Failure is
    /// fatal to the probe: the error carries the numeric MySQL error code and
    /// message, and no retry is ever attempted.
    pub async fn connect(&self) -> Result<ProbeConnection> {
        let password = self.config.resolve_password();

        debug!(
            "Connecting to {}:{} as {}",
            self.config.host, self.config.port, self.config.user
        );

        let opts = OptsBuilder::default()
            .ip_or_hostname(self.config.host.clone())
            .tcp_port(self.config.port)
            .user(Some(self.config.user.clone()))
            .pass(Some(password));

        let conn = Conn::new(Opts::from(opts))
            .await
            .map_err(ProbeError::from_connect)?;

        let (major, minor, patch) = conn.server_version();
        info!(
            "Connected to {}:{} (server {}.{}.{})",
            self.config.host, self.config.port, major, minor, patch
        );

        Ok(ProbeConnection { conn })
    }
}

/// An open probe connection
///
/// Closing consumes the handle, so a closed connection cannot be reused.
pub struct ProbeConnection {
    conn: Conn,
}

impl ProbeConnection {
    /// Server version triple captured from the connection handshake
    #[must_use]
    pub fn server_version(&self) -> (u16, u16, u16) {
        self.conn.server_version()
    }

    /// Release the connection
    ///
    /// Sends COM_QUIT and drops the handle. A failed disconnect is logged and
    /// otherwise ignored; the probe outcome was already decided at connect
    /// time.
    pub async fn close(self) {
        if let Err(e) = self.conn.disconnect().await {
            warn!("Error while closing connection: {}", e);
        } else {
            debug!("Connection closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prober_holds_config() {
        let config = ProbeConfig::default();
        let prober = Prober::new(config.clone());
        assert_eq!(prober.config(), &config);
    }
}

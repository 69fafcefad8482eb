use thiserror::Error;

/// MySQL client error code for a failed TCP connection (CR_CONN_HOST_ERROR)
pub const CR_CONN_HOST_ERROR: u16 = 2003;

/// MySQL client error code for unclassified client-side failures (CR_UNKNOWN_ERROR)
pub const CR_UNKNOWN_ERROR: u16 = 2000;

/// Custom error types for `dbprobe`
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The connection attempt failed; fatal, never retried
    #[error("Connection error: ({code}) {message}")]
    Connection {
        /// Numeric MySQL error code (server code or client-side CR code)
        code: u16,
        /// Human-readable error message
        message: String,
    },

    /// Configuration loading failed
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// Map a driver error to a `Connection` error carrying a numeric code
    ///
    /// Server-reported failures (bad credentials, unknown database) keep the
    /// server's own error code. Transport-level failures get the classic
    /// libmysqlclient CR_* codes, so the error line always has a non-zero code.
    #[must_use]
    pub fn from_connect(err: mysql_async::Error) -> Self {
        match err {
            mysql_async::Error::Server(server_err) => Self::Connection {
                code: server_err.code,
                message: server_err.message,
            },
            mysql_async::Error::Io(io_err) => Self::Connection {
                code: CR_CONN_HOST_ERROR,
                message: io_err.to_string(),
            },
            other => Self::Connection {
                code: CR_UNKNOWN_ERROR,
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias for `dbprobe` operations
pub type Result<T> = std::result::Result<T, ProbeError>;

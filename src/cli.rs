use clap::{Parser, Subcommand};

/// Main CLI interface for `dbprobe`
#[derive(Parser)]
#[command(name = "dbprobe")]
#[command(version = crate::VERSION)]
#[command(about = "dbprobe - MySQL connectivity probe")]
#[command(
    long_about = "Probe connectivity to a MySQL-compatible server and dump a diagnostic report of the runtime environment"
)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Probe the server: connect, report the outcome, dump diagnostics
    Probe {
        /// Database host
        #[arg(long, value_name = "HOST")]
        host: Option<String>,
        /// Database port
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,
        /// Database user
        #[arg(long, value_name = "USER")]
        user: Option<String>,
        /// Environment variable to read the password from
        #[arg(long, value_name = "VAR")]
        password_env: Option<String>,
        /// Path to a TOML configuration file
        #[arg(long, value_name = "FILE", default_value = "dbprobe.toml")]
        config: String,
    },
    /// Print the runtime diagnostic report without connecting
    Diagnostics,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

use dbprobe::cli::{Cli, Commands};
use dbprobe::commands::{diagnostics, probe};
use std::process;
use tracing_subscriber::EnvFilter;

// Allow println in main CLI binary
#[allow(clippy::disallowed_methods)]
fn main() {
    init_logging();

    let cli = Cli::parse();
    tracing::info!("dbprobe CLI initialized");

    match cli.command {
        Some(Commands::Probe {
            host,
            port,
            user,
            password_env,
            config,
        }) => {
            let overrides = probe::ProbeOverrides {
                host,
                port,
                user,
                password_env,
            };
            let rt = tokio::runtime::Runtime::new().unwrap();
            if let Err(e) = rt.block_on(probe::handle_probe(&config, overrides)) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Some(Commands::Diagnostics) => {
            if let Err(e) = diagnostics::handle_diagnostics() {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        None => {
            // Bare invocation runs the default probe
            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(probe::handle_probe(
                "dbprobe.toml",
                probe::ProbeOverrides::default(),
            ));

            if let Err(e) = result {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}

/// Initialize logging based on environment variables
fn init_logging() {
    // Default to INFO level, can be overridden by RUST_LOG environment variable
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dbprobe=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use haulplan_cli::CliError;
use tracing_subscriber::EnvFilter;

/// Log level used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    init_logging();
    match haulplan_cli::run() {
        Ok(()) => {}
        // Help and version requests are reported by clap with its own exit code.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("haulplan: {err}");
            std::process::exit(1);
        }
    }
}

/// Install a stderr subscriber; `log` records from the libraries are
/// forwarded through its `tracing-log` bridge.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub mod api;
pub mod cli;
pub mod core;
pub mod shared;

pub use crate::core::features::unit_converter::{
    convert, convert_to_string, ConversionEngine, ConversionRequest, ConversionResult, FAILURE_MESSAGE,
};

use clap::Parser;

/// Install the stderr subscriber. `RUST_LOG` overrides the default level.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

pub fn run() {
    init_logging();

    let cli = cli::Cli::parse();
    if let Err(e) = cli::execute(cli) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

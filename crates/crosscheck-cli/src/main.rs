//! Crosscheck CLI - CSV canonicalization and cross-validation.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Inspect { file, schema, json } => {
            commands::inspect::run(file, schema, json, cli.verbose)
        }

        Commands::Normalize {
            file,
            schema,
            output,
        } => commands::normalize::run(file, schema, output, cli.verbose),

        Commands::Validate {
            strings,
            classifications,
            json,
        } => commands::validate::run(strings, classifications, json, cli.verbose),

        Commands::Serve {
            host,
            port,
            cors_origin,
            max_upload_bytes,
            strings,
            classifications,
        } => commands::serve::run(
            server::ServerConfig {
                host,
                port,
                cors_origin,
                max_upload_bytes,
            },
            strings,
            classifications,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

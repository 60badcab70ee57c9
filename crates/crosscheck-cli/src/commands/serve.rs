//! Serve command - run the HTTP API.

use std::path::PathBuf;

use colored::Colorize;
use crosscheck::{ingest_file, Schema, TableStore};

use crate::server::{app, state::AppState, ServerConfig};

pub fn run(
    config: ServerConfig,
    strings: Option<PathBuf>,
    classifications: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TableStore::new();

    // Classifications first so the strings preload can be checked against them
    for (schema, path) in [
        (Schema::Classifications, classifications),
        (Schema::Strings, strings),
    ] {
        let Some(path) = path else { continue };
        let ingested = ingest_file(&path, schema.into())?;
        if verbose {
            println!(
                "Loaded {} {} rows from {}",
                ingested.rows.len(),
                schema,
                path.display()
            );
        }
        store.set(schema, &ingested.rows);
    }

    let preload = store.validate(None);
    if !preload.valid {
        println!(
            "{} {} preloaded strings rows reference unknown classifications",
            "Warning:".yellow(),
            preload.error_count()
        );
    }

    let state = AppState::new(store);

    println!();
    println!(
        "{} {}",
        "Starting API server at".cyan().bold(),
        format!("http://{}/api", config.address()).white().bold()
    );
    println!();
    println!("  CORS origin: {}", config.cors_origin);
    println!("  Upload limit: {} bytes", config.max_upload_bytes);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, &config))?;

    Ok(())
}

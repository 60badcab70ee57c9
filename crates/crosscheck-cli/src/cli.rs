//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crosscheck::SchemaHint;

/// Crosscheck: normalize and cross-validate strings/classifications CSV files
#[derive(Parser)]
#[command(name = "crosscheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest a CSV file and report its dialect and detected schema
    Inspect {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Schema of the file (auto, strings, classifications)
        #[arg(short = 't', long = "type", default_value = "auto")]
        schema: SchemaHint,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a CSV file in canonical column order
    Normalize {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Schema of the file (auto, strings, classifications)
        #[arg(short = 't', long = "type", default_value = "auto")]
        schema: SchemaHint,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that every strings row references an existing classification
    Validate {
        /// Path to the strings CSV file
        #[arg(long, value_name = "FILE")]
        strings: PathBuf,

        /// Path to the classifications CSV file
        #[arg(long, value_name = "FILE")]
        classifications: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API for uploading, editing and exporting tables
    Serve {
        /// Address to bind
        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port for web server
        #[arg(short, long, env = "PORT", default_value = "3001")]
        port: u16,

        /// Allowed CORS origin ("*" for any)
        #[arg(long, env = "CORS_ORIGIN", default_value = "*")]
        cors_origin: String,

        /// Maximum upload size in bytes
        #[arg(long, env = "MAX_FILE_SIZE", default_value_t = 5 * 1024 * 1024)]
        max_upload_bytes: usize,

        /// Strings CSV to load at startup
        #[arg(long, value_name = "FILE")]
        strings: Option<PathBuf>,

        /// Classifications CSV to load at startup
        #[arg(long, value_name = "FILE")]
        classifications: Option<PathBuf>,
    },
}

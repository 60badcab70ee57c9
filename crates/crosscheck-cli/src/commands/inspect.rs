//! Inspect command - report dialect and detected schema of a CSV file.

use std::path::PathBuf;

use colored::Colorize;
use crosscheck::{ingest_file, SchemaHint};

pub fn run(
    file: PathBuf,
    hint: SchemaHint,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let ingested = ingest_file(&file, hint)?;
    let source = &ingested.source;

    if json_output {
        let report = serde_json::json!({
            "file": file.display().to_string(),
            "type": ingested.schema,
            "hint": hint.to_string(),
            "source": source,
            "headers": ingested.headers,
            "row_count": ingested.rows.len(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Inspecting".cyan().bold(),
        file.display().to_string().white()
    );
    println!();
    println!("  Type:       {}", ingested.schema.to_string().green().bold());
    println!("  Encoding:   {}", source.encoding);
    println!(
        "  Delimiter:  {:?} ({})",
        source.delimiter, source.format
    );
    if source.directive_stripped {
        println!("  Directive:  sep= line removed");
    }
    println!("  Rows:       {}", ingested.rows.len());
    println!("  Size:       {} bytes", source.size_bytes);
    println!("  Hash:       {}", source.hash);

    println!();
    println!("{}", "Header mapping:".yellow().bold());
    for raw in &source.raw_headers {
        match crosscheck::schema::resolve(raw) {
            Some(column) if ingested.schema.position(column).is_some() => {
                println!("  {:24} -> {}", raw, column.label().green());
            }
            Some(column) => {
                println!(
                    "  {:24} -> {} {}",
                    raw,
                    column.label().dimmed(),
                    "(not in schema, dropped)".dimmed()
                );
            }
            None => println!("  {:24} -> {}", raw, "(unrecognized, dropped)".dimmed()),
        }
    }

    if verbose {
        println!();
        println!("{}", "Canonical rows:".yellow().bold());
        println!("  {}", ingested.headers.join(" | "));
        for row in ingested.rows.iter().take(10) {
            println!("  {}", row.join(" | "));
        }
        if ingested.rows.len() > 10 {
            println!("  ... {} more", ingested.rows.len() - 10);
        }
    }

    Ok(())
}

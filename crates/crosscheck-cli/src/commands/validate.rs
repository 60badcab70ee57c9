//! Validate command - cross-check a strings file against a classifications file.

use std::path::PathBuf;

use colored::Colorize;
use crosscheck::{ingest_file, validate, Schema, SchemaHint};

pub fn run(
    strings: PathBuf,
    classifications: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for path in [&strings, &classifications] {
        if !path.exists() {
            return Err(format!("File not found: {}", path.display()).into());
        }
    }

    let strings_table = ingest_file(&strings, SchemaHint::from(Schema::Strings))?;
    let classes_table = ingest_file(&classifications, SchemaHint::from(Schema::Classifications))?;

    let result = validate(&strings_table.rows, &classes_table.rows);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.valid {
        println!(
            "{} {} strings rows reference {} classifications",
            "Valid:".green().bold(),
            strings_table.rows.len(),
            classes_table.rows.len()
        );
    } else {
        println!(
            "{} {} of {} strings rows reference missing classifications",
            "Invalid:".red().bold(),
            result.error_count(),
            strings_table.rows.len()
        );
        println!();
        for error in &result.errors {
            println!(
                "  row {:>5}  Topic={:?} Subtopic={:?} Industry={:?}",
                error.row_index + 1,
                error.fields.topic,
                error.fields.subtopic,
                error.fields.industry
            );
        }
        if verbose {
            println!();
            println!("{}", crosscheck::validation::MISSING_COMBINATION.dimmed());
        }
    }

    if !result.valid {
        return Err(format!("{} invalid rows", result.error_count()).into());
    }
    Ok(())
}

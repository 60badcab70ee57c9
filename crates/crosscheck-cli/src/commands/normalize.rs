//! Normalize command - rewrite a CSV file in canonical column order.

use std::path::PathBuf;

use colored::Colorize;
use crosscheck::{export, ingest_file, SchemaHint};

pub fn run(
    file: PathBuf,
    hint: SchemaHint,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let ingested = ingest_file(&file, hint)?;
    let export = export(ingested.schema, &ingested.headers, &ingested.rows);

    match output {
        Some(path) => {
            std::fs::write(&path, export.body.as_bytes())?;
            eprintln!(
                "{} {} {} rows to {}",
                "Wrote".green().bold(),
                ingested.schema,
                ingested.rows.len(),
                path.display()
            );
        }
        None => {
            println!("{}", export.body);
        }
    }

    if verbose {
        eprintln!(
            "  source: {} ({}, {:?})",
            file.display(),
            ingested.source.encoding,
            ingested.source.delimiter
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_writes_canonical_csv() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("classes.csv");
        let output = dir.path().join("out.csv");
        let csv = "sep=;\nclassification;industry;topic;sub topic\nallow; X ;A;A1\n";
        std::fs::write(&input, csv).unwrap();

        run(input, SchemaHint::Auto, Some(output.clone()), false).unwrap();

        assert_eq!(
            std::fs::read_to_string(output).unwrap(),
            "Topic,Subtopic,Industry,Classification\nA,A1,X,allow"
        );
    }

    #[test]
    fn test_normalize_missing_file() {
        let dir = tempdir().unwrap();
        assert!(run(dir.path().join("absent.csv"), SchemaHint::Auto, None, false).is_err());
    }
}

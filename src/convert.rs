use crate::error::{Result, ToolError};
use crate::model::{ConversionResult, Row};
use crate::report::Reporter;
use clap::ValueEnum;
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

/// How to reconcile records whose field count differs from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RowPolicy {
    /// Fail the whole conversion on the first mismatched record.
    Strict,
    /// Pad short records with empty values; drop fields past the header width.
    Lenient,
}

/// Read `input` as headered CSV and wrap the rows with count and source
/// metadata. If `output` is given, the full result is written there as
/// indented JSON, creating parent directories as needed. Nothing is written
/// unless the whole input parses.
pub fn convert(
    input: &Path,
    output: Option<&Path>,
    policy: RowPolicy,
    reporter: &Reporter,
) -> Result<ConversionResult> {
    if !input.exists() {
        return Err(ToolError::NotFound(format!(
            "input file '{}' not found",
            input.display()
        )));
    }
    if input.extension().and_then(|ext| ext.to_str()) != Some("csv") {
        return Err(ToolError::Validation(format!(
            "input file '{}' must be a CSV file",
            input.display()
        )));
    }

    reporter.info(&format!("Processing {}", input.display()));

    let mut reader = ReaderBuilder::new().flexible(true).from_path(input)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut data = Vec::new();
    for record in reader.records() {
        data.push(build_row(&headers, &record?, policy)?);
    }

    let result = ConversionResult::new(data, input.display().to_string());

    if let Some(output) = output {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output, serde_json::to_string_pretty(&result)?)?;
        reporter.info(&format!("Saved output to {}", output.display()));
    }

    Ok(result)
}

fn build_row(headers: &[String], record: &StringRecord, policy: RowPolicy) -> Result<Row> {
    if policy == RowPolicy::Strict && record.len() != headers.len() {
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);
        return Err(ToolError::Validation(format!(
            "record on line {line} has {} fields, expected {}",
            record.len(),
            headers.len()
        )));
    }
    let mut row = Row::with_capacity(headers.len());
    for (i, name) in headers.iter().enumerate() {
        row.insert(name.clone(), record.get(i).unwrap_or("").to_string());
    }
    Ok(row)
}

//! Implementation of `toponym dataset`.
//!
//! Prints what the active dataset contains: revision label, country
//! boundary, default place types, and the size of each name list. The
//! output goes to stdout as plain `key: value` lines, or as a single JSON
//! object with `--format json`.
use std::io::Write;

use serde_json::json;
use toponym_core::{Dataset, Language, PlaceType};

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `dataset` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] when stdout cannot be written.
pub fn run(dataset: &Dataset, format: OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_description(&mut out, dataset, format).map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

fn write_description<W: Write>(
    writer: &mut W,
    dataset: &Dataset,
    format: OutputFormat,
) -> std::io::Result<()> {
    let boundary = dataset.boundary();
    let place_types: Vec<&str> = dataset
        .place_types()
        .iter()
        .copied()
        .map(PlaceType::as_str)
        .collect();
    let registry = dataset.registry();

    match format {
        OutputFormat::Human => {
            writeln!(writer, "revision: {}", dataset.revision())?;
            writeln!(
                writer,
                "boundary: int_name={} admin_level={}",
                boundary.int_name, boundary.admin_level
            )?;
            writeln!(writer, "place types: {}", place_types.join(", "))?;
            for language in Language::ALL {
                writeln!(writer, "names ({language}): {}", registry.len(language))?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let names: serde_json::Map<String, serde_json::Value> = Language::ALL
                .into_iter()
                .map(|l| (l.code().to_owned(), json!(registry.len(l))))
                .collect();
            let description = json!({
                "revision": dataset.revision(),
                "boundary": boundary,
                "place_types": place_types,
                "names": names,
            });
            serde_json::to_writer(&mut *writer, &description)?;
            writeln!(writer)
        }
    }
}

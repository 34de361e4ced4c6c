//! Implementation of `toponym lookup --language <ka|en> <name>`.
//!
//! Answers whether one name is on the official list, matched exactly (no
//! trimming or case folding). Prints `official` or `not official` to stdout,
//! or a single JSON object with `--format json`.
//!
//! Exit codes:
//! - 0 = official
//! - 1 = not official
use std::io::Write;

use serde_json::json;
use toponym_core::{Dataset, Language};

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `lookup` command.
///
/// # Errors
///
/// - [`CliError::NotOfficial`] when the name is not listed.
/// - [`CliError::IoError`] when stdout cannot be written.
pub fn run(
    dataset: &Dataset,
    language: Language,
    name: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let official = dataset.registry().contains(language, name);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_answer(&mut out, language, name, official, format).map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })?;

    if official {
        Ok(())
    } else {
        Err(CliError::NotOfficial {
            language,
            name: name.to_owned(),
        })
    }
}

fn write_answer<W: Write>(
    writer: &mut W,
    language: Language,
    name: &str,
    official: bool,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => {
            let verdict = if official { "official" } else { "not official" };
            writeln!(writer, "{verdict}")
        }
        OutputFormat::Json => {
            let answer = json!({
                "language": language.code(),
                "name": name,
                "official": official,
            });
            serde_json::to_writer(&mut *writer, &answer)?;
            writeln!(writer)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn answer(name: &str, official: bool, format: OutputFormat) -> String {
        let mut buf: Vec<u8> = Vec::new();
        write_answer(&mut buf, Language::En, name, official, format).expect("write");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn human_answers() {
        assert_eq!(answer("Tbilisi", true, OutputFormat::Human), "official\n");
        assert_eq!(answer("Tiflis", false, OutputFormat::Human), "not official\n");
    }

    #[test]
    fn json_answer() {
        let s = answer("Tiflis", false, OutputFormat::Json);
        let v: serde_json::Value = serde_json::from_str(s.trim_end()).expect("valid JSON");
        assert_eq!(v["language"], "en");
        assert_eq!(v["name"], "Tiflis");
        assert_eq!(v["official"], false);
    }

    #[test]
    fn unofficial_name_is_exit_1() {
        let dataset = Dataset::official().expect("official dataset");
        let err = run(dataset, Language::En, "Tbilisi ", OutputFormat::Human)
            .expect_err("padded name is not official");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn official_name_is_ok() {
        let dataset = Dataset::official().expect("official dataset");
        assert!(run(dataset, Language::Ka, "თბილისი", OutputFormat::Human).is_ok());
    }
}

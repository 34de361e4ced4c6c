/// Finding formatting: human-readable and JSON (NDJSON) modes.
///
/// This module implements two output strategies for [`toponym_core::Finding`]
/// values:
///
/// - **Human mode** (default): one line per finding, color-coded by severity,
///   to stderr. Colors are disabled when `--no-color` is set, the `NO_COLOR`
///   environment variable is present (per <https://no-color.org>), or stderr
///   is not a TTY.
/// - **JSON mode**: each finding is serialized as a single-line JSON object
///   (NDJSON) to stderr.
///
/// Both modes support a **quiet** flag (suppress non-error findings and the
/// summary) and a **verbose** flag (add timing and graph statistics).
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use serde_json::json;
use toponym_core::{Finding, PrimitiveId, Severity};

use crate::OutputFormat;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_CYAN: &str = "\x1b[36m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for the finding formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress all non-error stderr output.
    pub quiet: bool,
    /// Emit timing and metadata to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }

    /// Returns `true` if a finding of `severity` should be printed.
    fn shows(&self, severity: Severity) -> bool {
        match severity {
            Severity::Error => true,
            Severity::Warning | Severity::Other => !self.quiet,
        }
    }
}

// ---------------------------------------------------------------------------
// Human-mode formatting
// ---------------------------------------------------------------------------

/// Writes a single [`Finding`] to `writer` in human-readable format.
///
/// Format:
/// `[W] 4301  node/103 tag "name:en": name:en Tiflis does not seem to be ...`
///
/// The severity tag is red for `[E]`, yellow for `[W]`, and cyan for `[O]`
/// when `config.colors` is `true`. In quiet mode only errors are written.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_finding_human<W: Write>(
    writer: &mut W,
    finding: &Finding,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.shows(finding.severity) {
        return Ok(());
    }

    let (tag, color) = match finding.severity {
        Severity::Error => ("[E]", ANSI_RED),
        Severity::Warning => ("[W]", ANSI_YELLOW),
        Severity::Other => ("[O]", ANSI_CYAN),
    };

    if config.colors {
        writeln!(
            writer,
            "{color}{tag}{ANSI_RESET} {rule_id}  {location}: {message}",
            rule_id = finding.rule_id,
            location = finding.location,
            message = finding.message,
        )
    } else {
        writeln!(
            writer,
            "{tag} {rule_id}  {location}: {message}",
            rule_id = finding.rule_id,
            location = finding.location,
            message = finding.message,
        )
    }
}

/// Writes a summary line to `writer` for human mode.
///
/// Format: `0 errors, 3 warnings, 0 other`. Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    errors: usize,
    warnings: usize,
    others: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(
        writer,
        "{errors} {}, {warnings} {}, {others} other",
        pluralize(errors, "error", "errors"),
        pluralize(warnings, "warning", "warnings"),
    )
}

/// Writes timing information to `writer` in verbose mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

/// Writes the containment chain of a finding in verbose mode.
///
/// Format: `    via node/103 > relation/1001 > relation/28699`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_path_human<W: Write>(
    writer: &mut W,
    path: &[PrimitiveId],
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    let chain: Vec<String> = path.iter().map(PrimitiveId::to_string).collect();
    writeln!(writer, "    via {}", chain.join(" > "))
}

// ---------------------------------------------------------------------------
// JSON-mode formatting (NDJSON)
// ---------------------------------------------------------------------------

/// Writes a single [`Finding`] to `writer` as a NDJSON line.
///
/// ```json
/// {"rule_id":4301,"severity":"warning","primitive":"node/103","field":"name:en","title":"Invalid Georgian name","message":"...","value":"Tiflis"}
/// ```
///
/// In quiet mode only errors are written.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_finding_json<W: Write>(
    writer: &mut W,
    finding: &Finding,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.shows(finding.severity) {
        return Ok(());
    }

    let field = match &finding.location {
        toponym_core::Location::Primitive { field, .. } => field.as_deref(),
    };
    let line = json!({
        "rule_id": finding.rule_id.code(),
        "severity": finding.severity.as_str(),
        "primitive": finding.location.primitive_id().to_string(),
        "field": field,
        "title": finding.title,
        "message": finding.message,
        "value": finding.value,
    });
    serde_json::to_writer(&mut *writer, &line)?;
    writeln!(writer)
}

/// Writes a JSON summary object as a final NDJSON line.
///
/// Format: `{"summary":{"errors":0,"warnings":3,"other":0}}`. Suppressed in
/// quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_json<W: Write>(
    writer: &mut W,
    errors: usize,
    warnings: usize,
    others: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    let line = json!({
        "summary": { "errors": errors, "warnings": warnings, "other": others }
    });
    serde_json::to_writer(&mut *writer, &line)?;
    writeln!(writer)
}

// ---------------------------------------------------------------------------
// Helper: dispatch by format
// ---------------------------------------------------------------------------

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// Structured NDJSON output.
    Json,
}

impl From<OutputFormat> for FormatMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => Self::Human,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Writes a single [`Finding`] to `writer` in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_finding<W: Write>(
    writer: &mut W,
    finding: &Finding,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => write_finding_human(writer, finding, config),
        FormatMode::Json => write_finding_json(writer, finding, config),
    }
}

/// Writes a summary to `writer` in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    errors: usize,
    warnings: usize,
    others: usize,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => write_summary_human(writer, errors, warnings, others, config),
        FormatMode::Json => write_summary_json(writer, errors, warnings, others, config),
    }
}

/// Returns the singular or plural form of `word` depending on `count`.
fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

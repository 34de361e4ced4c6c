//! Implementation of `toponym validate <file>`.
//!
//! Parses an Overpass JSON extract, builds the relation membership graph,
//! runs the Georgian toponym rule over every node, and emits findings to
//! stderr.
//!
//! Flags:
//! - `--place-type <type>` (repeatable): replaces the dataset's place types.
//! - `--language <ka|en>` (repeatable): restricts the checked name tags.
//! - `--deny-warnings`: warnings fail the run.
//!
//! Exit codes:
//! - 0 = no failing findings
//! - 1 = at least one error, or any warning with `--deny-warnings`
//! - 2 = input failure (unreadable, not JSON, duplicate primitive ids)
use std::io::Write;
use std::time::Instant;

use toponym_core::{
    ContainmentChecker, Dataset, GeorgianToponymRule, Language, MapFile, MapGraph, PlaceType,
    ValidationConfig, ValidationResult, build_graph, validate,
};
use tracing::info;

use crate::error::CliError;
use crate::format::{
    FormatMode, FormatterConfig, write_finding, write_path_human, write_summary, write_timing_human,
};
use crate::io::read_input;
use crate::{Cli, PathOrStdin};

/// Subcommand arguments, borrowed from the parsed command line.
#[derive(Debug)]
pub struct Args<'a> {
    /// The extract to read.
    pub file: &'a PathOrStdin,
    /// Override for the candidate place types; empty keeps the defaults.
    pub place_types: &'a [PlaceType],
    /// Override for the checked languages; empty checks all.
    pub languages: &'a [Language],
    /// Treat warnings as failures.
    pub deny_warnings: bool,
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `validate` command.
///
/// # Errors
///
/// - Any read error of [`read_input`].
/// - [`CliError::ParseFailed`] / [`CliError::GraphBuildFailed`] for a bad
///   extract.
/// - [`CliError::FindingsReported`] when the run fails per the exit-code
///   policy above.
pub fn run(dataset: &Dataset, args: &Args<'_>, cli: &Cli) -> Result<(), CliError> {
    let content = read_input(args.file, cli.max_file_size)?;
    run_content(dataset, &content, args, cli)
}

/// Runs the command on already-read content.
fn run_content(dataset: &Dataset, content: &str, args: &Args<'_>, cli: &Cli) -> Result<(), CliError> {
    let mode = FormatMode::from(cli.format);
    let fmt_config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose);
    // Timing lines would break NDJSON framing.
    let timing_config = FormatterConfig {
        verbose: cli.verbose && mode == FormatMode::Human,
        ..fmt_config.clone()
    };
    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();

    let started = Instant::now();
    let graph = build_graph(MapFile::from_json(content)?)?;
    info!(
        primitives = graph.primitive_count(),
        memberships = graph.member_count(),
        skipped_members = graph.skipped_members(),
        "extract loaded"
    );
    write_timing_human(&mut err_out, "parsed extract", started.elapsed(), &timing_config)
        .map_err(stderr_error)?;

    let rule = GeorgianToponymRule::with_config(dataset.registry(), config_for(dataset, args));
    let started = Instant::now();
    let result = validate(&graph, &rule);
    write_timing_human(&mut err_out, "validated", started.elapsed(), &timing_config)
        .map_err(stderr_error)?;

    let checker = ContainmentChecker::new(&rule.config().boundary);
    let paths = Paths {
        graph: &graph,
        checker: &checker,
        config: &timing_config,
    };
    emit(&mut err_out, &result, &paths, mode, &fmt_config).map_err(stderr_error)?;

    let failing = failing_count(&result, args.deny_warnings);
    if failing > 0 {
        Err(CliError::FindingsReported { count: failing })
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Applies the command-line overrides to the dataset defaults.
fn config_for(dataset: &Dataset, args: &Args<'_>) -> ValidationConfig {
    let mut config = ValidationConfig::from_dataset(dataset);
    if !args.place_types.is_empty() {
        config = config.with_place_types(args.place_types.iter().copied());
    }
    if !args.languages.is_empty() {
        config = config.with_languages(args.languages.iter().copied());
    }
    config
}

/// What is needed to explain, in verbose human output, why a finding's
/// primitive counts as inside the boundary.
struct Paths<'a> {
    graph: &'a MapGraph,
    checker: &'a ContainmentChecker<'a>,
    config: &'a FormatterConfig,
}

/// Writes every finding followed by the summary.
fn emit<W: Write>(
    writer: &mut W,
    result: &ValidationResult,
    paths: &Paths<'_>,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    for finding in result.findings() {
        write_finding(writer, finding, mode, config)?;
        if !paths.config.verbose {
            continue;
        }
        let path = paths
            .graph
            .get(finding.location.primitive_id())
            .and_then(|p| paths.checker.containment_path(&p));
        if let Some(path) = path {
            write_path_human(writer, &path, paths.config)?;
        }
    }
    write_summary(
        writer,
        result.errors().count(),
        result.warnings().count(),
        result.others().count(),
        mode,
        config,
    )
}

/// Number of findings that make the run fail.
fn failing_count(result: &ValidationResult, deny_warnings: bool) -> usize {
    let errors = result.errors().count();
    if deny_warnings {
        errors + result.warnings().count()
    } else {
        errors
    }
}

fn stderr_error(e: std::io::Error) -> CliError {
    CliError::IoError {
        source: "stderr".to_owned(),
        detail: e.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

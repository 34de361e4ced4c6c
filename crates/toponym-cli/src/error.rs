/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `toponym` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The tool could not read or parse the
///   extract or the dataset. These errors terminate before any rule runs.
/// - Exit code **1**: logical failure. The tool ran to completion but the
///   outcome is negative (findings at the failing severity, a name that is
///   not official).
use std::fmt;
use std::path::PathBuf;

use toponym_core::{ConfigError, GraphBuildError, Language, ParseError};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `toponym` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (`None` for stdin).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The extract is not valid Overpass JSON.
    ParseFailed(ParseError),

    /// The extract could not be turned into a membership graph.
    GraphBuildFailed(GraphBuildError),

    /// The dataset (embedded or `--dataset`) could not be loaded.
    DatasetInvalid {
        /// `"embedded"` or the dataset path.
        source: String,
        /// Why loading failed.
        error: ConfigError,
    },

    // --- Exit code 1: logical failures ---
    /// Validation reported findings at the failing severity.
    ///
    /// The findings have already been printed; this variant exists so
    /// `main` can call `process::exit(1)` cleanly.
    FindingsReported {
        /// Number of findings that caused the failure.
        count: usize,
    },

    /// `lookup` did not find the name on the official list.
    NotOfficial {
        /// The list that was searched.
        language: Language,
        /// The name that was looked up.
        name: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (file not found, parse error, bad dataset, etc.).
    /// - `1`: logical failure (findings, unofficial name).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed(_)
            | Self::GraphBuildFailed(_)
            | Self::DatasetInvalid { .. } => 2,

            Self::FindingsReported { .. } | Self::NotOfficial { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ParseFailed(e) => format!("error: invalid extract: {e}"),
            Self::GraphBuildFailed(e) => format!("error: invalid extract: {e}"),
            Self::DatasetInvalid { source, error } => {
                format!("error: invalid dataset ({source}): {error}")
            }
            Self::FindingsReported { count } => {
                format!("error: validation reported {count} failing finding(s)")
            }
            Self::NotOfficial { language, name } => {
                format!("error: {name:?} is not an official {language} name")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        Self::ParseFailed(e)
    }
}

impl From<GraphBuildError> for CliError {
    fn from(e: GraphBuildError) -> Self {
        Self::GraphBuildFailed(e)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

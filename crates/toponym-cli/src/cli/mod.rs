//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use toponym_core::{Language, PlaceType};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits one line per finding to stderr and plain text to stdout.
/// `Json` emits NDJSON for findings and a single object for data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `toponym` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Check place names in an OSM JSON extract against the official lists.
    Validate {
        /// Path to an Overpass JSON extract, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Check nodes with this `place=*` value (repeatable; replaces the
        /// dataset defaults).
        #[arg(long, value_name = "TYPE")]
        place_type: Vec<PlaceType>,
        /// Check only the `name:<LANG>` tag of this language (repeatable;
        /// default: ka and en).
        #[arg(long, value_name = "LANG")]
        language: Vec<Language>,
        /// Exit with code 1 when any warning is reported.
        #[arg(long)]
        deny_warnings: bool,
    },

    /// Report whether a single name is on an official list.
    Lookup {
        /// The list to search: ka or en.
        #[arg(long, short = 'l', value_name = "LANG")]
        language: Language,
        /// The name to look up, matched exactly.
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Print the revision, boundary, place types, and list sizes of the
    /// active dataset.
    Dataset,
}

/// Root CLI struct for the `toponym` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "toponym",
    version,
    about = "Georgian toponym validator",
    long_about = "Checks name:ka and name:en of populated places inside Georgia\n\
                  against the official lists of Georgian city, town, and village names."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Load the dataset from this JSON file instead of the embedded one.
    ///
    /// Can also be set via the `TOPONYM_DATASET` environment variable.
    #[arg(long, global = true, env = "TOPONYM_DATASET", value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: timing, graph counts, debug logs
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `TOPONYM_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "TOPONYM_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

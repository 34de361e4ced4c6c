/// Command module for the `toponym` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or
/// a [`crate::error::CliError`] on failure.
pub mod dataset;
pub mod lookup;
pub mod validate;

use std::borrow::Cow;
use std::path::Path;

use toponym_core::Dataset;

use crate::error::CliError;
use crate::io::read_file;
use crate::{Cli, Command};

/// Routes the parsed command line to its subcommand.
///
/// # Errors
///
/// Propagates the [`CliError`] of the subcommand or of dataset loading.
pub fn dispatch(cli: &Cli) -> Result<(), CliError> {
    let dataset = load_dataset(cli.dataset.as_deref(), cli.max_file_size)?;
    match &cli.command {
        Command::Validate {
            file,
            place_type,
            language,
            deny_warnings,
        } => validate::run(
            &dataset,
            &validate::Args {
                file,
                place_types: place_type,
                languages: language,
                deny_warnings: *deny_warnings,
            },
            cli,
        ),
        Command::Lookup { language, name } => lookup::run(&dataset, *language, name, cli.format),
        Command::Dataset => dataset::run(&dataset, cli.format),
    }
}

/// Returns the embedded dataset, or the one at `path` when given.
///
/// # Errors
///
/// - Any read error of [`read_file`].
/// - [`CliError::DatasetInvalid`] when the dataset fails to load.
pub fn load_dataset(path: Option<&Path>, max_size: u64) -> Result<Cow<'static, Dataset>, CliError> {
    match path {
        None => Dataset::official()
            .map(Cow::Borrowed)
            .map_err(|error| CliError::DatasetInvalid {
                source: "embedded".to_owned(),
                error,
            }),
        Some(path) => {
            let content = read_file(path, max_size)?;
            Dataset::from_json(&content)
                .map(Cow::Owned)
                .map_err(|error| CliError::DatasetInvalid {
                    source: path.display().to_string(),
                    error,
                })
        }
    }
}

//! Command execution implementations

use super::Commands;
use super::{extract, faces, list, replace, verify};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self, quiet: bool) -> anyhow::Result<()> {
        match self {
            Commands::Extract {
                source,
                index,
                output,
            } => extract::execute(source, *index, output, quiet),
            Commands::Replace {
                source,
                index,
                replacement,
                output,
                dry_run,
            } => replace::execute(source, index, replacement, output, *dry_run, quiet),
            Commands::List { source, json } => list::execute(source, *json),
            Commands::Faces {
                source,
                index,
                json,
            } => faces::execute(source, *index, *json),
            Commands::Verify { source } => verify::execute(source),
        }
    }
}

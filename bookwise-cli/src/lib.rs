//! Command-line interface for Bookwise recommendations.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

#[cfg(test)]
use recommend::{
    ReadingList, ReadingListLoader, RecommendConfig, config_from_layers_for_test, load_scorer,
    run_recommend_with,
};

const ARG_DATABASE: &str = "database";
const ARG_USER_ID: &str = "user-id";
const ARG_LIMIT: &str = "limit";
const ARG_WEIGHTS: &str = "weights";
const ARG_WITH_SCORES: &str = "with-scores";
const ENV_USER_ID: &str = "BOOKWISE_CMDS_RECOMMEND_USER_ID";
const DEFAULT_DATABASE: &str = "books.db";

/// Run the Bookwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments cannot be parsed, configuration is
/// incomplete, inputs are missing or invalid, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "bookwise",
    about = "Content-based book recommendations from a SQLite catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the catalog for one reader and print the top books as JSON.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;

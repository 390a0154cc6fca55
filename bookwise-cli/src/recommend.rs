//! Recommend command implementation for the Bookwise CLI.

use std::io::{BufReader, Write};

use bookwise_core::{Book, BookCatalog, ScoredBook, SqliteBookStore, UserProfile};
use bookwise_scorer::{ContentScorer, RecommendationLimit, ScoreWeights};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_DATABASE, ARG_LIMIT, ARG_USER_ID, ARG_WEIGHTS, ARG_WITH_SCORES, CliError,
    DEFAULT_DATABASE, ENV_USER_ID,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the catalog stored in a SQLite database for one reader \
                 and print the recommendations as a JSON array. Options can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Recommend books for a reader"
)]
#[ortho_config(prefix = "BOOKWISE")]
pub(crate) struct RecommendArgs {
    /// Path to the SQLite catalog (defaults to `books.db`).
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Identifier of the reader to recommend for.
    #[arg(long = ARG_USER_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) user_id: Option<u64>,
    /// Number of books to return (1 to 24, defaults to 4).
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Path to a JSON file overriding the score weights.
    #[arg(long = ARG_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Emit each book with its score and ranking basis.
    #[arg(
        long = ARG_WITH_SCORES,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) with_scores: Option<bool>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the SQLite catalog.
    pub(crate) database: Utf8PathBuf,
    /// Reader to recommend for.
    pub(crate) user_id: u64,
    /// Result-size policy.
    pub(crate) limit: RecommendationLimit,
    /// Optional weight overrides.
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Whether to emit scores alongside books.
    pub(crate) with_scores: bool,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.database, ARG_DATABASE)?;
        if let Some(weights) = &self.weights {
            Self::require_existing(weights, ARG_WEIGHTS)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let user_id = args.user_id.ok_or(CliError::MissingArgument {
            field: ARG_USER_ID,
            env: ENV_USER_ID,
        })?;
        let database = args
            .database
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE));
        let limit = args
            .limit
            .map_or_else(RecommendationLimit::default, RecommendationLimit::new);

        Ok(Self {
            database,
            user_id,
            limit,
            weights: args.weights,
            with_scores: args.with_scores.unwrap_or(false),
        })
    }
}

/// The reader and the catalog to rank for them.
#[derive(Debug, Clone)]
pub(crate) struct ReadingList {
    pub(crate) profile: UserProfile,
    pub(crate) catalog: Vec<Book>,
}

/// Loads the reader and catalog for the current recommend invocation.
pub(super) trait ReadingListLoader {
    fn load(&self, config: &RecommendConfig) -> Result<ReadingList, CliError>;
}

pub(super) struct SqliteReadingListLoader;

impl ReadingListLoader for SqliteReadingListLoader {
    fn load(&self, config: &RecommendConfig) -> Result<ReadingList, CliError> {
        let store = SqliteBookStore::open(config.database.as_std_path())?;
        let profile = store.user_profile(config.user_id)?;
        log::debug!(
            "loaded {} books and reader {} from {}",
            store.len(),
            config.user_id,
            config.database
        );
        Ok(ReadingList {
            profile,
            catalog: store.to_vec(),
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &SqliteReadingListLoader, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    loader: &dyn ReadingListLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let recommendations = execute_recommend(&config, loader)?;
    write_recommendations(writer, recommendations, config.with_scores)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_recommend(
    config: &RecommendConfig,
    loader: &dyn ReadingListLoader,
) -> Result<Vec<ScoredBook>, CliError> {
    let scorer = match &config.weights {
        Some(path) => load_scorer(path)?,
        None => ContentScorer::default(),
    };
    let list = loader.load(config)?;
    Ok(scorer.recommend(&list.profile, &list.catalog, config.limit))
}

/// Loads a JSON-encoded [`ScoreWeights`] table and builds a scorer from it.
pub(super) fn load_scorer(path: &Utf8Path) -> Result<ContentScorer, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenWeights {
        path: path.to_path_buf(),
        source,
    })?;
    let weights: ScoreWeights = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| CliError::ParseWeights {
            path: path.to_path_buf(),
            source,
        },
    )?;
    ContentScorer::new(weights).map_err(|source| CliError::InvalidWeights {
        path: path.to_path_buf(),
        source,
    })
}

fn write_recommendations(
    writer: &mut dyn Write,
    recommendations: Vec<ScoredBook>,
    with_scores: bool,
) -> Result<(), CliError> {
    let payload = if with_scores {
        serde_json::to_string_pretty(&recommendations)
    } else {
        let books: Vec<Book> = recommendations
            .into_iter()
            .map(ScoredBook::into_book)
            .collect();
        serde_json::to_string_pretty(&books)
    }
    .map_err(CliError::SerialiseRecommendations)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}

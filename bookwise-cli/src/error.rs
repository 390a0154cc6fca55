//! Error types emitted by the Bookwise CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use bookwise_core::SqliteBookStoreError;
use bookwise_scorer::ScoreWeightsError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Bookwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that could supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the weights file failed.
    #[error("failed to open weights at {path:?}: {source}")]
    OpenWeights {
        /// Weights file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Weights JSON could not be decoded.
    #[error("failed to parse weights JSON at {path:?}: {source}")]
    ParseWeights {
        /// Weights file path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The decoded weights cannot be used for scoring.
    #[error("weights in {path:?} are invalid: {source}")]
    InvalidWeights {
        /// Weights file path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: ScoreWeightsError,
    },
    /// Opening the catalog or loading the reader failed.
    #[error(transparent)]
    Store(#[from] SqliteBookStoreError),
    /// Serialising the recommendations failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseRecommendations(#[source] serde_json::Error),
    /// Writing the recommendations failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
}

//! Error types emitted by the locus CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use locus_core::ConfigError;
use locus_data::{AnalysisError, SnapshotError};
use thiserror::Error;

/// Errors emitted by the locus CLI.
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
        /// Missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The snapshot could not be loaded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// Reading the scoring configuration failed.
    #[error("failed to read scoring config at {path:?}: {source}")]
    ReadScoringConfig {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The scoring configuration could not be parsed or failed validation.
    #[error("scoring config at {path:?} is invalid: {source}")]
    InvalidScoringConfig {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Parse or validation error.
        #[source]
        source: ConfigError,
    },
    /// The analyzer rejected its settings or the queried origin.
    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
    /// Serialising the analysis report failed.
    #[error("failed to serialise analysis report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the analysis report failed.
    #[error("failed to write analysis report: {0}")]
    WriteReport(#[source] std::io::Error),
}

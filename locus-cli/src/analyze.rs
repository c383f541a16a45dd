//! Analyze command implementation for the locus CLI.

use std::io::{self, Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use locus_core::{AnalysisReport, ScoringConfig};
use locus_data::{
    AnalyzerSettings, DEFAULT_RADIUS_METERS, LocationAnalyzer, Snapshot, SnapshotProviders,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ANALYZE_INTELLIGENCE_API_KEY, ARG_ANALYZE_MAPS_API_KEY, ARG_ANALYZE_RADIUS_METERS,
    ARG_ANALYZE_SCORING_CONFIG, ARG_ANALYZE_SNAPSHOT, CliError, ENV_ANALYZE_SNAPSHOT,
};

/// CLI arguments for the `analyze` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a location from a snapshot of recorded provider \
                 output. Sections missing from the snapshot are treated as \
                 provider outages and recovered through the fallbacks. \
                 The analysis report is printed as JSON.",
    about = "Analyse a location snapshot"
)]
#[ortho_config(prefix = "LOCUS")]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON snapshot of recorded provider output.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot: Option<Utf8PathBuf>,
    /// Path to a JSON scoring configuration.
    #[arg(long = ARG_ANALYZE_SCORING_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) scoring_config: Option<Utf8PathBuf>,
    /// Credential for the place search and distance providers.
    #[arg(long = ARG_ANALYZE_MAPS_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) maps_api_key: Option<String>,
    /// Credential for the location intelligence provider.
    #[arg(long = ARG_ANALYZE_INTELLIGENCE_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) intelligence_api_key: Option<String>,
    /// Place search radius in metres.
    #[arg(long = ARG_ANALYZE_RADIUS_METERS, value_name = "meters")]
    #[serde(default)]
    pub(crate) radius_meters: Option<u32>,
}

impl AnalyzeArgs {
    pub(crate) fn into_config(self) -> Result<AnalyzeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyzeConfig::try_from(merged)
    }
}

/// Resolved `analyze` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyzeConfig {
    /// Path to the snapshot file.
    pub(crate) snapshot: Utf8PathBuf,
    /// Path to an optional scoring configuration.
    pub(crate) scoring_config: Option<Utf8PathBuf>,
    /// Maps credential, validated by the analyzer.
    pub(crate) maps_api_key: Option<String>,
    /// Intelligence credential, validated by the analyzer.
    pub(crate) intelligence_api_key: Option<String>,
    /// Place search radius in metres.
    pub(crate) radius_meters: u32,
}

impl AnalyzeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.snapshot, ARG_ANALYZE_SNAPSHOT)?;
        if let Some(path) = &self.scoring_config {
            require_existing(path, ARG_ANALYZE_SCORING_CONFIG)?;
        }
        Ok(())
    }
}

impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = CliError;

    fn try_from(args: AnalyzeArgs) -> Result<Self, Self::Error> {
        let snapshot = args.snapshot.ok_or(CliError::MissingArgument {
            field: ARG_ANALYZE_SNAPSHOT,
            env: ENV_ANALYZE_SNAPSHOT,
        })?;
        Ok(Self {
            snapshot,
            scoring_config: args.scoring_config,
            maps_api_key: args.maps_api_key,
            intelligence_api_key: args.intelligence_api_key,
            radius_meters: args.radius_meters.unwrap_or(DEFAULT_RADIUS_METERS),
        })
    }
}

fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
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

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    run_analyze_with(args, &mut stdout)
}

pub(crate) fn run_analyze_with(args: AnalyzeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = analyze_with_config(&config)?;
    write_report(writer, &report)
}

/// Load the inputs named by `config` and analyse the snapshot.
pub(crate) fn analyze_with_config(config: &AnalyzeConfig) -> Result<AnalysisReport, CliError> {
    let scoring = config
        .scoring_config
        .as_deref()
        .map_or_else(|| Ok(ScoringConfig::default()), load_scoring_config)?;
    let settings = AnalyzerSettings {
        maps_api_key: config.maps_api_key.clone(),
        intelligence_api_key: config.intelligence_api_key.clone(),
        radius_meters: config.radius_meters,
        scoring,
    };
    let snapshot = Snapshot::load(&config.snapshot)?;
    let query = snapshot.query();
    let providers = SnapshotProviders::new(snapshot);
    let analyzer =
        LocationAnalyzer::new(settings, providers.clone(), providers.clone(), providers)?;
    log::info!(
        "analysing {} with scoring config {}",
        config.snapshot,
        analyzer.engine().config().version
    );
    analyzer.analyze(&query).map_err(CliError::from)
}

/// Loads a JSON-encoded [`ScoringConfig`] from disk.
pub(crate) fn load_scoring_config(path: &Utf8Path) -> Result<ScoringConfig, CliError> {
    let read_error = |source| CliError::ReadScoringConfig {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(read_error)?;
    let mut json = String::new();
    file.read_to_string(&mut json).map_err(read_error)?;
    ScoringConfig::from_json(&json).map_err(|source| CliError::InvalidScoringConfig {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(writer: &mut dyn Write, report: &AnalysisReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AnalyzeConfig, CliError> {
    let merged = AnalyzeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AnalyzeConfig::try_from(merged)
}

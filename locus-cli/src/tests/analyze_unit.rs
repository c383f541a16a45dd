//! Focused unit tests covering analyze CLI configuration and input loading.

use super::helpers::{COMPLETE_SNAPSHOT, PARTIAL_SNAPSHOT, Workspace};
use super::*;
use crate::analyze::{
    AnalyzeConfig, analyze_with_config, config_from_layers_for_test, load_scoring_config,
};
use locus_core::Fallback;
use locus_data::AnalysisError;
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn config_for(snapshot: camino::Utf8PathBuf) -> AnalyzeConfig {
    AnalyzeConfig {
        snapshot,
        scoring_config: None,
        maps_api_key: Some("maps".into()),
        intelligence_api_key: Some("intelligence".into()),
        radius_meters: 10_000,
    }
}

#[rstest]
fn converting_without_snapshot_errors() {
    let err = AnalyzeConfig::try_from(AnalyzeArgs::default())
        .expect_err("missing snapshot should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_ANALYZE_SNAPSHOT);
            assert_eq!(env, ENV_ANALYZE_SNAPSHOT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn radius_defaults_when_unset(workspace: Workspace) {
    let args = AnalyzeArgs {
        snapshot: Some(workspace.path("snapshot.json")),
        ..AnalyzeArgs::default()
    };
    let config = AnalyzeConfig::try_from(args).expect("config should build");
    assert_eq!(config.radius_meters, 10_000);
    assert_eq!(config.scoring_config, None);
}

#[rstest]
fn validate_sources_reports_missing_snapshot(workspace: Workspace) {
    let config = config_for(workspace.path("absent.json"));
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_ANALYZE_SNAPSHOT),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories(workspace: Workspace) {
    let snapshot = workspace.path("snapshot.json");
    std::fs::create_dir(&snapshot).expect("snapshot directory");
    let err = config_for(snapshot)
        .validate_sources()
        .expect_err("expected failure");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_ANALYZE_SNAPSHOT),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_checks_scoring_config(workspace: Workspace) {
    let mut config = config_for(workspace.write("snapshot.json", COMPLETE_SNAPSHOT));
    config.scoring_config = Some(workspace.path("scoring.json"));
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => {
            assert_eq!(field, ARG_ANALYZE_SCORING_CONFIG);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn load_scoring_config_applies_overrides(workspace: Workspace) {
    let path = workspace.write(
        "scoring.json",
        r#"{ "version": "trial", "location": { "finalScale": 1.1 } }"#,
    );
    let config = load_scoring_config(&path).expect("valid scoring config");
    assert_eq!(config.version, "trial");
    assert_eq!(config.location.final_scale, 1.1);
}

#[rstest]
#[case::malformed("{ not json")]
#[case::invalid(r#"{ "location": { "finalScale": -1.0 } }"#)]
fn load_scoring_config_rejects_bad_documents(workspace: Workspace, #[case] json: &str) {
    let path = workspace.write("scoring.json", json);
    let err = load_scoring_config(&path).expect_err("config should be rejected");
    match err {
        CliError::InvalidScoringConfig { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected InvalidScoringConfig, found {other:?}"),
    }
}

#[rstest]
fn load_scoring_config_reports_read_errors(workspace: Workspace) {
    let path = workspace.path("absent.json");
    let err = load_scoring_config(&path).expect_err("missing config should error");
    match err {
        CliError::ReadScoringConfig { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ReadScoringConfig, found {other:?}"),
    }
}

#[rstest]
fn complete_snapshot_needs_no_fallbacks(workspace: Workspace) {
    let config = config_for(workspace.write("snapshot.json", COMPLETE_SNAPSHOT));
    let report = analyze_with_config(&config).expect("analysis should succeed");
    assert!(report.fallbacks.is_empty());
    assert_eq!(report.breakdown.amenity_count, 3);
}

#[rstest]
fn partial_snapshot_records_fallbacks(workspace: Workspace) {
    let config = config_for(workspace.write("snapshot.json", PARTIAL_SNAPSHOT));
    let report = analyze_with_config(&config).expect("analysis should succeed");
    assert_eq!(
        report.fallbacks,
        [Fallback::EstimatedDistances, Fallback::KeywordClassification]
    );
}

#[rstest]
fn blank_credentials_abort_the_analysis(workspace: Workspace) {
    let mut config = config_for(workspace.write("snapshot.json", COMPLETE_SNAPSHOT));
    config.intelligence_api_key = Some("   ".into());
    let err = analyze_with_config(&config).expect_err("credentials should be required");
    match err {
        CliError::Analysis(AnalysisError::MissingCredential { .. }) => {}
        other => panic!("expected MissingCredential, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "radius_meters": "far" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(workspace: Workspace) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let env_snapshot = workspace.path("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "maps_api_key": "from-file",
            "intelligence_api_key": "from-file",
            "radius_meters": 2_000,
        }),
        None,
    );
    composer.push_environment(json!({
        "snapshot": env_snapshot.as_str(),
        "maps_api_key": "from-env",
    }));
    composer.push_cli(json!({ "radius_meters": 3_000 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.snapshot, env_snapshot);
    assert_eq!(config.maps_api_key.as_deref(), Some("from-env"));
    assert_eq!(config.intelligence_api_key.as_deref(), Some("from-file"));
    assert_eq!(config.radius_meters, 3_000);
}

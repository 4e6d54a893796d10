//! Tests for environment-to-settings resolution.

use packplan_config::{BuildSettings, Mode, SourceMapMode, APP_ENV, CLEAN_FOLDERS};
use std::collections::HashMap;
use std::path::PathBuf;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn absent_app_env_means_production() {
    let settings = BuildSettings::resolve(&env(&[]));
    assert_eq!(settings.mode, Mode::Production);
    assert_eq!(settings.output_dir, PathBuf::from("dist"));
    assert_eq!(settings.source_maps, SourceMapMode::SeparateFile);
    assert!(!settings.clean_before_build);
}

#[test]
fn development_settings_pair_consistently() {
    let settings = BuildSettings::resolve(&env(&[(APP_ENV, "development")]));
    assert_eq!(settings.mode, Mode::Development);
    assert_eq!(settings.output_dir, PathBuf::from("build"));
    assert_eq!(settings.source_maps, SourceMapMode::Inline);
}

#[test]
fn mode_pairing_never_mixes() {
    for value in ["development", "production", "test", "DEV", ""] {
        let settings = BuildSettings::resolve(&env(&[(APP_ENV, value)]));
        assert_eq!(settings.output_dir, settings.mode.output_dir());
        assert_eq!(settings.source_maps, settings.mode.source_maps());
    }
}

#[test]
fn clean_flag_is_strict() {
    assert!(BuildSettings::resolve(&env(&[(CLEAN_FOLDERS, "true")])).clean_before_build);
    assert!(!BuildSettings::resolve(&env(&[(CLEAN_FOLDERS, "false")])).clean_before_build);
    assert!(!BuildSettings::resolve(&env(&[(CLEAN_FOLDERS, "TRUE")])).clean_before_build);
    assert!(!BuildSettings::resolve(&env(&[])).clean_before_build);
}

#[test]
fn resolution_is_idempotent() {
    let input = env(&[(APP_ENV, "development"), (CLEAN_FOLDERS, "true")]);
    let first = BuildSettings::resolve(&input);
    let second = BuildSettings::resolve(&input);
    assert_eq!(first, second);
}

#[test]
fn settings_serialize_with_documented_names() {
    let settings = BuildSettings::resolve(&env(&[(APP_ENV, "development")]));
    let value = serde_json::to_value(&settings).unwrap();
    assert_eq!(value["mode"], "development");
    assert_eq!(value["output_dir"], "build");
    assert_eq!(value["source_maps"], "inline");
    assert_eq!(value["clean_before_build"], false);
}

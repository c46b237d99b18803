//! Configuration loading, saving and validation

use std::fs;

use mcrkit::config::{validate_settings, validate_target, SettingsError};
use mcrkit::{Config, HumanizationSettings};
use tempfile::TempDir;

#[test]
fn empty_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "").unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn excluded_keys_load_from_toml_array() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[humanization]\nexcluded_keys = [\"F12\", \"Escape\"]\nremove_mouse_on_upload = true\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.humanization.is_excluded("F12"));
    assert!(config.humanization.is_excluded("Escape"));
    assert!(config.humanization.remove_mouse_on_upload);
}

#[test]
fn malformed_toml_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[humanization\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.toml"));
}

#[test]
fn saved_file_is_readable_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    Config::default().save_to(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[humanization]"));
    assert!(text.contains("delay_variation_pct = 25.0"));
    assert!(text.contains("backup = true"));
}

#[test]
fn settings_bounds() {
    let ok = HumanizationSettings::default();
    assert!(validate_settings(&ok).is_ok());

    let too_much_hesitation = HumanizationSettings {
        hesitation_pauses_pct: 51.0,
        ..HumanizationSettings::default()
    };
    assert!(matches!(
        validate_settings(&too_much_hesitation),
        Err(SettingsError::OutOfRange {
            field: "hesitation_pauses_pct",
            ..
        })
    ));
}

#[test]
fn target_validation() {
    assert_eq!(validate_target(60_000), Ok(60_000));
    assert!(validate_target(0).is_err());
}

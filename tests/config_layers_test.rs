//! Layer precedence for Settings::load:
//! defaults < global XDG config < explicit file < NUMERUS_* env vars.
//!
//! Everything runs in one test fn because it mutates process environment;
//! being its own test binary keeps it away from the other config tests.

#![cfg(target_os = "linux")]

use std::{env, fs};

use tempfile::TempDir;

use numerus::config::{global_config_path, Settings};

#[test]
fn given_all_config_layers_when_load_then_later_layers_win() {
    // Arrange: global config under a temporary XDG_CONFIG_HOME
    let xdg = TempDir::new().unwrap();
    env::set_var("XDG_CONFIG_HOME", xdg.path());
    env::remove_var("NUMERUS_CALCULATOR__MIN_TERMS");
    env::remove_var("NUMERUS_OUTPUT__COLOR");

    let global_path = global_config_path().expect("global config path");
    assert_eq!(global_path, xdg.path().join("numerus").join("numerus.toml"));
    fs::create_dir_all(global_path.parent().unwrap()).unwrap();
    fs::write(
        &global_path,
        "[calculator]\nmin_terms = 3\n\n[output]\ncolor = false\n",
    )
    .unwrap();

    // Act/Assert: global overrides defaults
    let settings = Settings::load(None).expect("load global");
    assert_eq!(settings.calculator.min_terms, 3);
    assert!(!settings.output.color);

    // Act/Assert: explicit file overrides global, untouched keys stay global
    let local = TempDir::new().unwrap();
    let explicit = local.path().join("numerus.toml");
    fs::write(&explicit, "[calculator]\nmin_terms = 4\n").unwrap();
    let settings = Settings::load(Some(&explicit)).expect("load explicit");
    assert_eq!(settings.calculator.min_terms, 4);
    assert!(!settings.output.color);

    // Act/Assert: env vars override the explicit file and the global config
    env::set_var("NUMERUS_CALCULATOR__MIN_TERMS", "1");
    env::set_var("NUMERUS_OUTPUT__COLOR", "true");
    let settings = Settings::load(Some(&explicit)).expect("load with env");
    assert_eq!(settings.calculator.min_terms, 1);
    assert!(settings.output.color);

    // Act/Assert: an invalid env override is still rejected
    env::set_var("NUMERUS_CALCULATOR__MIN_TERMS", "0");
    assert!(Settings::load(Some(&explicit)).is_err());

    env::remove_var("NUMERUS_CALCULATOR__MIN_TERMS");
    env::remove_var("NUMERUS_OUTPUT__COLOR");
    env::remove_var("XDG_CONFIG_HOME");
}

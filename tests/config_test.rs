//! Integration tests for Settings config loading.
//!
//! These tests only use explicit config files in temp directories. The global
//! config directory is pointed at an empty location and `NUMERUS_*` overrides
//! are cleared once per test binary, so values not set in a test file come from
//! the compiled defaults. Layer precedence is covered in `config_layers_test.rs`.

use std::path::PathBuf;
use std::sync::Once;
use std::{env, fs};

use tempfile::TempDir;

use numerus::application::{ApplicationError, CalculatorService};
use numerus::config::Settings;

static ISOLATE: Once = Once::new();

/// Hide the user's global config and environment overrides from this binary.
fn isolate_from_user_config() {
    ISOLATE.call_once(|| {
        let empty = env::temp_dir().join(format!("numerus-no-config-{}", std::process::id()));
        env::set_var("XDG_CONFIG_HOME", empty);
        for key in ["NUMERUS_CALCULATOR__MIN_TERMS", "NUMERUS_OUTPUT__COLOR"] {
            env::remove_var(key);
        }
    });
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    isolate_from_user_config();
    let path = dir.path().join("numerus.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_defaults_when_constructing_then_two_terms_and_color() {
    let settings = Settings::default();

    assert_eq!(settings.calculator.min_terms, 2);
    assert!(settings.output.color);
}

#[test]
fn given_config_file_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[calculator]
min_terms = 1

[output]
color = false
"#,
    );

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.calculator.min_terms, 1);
    assert!(!settings.output.color);
}

#[test]
fn given_partial_config_file_when_load_then_keeps_other_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[output]\ncolor = false\n");

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert!(!settings.output.color);
    assert_eq!(settings.calculator.min_terms, 2);
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    isolate_from_user_config();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_zero_min_terms_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[calculator]\nmin_terms = 0\n");

    let result = Settings::load(Some(&path));

    let Err(ApplicationError::Config { message }) = result else {
        panic!("expected config error, got {:?}", result);
    };
    assert!(message.contains("min_terms"), "{}", message);
}

#[test]
fn given_malformed_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[calculator\nmin_terms = ");

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_settings_when_rendering_toml_then_loadable_again() {
    let dir = TempDir::new().unwrap();
    let mut settings = Settings::default();
    settings.calculator.min_terms = 3;
    let path = write_config(&dir, &settings.to_toml().unwrap());

    let loaded = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(loaded.calculator.min_terms, 3);
}

#[test]
fn given_loaded_min_terms_when_building_calculator_then_enforced() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[calculator]\nmin_terms = 3\n");
    let settings = Settings::load(Some(&path)).expect("load settings");

    let calculator = CalculatorService::new(settings.calculator.min_terms);

    assert_eq!(
        calculator.evaluate("I + I"),
        Err(ApplicationError::TooFewTerms {
            found: 2,
            required: 3
        })
    );
    assert_eq!(calculator.evaluate("I + I + I").unwrap().sum, 3);
}

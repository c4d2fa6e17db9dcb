//! Integration tests for engine settings.
//!
//! Tests that touch `ENHANCE_*` environment variables are marked
//! `#[serial]` because the environment is process-global.

mod common;

use std::env;
use std::fs;

use common::load_fixture;
use enhance::config::{Config, ConfigBuilder, CONFIG_PATH_ENV};
use enhance::resolve::Enhancer;
use enhance::store::ini;
use enhance::{Error, Store};
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    for var in [
        CONFIG_PATH_ENV,
        "ENHANCE_DIRECTIVE_KEY",
        "ENHANCE_SIMPLE_DIRECTIVE_KEY",
        "ENHANCE_STRICT",
        "ENHANCE_STRIP_UNRESOLVED",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_custom_directive_keys_from_file() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("enhance.yaml");
    fs::write(
        &settings_path,
        "directive_key: extends\nsimple_directive_key: parent\n",
    )
    .unwrap();

    let settings = ConfigBuilder::new().with_file(&settings_path).build().unwrap();
    let mut store = ini::parse(
        "[base]\na = 1\nb = 2\n\n[mixin]\nb = 3\n\n[derived]\nparent = base\nextends = +mixin\n<<= -base\n",
    )
    .unwrap();

    let resolution = Enhancer::new(settings).run(&mut store).unwrap();
    assert!(resolution.is_complete());
    assert_eq!(store.get_option("derived", "a").unwrap(), "1");
    assert_eq!(store.get_option("derived", "b").unwrap(), "3");
    // '<<' is an ordinary option under these settings
    assert_eq!(store.get_option("derived", "<<").unwrap(), "-base");
    assert!(!store.has_option("derived", "extends"));
    assert!(!store.has_option("derived", "parent"));
}

#[test]
#[serial]
fn test_strict_from_environment() {
    clear_env();
    env::set_var("ENHANCE_STRICT", "true");
    let settings = ConfigBuilder::new().build();
    clear_env();

    let settings = settings.unwrap();
    assert!(settings.strict);

    let mut store = ini::parse("[base]\na = 1\n\n[derived]\n<<= <base ~junk\n").unwrap();
    let resolution = Enhancer::new(settings).run(&mut store).unwrap();
    assert_eq!(resolution.unresolved, vec!["derived"]);
}

#[test]
#[serial]
fn test_settings_file_from_environment() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.yaml");
    fs::write(&settings_path, "strip_unresolved_directives: false\n").unwrap();

    env::set_var(CONFIG_PATH_ENV, &settings_path);
    let settings = ConfigBuilder::new().build();
    clear_env();

    let mut store = load_fixture("broken.cfg");
    let resolution = Enhancer::new(settings.unwrap()).run(&mut store).unwrap();
    assert!(!resolution.is_complete());
    assert_eq!(store.get_option("orphan", "<<").unwrap(), "<does_not_exist");
    assert_eq!(store.get_option("downstream", "<").unwrap(), "orphan");
    assert!(!store.has_option("healthy", "<"));
}

#[test]
#[serial]
fn test_programmatic_override_beats_environment() {
    clear_env();
    env::set_var("ENHANCE_STRICT", "1");
    let settings = ConfigBuilder::new()
        .with_config(Config {
            strict: Some(false),
            ..Default::default()
        })
        .build();
    clear_env();

    assert!(!settings.unwrap().strict);
}

#[test]
#[serial]
fn test_invalid_settings_file() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("enhance.yaml");
    fs::write(&settings_path, "directive_key: '<'\n").unwrap();

    let result = ConfigBuilder::new().with_file(&settings_path).build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}

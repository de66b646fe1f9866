use assert_cmd::Command;
use pact_showcase::config::Config;
use pact_showcase::error::{ConfigError, ShowcaseError};
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn parse_complete_config_file() {
    let file = config_file(
        r#"
[view]
default_tab = "pact"
ascii_icons = true

[tree]
expand_depth = 3
"#,
    );

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.view.default_tab, "pact");
    assert!(config.view.ascii_icons);
    assert_eq!(config.tree.expand_depth, 3);
}

#[test]
fn partial_config_uses_defaults() {
    let file = config_file("[tree]\nexpand_depth = 2\n");

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.tree.expand_depth, 2);
    assert_eq!(config.view.default_tab, "application");
    assert!(!config.view.ascii_icons);
}

#[test]
fn invalid_toml_is_parse_error() {
    let file = config_file("[view\ndefault_tab = ");

    let result = Config::load(Some(file.path()));

    assert!(matches!(
        result,
        Err(ShowcaseError::Config(ConfigError::ParseError { .. }))
    ));
}

#[test]
fn unknown_default_tab_is_invalid() {
    let file = config_file("[view]\ndefault_tab = \"docker\"\n");

    let result = Config::load(Some(file.path()));

    assert!(matches!(
        result,
        Err(ShowcaseError::Config(ConfigError::Invalid(_)))
    ));
}

#[test]
fn missing_explicit_config_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let result = Config::load(Some(&path));

    assert!(matches!(
        result,
        Err(ShowcaseError::Config(ConfigError::ReadError { .. }))
    ));
}

#[test]
fn expand_depth_applies_to_tree_command() {
    let file = config_file("[view]\nascii_icons = true\n\n[tree]\nexpand_depth = 2\n");

    Command::cargo_bin("pact-showcase")
        .unwrap()
        .arg("--config")
        .arg(file.path())
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("v [d] src"))
        .stdout(predicate::str::contains("> [d] main"));
}

//! Error reporting and exit codes.

use crate::prelude::*;

#[test]
fn missing_store_fails_with_its_path() {
    let store = Store::missing();
    cli()
        .args(&["status"])
        .store(&store.path())
        .fails()
        .stderr_has("Error: store not found: ")
        .stderr_has(&store.path_str());
}

#[test]
fn corrupt_store_is_reported() {
    let store = Store::missing();
    std::fs::write(store.path(), "{ not json").unwrap();
    cli()
        .args(&["migrate"])
        .store(&store.path())
        .fails()
        .stderr_has("corrupt store");
}

#[test]
fn unknown_target_version_is_a_usage_error() {
    let store = Store::with(0, serde_json::json!({}));
    let run = cli()
        .args(&["migrate", "--to", "latest"])
        .store(&store.path())
        .fails();
    assert_eq!(run.code(), Some(2));
}

#[test]
fn older_target_than_store_fails() {
    let store = Store::with(42, serde_json::json!({}));
    cli()
        .args(&["migrate", "--to", "40"])
        .store(&store.path())
        .fails()
        .stderr_has("failed to migrate");
    assert_eq!(store.read()["schema"]["version"], 42);
}

#[test]
fn invalid_config_names_the_file() {
    let store = Store::with(0, serde_json::json!({}));
    let config = store.config("colour = true\n");
    cli()
        .args(&["status"])
        .args(&["--config", &config.to_string_lossy()])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn no_subcommand_prints_help() {
    cli().passes().stdout_has("Usage: synmig");
}

//! `synmig status`

use crate::prelude::*;
use serde_json::json;

#[test]
fn fresh_store_shows_every_migration_pending() {
    let store = Store::with(0, json!({}));
    cli()
        .args(&["status"])
        .store(&store.path())
        .passes()
        .stdout_eq(&format!(
            "\
Store:   {}
Version: v0
Target:  v42

VERSION  STATUS   DESCRIPTION
v28      pending  insert explicit split after implicit-split start steps
v29      pending  move swagger connectors to the rest-swagger component
v40      pending  rename http4 and https4 components to http and https
v42      pending  add standardized errors to sql actions
",
            store.path_str()
        ));
}

#[test]
fn current_store_is_up_to_date() {
    let store = Store::with(42, json!({}));
    cli()
        .args(&["status"])
        .store(&store.path())
        .passes()
        .stdout_has("Version: v42")
        .stdout_has("Up to date");
}

#[test]
fn config_target_limits_pending() {
    let store = Store::with(29, json!({}));
    let config = store.config("target_version = 40\n");
    let run = cli()
        .args(&["status", "-o", "json"])
        .args(&["--config", &config.to_string_lossy()])
        .store(&store.path())
        .passes();

    let view = run.json();
    assert_eq!(view["version"], 29);
    assert_eq!(view["target"], 40);
    assert_eq!(view["latest"], 42);
    assert_eq!(view["pending"], json!([{
        "version": 40,
        "description": "rename http4 and https4 components to http and https"
    }]));
}

#[test]
fn store_from_environment() {
    let store = Store::with(40, json!({}));
    cli()
        .args(&["status"])
        .env("SYNMIG_STORE", store.path())
        .passes()
        .stdout_has("Version: v40")
        .stdout_has("v42      pending");
}

#[test]
fn store_in_state_dir_by_default() {
    let store = Store::with(42, json!({}));
    cli()
        .args(&["status"])
        .env("SYNMIG_STATE_DIR", store.dir())
        .passes()
        .stdout_has(&store.path_str());
}

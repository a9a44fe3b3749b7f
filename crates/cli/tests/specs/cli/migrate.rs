//! `synmig migrate`

use crate::prelude::*;
use serde_json::json;

#[test]
fn migrates_legacy_store_to_latest() {
    let store = Store::with(0, legacy_collections());
    cli()
        .args(&["migrate"])
        .store(&store.path())
        .passes()
        .stdout_has("Migrated store from v0 to v42\n")
        .stdout_has("VERSION  COLLECTION    INSPECTED  MIGRATED\n")
        .stdout_has("v28      integrations          1         1\n")
        .stdout_has("v40      connectors            3         1\n")
        .stdout_has("entities migrated in 4 step(s), 38 version(s) without migrations\n");

    let doc = store.read();
    assert_eq!(doc["schema"]["version"], 42);

    let connectors = &doc["collections"]["connectors"];
    assert!(connectors.get("http4").is_none());
    assert_eq!(connectors["http"]["componentScheme"], "http");
    assert_eq!(connectors["http"]["tags"], json!(["http"]));
    assert_eq!(connectors["petstore"]["componentScheme"], "rest-swagger");
    assert_eq!(
        connectors["petstore"]["actions"][0]["descriptor"]["componentScheme"],
        "rest-swagger"
    );
    assert!(connectors["sql"]["actions"][0]["descriptor"]["standardizedErrors"].is_array());

    assert_eq!(doc["collections"]["connections"]["web"]["connectorId"], "http");

    let steps = &doc["collections"]["integrations"]["orders"]["flows"][0]["steps"];
    assert_eq!(steps.as_array().unwrap().len(), 3);
    assert_eq!(steps[1]["stepKind"], "split");
    assert_eq!(steps[1]["id"], "start");
    assert!(steps[0]["action"]["descriptor"]["standardizedErrors"].is_array());
}

#[test]
fn second_run_is_a_noop() {
    let store = Store::with(0, legacy_collections());
    cli().args(&["migrate"]).store(&store.path()).passes();
    let after_first = store.raw();

    cli()
        .args(&["migrate"])
        .store(&store.path())
        .passes()
        .stdout_eq("Store already at v42\n");
    similar_asserts::assert_eq!(store.raw(), after_first);
}

#[test]
fn dry_run_leaves_the_file_untouched() {
    let store = Store::with(0, legacy_collections());
    let before = store.raw();

    cli()
        .args(&["migrate", "--dry-run"])
        .store(&store.path())
        .passes()
        .stdout_has("Dry run: no changes written\n\nWould migrate store from v0 to v42\n");
    similar_asserts::assert_eq!(store.raw(), before);
}

#[test]
fn target_stops_early() {
    let store = Store::with(0, legacy_collections());
    cli()
        .args(&["migrate", "--to", "up-29"])
        .store(&store.path())
        .passes()
        .stdout_has("Migrated store from v0 to v29\n");

    let doc = store.read();
    assert_eq!(doc["schema"]["version"], 29);
    assert!(doc["collections"]["connectors"].get("http4").is_some());
}

#[test]
fn strict_refuses_missing_versions() {
    let store = Store::with(29, legacy_collections());
    let before = store.raw();
    cli()
        .args(&["migrate", "--strict"])
        .store(&store.path())
        .fails()
        .stderr_has("no migration registered between");
    similar_asserts::assert_eq!(store.raw(), before);
}

#[test]
fn json_report() {
    let store = Store::with(40, legacy_collections());
    let run = cli()
        .args(&["migrate", "-o", "json"])
        .store(&store.path())
        .passes();

    let report = run.json();
    assert_eq!(report["store"], json!(store.path_str()));
    assert_eq!(report["dryRun"], false);
    assert_eq!(report["from"], 40);
    assert_eq!(report["to"], 42);
    assert_eq!(report["skipped"], json!([{ "from": 41, "to": 41 }]));
    let steps = report["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0]["targetVersion"], 42);
}

#[test]
fn log_file_receives_progress() {
    let store = Store::with(0, legacy_collections());
    let log = store.dir().join("logs/synmig.log");
    cli()
        .args(&["migrate"])
        .store(&store.path())
        .env("SYNMIG_LOG_FILE", &log)
        .passes();

    let text = std::fs::read_to_string(log).unwrap();
    assert!(text.contains("migration applied"), "log: {text}");
}

//! `synmig list`

use crate::prelude::*;

#[test]
fn lists_the_builtin_catalog() {
    cli().args(&["list"]).passes().stdout_eq(
        "\
VERSION  DESCRIPTION
v28      insert explicit split after implicit-split start steps
v29      move swagger connectors to the rest-swagger component
v40      rename http4 and https4 components to http and https
v42      add standardized errors to sql actions
",
    );
}

#[test]
fn list_needs_no_store() {
    cli()
        .args(&["list"])
        .env("SYNMIG_STORE", "/nonexistent/store.json")
        .passes();
}

#[test]
fn json_output_lists_versions() {
    let run = cli().args(&["list", "-o", "json"]).passes();
    let versions: Vec<u64> = run
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["version"].as_u64().unwrap())
        .collect();
    assert_eq!(versions, [28, 29, 40, 42]);
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    connectors   = { "/connectors", "connectors" },
    integrations = { "/integrations", "integrations" },
    custom       = { "/extensions", "extensions" },
)]
fn accepts_single_segment_paths(path: &str, name: &str) {
    assert_eq!(collection_name(path).unwrap(), name);
}

#[yare::parameterized(
    no_slash     = { "connectors" },
    empty        = { "" },
    root         = { "/" },
    nested       = { "/integrations/abc" },
    trailing     = { "/connectors/" },
    reserved     = { "/schema" },
)]
fn rejects_other_paths(path: &str) {
    assert!(matches!(
        collection_name(path),
        Err(StoreError::InvalidPath(p)) if p == path
    ));
}

#[test]
fn schema_version_path_is_not_a_collection() {
    assert!(collection_name(SCHEMA_VERSION_PATH).is_err());
}

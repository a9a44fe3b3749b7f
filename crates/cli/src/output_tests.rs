// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use synmig_core::{CollectionKind, MigrationResult, SchemaVersion, StepReport, VersionRange};

fn render(report: &RunReport, dry_run: bool) -> String {
    let mut buf = Vec::new();
    write_run_report(&mut buf, report, dry_run).unwrap();
    String::from_utf8(buf).unwrap()
}

fn sample() -> RunReport {
    let mut step = StepReport::new(SchemaVersion::new(42), "sql errors");
    step.push(
        CollectionKind::Connectors,
        MigrationResult {
            inspected_count: 3,
            migrated_count: 1,
            changed: true,
        },
    );
    RunReport {
        from: SchemaVersion::new(40),
        to: SchemaVersion::new(42),
        steps: vec![step],
        skipped: vec![VersionRange::new(SchemaVersion::new(41), SchemaVersion::new(41))],
    }
}

#[test]
#[serial]
fn run_report_lists_each_collection() {
    std::env::set_var("NO_COLOR", "1");
    let out = render(&sample(), false);
    similar_asserts::assert_eq!(
        out,
        "Migrated store from v40 to v42\n\
         \n\
         VERSION  COLLECTION  INSPECTED  MIGRATED\n\
         v42      connectors          3         1\n\
         \n\
         1 entities migrated in 1 step(s), 1 version(s) without migrations\n"
    );
    std::env::remove_var("NO_COLOR");
}

#[test]
#[serial]
fn dry_run_is_announced() {
    std::env::set_var("NO_COLOR", "1");
    let out = render(&sample(), true);
    assert!(out.starts_with("Dry run: no changes written\n\nWould migrate store from v40 to v42"));
    std::env::remove_var("NO_COLOR");
}

#[test]
fn noop_report_is_one_line() {
    let out = render(&RunReport::unchanged(SchemaVersion::new(42)), false);
    assert_eq!(out, "Store already at v42\n");
}

#[test]
fn json_is_pretty_printed() {
    let mut buf = Vec::new();
    print_json(&mut buf, &sample()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["from"], 40);
    assert_eq!(value["steps"][0]["collections"][0]["migratedCount"], 1);
    assert_eq!(value["skipped"], serde_json::json!([{ "from": 41, "to": 41 }]));
}

//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the synmig binary against a throwaway
//! store.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use serde_json::{json, Value};

/// Environment variables the binary reads; cleared so the caller's shell
/// cannot leak into a spec.
const SYNMIG_VARS: [&str; 6] = [
    "SYNMIG_STORE",
    "SYNMIG_CONFIG",
    "SYNMIG_STATE_DIR",
    "SYNMIG_LOG",
    "SYNMIG_LOG_FILE",
    "COLOR",
];

/// Create a CLI builder for synmig commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: vec![("NO_COLOR".into(), "1".into())],
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Point `--store` at `path`
    pub fn store(self, path: &Path) -> Self {
        let path = path.to_string_lossy().into_owned();
        self.args(&["--store", &path])
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_synmig"));
        cmd.args(&self.args);
        for var in SYNMIG_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout should be JSON")
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// A store file inside its own temporary directory.
pub struct Store {
    dir: tempfile::TempDir,
}

impl Store {
    /// A store file at `version` holding `collections`.
    pub fn with(version: u32, collections: Value) -> Self {
        let store = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        store.write(&json!({
            "schema": { "version": version },
            "collections": collections,
        }));
        store
    }

    /// A directory without a store file.
    pub fn missing() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("store.json")
    }

    pub fn path_str(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }

    pub fn write(&self, document: &Value) {
        std::fs::write(self.path(), serde_json::to_vec_pretty(document).unwrap()).unwrap();
    }

    pub fn raw(&self) -> String {
        std::fs::read_to_string(self.path()).unwrap()
    }

    pub fn read(&self) -> Value {
        serde_json::from_str(&self.raw()).unwrap()
    }

    /// Write a config file next to the store and return its path.
    pub fn config(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("synmig.toml");
        std::fs::write(&path, content).unwrap();
        path
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Collections exercising every built-in migration.
pub fn legacy_collections() -> Value {
    json!({
        "connectors": {
            "sql": {
                "id": "sql",
                "connectorGroupId": "sql",
                "actions": [{ "id": "sql-connector", "descriptor": {} }]
            },
            "http4": {
                "id": "http4",
                "componentScheme": "http4",
                "tags": ["http4"],
                "actions": [{
                    "id": "io.syndesis.connector:connector-http:http4-invoke-url",
                    "descriptor": { "connectorId": "http4", "componentScheme": "http4" }
                }]
            },
            "petstore": {
                "id": "petstore",
                "connectorGroupId": "swagger-connector-template",
                "actions": [{
                    "id": "petstore-get",
                    "descriptor": {
                        "camelConnectorGAV": "io.syndesis:petstore:1.0",
                        "camelConnectorPrefix": "petstore"
                    }
                }]
            }
        },
        "connections": {
            "web": { "id": "web", "connectorId": "http4" }
        },
        "integrations": {
            "orders": {
                "id": "orders",
                "flows": [{
                    "steps": [
                        {
                            "id": "start",
                            "stepKind": "endpoint",
                            "action": {
                                "id": "sql-start-connector",
                                "descriptor": {
                                    "inputDataShape": { "kind": "java", "type": "Query" },
                                    "outputDataShape": { "kind": "java", "type": "Row" }
                                }
                            }
                        },
                        { "id": "log", "stepKind": "log" }
                    ]
                }]
            }
        }
    })
}

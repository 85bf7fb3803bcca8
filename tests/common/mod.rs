// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for setting up test data trees and parameter files

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;
use tokio::fs;

use serde_json::{json, Value};

pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write a JSON value to a file inside the test environment
    pub async fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        let path = self.path(name);
        let content = serde_json::to_string_pretty(value).expect("failed to serialize test JSON");
        fs::write(&path, content).await.expect("failed to write test file");
        path
    }

    pub async fn read_json(&self, path: &PathBuf) -> Value {
        let content = fs::read_to_string(path).await.expect("failed to read test file");
        serde_json::from_str(&content).expect("failed to parse test JSON")
    }
}

/// A data tree resembling the payloads the engine is used on: device
/// descriptors with templated names, ports, and event references.
pub fn sample_device_tree() -> Value {
    json!({
        "name": "{{LINE}}",
        "event": "{{EVENT_ID}}",
        "devices": [
            {"label": "{{LINE}}-controller", "port": 502},
            {"label": "spare", "port": null}
        ],
        "notes": "unchanged text"
    })
}

pub fn sample_parameters() -> Value {
    json!({
        "LINE": "LN00",
        "EVENT_ID": 42
    })
}

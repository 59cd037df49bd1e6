//! Shared test fixtures for the imageguard workspace.
//!
//! Fixtures are raw JSON/YAML strings (not domain values) because the
//! CLI and inspect tests exercise the decoding path end to end.

#![forbid(unsafe_code)]

use serde_json::{json, Value};

/// A representative `docker inspect` entry: labeled, enveloped, ported,
/// with a healthcheck and a handful of layers.
pub fn container_fixture() -> Value {
    json!({
        "Id": "sha256:fixture",
        "DockerVersion": "24.0.2",
        "Parent": "sha256:parent",
        "Size": 123_456_789,
        "Config": {
            "Labels": {
                "maintainer": "team@example.com",
                "com.example.role": "api"
            },
            "Env": [
                "PATH=/usr/local/sbin:/usr/local/bin",
                "APP_ENV=production"
            ],
            "Volumes": {
                "/var/lib/app": {}
            }
        },
        "ContainerConfig": {
            "ExposedPorts": {
                "8080/tcp": {}
            },
            "Healthcheck": {
                "Test": ["CMD-SHELL", "curl -f http://localhost:8080/ || exit 1"]
            }
        },
        "RootFS": {
            "Type": "layers",
            "Layers": [
                "sha256:layer0",
                "sha256:layer1",
                "sha256:layer2"
            ]
        }
    })
}

/// Wrap one inspect entry in the array shape `docker inspect` emits.
pub fn inspect_payload(entry: Value) -> String {
    Value::Array(vec![entry]).to_string()
}

/// A policy the [`container_fixture`] satisfies.
pub fn passing_policy_yaml() -> &'static str {
    "size:\n  max: 600\n  warning: 400\nports:\n  required: true\n  range: \"1-8080\"\n"
}

/// A policy the [`container_fixture`] violates on labels, env keys, and
/// size.
pub fn failing_policy_yaml() -> &'static str {
    "size:\n  max: 100\nlabels:\n  disallow:\n    - com.example.role\nenv_keys:\n  disallow:\n    - APP_ENV\n"
}

//! Decoded `docker inspect` metadata.
//!
//! A read-only snapshot of one image's inspection record. Every field
//! degrades to an empty default when the inspect payload omits it, so
//! rules never fail on missing sub-objects.
//!
//! Maps use `serde_json::Map` (with `preserve_order`) because failure
//! messages must list labels, volumes, and ports in the container's own
//! encounter order.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContainerMetadata {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "DockerVersion")]
    pub docker_version: String,

    #[serde(rename = "Parent")]
    pub parent: String,

    /// Image size in bytes.
    #[serde(rename = "Size")]
    pub size: u64,

    #[serde(rename = "Config")]
    pub config: Config,

    #[serde(rename = "ContainerConfig")]
    pub container_config: ContainerConfig,

    #[serde(rename = "RootFS")]
    pub root_fs: RootFs,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Label name -> value. `docker inspect` emits `null` for images
    /// without labels.
    #[serde(rename = "Labels")]
    pub labels: Option<Map<String, Value>>,

    /// Environment entries in shell syntax (`KEY=VALUE`).
    #[serde(rename = "Env")]
    pub env: Option<Vec<String>>,

    /// Volume path -> options object.
    #[serde(rename = "Volumes")]
    pub volumes: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContainerConfig {
    /// `"port/proto"` -> options object.
    #[serde(rename = "ExposedPorts")]
    pub exposed_ports: Option<Map<String, Value>>,

    #[serde(rename = "Healthcheck")]
    pub healthcheck: Option<Healthcheck>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Healthcheck {
    #[serde(rename = "Test")]
    pub test: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RootFs {
    #[serde(rename = "Layers")]
    pub layers: Vec<String>,
}

impl ContainerMetadata {
    /// Label names in the order the image lists them.
    pub fn label_names(&self) -> Vec<&str> {
        map_keys(self.config.labels.as_ref())
    }

    pub fn env_entries(&self) -> &[String] {
        self.config.env.as_deref().unwrap_or_default()
    }

    pub fn volume_paths(&self) -> Vec<&str> {
        map_keys(self.config.volumes.as_ref())
    }

    /// Exposed port keys (`"port/proto"`) in the order the image lists
    /// them.
    pub fn exposed_ports(&self) -> Vec<&str> {
        map_keys(self.container_config.exposed_ports.as_ref())
    }

    pub fn healthcheck_test(&self) -> Option<&[String]> {
        self.container_config
            .healthcheck
            .as_ref()
            .and_then(|h| h.test.as_deref())
    }

    pub fn layer_count(&self) -> usize {
        self.root_fs.layers.len()
    }

    /// Image size in whole megabytes, rounded up so any fractional MB
    /// counts against a limit.
    pub fn size_megabytes(&self) -> u64 {
        self.size.div_ceil(1_000_000)
    }
}

fn map_keys(map: Option<&Map<String, Value>>) -> Vec<&str> {
    map.map(|m| m.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

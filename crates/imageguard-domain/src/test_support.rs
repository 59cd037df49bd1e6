use crate::model::{Config, ContainerConfig, ContainerMetadata, Healthcheck, RootFs};
use crate::policy::{ListPolicy, Policy, ScalarValue};
use serde_json::{Map, Value};

fn object_map(keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .map(|k| ((*k).to_string(), Value::Object(Map::new())))
        .collect()
}

pub(crate) fn container_with_labels(labels: &[(&str, &str)]) -> ContainerMetadata {
    ContainerMetadata {
        config: Config {
            labels: Some(
                labels
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
                    .collect(),
            ),
            ..Config::default()
        },
        ..ContainerMetadata::default()
    }
}

pub(crate) fn container_with_env(entries: &[&str]) -> ContainerMetadata {
    ContainerMetadata {
        config: Config {
            env: Some(entries.iter().map(|e| (*e).to_string()).collect()),
            ..Config::default()
        },
        ..ContainerMetadata::default()
    }
}

pub(crate) fn container_with_volumes(paths: &[&str]) -> ContainerMetadata {
    ContainerMetadata {
        config: Config {
            volumes: Some(object_map(paths)),
            ..Config::default()
        },
        ..ContainerMetadata::default()
    }
}

pub(crate) fn container_with_ports(ports: &[&str]) -> ContainerMetadata {
    ContainerMetadata {
        container_config: ContainerConfig {
            exposed_ports: Some(object_map(ports)),
            ..ContainerConfig::default()
        },
        ..ContainerMetadata::default()
    }
}

pub(crate) fn container_with_size(bytes: u64) -> ContainerMetadata {
    ContainerMetadata {
        size: bytes,
        ..ContainerMetadata::default()
    }
}

pub(crate) fn container_with_layers(count: usize) -> ContainerMetadata {
    ContainerMetadata {
        root_fs: RootFs {
            layers: (0..count).map(|i| format!("sha256:layer{i}")).collect(),
        },
        ..ContainerMetadata::default()
    }
}

pub(crate) fn container_with_healthcheck(test: &[&str]) -> ContainerMetadata {
    ContainerMetadata {
        container_config: ContainerConfig {
            healthcheck: Some(Healthcheck {
                test: Some(test.iter().map(|t| (*t).to_string()).collect()),
            }),
            ..ContainerConfig::default()
        },
        ..ContainerMetadata::default()
    }
}

pub(crate) fn labels_policy(disallow: &[&str]) -> Policy {
    Policy {
        labels: disallow_list(disallow),
        ..Policy::default()
    }
}

pub(crate) fn env_keys_policy(disallow: &[&str]) -> Policy {
    Policy {
        env_keys: disallow_list(disallow),
        ..Policy::default()
    }
}

pub(crate) fn size_policy(max: Option<i64>, warning: Option<i64>) -> Policy {
    let mut policy = Policy::default();
    policy.size.max = max.map(ScalarValue::Int);
    policy.size.warning = warning.map(ScalarValue::Int);
    policy
}

pub(crate) fn layers_policy(max: Option<i64>, warning: Option<i64>) -> Policy {
    let mut policy = Policy::default();
    policy.layers.max = max.map(ScalarValue::Int);
    policy.layers.warning = warning.map(ScalarValue::Int);
    policy
}

pub(crate) fn port_range_policy(range: &str) -> Policy {
    let mut policy = Policy::default();
    policy.ports.range = Some(range.to_string());
    policy
}

fn disallow_list(entries: &[&str]) -> ListPolicy {
    ListPolicy {
        disallow: Some(entries.iter().map(|e| (*e).to_string()).collect()),
    }
}

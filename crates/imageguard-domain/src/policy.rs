//! The declarative policy document.
//!
//! Every field is optional: absence means "no constraint", never "zero
//! constraint". Sections are plain structs rather than `Option`s so rule
//! code never needs presence checks on a section.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A scalar policy value as authored. Policies in the wild carry both
/// `max: 50` and `max: "50"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ScalarValue {
    Int(i64),
    Str(String),
}

impl ScalarValue {
    /// The numeric value usable as a threshold.
    ///
    /// Unparseable and zero values degrade to `None` ("no constraint"):
    /// a malformed scalar in a policy file never hard-errors, it simply
    /// stops constraining.
    pub fn threshold(&self) -> Option<i64> {
        let n = match self {
            ScalarValue::Int(n) => *n,
            ScalarValue::Str(s) => s.trim().parse().ok()?,
        };
        (n != 0).then_some(n)
    }
}

impl From<i64> for ScalarValue {
    fn from(n: i64) -> Self {
        ScalarValue::Int(n)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Policy {
    pub size: SizePolicy,
    pub labels: ListPolicy,
    pub env_keys: ListPolicy,
    pub volumes: VolumesPolicy,
    pub ports: PortsPolicy,
    pub healthcheck: HealthcheckPolicy,
    pub layers: LayersPolicy,
}

/// Size thresholds, in whole megabytes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SizePolicy {
    pub max: Option<ScalarValue>,
    pub warning: Option<ScalarValue>,
}

/// A disallow-list section (shared by `labels` and `env_keys`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ListPolicy {
    pub disallow: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VolumesPolicy {
    pub disallowed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PortsPolicy {
    pub required: bool,

    /// Allowed port range, `"low-high"` inclusive.
    pub range: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HealthcheckPolicy {
    pub disallowed: bool,
}

/// Filesystem layer count thresholds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LayersPolicy {
    pub max: Option<ScalarValue>,
    pub warning: Option<ScalarValue>,
}

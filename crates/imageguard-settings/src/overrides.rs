use imageguard_domain::policy::{Policy, ScalarValue};

/// Raw override inputs, one per CLI flag.
///
/// Application is truthiness-based: a zero or empty value is
/// indistinguishable from "not supplied", so an explicit `--max 0`
/// cannot be expressed.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// Image size max, in MB.
    pub max: Option<i64>,
    /// Image size warning, in MB.
    pub warning: Option<i64>,
    /// Disallowed labels, comma-separated.
    pub labels: Option<String>,
    /// Disallowed env keys, comma-separated.
    pub envs: Option<String>,
    /// Allowed port range, `"low-high"`.
    pub range: Option<String>,
    /// Maximum number of filesystem layers.
    pub layers_max: Option<i64>,
    /// Warning number of filesystem layers.
    pub layers_warning: Option<i64>,
}

/// Merge CLI overrides onto a base policy.
///
/// Returns a structurally independent effective policy plus a description
/// line for each override applied, in a fixed order. Cannot fail: an
/// unsupplied input is a no-op, and values are not validated here — a
/// nonsensical range only surfaces later, inside the port-range rule.
pub fn apply_overrides(base: &Policy, overrides: &Overrides) -> (Policy, Vec<String>) {
    let mut policy = base.clone();
    let mut applied = Vec::new();

    scalar_override(
        overrides.max,
        &mut policy.size.max,
        "max image size",
        &mut applied,
    );
    scalar_override(
        overrides.warning,
        &mut policy.size.warning,
        "warning image size",
        &mut applied,
    );
    text_override(
        overrides.range.as_deref(),
        &mut policy.ports.range,
        "port range",
        &mut applied,
    );
    scalar_override(
        overrides.layers_max,
        &mut policy.layers.max,
        "max layer count",
        &mut applied,
    );
    scalar_override(
        overrides.layers_warning,
        &mut policy.layers.warning,
        "warning layer count",
        &mut applied,
    );

    split_override(
        overrides.labels.as_deref(),
        &mut policy.labels.disallow,
        "labels",
        &mut applied,
    );
    split_override(
        overrides.envs.as_deref(),
        &mut policy.env_keys.disallow,
        "env keys",
        &mut applied,
    );

    (policy, applied)
}

fn scalar_override(
    value: Option<i64>,
    dest: &mut Option<ScalarValue>,
    title: &str,
    applied: &mut Vec<String>,
) {
    let Some(value) = value.filter(|v| *v != 0) else {
        return;
    };

    *dest = Some(ScalarValue::Int(value));
    applied.push(format!("{title}: {value}"));
}

fn text_override(
    value: Option<&str>,
    dest: &mut Option<String>,
    title: &str,
    applied: &mut Vec<String>,
) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return;
    };

    *dest = Some(value.to_string());
    applied.push(format!("{title}: {value}"));
}

/// Comma-separated list override: tokens are trimmed, order preserved,
/// no deduplication; the destination list is replaced wholesale.
fn split_override(
    value: Option<&str>,
    dest: &mut Option<Vec<String>>,
    title: &str,
    applied: &mut Vec<String>,
) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return;
    };

    let tokens: Vec<String> = value.split(',').map(|t| t.trim().to_string()).collect();
    applied.push(format!("disallowed {title}: {}", tokens.join(", ")));
    *dest = Some(tokens);
}

//! Policy document parsing and override merging.
//!
//! This crate is intentionally IO-free: it parses and merges policy
//! content provided as strings and flag values.

#![forbid(unsafe_code)]

mod overrides;

pub use overrides::{apply_overrides, Overrides};

use imageguard_domain::policy::Policy;

/// Parse a YAML policy document into the typed model.
///
/// An empty document is a valid policy with no constraints.
pub fn parse_policy_yaml(input: &str) -> anyhow::Result<Policy> {
    if input.trim().is_empty() {
        return Ok(Policy::default());
    }
    let policy: Policy = serde_yaml::from_str(input)?;
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageguard_domain::policy::ScalarValue;

    #[test]
    fn empty_input_is_an_unconstrained_policy() {
        let policy = parse_policy_yaml("").unwrap();
        assert_eq!(policy, Policy::default());
        let policy = parse_policy_yaml("   \n").unwrap();
        assert_eq!(policy, Policy::default());
    }

    #[test]
    fn parses_all_sections() {
        let policy = parse_policy_yaml(
            r#"
size:
  max: 600
  warning: 400
labels:
  disallow:
    - com.example.role
env_keys:
  disallow:
    - AWS_SECRET_KEY
volumes:
  disallowed: true
ports:
  required: true
  range: "1-8080"
healthcheck:
  disallowed: true
layers:
  max: 100
  warning: 90
"#,
        )
        .unwrap();

        assert_eq!(policy.size.max, Some(ScalarValue::Int(600)));
        assert_eq!(
            policy.labels.disallow.as_deref(),
            Some(&["com.example.role".to_string()][..])
        );
        assert!(policy.volumes.disallowed);
        assert!(policy.ports.required);
        assert_eq!(policy.ports.range.as_deref(), Some("1-8080"));
        assert!(policy.healthcheck.disallowed);
        assert_eq!(policy.layers.warning, Some(ScalarValue::Int(90)));
    }

    #[test]
    fn quoted_scalars_parse_as_strings() {
        let policy = parse_policy_yaml("size:\n  max: \"50\"\n").unwrap();
        assert_eq!(policy.size.max, Some(ScalarValue::Str("50".to_string())));
        assert_eq!(policy.size.max.unwrap().threshold(), Some(50));
    }

    #[test]
    fn unknown_sections_are_tolerated() {
        let policy = parse_policy_yaml("future_section:\n  key: value\n").unwrap();
        assert_eq!(policy, Policy::default());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(parse_policy_yaml("size: [unclosed").is_err());
    }
}

//! Engine-level properties: evaluation is a pure, total function of its
//! inputs.

use crate::engine::evaluate;
use crate::model::ContainerMetadata;
use crate::policy::{Policy, ScalarValue};
use proptest::prelude::*;

fn size_policy(max: Option<i64>, warning: Option<i64>) -> Policy {
    let mut policy = Policy::default();
    policy.size.max = max.map(ScalarValue::Int);
    policy.size.warning = warning.map(ScalarValue::Int);
    policy
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(bytes in 0u64..100_000_000_000, max in 1i64..100_000) {
        let policy = size_policy(Some(max), None);
        let container = ContainerMetadata { size: bytes, ..ContainerMetadata::default() };

        let first = evaluate(&policy, &container);
        let second = evaluate(&policy, &container);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_rule_speaks_when_no_port_range_is_set(
        bytes in 0u64..100_000_000_000,
        max in 2i64..100_000,
    ) {
        // warning strictly below max keeps the policy well-formed
        let policy = size_policy(Some(max), Some(max - 1));
        let container = ContainerMetadata { size: bytes, ..ContainerMetadata::default() };

        let evaluation = evaluate(&policy, &container);
        prop_assert_eq!(evaluation.messages().len(), 7);
    }

    #[test]
    fn size_verdict_matches_ceil_arithmetic(bytes in 0u64..100_000_000_000, max in 1i64..100_000) {
        let policy = size_policy(Some(max), None);
        let container = ContainerMetadata { size: bytes, ..ContainerMetadata::default() };

        let evaluation = evaluate(&policy, &container);
        let size_mb = bytes.div_ceil(1_000_000) as i64;
        prop_assert_eq!(evaluation.is_passing(), size_mb <= max);
    }

    #[test]
    fn warning_never_affects_the_verdict(bytes in 0u64..100_000_000_000, warning in 1i64..100_000) {
        let policy = size_policy(None, Some(warning));
        let container = ContainerMetadata { size: bytes, ..ContainerMetadata::default() };

        prop_assert!(evaluate(&policy, &container).is_passing());
    }
}

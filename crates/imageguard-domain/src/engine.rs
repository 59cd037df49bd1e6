use crate::model::ContainerMetadata;
use crate::policy::Policy;
use crate::rules;
use imageguard_types::{Message, MessageLog, Verdict};

/// Result of one evaluation run: the overall verdict plus the ordered
/// message log, created fresh per call and owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    passing: bool,
    messages: MessageLog,
}

impl Evaluation {
    pub fn is_passing(&self) -> bool {
        self.passing
    }

    pub fn verdict(&self) -> Verdict {
        if self.passing {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.messages.messages()
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages.into_messages()
    }
}

/// Run the eight rules in fixed order against one policy/container pair.
///
/// Total function: it always returns a verdict, every rule runs even
/// after an earlier failure, and message order reproduces rule order.
pub fn evaluate(policy: &Policy, container: &ContainerMetadata) -> Evaluation {
    let mut log = MessageLog::new();
    let passing = rules::run_all(policy, container, &mut log);

    Evaluation {
        passing,
        messages: log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{container_with_labels, labels_policy};
    use imageguard_types::Severity;

    #[test]
    fn empty_policy_and_container_pass_with_one_message_per_rule() {
        let evaluation = evaluate(&Policy::default(), &ContainerMetadata::default());

        assert!(evaluation.is_passing());
        assert_eq!(evaluation.verdict(), Verdict::Pass);
        // The port-range rule is silent without a configured range; the
        // other seven rules emit one success each.
        assert_eq!(evaluation.messages().len(), 7);
        assert!(
            evaluation
                .messages()
                .iter()
                .all(|m| m.severity == Severity::Success)
        );
    }

    #[test]
    fn one_failing_rule_fails_the_run_but_all_rules_still_speak() {
        let policy = labels_policy(&["BAD"]);
        let container = container_with_labels(&[("BAD", "1")]);

        let evaluation = evaluate(&policy, &container);
        assert!(!evaluation.is_passing());
        assert_eq!(evaluation.verdict(), Verdict::Fail);

        // The label failure is first; every later rule still reported.
        assert_eq!(evaluation.messages()[0].severity, Severity::Failure);
        assert_eq!(evaluation.messages().len(), 7);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let policy = labels_policy(&["BAD"]);
        let container = container_with_labels(&[("BAD", "1"), ("OK", "2")]);

        let first = evaluate(&policy, &container);
        let second = evaluate(&policy, &container);
        assert_eq!(first, second);
    }

    #[test]
    fn message_order_follows_rule_order() {
        let evaluation = evaluate(&Policy::default(), &ContainerMetadata::default());
        let texts: Vec<&str> = evaluation.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "labels validated",
                "env keys validated",
                "volumes not in use",
                "exposed ports allowed, none detected",
                "no max container size limit specified",
                "no healthcheck specified",
                "no maximum container layer count specified",
            ]
        );
    }
}

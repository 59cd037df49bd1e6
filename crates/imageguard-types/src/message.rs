use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity is intentionally small: it maps cleanly to terminal labels
/// and exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Constraint satisfied, or vacuously not applicable.
    Success,
    /// A soft threshold crossed; never affects the overall verdict.
    Warning,
    /// The container violates a well-formed policy constraint.
    Failure,
    /// The policy itself is self-contradictory. Fails the run, since no
    /// container can be meaningfully evaluated against a broken
    /// constraint.
    Exception,
}

impl Severity {
    /// Whether a message of this severity fails the run on its own.
    pub fn is_failing(self) -> bool {
        matches!(self, Severity::Failure | Severity::Exception)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

/// Ordered, append-only log of rule messages.
///
/// Insertion order is rule evaluation order. One log belongs to exactly
/// one evaluation run; it is never shared across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Severity::Success, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(Severity::Warning, text);
    }

    pub fn failure(&mut self, text: impl Into<String>) {
        self.push(Severity::Failure, text);
    }

    pub fn exception(&mut self, text: impl Into<String>) {
        self.push(Severity::Exception, text);
    }

    fn push(&mut self, severity: Severity, text: impl Into<String>) {
        self.messages.push(Message {
            severity,
            text: text.into(),
        });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

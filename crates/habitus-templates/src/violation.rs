use serde::{Deserialize, Serialize};
use std::fmt;

/// A single finding against a template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateViolation {
    /// What was checked
    pub kind: ViolationKind,
    pub severity: ViolationSeverity,
    /// Human-readable description
    pub message: String,
}

impl TemplateViolation {
    pub fn new(
        kind: ViolationKind,
        severity: ViolationSeverity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }

    /// Fingerprint disagreements are always critical.
    pub fn fingerprint(message: impl Into<String>) -> Self {
        Self::new(
            ViolationKind::FingerprintMismatch,
            ViolationSeverity::Critical,
            message,
        )
    }
}

impl fmt::Display for TemplateViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {:?}: {}", self.severity, self.kind, self.message)
    }
}

/// Which invariant a violation concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Malformed,
    MissingField,
    VersionMismatch,
    HabitCount,
    Duration,
    DurationCeiling,
    FingerprintMismatch,
    CategoryBalance,
}

/// Severity of a template violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Warning,
    Violation,
    Critical,
}

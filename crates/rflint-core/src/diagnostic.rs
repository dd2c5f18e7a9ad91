use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Importance of a finding. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
    /// Reserved for engine faults: a rule failed while being applied.
    Internal,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
// The object that is eventually reported and printed by the renderer.
pub struct Diagnostic {
    // Name of the rule that reported it.
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    // Path of the document.
    pub filename: String,
    // 1-based line, 0 means the document as a whole.
    pub line: usize,
}

impl Diagnostic {
    pub fn new(
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        filename: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity,
            message: message.into(),
            filename: filename.into(),
            line,
        }
    }
}

impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare first by filename, then by line
        match self.filename.cmp(&other.filename) {
            Ordering::Equal => self.line.cmp(&other.line),
            other => other,
        }
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A rule failed unexpectedly on one document. Not a violation: it signals a
/// broken rule or a document that breaks a rule's assumptions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EngineFault {
    pub rule: String,
    pub filename: String,
    pub message: String,
}

impl EngineFault {
    pub const fn severity(&self) -> Severity {
        Severity::Internal
    }
}

impl fmt::Display for EngineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rule `{}` failed on {}: {}",
            self.rule, self.filename, self.message
        )
    }
}

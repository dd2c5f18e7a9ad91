use std::fmt::Display;
use std::fmt::Formatter;

/// A rule tried to read a cell that the row doesn't have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    pub linenumber: usize,
    pub index: usize,
    pub len: usize,
}

impl std::error::Error for MalformedRow {}

impl Display for MalformedRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Malformed row at line {}: expected a cell at position {} but the row has {} cell(s)",
            self.linenumber,
            self.index + 1,
            self.len
        )
    }
}

/// Failure to apply the parameters of `[lint.rules.<rule>]` to one rule.
///
/// This never aborts the whole configuration: the rule falls back to its
/// default parameters and the error is kept in `Config::rule_errors`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleConfigError {
    UnknownParameter {
        rule: String,
        parameter: String,
    },
    InvalidValue {
        rule: String,
        parameter: String,
        reason: String,
    },
}

impl RuleConfigError {
    pub fn unknown(rule: &str, parameter: &str) -> Self {
        Self::UnknownParameter {
            rule: rule.to_string(),
            parameter: parameter.to_string(),
        }
    }

    pub fn invalid(rule: &str, parameter: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            rule: rule.to_string(),
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the rule whose configuration failed.
    pub fn rule(&self) -> &str {
        match self {
            Self::UnknownParameter { rule, .. } | Self::InvalidValue { rule, .. } => rule,
        }
    }
}

impl std::error::Error for RuleConfigError {}

impl Display for RuleConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownParameter { rule, parameter } => {
                write!(f, "Unknown parameter `{parameter}` for rule `{rule}`")
            }
            Self::InvalidValue { rule, parameter, reason } => {
                write!(
                    f,
                    "Invalid value for parameter `{parameter}` of rule `{rule}`: {reason}"
                )
            }
        }
    }
}

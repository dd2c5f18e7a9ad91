//
// Adapted from Ark
// https://github.com/posit-dev/air/blob/main/crates/workspace/src/settings.rs
//
// MIT License - Posit PBC

use std::collections::BTreeMap;

use crate::config::RuleParams;
use crate::diagnostic::Severity;

/// Resolved configuration settings used within rflint
#[derive(Debug, Default)]
pub struct Settings {
    pub linter: LinterSettings,
}

/// [Default] uses `None` to indicate no rules specified, rather than empty
/// vectors.
#[derive(Debug, Default)]
pub struct LinterSettings {
    pub select: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
    pub severity: BTreeMap<String, Severity>,
    pub rules: BTreeMap<String, RuleParams>,
}

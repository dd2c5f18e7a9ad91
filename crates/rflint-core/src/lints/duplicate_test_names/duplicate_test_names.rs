use rustc_hash::FxHashSet;

use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::document::Document;
use crate::lints::LintRule;
use crate::rule_set::Rule;
use crate::utils::normalize_name;

/// ## What it does
///
/// Checks for test cases with the same name in one suite.
///
/// ## Why is this bad?
///
/// Test names are normalized the same way as keyword names (case, spaces and
/// underscores are ignored). Two tests with the same normalized name end up
/// with the same full name in reports, so their results can't be told apart
/// and selecting one with `--test` runs both.
#[derive(Debug, Clone, Default)]
pub struct DuplicateTestNames;

impl LintRule for DuplicateTestNames {
    fn name(&self) -> &str {
        Rule::DuplicateTestNames.name()
    }

    fn default_severity(&self) -> Severity {
        Rule::DuplicateTestNames.default_severity()
    }

    fn apply(&self, document: &Document, checker: &mut Checker) -> anyhow::Result<()> {
        let mut seen = FxHashSet::default();
        for testcase in document.testcases() {
            if !seen.insert(normalize_name(&testcase.name)) {
                checker.report(
                    format!("Duplicate testcase name '{}'", testcase.name),
                    testcase.linenumber,
                );
            }
        }
        Ok(())
    }
}

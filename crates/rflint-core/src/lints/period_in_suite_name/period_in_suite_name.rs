use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::document::Document;
use crate::lints::LintRule;
use crate::rule_set::Rule;

/// ## What it does
///
/// Checks for periods in the suite name.
///
/// ## Why is this bad?
///
/// `.` separates parent and child suites in a suite's full name, so a suite
/// called `login.v2` can't be told apart from a suite `v2` inside `login`.
#[derive(Debug, Clone, Default)]
pub struct PeriodInSuiteName;

impl LintRule for PeriodInSuiteName {
    fn name(&self) -> &str {
        Rule::PeriodInSuiteName.name()
    }

    fn default_severity(&self) -> Severity {
        Rule::PeriodInSuiteName.default_severity()
    }

    fn apply(&self, document: &Document, checker: &mut Checker) -> anyhow::Result<()> {
        if document.name().contains('.') {
            checker.report(format!("'.' in suite name '{}'", document.name()), 0);
        }
        Ok(())
    }
}

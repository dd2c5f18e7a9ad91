use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::document::Document;
use crate::lints::LintRule;
use crate::rule_set::Rule;
use crate::utils::eq_ignore_case;

/// ## What it does
///
/// Checks that the suite has a `Documentation` setting.
///
/// ## Why is this bad?
///
/// The suite documentation is what shows up at the top of logs and reports.
/// Without it, readers have to go through the test cases to find out what
/// the suite is for.
///
/// The finding is attached to the line after the first settings table
/// header, or to the first line of the file if there is no settings table.
#[derive(Debug, Clone, Default)]
pub struct RequireSuiteDocumentation;

impl LintRule for RequireSuiteDocumentation {
    fn name(&self) -> &str {
        Rule::RequireSuiteDocumentation.name()
    }

    fn default_severity(&self) -> Severity {
        Rule::RequireSuiteDocumentation.default_severity()
    }

    fn apply(&self, document: &Document, checker: &mut Checker) -> anyhow::Result<()> {
        for row in document.settings_rows() {
            if eq_ignore_case(row.cell(0)?, "documentation") {
                return Ok(());
            }
        }

        let line = document
            .settings_tables()
            .next()
            .map_or(1, |table| table.linenumber + 1);
        checker.report("No suite documentation", line);

        Ok(())
    }
}

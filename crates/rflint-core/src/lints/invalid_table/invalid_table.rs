use regex::Regex;
use std::sync::LazyLock;

use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::document::Document;
use crate::lints::LintRule;
use crate::rule_set::Rule;

static TABLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(settings?|metadata|(test )?cases?|(user )?keywords?|variables?)$")
        .expect("table name pattern is valid")
});

/// ## What it does
///
/// Checks for table headers that aren't one of the recognized tables:
/// settings, metadata, test cases, keywords or variables (singular or plural,
/// any case).
///
/// ## Why is this bad?
///
/// Content under an unknown header is silently skipped, which usually means
/// a typo in the header.
///
/// ## Example
///
/// ```text
/// *** Configuration ***
/// Library    Collections
/// ```
#[derive(Debug, Clone, Default)]
pub struct InvalidTable;

impl LintRule for InvalidTable {
    fn name(&self) -> &str {
        Rule::InvalidTable.name()
    }

    fn default_severity(&self) -> Severity {
        Rule::InvalidTable.default_severity()
    }

    fn apply(&self, document: &Document, checker: &mut Checker) -> anyhow::Result<()> {
        for table in document.tables() {
            // Same leniency as `TableKind::from_header`.
            if !TABLE_NAME.is_match(table.name.trim()) {
                checker.report(
                    format!("Unknown table name '{}'", table.name),
                    table.linenumber,
                );
            }
        }
        Ok(())
    }
}

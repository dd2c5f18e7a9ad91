use rustc_hash::FxHashSet;

use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::document::Document;
use crate::lints::LintRule;
use crate::rule_set::Rule;
use crate::utils::normalize_name;

/// ## What it does
///
/// Checks for keywords defined more than once in the same file.
///
/// ## Why is this bad?
///
/// Keyword names are compared ignoring case, spaces and underscores, so
/// `Open Browser`, `open_browser` and `OpenBrowser` are the same keyword.
/// Calling it is ambiguous.
///
/// The first definition is fine; every later one is reported.
#[derive(Debug, Clone, Default)]
pub struct DuplicateKeywordNames;

impl LintRule for DuplicateKeywordNames {
    fn name(&self) -> &str {
        Rule::DuplicateKeywordNames.name()
    }

    fn default_severity(&self) -> Severity {
        Rule::DuplicateKeywordNames.default_severity()
    }

    fn apply(&self, document: &Document, checker: &mut Checker) -> anyhow::Result<()> {
        let mut seen = FxHashSet::default();
        for keyword in document.keywords() {
            if !seen.insert(normalize_name(&keyword.name)) {
                checker.report(
                    format!("Duplicate keyword name '{}'", keyword.name),
                    keyword.linenumber,
                );
            }
        }
        Ok(())
    }
}

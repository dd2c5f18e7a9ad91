use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::document::Document;
use crate::lints::LintRule;
use crate::rule_set::Rule;

const AUTHOR_TOKENS: [&str; 3] = ["author", "name", "modified"];
const CONTACT_TOKENS: [&str; 3] = ["contact", "mail", "team"];

/// ## What it does
///
/// Checks that every settings table mentions an author and a contact, for
/// instance in the suite documentation.
///
/// ## Why is this bad?
///
/// When a suite fails, whoever investigates needs to know who wrote it and
/// who maintains it now.
///
/// ## Example
///
/// ```text
/// *** Settings ***
/// Documentation    Checks the login page.
/// ...    Author: Jane Doe
/// ...    Contact: login-team@example.com
/// ```
///
/// Both findings are attached to the first line of the file. Documents
/// without a settings table aren't checked.
#[derive(Debug, Clone, Default)]
pub struct RequiredAuthorInfo;

impl LintRule for RequiredAuthorInfo {
    fn name(&self) -> &str {
        Rule::RequiredAuthorInfo.name()
    }

    fn default_severity(&self) -> Severity {
        Rule::RequiredAuthorInfo.default_severity()
    }

    fn apply(&self, document: &Document, checker: &mut Checker) -> anyhow::Result<()> {
        for table in document.settings_tables() {
            let mut has_author = false;
            let mut has_contact = false;

            for cell in table.rows.iter().flat_map(|row| row.iter()) {
                let cell = cell.to_lowercase();
                has_author |= AUTHOR_TOKENS.iter().any(|token| cell.contains(token));
                has_contact |= CONTACT_TOKENS.iter().any(|token| cell.contains(token));
            }

            if !has_author {
                checker.report("Author name is needed", 1);
            }
            if !has_contact {
                checker.report("Contact list is needed", 1);
            }
        }
        Ok(())
    }
}

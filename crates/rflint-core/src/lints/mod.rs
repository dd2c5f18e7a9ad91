use crate::checker::Checker;
use crate::config::RuleParams;
use crate::diagnostic::Severity;
use crate::document::Document;
use crate::error::RuleConfigError;

pub(crate) mod duplicate_keyword_names;
pub(crate) mod duplicate_test_names;
pub(crate) mod invalid_table;
pub(crate) mod no_curdir_in_import;
pub(crate) mod period_in_suite_name;
pub(crate) mod require_suite_documentation;
pub(crate) mod required_author_info;
pub(crate) mod required_file_suffix_and_folder;
pub(crate) mod too_many_test_cases;

/// A check run once per document.
///
/// Rules only read the document and report findings through the [`Checker`].
/// They keep no state between documents: anything a rule remembers lives in
/// the `apply` call.
pub trait LintRule: Send + Sync {
    /// Name used in diagnostics and in `rflint.toml`.
    fn name(&self) -> &str;

    /// Severity used when the configuration doesn't override it.
    fn default_severity(&self) -> Severity;

    /// Apply the parameters from `[lint.rules.<name>]`.
    ///
    /// Called once before any document is checked. Rules without tunables
    /// reject every parameter.
    fn configure(&mut self, params: &RuleParams) -> Result<(), RuleConfigError> {
        match params.keys().next() {
            Some(parameter) => Err(RuleConfigError::unknown(self.name(), parameter)),
            None => Ok(()),
        }
    }

    /// Run the check and report violations. An `Err` is an engine fault, not
    /// a violation.
    fn apply(&self, document: &Document, checker: &mut Checker) -> anyhow::Result<()>;
}

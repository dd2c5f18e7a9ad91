use crate::checker::Checker;
use crate::config::RuleParams;
use crate::diagnostic::Severity;
use crate::document::Document;
use crate::error::RuleConfigError;
use crate::lints::LintRule;
use crate::rule_set::Rule;

/// ## What it does
///
/// Checks that the path of a suite contains the suite file suffix and the
/// feature folder marker.
///
/// ## Why is this bad?
///
/// Suites are grouped by feature: the folder of a suite names the feature
/// under test (e.g. `5GC000165`). Files without the `.robot` suffix aren't
/// picked up consistently by the tooling.
///
/// Both markers can be changed in `rflint.toml`:
///
/// ```toml
/// [lint.rules.required_file_suffix_and_folder]
/// suffix = ".robot"
/// folder = "5GC"
/// ```
#[derive(Debug, Clone)]
pub struct RequiredFileSuffixAndFolder {
    suffix: String,
    folder: String,
}

impl Default for RequiredFileSuffixAndFolder {
    fn default() -> Self {
        Self {
            suffix: ".robot".to_string(),
            folder: "5GC".to_string(),
        }
    }
}

impl LintRule for RequiredFileSuffixAndFolder {
    fn name(&self) -> &str {
        Rule::RequiredFileSuffixAndFolder.name()
    }

    fn default_severity(&self) -> Severity {
        Rule::RequiredFileSuffixAndFolder.default_severity()
    }

    fn configure(&mut self, params: &RuleParams) -> Result<(), RuleConfigError> {
        for (parameter, value) in params.iter() {
            let target = match parameter {
                "suffix" => &mut self.suffix,
                "folder" => &mut self.folder,
                _ => return Err(RuleConfigError::unknown(self.name(), parameter)),
            };
            match value.as_str() {
                Some(marker) if !marker.is_empty() => *target = marker.to_string(),
                _ => {
                    return Err(RuleConfigError::invalid(
                        Rule::RequiredFileSuffixAndFolder.name(),
                        parameter,
                        format!("expected a non-empty string, got {value}"),
                    ));
                }
            }
        }
        Ok(())
    }

    fn apply(&self, document: &Document, checker: &mut Checker) -> anyhow::Result<()> {
        let path = document.path();

        if !path.contains(&self.suffix) {
            checker.report(format!("Required file suffix is \"{}\"", self.suffix), 0);
        }
        if !path.contains(&self.folder) {
            checker.report(format!("Required parent folder is \"{}*\"", self.folder), 0);
        }

        Ok(())
    }
}

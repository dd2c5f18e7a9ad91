use crate::checker::Checker;
use crate::config::RuleParams;
use crate::diagnostic::Severity;
use crate::document::Document;
use crate::error::RuleConfigError;
use crate::lints::LintRule;
use crate::rule_set::Rule;
use crate::utils::eq_ignore_case;

const DEFAULT_MAX_ALLOWED: usize = 10;

/// ## What it does
///
/// Checks that a suite doesn't have more than `max_allowed` test cases
/// (10 by default). Data-driven suites, i.e. suites with a `Test Template`
/// setting, are not checked.
///
/// ## Why is this bad?
///
/// Large suites are slow to run and hard to navigate. Split them by feature
/// or by scenario instead.
///
/// The limit can be changed in `rflint.toml`:
///
/// ```toml
/// [lint.rules.too_many_test_cases]
/// max_allowed = 20
/// ```
#[derive(Debug, Clone)]
pub struct TooManyTestCases {
    max_allowed: usize,
}

impl Default for TooManyTestCases {
    fn default() -> Self {
        Self { max_allowed: DEFAULT_MAX_ALLOWED }
    }
}

impl LintRule for TooManyTestCases {
    fn name(&self) -> &str {
        Rule::TooManyTestCases.name()
    }

    fn default_severity(&self) -> Severity {
        Rule::TooManyTestCases.default_severity()
    }

    fn configure(&mut self, params: &RuleParams) -> Result<(), RuleConfigError> {
        for (parameter, value) in params.iter() {
            match parameter {
                "max_allowed" => {
                    let max_allowed = value
                        .as_count()
                        .map_err(|reason| RuleConfigError::invalid(self.name(), parameter, reason))?;
                    self.max_allowed = max_allowed;
                }
                _ => return Err(RuleConfigError::unknown(self.name(), parameter)),
            }
        }
        Ok(())
    }

    fn apply(&self, document: &Document, checker: &mut Checker) -> anyhow::Result<()> {
        for row in document.settings_rows() {
            if eq_ignore_case(row.cell(0)?, "test template") {
                return Ok(());
            }
        }

        let testcases = document.testcases();
        if testcases.len() > self.max_allowed {
            checker.report(
                format!(
                    "Too many test cases ({} > {}) in test suite",
                    testcases.len(),
                    self.max_allowed
                ),
                testcases[self.max_allowed].linenumber,
            );
        }

        Ok(())
    }
}

use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::document::Document;
use crate::lints::LintRule;
use crate::rule_set::Rule;

const CURDIR: &str = "${CURDIR}";

/// ## What it does
///
/// Checks for `Resource` imports that go through `${CURDIR}`.
///
/// ## Why is this bad?
///
/// Resources from the parent directory must be imported with a path relative
/// to the suite, and resources from the same directory with a `./` path.
/// `${CURDIR}` hides where the resource actually lives.
///
/// ## Example
///
/// ```text
/// *** Settings ***
/// Resource    ${CURDIR}/../common.robot
/// ```
///
/// Use instead:
/// ```text
/// *** Settings ***
/// Resource    ../common.robot
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoCurdirInImport;

impl LintRule for NoCurdirInImport {
    fn name(&self) -> &str {
        Rule::NoCurdirInImport.name()
    }

    fn default_severity(&self) -> Severity {
        Rule::NoCurdirInImport.default_severity()
    }

    fn apply(&self, document: &Document, checker: &mut Checker) -> anyhow::Result<()> {
        for row in document.settings_rows() {
            // The setting name is matched exactly, as written in the suite.
            if row.cell(0)? == "Resource" && row.cell(1)?.contains(CURDIR) {
                checker.report(
                    format!("Don't use {CURDIR} when importing resources"),
                    row.linenumber,
                );
            }
        }
        Ok(())
    }
}

use crate::diagnostic::{Diagnostic, Severity};
use crate::document::Document;

#[derive(Debug)]
// The object that collects diagnostics while the rules run. One per checked
// document; the engine points it at each rule in turn.
pub struct Checker<'a> {
    document: &'a Document,
    // Name of the rule currently being applied.
    rule: String,
    // Severity configured for the current rule.
    severity: Severity,
    // The diagnostics to report (possibly empty).
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Checker<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            rule: String::new(),
            severity: Severity::Warning,
            diagnostics: vec![],
        }
    }

    /// Bind the following reports to `rule`.
    pub(crate) fn set_rule(&mut self, rule: &str, severity: Severity) {
        self.rule = rule.to_string();
        self.severity = severity;
    }

    /// Report a violation with the rule's configured severity. `line` 0
    /// attaches it to the start of the document.
    pub fn report(&mut self, message: impl Into<String>, line: usize) {
        let severity = self.severity;
        self.report_with_severity(message, line, severity);
    }

    pub fn report_with_severity(
        &mut self,
        message: impl Into<String>,
        line: usize,
        severity: Severity,
    ) {
        self.diagnostics.push(Diagnostic::new(
            self.rule.clone(),
            severity,
            message,
            self.document.path(),
            line,
        ));
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

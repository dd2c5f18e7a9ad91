use rayon::prelude::*;
use serde::Serialize;

use crate::checker::Checker;
use crate::config::Config;
use crate::diagnostic::{Diagnostic, EngineFault};
use crate::document::Document;

/// Everything found while checking one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub filename: String,
    // Violations, in the order the rules reported them.
    pub diagnostics: Vec<Diagnostic>,
    // Rules that failed on this document.
    pub faults: Vec<EngineFault>,
}

impl DocumentReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.faults.is_empty()
    }

    pub fn has_faults(&self) -> bool {
        !self.faults.is_empty()
    }
}

/// Check every document with every configured rule.
///
/// Documents are independent so they are checked in parallel. The reports
/// come back in the same order as `documents`.
pub fn check(documents: &[Document], config: &Config) -> Vec<DocumentReport> {
    documents
        .par_iter()
        .map(|document| check_document(document, config))
        .collect()
}

/// Apply each rule to `document`, in the order of `config.rules`.
///
/// A rule returning an error doesn't stop the others: the error is recorded
/// as an [`EngineFault`] and the violations it reported before failing are
/// kept.
pub fn check_document(document: &Document, config: &Config) -> DocumentReport {
    tracing::debug!(
        "Checking {} with {} rule(s)",
        document.path(),
        config.rules.len()
    );

    let mut checker = Checker::new(document);
    let mut faults = Vec::new();

    for rule in &config.rules {
        tracing::trace!("Applying rule {} to {}", rule.name(), document.path());
        checker.set_rule(rule.name(), rule.severity);

        if let Err(err) = rule.lint.apply(document, &mut checker) {
            let fault = EngineFault {
                rule: rule.name().to_string(),
                filename: document.path().to_string(),
                message: format!("{err:#}"),
            };
            tracing::warn!("{fault}");
            faults.push(fault);
        }
    }

    DocumentReport {
        filename: document.path().to_string(),
        diagnostics: checker.into_diagnostics(),
        faults,
    }
}

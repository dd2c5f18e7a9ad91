use rflint_core::config::{Config, build_config};
use rflint_core::diagnostic::{Diagnostic, Severity};
use rflint_core::document::{Row, Table};
use rflint_core::{Document, check, check_document};

use crate::helpers::{clean_suite, messy_suite};

fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{}[{}] {}:{} {}\n", d.severity, d.rule, d.filename, d.line, d.message))
        .collect()
}

#[test]
fn test_clean_suite_has_no_violations() {
    let report = check_document(&clean_suite(), &Config::default());
    assert!(report.is_clean(), "{report:?}");
}

#[test]
fn test_every_rule_fires_on_messy_suite() {
    let report = check_document(&messy_suite(), &Config::default());
    assert!(!report.has_faults());

    insta::assert_snapshot!(format_diagnostics(&report.diagnostics), @r#"
    error[required_file_suffix_and_folder] features/login.v2.txt:0 Required file suffix is ".robot"
    error[required_file_suffix_and_folder] features/login.v2.txt:0 Required parent folder is "5GC*"
    error[no_curdir_in_import] features/login.v2.txt:3 Don't use ${CURDIR} when importing resources
    error[required_author_info] features/login.v2.txt:1 Author name is needed
    error[required_author_info] features/login.v2.txt:1 Contact list is needed
    warning[period_in_suite_name] features/login.v2.txt:0 '.' in suite name 'login.v2'
    warning[invalid_table] features/login.v2.txt:5 Unknown table name 'Configuration'
    error[duplicate_keyword_names] features/login.v2.txt:26 Duplicate keyword name 'open_page'
    error[duplicate_test_names] features/login.v2.txt:21 Duplicate testcase name 'case_0'
    warning[require_suite_documentation] features/login.v2.txt:2 No suite documentation
    warning[too_many_test_cases] features/login.v2.txt:19 Too many test cases (13 > 10) in test suite
    "#);
}

#[test]
fn test_sorted_diagnostics_follow_line_order() {
    let report = check_document(&messy_suite(), &Config::default());
    let mut diagnostics = report.diagnostics.clone();
    diagnostics.sort();

    let lines: Vec<usize> = diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![0, 0, 0, 1, 1, 2, 3, 5, 19, 21, 26]);
}

#[test]
fn test_check_is_deterministic() {
    let documents = vec![messy_suite(), clean_suite(), messy_suite().with_name("other")];
    let config = Config::default();

    let first = check(&documents, &config);
    let second = check(&documents, &config);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert!(first[1].is_clean());
}

#[test]
fn test_malformed_row_is_reported_as_fault() -> anyhow::Result<()> {
    let document = clean_suite().with_table(
        Table::new("Settings", 20)
            .with_row(Row::new(21, ["Documentation", "More"]))
            .with_row(Row::new(22, ["Resource"])),
    );
    let config = build_config(None)?;

    let report = check_document(&document, &config);

    assert_eq!(report.faults.len(), 1);
    let fault = &report.faults[0];
    assert_eq!(fault.rule, "no_curdir_in_import");
    assert_eq!(fault.severity(), Severity::Internal);
    assert_eq!(
        fault.message,
        "Malformed row at line 22: expected a cell at position 2 but the row has 1 cell(s)"
    );

    // The second settings table has no author or contact, the other rules
    // still ran.
    let rules: Vec<&str> = report.diagnostics.iter().map(|d| d.rule.as_str()).collect();
    assert_eq!(rules, vec!["required_author_info", "required_author_info"]);

    Ok(())
}

#[test]
fn test_document_from_json() -> anyhow::Result<()> {
    let document = Document::from_json(
        r#"{
            "path": "5GC000165/suite.robot",
            "name": "suite",
            "tables": [
                {
                    "kind": "settings",
                    "name": "Settings",
                    "linenumber": 1,
                    "rows": [
                        {"linenumber": 2, "cells": ["Documentation", "Author: Jane, team: core"]}
                    ]
                },
                {"kind": "unknown", "name": "Foo", "linenumber": 4}
            ],
            "testcases": [{"name": "A", "linenumber": 6}]
        }"#,
    )?;

    assert!(document.keywords().is_empty());

    let report = check_document(&document, &Config::default());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].message, "Unknown table name 'Foo'");
    assert_eq!(report.diagnostics[0].line, 4);

    Ok(())
}

#[test]
fn test_document_from_invalid_json() {
    let err = Document::from_json(r#"{"path": 1}"#).unwrap_err();
    assert_eq!(err.to_string(), "Failed to deserialize document");
}

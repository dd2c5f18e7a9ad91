use rflint_core::Document;
use rflint_core::check_document;
use rflint_core::config::{Config, ParamValue, RuleParams};
use rflint_core::document::{KeywordDef, TestCaseDef};
use rflint_core::rule_set::{ALL_RULES, Rule};

fn config_for(rule: Rule, params: &RuleParams) -> Config {
    let mut lint = rule.build();
    lint.configure(params).expect("valid parameters");
    Config::from_rules(vec![lint])
}

fn suite_with_testcases(n: usize) -> Document {
    (0..n).fold(Document::new("5GC000165/suite.robot"), |document, i| {
        document.with_testcase(TestCaseDef::new(format!("Case {i}"), 2 + 3 * i))
    })
}

#[test]
fn test_duplicate_names_ignore_spaces_underscores_and_case() {
    let spellings = ["Open Page", "open_page", "OPEN PAGE", "Open__Page", " openpage "];
    let config = config_for(Rule::DuplicateKeywordNames, &RuleParams::new());

    for (i, spelling) in spellings.iter().enumerate() {
        let document = Document::new("5GC000165/suite.robot")
            .with_keyword(KeywordDef::new("OpenPage", 3))
            .with_keyword(KeywordDef::new(*spelling, 10 + i));

        let report = check_document(&document, &config);
        assert_eq!(report.diagnostics.len(), 1, "spelling {spelling:?}");
        assert_eq!(report.diagnostics[0].line, 10 + i);
    }
}

#[test]
fn test_n_copies_give_n_minus_one_duplicates() {
    let config = config_for(Rule::DuplicateTestNames, &RuleParams::new());
    for n in 1..6 {
        let document = (0..n).fold(Document::new("5GC000165/suite.robot"), |document, i| {
            document.with_testcase(TestCaseDef::new("Same Name", 1 + i))
        });
        let report = check_document(&document, &config);
        assert_eq!(report.diagnostics.len(), n - 1);
    }
}

#[test]
fn test_too_many_test_cases_threshold() {
    for max_allowed in [0_i64, 1, 5, 10] {
        let params = RuleParams::new().with("max_allowed", ParamValue::Integer(max_allowed));
        let config = config_for(Rule::TooManyTestCases, &params);
        let max = max_allowed as usize;

        let at_limit = check_document(&suite_with_testcases(max), &config);
        assert!(at_limit.diagnostics.is_empty());

        let over_limit = check_document(&suite_with_testcases(max + 1), &config);
        assert_eq!(over_limit.diagnostics.len(), 1);
        // Anchored at the first test case past the limit.
        assert_eq!(over_limit.diagnostics[0].line, 2 + 3 * max);
    }
}

#[test]
fn test_every_rule_has_a_unique_name() {
    let mut names: Vec<&str> = ALL_RULES.iter().map(|rule| rule.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ALL_RULES.len());

    for rule in ALL_RULES {
        assert_eq!(Rule::from_name(rule.name()), Some(*rule));
        assert_eq!(rule.build().name(), rule.name());
        assert_eq!(rule.build().default_severity(), rule.default_severity());
    }
}

#[test]
fn test_empty_document_only_checks_the_path() {
    let report = check_document(&Document::new("5GC000165/suite.robot"), &Config::default());
    let rules: Vec<&str> = report.diagnostics.iter().map(|d| d.rule.as_str()).collect();
    assert_eq!(rules, vec!["require_suite_documentation"]);
    assert_eq!(report.diagnostics[0].line, 1);
}

use rflint_core::Document;
use rflint_core::document::{KeywordDef, Row, Table, TestCaseDef};

/// A suite that passes every rule with the default configuration.
pub fn clean_suite() -> Document {
    Document::new("5GC000165/login.robot")
        .with_table(
            Table::new("Settings", 1)
                .with_row(Row::new(2, ["Documentation", "Login checks. Author: Jane Doe"]))
                .with_row(Row::new(3, ["...", "Contact: login-team@example.com"]))
                .with_row(Row::new(4, ["Resource", "../common.robot"])),
        )
        .with_table(Table::new("Test Cases", 6))
        .with_testcase(TestCaseDef::new("Valid Login", 7))
        .with_testcase(TestCaseDef::new("Invalid Login", 10))
        .with_table(Table::new("Keywords", 13))
        .with_keyword(KeywordDef::new("Open Login Page", 14))
}

/// A suite that breaks every rule at least once.
pub fn messy_suite() -> Document {
    let mut testcases = Table::new("Test Cases", 8);
    let mut document = Document::new("features/login.v2.txt");
    for i in 0..12 {
        let line = 9 + i;
        testcases.push_row(Row::new(line, [format!("Case {i}")]));
        document = document.with_testcase(TestCaseDef::new(format!("Case {i}"), line));
    }

    document
        .with_table(
            Table::new("Settings", 1)
                .with_row(Row::new(2, ["Library", "Collections"]))
                .with_row(Row::new(3, ["Resource", "${CURDIR}/../common.robot"])),
        )
        .with_table(Table::new("Configuration", 5).with_row(Row::new(6, ["Foo", "bar"])))
        .with_table(testcases)
        .with_testcase(TestCaseDef::new("case_0", 21))
        .with_table(Table::new("Keywords", 23))
        .with_keyword(KeywordDef::new("Open Page", 24))
        .with_keyword(KeywordDef::new("open_page", 26))
}

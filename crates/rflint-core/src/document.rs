//! In-memory model of a parsed test-suite document.
//!
//! Documents are built by an external parser (either through the builder
//! methods below or by deserializing JSON) and are never mutated by the rules.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::MalformedRow;

/// Kind of a table, derived from its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    Settings,
    Metadata,
    TestCases,
    Keywords,
    Variables,
    /// Header that isn't one of the recognized forms.
    Unknown,
}

impl TableKind {
    /// Classify a raw header such as `Settings` or `Test Cases`.
    pub fn from_header(header: &str) -> Self {
        let header = header.trim().to_lowercase();
        match header.as_str() {
            "setting" | "settings" => Self::Settings,
            "metadata" => Self::Metadata,
            "case" | "cases" | "test case" | "test cases" => Self::TestCases,
            "keyword" | "keywords" | "user keyword" | "user keywords" => Self::Keywords,
            "variable" | "variables" => Self::Variables,
            _ => Self::Unknown,
        }
    }

    /// `Metadata` is an older spelling of the settings table and holds the
    /// same rows.
    pub const fn is_settings(self) -> bool {
        matches!(self, Self::Settings | Self::Metadata)
    }
}

/// One line of cells within a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub linenumber: usize,
    pub cells: Vec<String>,
}

impl Row {
    pub fn new<I, S>(linenumber: usize, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            linenumber,
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the cell at `index`, failing with [`MalformedRow`] if the row is
    /// too short.
    pub fn cell(&self, index: usize) -> Result<&str, MalformedRow> {
        self.cells
            .get(index)
            .map(String::as_str)
            .ok_or(MalformedRow {
                linenumber: self.linenumber,
                index,
                len: self.cells.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub kind: TableKind,
    /// Header text as written, without the surrounding asterisks.
    pub name: String,
    pub linenumber: usize,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table whose kind is derived from its header.
    pub fn new(name: impl Into<String>, linenumber: usize) -> Self {
        let name = name.into();
        Self {
            kind: TableKind::from_header(&name),
            name,
            linenumber,
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordDef {
    pub name: String,
    pub linenumber: usize,
}

impl KeywordDef {
    pub fn new(name: impl Into<String>, linenumber: usize) -> Self {
        Self { name: name.into(), linenumber }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseDef {
    pub name: String,
    pub linenumber: usize,
}

impl TestCaseDef {
    pub fn new(name: impl Into<String>, linenumber: usize) -> Self {
        Self { name: name.into(), linenumber }
    }
}

/// One parsed suite file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    path: String,
    name: String,
    #[serde(default)]
    tables: Vec<Table>,
    #[serde(default)]
    keywords: Vec<KeywordDef>,
    #[serde(default)]
    testcases: Vec<TestCaseDef>,
}

impl Document {
    /// Create an empty document. The suite name is derived from the file
    /// stem of `path`, e.g. `suites/foo.bar.robot` gives `foo.bar`.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = suite_name_from_path(&path);
        Self {
            path,
            name,
            tables: Vec::new(),
            keywords: Vec::new(),
            testcases: Vec::new(),
        }
    }

    /// Read a document serialized by an external parser.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to deserialize document")
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn with_keyword(mut self, keyword: KeywordDef) -> Self {
        self.keywords.push(keyword);
        self
    }

    pub fn with_testcase(mut self, testcase: TestCaseDef) -> Self {
        self.testcases.push(testcase);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn keywords(&self) -> &[KeywordDef] {
        &self.keywords
    }

    pub fn testcases(&self) -> &[TestCaseDef] {
        &self.testcases
    }

    /// Tables holding suite settings, in source order.
    pub fn settings_tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter().filter(|table| table.kind.is_settings())
    }

    /// Rows of every settings table, in source order.
    pub fn settings_rows(&self) -> impl Iterator<Item = &Row> {
        self.settings_tables().flat_map(|table| table.rows.iter())
    }
}

fn suite_name_from_path(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

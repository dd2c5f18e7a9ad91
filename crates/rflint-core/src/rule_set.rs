use std::fmt;

use crate::diagnostic::Severity;
use crate::lints::LintRule;

macro_rules! declare_rules {
    (
        $(
            $variant:ident => {
                name: $name:literal,
                severity: $severity:ident,
                lint: $lint:path,
            }
        ),* $(,)?
    ) => {
        /// Enum representing all built-in rules
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Rule {
            $($variant),*
        }

        impl Rule {
            /// Get the rule's string name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }

            /// Get the severity the rule reports with unless configured otherwise
            pub const fn default_severity(self) -> Severity {
                match self {
                    $(Self::$variant => Severity::$severity),*
                }
            }

            /// Create a fresh instance of the rule with default parameters
            pub fn build(self) -> Box<dyn LintRule> {
                match self {
                    $(Self::$variant => Box::new(<$lint>::default())),*
                }
            }

            /// Parse a rule from its string name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Get all rules as a slice
            pub const fn all() -> &'static [Rule] {
                ALL_RULES
            }
        }

        impl fmt::Display for Rule {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        /// Static array containing all rules, in the order they are applied
        pub const ALL_RULES: &[Rule] = &[
            $(Rule::$variant),*
        ];
    };
}

// Declare all rules with their metadata
declare_rules! {
    RequiredFileSuffixAndFolder => {
        name: "required_file_suffix_and_folder",
        severity: Error,
        lint: crate::lints::required_file_suffix_and_folder::required_file_suffix_and_folder::RequiredFileSuffixAndFolder,
    },
    NoCurdirInImport => {
        name: "no_curdir_in_import",
        severity: Error,
        lint: crate::lints::no_curdir_in_import::no_curdir_in_import::NoCurdirInImport,
    },
    RequiredAuthorInfo => {
        name: "required_author_info",
        severity: Error,
        lint: crate::lints::required_author_info::required_author_info::RequiredAuthorInfo,
    },
    PeriodInSuiteName => {
        name: "period_in_suite_name",
        severity: Warning,
        lint: crate::lints::period_in_suite_name::period_in_suite_name::PeriodInSuiteName,
    },
    InvalidTable => {
        name: "invalid_table",
        severity: Warning,
        lint: crate::lints::invalid_table::invalid_table::InvalidTable,
    },
    DuplicateKeywordNames => {
        name: "duplicate_keyword_names",
        severity: Error,
        lint: crate::lints::duplicate_keyword_names::duplicate_keyword_names::DuplicateKeywordNames,
    },
    DuplicateTestNames => {
        name: "duplicate_test_names",
        severity: Error,
        lint: crate::lints::duplicate_test_names::duplicate_test_names::DuplicateTestNames,
    },
    RequireSuiteDocumentation => {
        name: "require_suite_documentation",
        severity: Warning,
        lint: crate::lints::require_suite_documentation::require_suite_documentation::RequireSuiteDocumentation,
    },
    TooManyTestCases => {
        name: "too_many_test_cases",
        severity: Warning,
        lint: crate::lints::too_many_test_cases::too_many_test_cases::TooManyTestCases,
    },
}

/// A collection of rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set from a vector of rules
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Create a rule set containing all rules
    pub fn all() -> Self {
        Self { rules: ALL_RULES.to_vec() }
    }

    /// Get an iterator over the rules
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Check if the rule set contains a specific rule
    pub fn contains(&self, rule: &Rule) -> bool {
        self.rules.contains(rule)
    }

    /// Get the number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the rule set is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Filter rules by a predicate
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnMut(&Rule) -> bool,
    {
        Self {
            rules: self.rules.into_iter().filter(predicate).collect(),
        }
    }
}

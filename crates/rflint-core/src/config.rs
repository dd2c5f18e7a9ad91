use crate::{
    diagnostic::Severity,
    error::RuleConfigError,
    lints::LintRule,
    rule_set::{ALL_RULES, Rule, RuleSet},
    settings::Settings,
};
use anyhow::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Value of one rule parameter in `[lint.rules.<rule>]`.
///
/// Any TOML value is accepted here so that a parameter of the wrong type is
/// rejected by the rule's `configure` instead of failing the whole file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    Boolean(bool),
    String(String),
    // Floats, arrays, tables and datetimes.
    Other(#[cfg_attr(feature = "schemars", schemars(with = "serde_json::Value"))] toml::Value),
}

impl ParamValue {
    /// Interpret the value as a count. Numeric strings such as `"12"` are
    /// accepted too.
    pub fn as_count(&self) -> std::result::Result<usize, String> {
        match self {
            Self::Integer(value) => {
                usize::try_from(*value).map_err(|_| format!("expected a non-negative integer, got {value}"))
            }
            Self::String(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("expected a non-negative integer, got \"{value}\"")),
            Self::Boolean(value) => Err(format!("expected a non-negative integer, got {value}")),
            Self::Other(value) => Err(format!("expected a non-negative integer, got {value}")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "\"{value}\""),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Named parameters for one rule.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct RuleParams(BTreeMap<String, ParamValue>);

impl RuleParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A rule ready to be applied, with its resolved severity.
pub struct ConfiguredRule {
    pub lint: Box<dyn LintRule>,
    pub severity: Severity,
}

impl ConfiguredRule {
    pub fn new(lint: Box<dyn LintRule>) -> Self {
        let severity = lint.default_severity();
        Self { lint, severity }
    }

    pub fn name(&self) -> &str {
        self.lint.name()
    }
}

impl fmt::Debug for ConfiguredRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredRule")
            .field("name", &self.name())
            .field("severity", &self.severity)
            .finish()
    }
}

#[derive(Debug)]
pub struct Config {
    /// Rules to apply, in the order they are applied.
    pub rules: Vec<ConfiguredRule>,
    /// Rules whose parameters couldn't be applied. Those rules run with their
    /// default parameters.
    pub rule_errors: Vec<RuleConfigError>,
}

impl Default for Config {
    /// All built-in rules with their default parameters and severities.
    fn default() -> Self {
        Self::from_rules(ALL_RULES.iter().map(|rule| rule.build()).collect())
    }
}

impl Config {
    /// Use an explicit, ordered list of rules, e.g. rules registered by the
    /// embedding application.
    pub fn from_rules(rules: Vec<Box<dyn LintRule>>) -> Self {
        Self {
            rules: rules.into_iter().map(ConfiguredRule::new).collect(),
            rule_errors: Vec::new(),
        }
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(ConfiguredRule::name).collect()
    }
}

pub fn build_config(settings: Option<&Settings>) -> Result<Config> {
    let Some(settings) = settings else {
        return Ok(Config::default());
    };
    let linter_settings = &settings.linter;

    let rules = parse_rules_toml(linter_settings.select.as_deref(), linter_settings.ignore.as_deref())?;

    check_rule_names(
        linter_settings.severity.keys(),
        "Unknown rules in table `[lint.severity]` in 'rflint.toml'",
    )?;
    check_rule_names(
        linter_settings.rules.keys(),
        "Unknown rules in table `[lint.rules]` in 'rflint.toml'",
    )?;

    if let Some((name, _)) = linter_settings
        .severity
        .iter()
        .find(|(_, severity)| **severity == Severity::Internal)
    {
        return Err(anyhow::anyhow!(
            "Invalid severity for rule `{name}` in 'rflint.toml': `internal` is reserved for engine faults"
        ));
    }

    let mut rule_errors = Vec::new();
    let mut configured = Vec::new();

    for rule in rules.iter().copied() {
        let mut lint = rule.build();

        if let Some(params) = linter_settings.rules.get(rule.name())
            && let Err(err) = lint.configure(params)
        {
            tracing::warn!("{err}. Using the default parameters of `{}`.", rule.name());
            rule_errors.push(err);
            lint = rule.build();
        }

        let mut configured_rule = ConfiguredRule::new(lint);
        if let Some(severity) = linter_settings.severity.get(rule.name()) {
            configured_rule.severity = *severity;
        }
        configured.push(configured_rule);
    }

    Ok(Config { rules: configured, rule_errors })
}

/// Resolve `select` and `ignore` into the list of rules to apply.
///
/// `None` for `select` means all rules. `ignore` has higher priority than
/// `select`. Rules keep their registration order.
pub fn parse_rules_toml(select: Option<&[String]>, ignore: Option<&[String]>) -> Result<RuleSet> {
    let selected: HashSet<Rule> = match select {
        Some(select) => {
            check_rule_names(select.iter(), "Unknown rules in field `select` in 'rflint.toml'")?;
            select.iter().filter_map(|name| Rule::from_name(name.trim())).collect()
        }
        None => ALL_RULES.iter().copied().collect(),
    };

    let ignored: HashSet<Rule> = match ignore {
        Some(ignore) => {
            check_rule_names(ignore.iter(), "Unknown rules in field `ignore` in 'rflint.toml'")?;
            ignore.iter().filter_map(|name| Rule::from_name(name.trim())).collect()
        }
        None => HashSet::new(),
    };

    Ok(RuleSet::all().filter(|rule| selected.contains(rule) && !ignored.contains(rule)))
}

// This finds invalid rule names and throws an error with their names in the
// message.
fn check_rule_names<'a, I>(names: I, context: &str) -> Result<()>
where
    I: Iterator<Item = &'a String>,
{
    let invalid_rules: Vec<String> = names
        .filter(|name| Rule::from_name(name.trim()).is_none())
        .map(|name| {
            if name.trim().is_empty() {
                format!("\"{name}\" (empty or whitespace-only not allowed)")
            } else {
                name.clone()
            }
        })
        .collect();

    if invalid_rules.is_empty() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("{context}: {}", invalid_rules.join(", ")))
    }
}

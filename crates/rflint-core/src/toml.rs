//
// Adapted from Ark
// https://github.com/posit-dev/air/blob/affa92cd514525c4bab6c8c2ca251ea19414b89f/crates/workspace/src/toml.rs
// and
// https://github.com/posit-dev/air/blob/affa92cd514525c4bab6c8c2ca251ea19414b89f/crates/workspace/src/toml_options.rs
//
// MIT License - Posit PBC

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::config::RuleParams;
use crate::diagnostic::Severity;
use crate::settings::LinterSettings;
use crate::settings::Settings;

#[derive(Debug)]
pub enum ParseTomlError {
    Read(PathBuf, io::Error),
    Deserialize(PathBuf, toml::de::Error),
}

impl std::error::Error for ParseTomlError {}

impl Display for ParseTomlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            // It's nicer if we don't make these paths relative, so we can quickly
            // jump to the TOML file to see what is wrong
            Self::Read(path, err) => {
                write!(f, "Failed to read {path}:\n{err}", path = path.display())
            }
            Self::Deserialize(path, err) => {
                write!(f, "Failed to parse {path}:\n{err}", path = path.display())
            }
        }
    }
}

pub fn parse_rflint_toml(path: &Path) -> Result<TomlOptions, ParseTomlError> {
    let toml = fs::read_to_string(path).map_err(|err| ParseTomlError::Read(path.to_path_buf(), err))?;
    toml::from_str(&toml).map_err(|err| ParseTomlError::Deserialize(path.to_path_buf(), err))
}

#[derive(Clone, Debug, PartialEq, Default, serde::Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TomlOptions {
    pub lint: Option<LinterTomlOptions>,
}

#[derive(Clone, Debug, PartialEq, Default, serde::Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LinterTomlOptions {
    /// # Rules to select
    ///
    /// If this is empty, then all rules that are provided by `rflint` are
    /// used.
    pub select: Option<Vec<String>>,

    /// # Rules to ignore
    ///
    /// If this is empty, then no rules are excluded. This field has higher
    /// importance than `select`, so if a rule name appears by mistake in both
    /// `select` and `ignore`, it is ignored.
    pub ignore: Option<Vec<String>>,

    /// # Severity overrides
    ///
    /// Maps a rule name to `"error"` or `"warning"`, e.g.
    ///
    /// ```toml
    /// [lint.severity]
    /// period_in_suite_name = "error"
    /// ```
    pub severity: Option<BTreeMap<String, Severity>>,

    /// # Rule parameters
    ///
    /// One table per rule. Parameters that a rule doesn't know about are
    /// reported and the rule falls back to its defaults:
    ///
    /// ```toml
    /// [lint.rules.too_many_test_cases]
    /// max_allowed = 20
    /// ```
    pub rules: Option<BTreeMap<String, RuleParams>>,
}

/// Return the path to the `rflint.toml` or `.rflint.toml` file in a given directory.
pub fn find_rflint_toml_in_directory<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    // Check for `rflint.toml` first, as we prioritize the "visible" one.
    let toml = path.as_ref().join("rflint.toml");
    if toml.is_file() {
        return Some(toml);
    }

    // Now check for `.rflint.toml` as well
    let toml = path.as_ref().join(".rflint.toml");
    if toml.is_file() {
        return Some(toml);
    }

    // Didn't find a configuration file
    None
}

/// Find the path to the closest `rflint.toml` or `.rflint.toml` if one exists, walking up the filesystem
pub fn find_rflint_toml<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    for directory in path.as_ref().ancestors() {
        if let Some(toml) = find_rflint_toml_in_directory(directory) {
            return Some(toml);
        }
    }
    None
}

/// Find, parse and resolve the closest configuration file. Returns `None`
/// when there is no configuration file.
pub fn discover_settings<P: AsRef<Path>>(path: P) -> anyhow::Result<Option<(PathBuf, Settings)>> {
    let Some(toml_path) = find_rflint_toml(&path) else {
        tracing::debug!("No rflint.toml found above {}", path.as_ref().display());
        return Ok(None);
    };

    tracing::debug!("Using configuration file {}", toml_path.display());
    let settings = parse_rflint_toml(&toml_path)?.into_settings();
    Ok(Some((toml_path, settings)))
}

impl TomlOptions {
    pub fn into_settings(self) -> Settings {
        let linter = self.lint.unwrap_or_default();

        let linter = LinterSettings {
            select: linter.select,
            ignore: linter.ignore,
            severity: linter.severity.unwrap_or_default(),
            rules: linter.rules.unwrap_or_default(),
        };

        Settings { linter }
    }
}

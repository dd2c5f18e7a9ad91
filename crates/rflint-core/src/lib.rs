//! Core functionality for the rflint test-suite linter
//!
//! This crate provides the rule engine that runs on parsed suites:
//! - The document model the rules read from
//! - The rules and the registry declaring them
//! - Diagnostic generation and reporting
//! - Configuration management

pub mod check;
pub mod checker;
pub mod config;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod lints;
pub mod rule_set;
pub mod settings;
pub mod toml;
pub mod utils;


pub use check::{DocumentReport, check, check_document};
pub use config::{Config, build_config};
pub use diagnostic::{Diagnostic, EngineFault, Severity};
pub use document::Document;
pub use lints::LintRule;

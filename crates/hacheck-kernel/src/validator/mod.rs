//! Structural validation of package documents.
//!
//! The validator runs after loading and only looks at the top level plus the
//! `automation:` and `script:` sections:
//!
//! - **automation**: a sequence of mappings, each with a trigger and an action
//! - **script**: a mapping of script ids to mappings with a `sequence`
//! - **other keys**: warn when the key is not a known package domain
//!
//! A top-level sequence is a flat automation list (`automations.yaml`).
//! Issues are appended to the caller's list; nothing is returned.
//!
//! # Example
//!
//! ```
//! use hacheck_kernel::config::CheckerConfig;
//! use hacheck_kernel::loader::parse_document;
//! use hacheck_kernel::validator::validate_document;
//!
//! let doc = parse_document("script:\n  bedtime:\n    alias: Bedtime\n").unwrap();
//! let mut issues = Vec::new();
//! validate_document(&doc, "bedtime.yaml", &CheckerConfig::default(), &mut issues);
//! assert_eq!(issues.len(), 1);
//! ```

mod automation;
mod script;

use std::path::Path;

use hacheck_types::{DocumentValue, IssueCode, ValidationIssue};

use crate::config::CheckerConfig;

pub use automation::validate_automation_list;
pub use script::validate_scripts;

/// Validate the top-level shape of one parsed document.
pub fn validate_document(
    doc: &DocumentValue,
    file: &str,
    config: &CheckerConfig,
    issues: &mut Vec<ValidationIssue>,
) {
    match doc {
        DocumentValue::Scalar(scalar) => {
            tracing::debug!(file, kind = scalar.kind_name(), "top-level scalar, nothing to validate");
        }
        DocumentValue::Sequence(items) => {
            if items.is_empty() && is_flat_automation_file(file, config) {
                return;
            }
            validate_automation_list(items, file, issues);
        }
        DocumentValue::Mapping(entries) => {
            for (key, value) in entries {
                match key.as_str() {
                    "automation" => match value {
                        DocumentValue::Sequence(items) => {
                            validate_automation_list(items, file, issues)
                        }
                        v if v.is_null() => {}
                        other => issues.push(ValidationIssue::new(
                            IssueCode::WrongType,
                            file,
                            format!("'automation:' must be a sequence, found {}", other.kind_name()),
                        )),
                    },
                    "script" => match value {
                        DocumentValue::Mapping(scripts) => validate_scripts(scripts, file, issues),
                        v if v.is_null() => {}
                        other => issues.push(ValidationIssue::new(
                            IssueCode::WrongType,
                            file,
                            format!("'script:' must be a mapping, found {}", other.kind_name()),
                        )),
                    },
                    other if config.warn_unknown_domains && !config.is_known_package_key(other) => {
                        issues.push(ValidationIssue::new(
                            IssueCode::UnknownDomain,
                            file,
                            format!("unknown domain '{other}' -- typo?"),
                        ));
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Whether `file` names the flat automation list, compared by file name only.
fn is_flat_automation_file(file: &str, config: &CheckerConfig) -> bool {
    Path::new(file)
        .file_name()
        .is_some_and(|name| name == config.flat_automation_file.as_str())
}

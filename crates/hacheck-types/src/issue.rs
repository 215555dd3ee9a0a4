//! Validation issues collected during a run.

use std::fmt;

use serde::Serialize;

/// File label used for issues that span the whole file set.
pub const GLOBAL_SCOPE: &str = "GLOBAL";

/// How serious an issue is.
///
/// Only `Error` affects the outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Machine-readable issue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// The file could not be read at all.
    Unreadable,
    /// The bytes are not valid UTF-8.
    EncodingError,
    /// Malformed YAML or an unsupported tag.
    ParseError,
    /// A section has the wrong shape (e.g. `automation:` is a mapping).
    WrongType,
    /// A list element or script body is not a mapping.
    NotAMapping,
    MissingTrigger,
    MissingAction,
    MissingSequence,
    /// Top-level key that is not a known package domain.
    UnknownDomain,
    /// The same automation id appears more than once across the file set.
    DuplicateAutomationId,
}

impl IssueCode {
    /// Default severity for this code.
    pub fn severity(self) -> Severity {
        match self {
            IssueCode::UnknownDomain => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IssueCode::Unreadable => "unreadable",
            IssueCode::EncodingError => "encoding_error",
            IssueCode::ParseError => "parse_error",
            IssueCode::WrongType => "wrong_type",
            IssueCode::NotAMapping => "not_a_mapping",
            IssueCode::MissingTrigger => "missing_trigger",
            IssueCode::MissingAction => "missing_action",
            IssueCode::MissingSequence => "missing_sequence",
            IssueCode::UnknownDomain => "unknown_domain",
            IssueCode::DuplicateAutomationId => "duplicate_automation_id",
        }
    }
}

/// A single problem found in a document (or across documents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: IssueCode,
    /// Display name of the file, or [`GLOBAL_SCOPE`].
    pub file: String,
    pub message: String,
}

impl ValidationIssue {
    /// Create an issue with the code's default severity.
    pub fn new(code: IssueCode, file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };
        write!(f, "{label:<7} {}: {}", self.file, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_domain_is_the_only_warning_code() {
        assert_eq!(IssueCode::UnknownDomain.severity(), Severity::Warning);
        assert_eq!(IssueCode::ParseError.severity(), Severity::Error);
        assert_eq!(IssueCode::DuplicateAutomationId.severity(), Severity::Error);
    }

    #[test]
    fn display_pads_label() {
        let issue = ValidationIssue::new(IssueCode::MissingAction, "lights.yaml", "boom");
        assert_eq!(issue.to_string(), "ERROR   lights.yaml: boom");
        let warn = ValidationIssue::new(IssueCode::UnknownDomain, "x.yaml", "typo?");
        assert_eq!(warn.to_string(), "WARNING x.yaml: typo?");
    }

    #[test]
    fn serializes_codes_in_snake_case() {
        let issue = ValidationIssue::new(IssueCode::MissingTrigger, "a.yaml", "m");
        let json = serde_json::to_value(&issue).expect("serialize");
        assert_eq!(json["code"], "missing_trigger");
        assert_eq!(json["severity"], "error");
    }
}

//! Per-document analysis.
//!
//! [`analyze_document`] is a pure function of one document's bytes and the
//! config, so documents can be analyzed in any order (or concurrently) and
//! merged afterwards with [`Report::from_analyses`](crate::report::Report::from_analyses).

use std::collections::BTreeSet;

use hacheck_types::{
    AutomationRecord, EntityReference, IssueCode, NamingWarning, ValidationIssue,
};

use crate::config::CheckerConfig;
use crate::extract::{collect_entities, extract_automations};
use crate::loader::load_document;
use crate::naming::check_naming;
use crate::validator::validate_document;

/// One input document: its display name and raw contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Everything found in a single document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentAnalysis {
    pub name: String,
    /// False when the document could not be read or loaded; such documents
    /// carry exactly one error and nothing else.
    pub loaded: bool,
    pub issues: Vec<ValidationIssue>,
    pub entities: BTreeSet<EntityReference>,
    pub automations: Vec<AutomationRecord>,
    pub naming_warnings: Vec<NamingWarning>,
}

impl DocumentAnalysis {
    fn failed(name: &str, code: IssueCode, message: String) -> Self {
        Self {
            name: name.to_string(),
            loaded: false,
            issues: vec![ValidationIssue::new(code, name, message)],
            ..Default::default()
        }
    }

    /// A document the caller could not read from disk.
    pub fn unreadable(name: &str, error: &std::io::Error) -> Self {
        let message = match error.kind() {
            std::io::ErrorKind::NotFound => "file not found".to_string(),
            _ => format!("could not read file: {error}"),
        };
        Self::failed(name, IssueCode::Unreadable, message)
    }
}

/// Load, validate and extract one document.
///
/// A document that fails to load is excluded from every later pass; its
/// only trace is the load error.
pub fn analyze_document(source: &SourceDocument, config: &CheckerConfig) -> DocumentAnalysis {
    let name = source.name.as_str();
    let doc = match load_document(&source.bytes) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::warn!(file = name, error = %err, "document failed to load");
            return DocumentAnalysis::failed(name, err.issue_code(), err.to_string());
        }
    };

    let mut analysis = DocumentAnalysis {
        name: name.to_string(),
        loaded: true,
        ..Default::default()
    };

    validate_document(&doc, name, config, &mut analysis.issues);
    collect_entities(&doc, &mut analysis.entities);
    analysis.automations = extract_automations(&doc, name);

    if config.naming_checks {
        analysis.naming_warnings = analysis
            .entities
            .iter()
            .flat_map(|e| check_naming(&e.entity_id))
            .collect();
    }

    tracing::debug!(
        file = name,
        issues = analysis.issues.len(),
        entities = analysis.entities.len(),
        automations = analysis.automations.len(),
        "document analyzed"
    );
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(name: &str, yaml: &str) -> DocumentAnalysis {
        analyze_document(&SourceDocument::new(name, yaml), &CheckerConfig::default())
    }

    #[test]
    fn full_pipeline_on_one_package() {
        let analysis = analyze(
            "kueche.yaml",
            r#"
automation:
  - id: kitchen_light
    alias: Kitchen light
    trigger:
      - platform: state
        entity_id: binary_sensor.kuechen_bewegung
    action:
      - action: light.turn_on
        entity_id: light.kueche
"#,
        );
        assert!(analysis.loaded);
        assert!(analysis.issues.is_empty());
        let ids: Vec<_> = analysis.entities.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, ["binary_sensor.kuechen_bewegung", "light.kueche"]);
        assert_eq!(analysis.automations.len(), 1);
        assert_eq!(analysis.naming_warnings.len(), 2);
    }

    #[test]
    fn load_failure_excludes_the_document() {
        let analysis = analyze("broken.yaml", "automation: [\n");
        assert!(!analysis.loaded);
        assert_eq!(analysis.issues.len(), 1);
        assert_eq!(analysis.issues[0].code, IssueCode::ParseError);
        assert!(analysis.entities.is_empty());
        assert!(analysis.automations.is_empty());
    }

    #[test]
    fn encoding_failure_is_its_own_code() {
        let source = SourceDocument::new("latin1.yaml", b"alias: K\xfcche\n".to_vec());
        let analysis = analyze_document(&source, &CheckerConfig::default());
        assert_eq!(analysis.issues[0].code, IssueCode::EncodingError);
    }

    #[test]
    fn naming_checks_can_be_disabled() {
        let source = SourceDocument::new("x.yaml", "sensor:\n  - entity_id: sensor.tuer\n");
        let config = CheckerConfig::default().with_naming_checks(false);
        let analysis = analyze_document(&source, &config);
        assert_eq!(analysis.entities.len(), 1);
        assert!(analysis.naming_warnings.is_empty());
    }

    #[test]
    fn unreadable_files() {
        let missing = std::io::Error::from(std::io::ErrorKind::NotFound);
        let analysis = DocumentAnalysis::unreadable("gone.yaml", &missing);
        assert!(!analysis.loaded);
        assert_eq!(analysis.issues[0].code, IssueCode::Unreadable);
        assert_eq!(analysis.issues[0].message, "file not found");
    }
}

//! Automation id collection.

use hacheck_types::{AutomationRecord, DocumentValue, NO_ALIAS};

/// The automation list of a document: `automation:` in a package, or the
/// whole document for a flat list.
fn automation_list(doc: &DocumentValue) -> Option<&[DocumentValue]> {
    match doc {
        DocumentValue::Mapping(_) => doc.get("automation")?.as_sequence(),
        DocumentValue::Sequence(items) => Some(items),
        DocumentValue::Scalar(_) => None,
    }
}

/// Collect `(id, alias)` for every automation that declares an id.
///
/// Entries without an id (missing, null, or empty) are skipped; they cannot
/// collide.
pub fn extract_automations(doc: &DocumentValue, source_file: &str) -> Vec<AutomationRecord> {
    let Some(automations) = automation_list(doc) else {
        return Vec::new();
    };

    automations
        .iter()
        .filter(|auto| auto.as_mapping().is_some())
        .filter_map(|auto| {
            let id = auto.get("id")?.scalar_text()?;
            let alias = auto
                .get("alias")
                .and_then(DocumentValue::scalar_text)
                .unwrap_or_else(|| NO_ALIAS.to_string());
            Some(AutomationRecord {
                id,
                alias,
                source_file: source_file.to_string(),
            })
        })
        .collect()
}

//! Automation list rules.

use hacheck_types::{DocumentValue, IssueCode, ValidationIssue};

/// Singular (pre-2024.8) and plural key spellings are equivalent.
const TRIGGER_KEYS: [&str; 2] = ["trigger", "triggers"];
const ACTION_KEYS: [&str; 2] = ["action", "actions"];

/// Check every automation in a list for the required trigger and action keys.
pub fn validate_automation_list(
    automations: &[DocumentValue],
    file: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    for (i, auto) in automations.iter().enumerate() {
        let position = i + 1;
        if auto.as_mapping().is_none() {
            issues.push(ValidationIssue::new(
                IssueCode::NotAMapping,
                file,
                format!("automation #{position} is not a mapping"),
            ));
            continue;
        }

        let alias = auto
            .get("alias")
            .and_then(DocumentValue::scalar_text)
            .unwrap_or_else(|| format!("#{position} (no alias)"));

        if !TRIGGER_KEYS.iter().any(|k| auto.contains_key(k)) {
            issues.push(ValidationIssue::new(
                IssueCode::MissingTrigger,
                file,
                format!("automation '{alias}': 'trigger:' or 'triggers:' is missing"),
            ));
        }
        if !ACTION_KEYS.iter().any(|k| auto.contains_key(k)) {
            issues.push(ValidationIssue::new(
                IssueCode::MissingAction,
                file,
                format!("automation '{alias}': 'action:' or 'actions:' is missing"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_document;
    use rstest::rstest;

    fn check(yaml: &str) -> Vec<ValidationIssue> {
        let doc = parse_document(yaml).expect("test yaml should parse");
        let items = doc.as_sequence().expect("test yaml is a list").to_vec();
        let mut issues = Vec::new();
        validate_automation_list(&items, "autos.yaml", &mut issues);
        issues
    }

    #[rstest]
    #[case::singular("- trigger: []\n  action: []\n")]
    #[case::plural("- triggers: []\n  actions: []\n")]
    #[case::mixed("- trigger: []\n  actions: []\n")]
    fn trigger_and_action_spellings(#[case] yaml: &str) {
        assert!(check(yaml).is_empty());
    }

    #[test]
    fn plural_triggers_alone_satisfies_trigger_rule() {
        let issues = check("- alias: Porch\n  triggers: []\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::MissingAction);
    }

    #[test]
    fn missing_trigger_names_the_alias() {
        let issues = check("- alias: Morning blinds\n  action: []\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::MissingTrigger);
        assert!(issues[0].message.contains("'Morning blinds'"));
    }

    #[test]
    fn missing_alias_falls_back_to_position() {
        let issues = check("- trigger: []\n  action: []\n- id: second\n");
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.message.contains("'#2 (no alias)'")));
    }

    #[test]
    fn non_mapping_entries_are_reported_by_position() {
        let issues = check("- trigger: []\n  action: []\n- just a string\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::NotAMapping);
        assert_eq!(issues[0].message, "automation #2 is not a mapping");
    }
}

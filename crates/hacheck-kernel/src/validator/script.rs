//! Script section rules.

use hacheck_types::{DocumentValue, IssueCode, ValidationIssue};

/// Every script must be a mapping with a `sequence:` key.
pub fn validate_scripts(
    scripts: &[(String, DocumentValue)],
    file: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    for (script_id, body) in scripts {
        if body.as_mapping().is_none() {
            issues.push(ValidationIssue::new(
                IssueCode::NotAMapping,
                file,
                format!("script '{script_id}' is not a mapping"),
            ));
            continue;
        }
        if !body.contains_key("sequence") {
            issues.push(ValidationIssue::new(
                IssueCode::MissingSequence,
                file,
                format!("script '{script_id}': 'sequence:' is missing"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_document;

    fn check(yaml: &str) -> Vec<ValidationIssue> {
        let doc = parse_document(yaml).expect("test yaml should parse");
        let scripts = doc.as_mapping().expect("test yaml is a mapping").to_vec();
        let mut issues = Vec::new();
        validate_scripts(&scripts, "scripts.yaml", &mut issues);
        issues
    }

    #[test]
    fn script_with_sequence_passes() {
        assert!(check("goodnight:\n  sequence: []\n").is_empty());
    }

    #[test]
    fn missing_sequence_names_the_script() {
        let issues = check("goodnight:\n  alias: Good night\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::MissingSequence);
        assert_eq!(issues[0].message, "script 'goodnight': 'sequence:' is missing");
    }

    #[test]
    fn non_mapping_script_body() {
        let issues = check("goodnight: turn everything off\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::NotAMapping);
    }
}

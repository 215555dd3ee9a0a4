//! Entity references, automation records and the findings derived from them.

use std::fmt;

use serde::Serialize;

/// A `domain.object_id` reference found in a document.
///
/// Ordering is by `entity_id`, so sets of references iterate alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntityReference {
    pub entity_id: String,
    pub domain: String,
}

impl EntityReference {
    /// Split an identifier at its first `.`.
    ///
    /// Returns `None` when there is no dot or either side is empty. No
    /// allow-list checks happen here.
    pub fn split(entity_id: &str) -> Option<Self> {
        let (domain, object_id) = entity_id.split_once('.')?;
        if domain.is_empty() || object_id.is_empty() {
            return None;
        }
        Some(Self {
            entity_id: entity_id.to_string(),
            domain: domain.to_string(),
        })
    }

    /// Everything after the domain and its dot.
    pub fn object_id(&self) -> &str {
        &self.entity_id[self.domain.len() + 1..]
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entity_id)
    }
}

/// Alias shown for automations that do not declare one.
pub const NO_ALIAS: &str = "(no alias)";

/// An automation id as declared in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomationRecord {
    pub id: String,
    pub alias: String,
    pub source_file: String,
}

/// Where a duplicated automation id was declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateLocation {
    pub source_file: String,
    pub alias: String,
}

/// An automation id declared more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub id: String,
    /// Every declaration, in first-seen order.
    pub locations: Vec<DuplicateLocation>,
}

impl DuplicateGroup {
    /// Comma-separated list of the files involved.
    pub fn files(&self) -> String {
        self.locations
            .iter()
            .map(|l| l.source_file.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A suspected transliteration mistake in an entity id (e.g. `kuech` for `küch`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingWarning {
    pub entity_id: String,
    /// Rule label such as `ue->u`.
    pub rule: String,
    /// The digraph that matched.
    pub found: String,
    /// What the digraph probably should have been.
    pub suggested: String,
    /// A few characters around the first match.
    pub context: String,
}

impl fmt::Display for NamingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "possible umlaut mistake ({}): '{}' contains '{}' (context: ...{}...) -- should it be '{}'?",
            self.rule, self.entity_id, self.found, self.context, self.suggested
        )
    }
}

/// A naming warning together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNamingWarning {
    pub file: String,
    #[serde(flatten)]
    pub warning: NamingWarning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_uses_first_dot() {
        let r = EntityReference::split("sensor.outdoor.temp").expect("has dot");
        assert_eq!(r.domain, "sensor");
        assert_eq!(r.object_id(), "outdoor.temp");
    }

    #[test]
    fn split_rejects_degenerate_ids() {
        assert!(EntityReference::split("sensor").is_none());
        assert!(EntityReference::split(".x").is_none());
        assert!(EntityReference::split("sensor.").is_none());
    }

    #[test]
    fn references_sort_by_entity_id() {
        let mut refs = vec![
            EntityReference::split("sensor.b").expect("valid"),
            EntityReference::split("light.z").expect("valid"),
            EntityReference::split("sensor.a").expect("valid"),
        ];
        refs.sort();
        let ids: Vec<_> = refs.iter().map(|r| r.entity_id.as_str()).collect();
        assert_eq!(ids, ["light.z", "sensor.a", "sensor.b"]);
    }

    #[test]
    fn duplicate_group_lists_files() {
        let group = DuplicateGroup {
            id: "morning".into(),
            locations: vec![
                DuplicateLocation { source_file: "a.yaml".into(), alias: "A".into() },
                DuplicateLocation { source_file: "b.yaml".into(), alias: "B".into() },
            ],
        };
        assert_eq!(group.files(), "a.yaml, b.yaml");
    }
}

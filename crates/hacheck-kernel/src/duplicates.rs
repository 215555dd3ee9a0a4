//! Cross-file duplicate automation ids.

use std::collections::HashMap;

use hacheck_types::{AutomationRecord, DuplicateGroup, DuplicateLocation};

/// Group automation records by id and keep the ids declared more than once.
///
/// Groups come out in the order their id was first seen; locations keep
/// input order. Callers sort files upstream, so the result is stable.
pub fn find_duplicates(records: &[AutomationRecord]) -> Vec<DuplicateGroup> {
    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.id.as_str()).or_insert_with(|| {
            groups.push(DuplicateGroup {
                id: record.id.clone(),
                locations: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].locations.push(DuplicateLocation {
            source_file: record.source_file.clone(),
            alias: record.alias.clone(),
        });
    }

    groups.retain(|g| g.locations.len() > 1);
    groups
}

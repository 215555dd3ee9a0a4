//! Entity reference extraction.
//!
//! `domain.object_id` is ambiguous: `light.kitchen` is an entity but
//! `light.turn_on` is a service. Candidates pass two filters: the domain must
//! be in [`ENTITY_DOMAINS`](crate::domains::ENTITY_DOMAINS) and the object id
//! must not be in [`SERVICE_ACTIONS`](crate::domains::SERVICE_ACTIONS).

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use hacheck_types::{DocumentValue, EntityReference, Scalar};

use crate::domains;

/// Mapping key whose scalar value is a service name, never an entity.
pub const ACTION_KEY: &str = "action";

#[allow(clippy::expect_used)]
static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([a-z0-9_]+\.[a-z0-9][a-z0-9_]*)\b").expect("entity pattern is valid")
});

/// `states('x')`, `is_state("x", ...)`, `state_attr('x', ...)`.
#[allow(clippy::expect_used)]
static TEMPLATE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:states|is_state|state_attr)\s*\(\s*['"]([^'"]+)['"]"#)
        .expect("template call pattern is valid")
});

/// Apply the domain and service filters to a candidate identifier.
pub fn entity_reference(candidate: &str) -> Option<EntityReference> {
    let reference = EntityReference::split(candidate)?;
    let keep = domains::is_entity_domain(&reference.domain)
        && !domains::is_service_action(reference.object_id());
    keep.then_some(reference)
}

/// Every entity referenced anywhere in `doc`.
pub fn extract_entities(doc: &DocumentValue) -> BTreeSet<EntityReference> {
    let mut found = BTreeSet::new();
    collect_entities(doc, &mut found);
    found
}

/// Accumulate the entities referenced in `doc` into `found`.
///
/// Walks with an explicit stack, so nesting depth is not limited by the
/// call stack.
pub fn collect_entities(doc: &DocumentValue, found: &mut BTreeSet<EntityReference>) {
    let mut pending = vec![doc];
    while let Some(value) = pending.pop() {
        match value {
            DocumentValue::Scalar(Scalar::Text(text)) => {
                scan_identifiers(text, found);
                scan_template_calls(text, found);
            }
            // `!secret sensor.x` is an indirection, not a reference; only
            // template calls count.
            DocumentValue::Scalar(Scalar::Placeholder { text, .. }) => {
                scan_template_calls(text, found);
            }
            DocumentValue::Scalar(_) => {}
            DocumentValue::Sequence(items) => pending.extend(items),
            DocumentValue::Mapping(entries) => {
                for (key, value) in entries {
                    if key == ACTION_KEY && value.as_scalar().is_some() {
                        continue;
                    }
                    pending.push(value);
                }
            }
        }
    }
}

fn scan_identifiers(text: &str, found: &mut BTreeSet<EntityReference>) {
    if !text.contains('.') {
        return;
    }
    found.extend(
        ENTITY_PATTERN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| entity_reference(m.as_str())),
    );
}

fn scan_template_calls(text: &str, found: &mut BTreeSet<EntityReference>) {
    found.extend(
        TEMPLATE_CALL
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| entity_reference(m.as_str())),
    );
}

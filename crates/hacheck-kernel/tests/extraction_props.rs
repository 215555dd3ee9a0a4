//! Property tests for entity extraction filters.

use proptest::prelude::*;

use hacheck_kernel::domains::{ENTITY_DOMAINS, SERVICE_ACTIONS, is_entity_domain, is_service_action};
use hacheck_kernel::extract::extract_entities;
use hacheck_types::DocumentValue;

fn extracted(text: String) -> Vec<String> {
    extract_entities(&DocumentValue::text(text))
        .into_iter()
        .map(|r| r.entity_id)
        .collect()
}

proptest! {
    #[test]
    fn unknown_domains_are_never_extracted(
        domain in "[a-z_]{1,14}",
        object_id in "[a-z][a-z0-9_]{0,14}",
    ) {
        prop_assume!(!is_entity_domain(&domain));
        let bare = format!("{domain}.{object_id}");
        let templated = format!("{{{{ states('{domain}.{object_id}') }}}}");
        prop_assert!(extracted(bare).is_empty());
        prop_assert!(extracted(templated).is_empty());
    }

    #[test]
    fn service_actions_are_never_extracted(
        domain in prop::sample::select(ENTITY_DOMAINS.to_vec()),
        action in prop::sample::select(SERVICE_ACTIONS.to_vec()),
    ) {
        let bare = format!("{domain}.{action}");
        let templated = format!("{{{{ is_state(\"{domain}.{action}\", 'on') }}}}");
        prop_assert!(extracted(bare).is_empty());
        prop_assert!(extracted(templated).is_empty());
    }

    #[test]
    fn valid_references_are_extracted(
        domain in prop::sample::select(ENTITY_DOMAINS.to_vec()),
        object_id in "[a-z][a-z0-9_]{0,14}",
        prefix in "[ ,:(]{0,3}",
    ) {
        prop_assume!(!is_service_action(&object_id));
        let entity_id = format!("{domain}.{object_id}");
        prop_assert_eq!(extracted(format!("{prefix}{entity_id}")), vec![entity_id]);
    }
}

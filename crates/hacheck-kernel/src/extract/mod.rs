//! Extraction passes over a loaded document.
//!
//! - [`extract_entities`]: every entity id a document references
//! - [`extract_automations`]: every automation id it declares

mod automations;
mod entities;

pub use automations::extract_automations;
pub use entities::{ACTION_KEY, collect_entities, entity_reference, extract_entities};

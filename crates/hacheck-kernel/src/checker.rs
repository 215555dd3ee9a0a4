//! The Checker: runs every pass over a set of documents.
//!
//! ```text
//!  SourceDocument ──► loader ──► DocumentValue ─┬─► validator ──► issues
//!                                               ├─► extract ────► entities ──► naming
//!                                               └─► extract ────► automation ids
//!                                                                      │
//!  all documents ──────────────────────────────────────────► duplicates (global)
//! ```

use hacheck_types::{DocumentValue, EntityReference};

use crate::analysis::{DocumentAnalysis, SourceDocument, analyze_document};
use crate::config::CheckerConfig;
use crate::extract::extract_entities;
use crate::loader::{LoadError, parse_document};
use crate::report::Report;

/// Runs checks with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Checker {
    config: CheckerConfig,
}

impl Checker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Analyze one document in isolation.
    pub fn analyze(&self, source: &SourceDocument) -> DocumentAnalysis {
        analyze_document(source, &self.config)
    }

    /// Analyze every document, one after another, and reduce to a report.
    pub fn check<I>(&self, sources: I) -> Report
    where
        I: IntoIterator<Item = SourceDocument>,
    {
        let analyses: Vec<_> = sources.into_iter().map(|s| self.analyze(&s)).collect();
        tracing::debug!(files = analyses.len(), "check complete");
        Report::from_analyses(analyses)
    }

    /// Parse text and list the entities it references. Handy for one-off checks.
    pub fn entities_in(&self, text: &str) -> Result<Vec<EntityReference>, LoadError> {
        let doc: DocumentValue = parse_document(text)?;
        Ok(extract_entities(&doc).into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_is_order_independent() {
        let checker = Checker::default();
        let a = SourceDocument::new("a.yaml", "automation:\n  - id: x\n    trigger: []\n");
        let b = SourceDocument::new("b.yaml", "automation:\n  - id: x\n    action: []\n");
        let forward = checker.check([a.clone(), b.clone()]);
        let backward = checker.check([b, a]);
        assert_eq!(forward, backward);
        assert_eq!(forward.errors().count(), 3);
    }

    #[test]
    fn entities_in_text() {
        let checker = Checker::default();
        let found = checker
            .entities_in("condition: \"{{ is_state('person.alex', 'home') }}\"\n")
            .expect("parses");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].entity_id, "person.alex");
        assert!(checker.entities_in("a: [").is_err());
    }
}

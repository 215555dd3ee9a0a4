//! Run-level report: the reduction over every document's analysis.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use hacheck_types::{
    AutomationRecord, DuplicateGroup, FileNamingWarning, GLOBAL_SCOPE, IssueCode,
    ValidationIssue,
};

use crate::analysis::DocumentAnalysis;
use crate::duplicates::find_duplicates;

/// The result of checking a set of documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub files_checked: usize,
    /// Per-file issues in file order, then global ones.
    pub issues: Vec<ValidationIssue>,
    /// Every referenced entity id, grouped by domain.
    pub entities_by_domain: BTreeMap<String, BTreeSet<String>>,
    /// Entity ids referenced by each successfully loaded file.
    pub entities_by_file: BTreeMap<String, BTreeSet<String>>,
    /// Every automation that declares an id, in file order.
    pub automations: Vec<AutomationRecord>,
    pub duplicates: Vec<DuplicateGroup>,
    pub naming_warnings: Vec<FileNamingWarning>,
}

impl Report {
    /// Merge per-document analyses into one report.
    ///
    /// Analyses are sorted by file name first (stable for equal names), so
    /// the result does not depend on the order they finished in.
    pub fn from_analyses(mut analyses: Vec<DocumentAnalysis>) -> Self {
        analyses.sort_by(|a, b| a.name.cmp(&b.name));

        let mut report = Report {
            files_checked: analyses.len(),
            ..Default::default()
        };

        for analysis in analyses {
            report.issues.extend(analysis.issues);
            if !analysis.loaded {
                continue;
            }

            for entity in &analysis.entities {
                report
                    .entities_by_domain
                    .entry(entity.domain.clone())
                    .or_default()
                    .insert(entity.entity_id.clone());
            }
            report.entities_by_file.insert(
                analysis.name.clone(),
                analysis.entities.iter().map(|e| e.entity_id.clone()).collect(),
            );
            report.automations.extend(analysis.automations);
            report
                .naming_warnings
                .extend(analysis.naming_warnings.into_iter().map(|warning| FileNamingWarning {
                    file: analysis.name.clone(),
                    warning,
                }));
        }

        report.duplicates = find_duplicates(&report.automations);
        for group in &report.duplicates {
            report.issues.push(ValidationIssue::new(
                IssueCode::DuplicateAutomationId,
                GLOBAL_SCOPE,
                format!("duplicate automation id '{}' in: {}", group.id, group.files()),
            ));
        }

        report
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| !i.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Warnings never fail a run; only errors do.
    pub fn passed(&self) -> bool {
        !self.has_errors()
    }

    /// Process exit code for this report: 0 when passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed() { 0 } else { 1 }
    }

    /// Number of distinct entity ids across all files.
    pub fn entity_count(&self) -> usize {
        self.entities_by_domain.values().map(BTreeSet::len).sum()
    }

    /// Files (in name order) that reference `entity_id`.
    pub fn files_referencing(&self, entity_id: &str) -> Vec<&str> {
        self.entities_by_file
            .iter()
            .filter(|(_, ids)| ids.contains(entity_id))
            .map(|(file, _)| file.as_str())
            .collect()
    }
}

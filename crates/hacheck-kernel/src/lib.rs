//! hacheck-kernel: the core of hacheck.
//!
//! This crate provides:
//!
//! - **Loader**: parses package YAML, keeping `!include`/`!secret`/... as placeholders
//! - **Validator**: shape rules for `automation:` and `script:` sections
//! - **Extract**: entity references (including template calls) and automation ids
//! - **Naming**: umlaut transliteration heuristics on entity ids
//! - **Duplicates**: automation ids declared more than once across files
//! - **Checker / Report**: per-document analysis and the run-level reduction
//!
//! File discovery and report rendering live in the callers.

pub mod analysis;
pub mod checker;
pub mod config;
pub mod domains;
pub mod duplicates;
pub mod extract;
pub mod loader;
pub mod naming;
pub mod report;
pub mod validator;

pub use analysis::{DocumentAnalysis, SourceDocument, analyze_document};
pub use checker::Checker;
pub use config::CheckerConfig;
pub use loader::LoadError;
pub use report::Report;

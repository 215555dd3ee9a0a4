//! hacheck-types: pure data types shared by the hacheck crates.
//!
//! - [`DocumentValue`] / [`Scalar`]: the parsed document tree
//! - [`EntityReference`], [`AutomationRecord`]: what gets extracted
//! - [`ValidationIssue`], [`NamingWarning`], [`DuplicateGroup`]: what gets reported
//!
//! No parsing or I/O lives here.

mod entity;
mod issue;
mod value;

pub use entity::{
    AutomationRecord, DuplicateGroup, DuplicateLocation, EntityReference, FileNamingWarning,
    NamingWarning, NO_ALIAS,
};
pub use issue::{GLOBAL_SCOPE, IssueCode, Severity, ValidationIssue};
pub use value::{DocumentValue, Scalar};

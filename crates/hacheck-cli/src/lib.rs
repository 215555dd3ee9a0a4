//! hacheck: command-line validation of Home Assistant packages.
//!
//! ```bash
//! hacheck                      # every *.yaml under ./packages
//! hacheck -d config/packages --list-entities
//! hacheck lights.yaml --format json
//! ```
//!
//! Exit codes: 0 when no errors were found, 1 when some were, 2 for usage
//! or configuration problems.

pub mod cli;
pub mod config;
pub mod render;
pub mod run;

pub use cli::{Args, OutputFormat};
pub use run::run;

/// Exit code for bad arguments or an unusable config.
pub const EXIT_USAGE: u8 = 2;

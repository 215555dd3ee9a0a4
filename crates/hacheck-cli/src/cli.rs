//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use hacheck_kernel::CheckerConfig;

/// Directory scanned when no files are named.
pub const DEFAULT_PACKAGES_DIR: &str = "packages";

#[derive(Parser, Debug, Clone)]
#[command(name = "hacheck")]
#[command(about = "Validate Home Assistant package YAML files")]
#[command(version)]
pub struct Args {
    /// Package files to check (default: every file under --packages-dir)
    #[arg(conflicts_with = "packages_dir")]
    pub files: Vec<PathBuf>,

    /// Directory searched recursively for package files
    #[arg(short = 'd', long)]
    pub packages_dir: Option<PathBuf>,

    /// File extension searched for in directory mode
    #[arg(long, default_value = hacheck_glob::DEFAULT_EXTENSION)]
    pub extension: String,

    /// Config file (default: ./hacheck.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Include the entity overview in the text report
    #[arg(long)]
    pub list_entities: bool,

    /// Skip the umlaut naming heuristics
    #[arg(long)]
    pub no_naming: bool,

    /// Do not warn about unknown top-level keys
    #[arg(long)]
    pub no_domain_warnings: bool,
}

impl Args {
    /// Flags win over whatever the config file said.
    pub fn apply_overrides(&self, mut config: CheckerConfig) -> CheckerConfig {
        if self.no_naming {
            config = config.with_naming_checks(false);
        }
        if self.no_domain_warnings {
            config = config.with_unknown_domain_warnings(false);
        }
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// The full report as JSON
    Json,
}

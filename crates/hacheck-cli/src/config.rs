//! Loading `CheckerConfig` from TOML.

use std::path::Path;

use anyhow::{Context, Result};

use hacheck_kernel::CheckerConfig;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "hacheck.toml";

/// Parse config text. Unknown keys are rejected.
pub fn parse_config(text: &str) -> Result<CheckerConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Load the config for a run.
///
/// An explicit path must exist. Without one, `hacheck.toml` in `search_dir`
/// is used if present, otherwise the defaults.
pub fn load_config(explicit: Option<&Path>, search_dir: &Path) -> Result<CheckerConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let implicit = search_dir.join(DEFAULT_CONFIG_FILE);
            if !implicit.is_file() {
                tracing::debug!("no config file, using defaults");
                return Ok(CheckerConfig::default());
            }
            implicit
        }
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config =
        parse_config(&text).with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

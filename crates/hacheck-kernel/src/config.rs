//! Checker configuration.

use serde::Deserialize;

use crate::domains;

/// Configuration for a checking run.
///
/// Deserializes from TOML (or anything serde understands); every field has
/// a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    /// File name of the flat automation list (`automations.yaml`), which
    /// may legitimately be an empty sequence.
    pub flat_automation_file: String,
    /// Extra top-level keys accepted without an unknown-domain warning.
    pub extra_package_domains: Vec<String>,
    /// Warn about top-level keys that are not known package domains.
    pub warn_unknown_domains: bool,
    /// Run the umlaut transliteration heuristics on extracted entity ids.
    pub naming_checks: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            flat_automation_file: "automations.yaml".to_string(),
            extra_package_domains: Vec::new(),
            warn_unknown_domains: true,
            naming_checks: true,
        }
    }
}

impl CheckerConfig {
    pub fn with_flat_automation_file(mut self, name: impl Into<String>) -> Self {
        self.flat_automation_file = name.into();
        self
    }

    pub fn with_extra_package_domain(mut self, key: impl Into<String>) -> Self {
        self.extra_package_domains.push(key.into());
        self
    }

    pub fn with_unknown_domain_warnings(mut self, enabled: bool) -> Self {
        self.warn_unknown_domains = enabled;
        self
    }

    pub fn with_naming_checks(mut self, enabled: bool) -> Self {
        self.naming_checks = enabled;
        self
    }

    /// Whether a top-level key is a known package domain.
    pub fn is_known_package_key(&self, key: &str) -> bool {
        domains::is_package_domain(key) || self.extra_package_domains.iter().any(|d| d == key)
    }
}

//! Umlaut transliteration heuristics.
//!
//! German entity names spell umlauts as digraphs (`küche` → `kueche`).
//! When one file says `kueche` and another `kuche`, references silently
//! break, so every digraph outside a known ordinary word is flagged.
//!
//! This is a heuristic, not a spell checker. Results are warnings only.

use hacheck_types::NamingWarning;

/// One digraph rule.
#[derive(Debug, Clone, Copy)]
pub struct NamingRule {
    /// Digraph to look for.
    pub pattern: &'static str,
    /// Replacement offered in the warning.
    pub suggestion: &'static str,
    pub label: &'static str,
    /// Words where the digraph is ordinary spelling. Any hit suppresses this rule.
    pub false_positives: &'static [&'static str],
}

/// Rules in reporting order.
pub const NAMING_RULES: &[NamingRule] = &[
    NamingRule {
        pattern: "ae",
        suggestion: "a",
        label: "ae->a",
        false_positives: &["aero", "israel"],
    },
    NamingRule {
        pattern: "oe",
        suggestion: "o",
        label: "oe->o",
        false_positives: &["does", "poet", "goes"],
    },
    NamingRule {
        pattern: "ue",
        suggestion: "u",
        label: "ue->u",
        false_positives: &[
            "feuer", "steuer", "neuer", "teuer", "quer", "queue", "blue", "true", "muell",
            "blaue", "graue", "value", "aktuelle",
        ],
    },
];

/// Characters of context shown on each side of a match.
const CONTEXT_CHARS: usize = 3;

/// Check one entity id against every rule.
pub fn check_naming(entity_id: &str) -> Vec<NamingWarning> {
    let lower = entity_id.to_lowercase();
    NAMING_RULES
        .iter()
        .filter_map(|rule| {
            let idx = lower.find(rule.pattern)?;
            if rule.false_positives.iter().any(|word| lower.contains(word)) {
                return None;
            }
            Some(NamingWarning {
                entity_id: entity_id.to_string(),
                rule: rule.label.to_string(),
                found: rule.pattern.to_string(),
                suggested: rule.suggestion.to_string(),
                context: context_window(&lower, idx, rule.pattern.len()).to_string(),
            })
        })
        .collect()
}

/// Slice `CONTEXT_CHARS` characters either side of `text[start..start + len]`.
fn context_window(text: &str, start: usize, len: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map_or(0, |(i, _)| i);
    let end = start + len;
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}

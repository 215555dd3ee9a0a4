//! Tag-aware document loader.
//!
//! Package files use Home Assistant's YAML extensions (`!include`,
//! `!secret`, `!input`, ...). The loader keeps them as inert
//! [`Scalar::Placeholder`] values rather than resolving them; nothing here
//! touches the filesystem or a secrets store.
//!
//! - Tagged scalar: becomes `Placeholder { tag, text }`.
//! - Tagged sequence/mapping: the tag is dropped, the node loads normally.
//! - Any other application tag: [`LoadError::UnsupportedTag`].
//! - Merge keys (`<<: *anchor`) are applied before conversion; keys written
//!   out explicitly win over merged ones.
//!
//! Keys must be unique. A repeated key fails the whole document, where a
//! PyYAML-based load keeps the last value. Scalar keys are compared by
//! their text, so `1:` and `"1":` collide as well.

use serde::Deserialize;
use thiserror::Error;

use hacheck_types::{DocumentValue, IssueCode, Scalar};

/// Every custom tag the loader accepts: file inclusion (`include*`) and
/// runtime indirection (`secret`, `input`, `env_var`).
pub const CUSTOM_TAGS: &[&str] = &[
    "include",
    "include_dir_list",
    "include_dir_named",
    "include_dir_merge_list",
    "include_dir_merge_named",
    "secret",
    "input",
    "env_var",
];

/// Look up a custom tag by name (without the leading `!`).
pub fn custom_tag(name: &str) -> Option<&'static str> {
    CUSTOM_TAGS.iter().copied().find(|t| *t == name)
}

/// Why a document could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("encoding error (not valid UTF-8): {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("YAML syntax error: {0}")]
    Syntax(#[from] serde_yaml::Error),

    #[error("unsupported tag '!{0}'")]
    UnsupportedTag(String),

    #[error("expected a single YAML document, found {0}")]
    MultipleDocuments(usize),

    #[error("mapping keys must be scalars, found a {0}")]
    ComplexKey(&'static str),

    #[error("duplicate mapping key '{0}'")]
    DuplicateKey(String),
}

impl LoadError {
    /// Issue code this failure is reported under.
    pub fn issue_code(&self) -> IssueCode {
        match self {
            LoadError::Encoding(_) => IssueCode::EncodingError,
            _ => IssueCode::ParseError,
        }
    }
}

/// Load a document from raw bytes. The bytes must be UTF-8.
pub fn load_document(bytes: &[u8]) -> Result<DocumentValue, LoadError> {
    let text = std::str::from_utf8(bytes)?;
    parse_document(text)
}

/// Parse document text.
///
/// Empty or comment-only text loads as [`Scalar::Null`].
pub fn parse_document(text: &str) -> Result<DocumentValue, LoadError> {
    let mut documents = serde_yaml::Deserializer::from_str(text);
    let Some(first) = documents.next() else {
        return Ok(DocumentValue::null());
    };
    let mut raw = serde_yaml::Value::deserialize(first)?;

    let extra = documents.count();
    if extra > 0 {
        return Err(LoadError::MultipleDocuments(extra + 1));
    }

    raw.apply_merge()?;
    convert(raw)
}

/// Tag name without its leading `!`.
fn tag_name(tag: &serde_yaml::value::Tag) -> String {
    let shown = tag.to_string();
    shown.strip_prefix('!').unwrap_or(&shown).to_string()
}

/// YAML core-schema tags (`!!str`, `!!map`, ...) carry no extra meaning here.
fn is_core_tag(name: &str) -> bool {
    name.starts_with('!') || name.starts_with("tag:yaml.org,2002:")
}

fn convert(raw: serde_yaml::Value) -> Result<DocumentValue, LoadError> {
    use serde_yaml::Value;

    Ok(match raw {
        Value::Null => DocumentValue::Scalar(Scalar::Null),
        Value::Bool(b) => DocumentValue::Scalar(Scalar::Bool(b)),
        Value::Number(n) => DocumentValue::Scalar(Scalar::Number(n.to_string())),
        Value::String(s) => DocumentValue::Scalar(Scalar::Text(s)),
        Value::Sequence(items) => DocumentValue::Sequence(
            items.into_iter().map(convert).collect::<Result<_, _>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut entries: Vec<(String, DocumentValue)> = Vec::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = key_text(key)?;
                if entries.iter().any(|(k, _)| *k == key) {
                    return Err(LoadError::DuplicateKey(key));
                }
                entries.push((key, convert(value)?));
            }
            DocumentValue::Mapping(entries)
        }
        Value::Tagged(tagged) => {
            let name = tag_name(&tagged.tag);
            if is_core_tag(&name) {
                return convert(tagged.value);
            }
            let Some(custom) = custom_tag(&name) else {
                return Err(LoadError::UnsupportedTag(name));
            };
            match tagged.value {
                nested @ (Value::Sequence(_) | Value::Mapping(_)) => convert(nested)?,
                scalar => DocumentValue::Scalar(Scalar::Placeholder {
                    tag: custom.to_string(),
                    text: scalar_literal(scalar)?,
                }),
            }
        }
    })
}

/// Literal text of a tagged scalar (`!secret 1234` keeps `1234`).
fn scalar_literal(value: serde_yaml::Value) -> Result<String, LoadError> {
    match convert(value)? {
        DocumentValue::Scalar(s) => Ok(s.to_string()),
        other => Err(LoadError::ComplexKey(other.kind_name())),
    }
}

fn key_text(key: serde_yaml::Value) -> Result<String, LoadError> {
    match convert(key)? {
        DocumentValue::Scalar(Scalar::Null) => Ok("null".to_string()),
        DocumentValue::Scalar(s) => Ok(s.to_string()),
        other => Err(LoadError::ComplexKey(other.kind_name())),
    }
}

//! Document values: the loader's output tree.
//!
//! A package file parses into a `DocumentValue`. Traversals match on the
//! variant; nothing downstream inspects raw YAML.

use std::fmt;

/// A parsed package document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentValue {
    /// Leaf value, including custom-tag placeholders.
    Scalar(Scalar),
    /// Ordered list.
    Sequence(Vec<DocumentValue>),
    /// Insertion-ordered key/value pairs. Keys are unique.
    Mapping(Vec<(String, DocumentValue)>),
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Explicit `null`, `~`, or an empty document.
    Null,
    Bool(bool),
    /// Numbers keep their YAML text so ids like `0012` survive.
    Number(String),
    Text(String),
    /// A custom-tagged scalar such as `!secret wifi_password`, left unresolved.
    Placeholder { tag: String, text: String },
}

impl DocumentValue {
    /// Shorthand for an empty document.
    pub fn null() -> Self {
        DocumentValue::Scalar(Scalar::Null)
    }

    /// Shorthand for a text scalar.
    pub fn text(s: impl Into<String>) -> Self {
        DocumentValue::Scalar(Scalar::Text(s.into()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DocumentValue::Scalar(Scalar::Null))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            DocumentValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[DocumentValue]> {
        match self {
            DocumentValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, DocumentValue)]> {
        match self {
            DocumentValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&DocumentValue> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Human-readable shape name used in issue messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DocumentValue::Scalar(s) => s.kind_name(),
            DocumentValue::Sequence(_) => "sequence",
            DocumentValue::Mapping(_) => "mapping",
        }
    }

    /// Render a scalar for display (ids, aliases). Null and empty text give `None`.
    pub fn scalar_text(&self) -> Option<String> {
        match self.as_scalar()? {
            Scalar::Null => None,
            Scalar::Text(t) if t.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

impl Scalar {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "boolean",
            Scalar::Number(_) => "number",
            Scalar::Text(_) => "string",
            Scalar::Placeholder { .. } => "placeholder",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(t) => write!(f, "{t}"),
            Scalar::Placeholder { tag, text } => write!(f, "!{tag} {text}"),
        }
    }
}

impl From<&str> for DocumentValue {
    fn from(s: &str) -> Self {
        DocumentValue::text(s)
    }
}

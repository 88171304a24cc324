//! Decoded view documents.
//!
//! A view.json file is untyped JSON. [`DocumentNode`] gives it an explicit
//! shape so traversal can match on it exhaustively. Object keys keep the
//! order they had in the file.

use serde_json::Value;

/// A JSON leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

/// A node of a view document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    /// Key/value pairs in document order.
    Object(Vec<(String, DocumentNode)>),
    Array(Vec<DocumentNode>),
    Scalar(Scalar),
}

impl DocumentNode {
    /// Look up a key of an object node.
    pub fn get(&self, key: &str) -> Option<&DocumentNode> {
        match self {
            Self::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// The string value of a scalar string node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Whether this node is a boolean leaf.
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Bool(_)))
    }

    /// Whether this node is an object or array with no entries.
    pub fn is_empty_container(&self) -> bool {
        match self {
            Self::Object(entries) => entries.is_empty(),
            Self::Array(items) => items.is_empty(),
            Self::Scalar(_) => false,
        }
    }

    /// The component name declared at `meta.name`, if it is a string.
    pub fn component_name(&self) -> Option<&str> {
        self.get("meta")?.get("name")?.as_str()
    }
}

impl From<Value> for DocumentNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

/// Parse JSON text into a document.
pub fn parse_document(content: &str) -> serde_json::Result<DocumentNode> {
    serde_json::from_str::<Value>(content).map(DocumentNode::from)
}

//! Opaque caller-supplied identifiers (`project_id`, `model_id`).

use serde::{Deserialize, Serialize};

/// An identifier that arrives either as a JSON string or a JSON number.
///
/// The value is never interpreted; it is copied into the job record in the
/// same JSON shape it was received in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Text(String),
    Number(serde_json::Number),
}

impl Identifier {
    /// Whether the identifier counts as supplied.
    ///
    /// Empty strings and zero are treated the same as an omitted field.
    pub fn is_present(&self) -> bool {
        match self {
            Identifier::Text(s) => !s.is_empty(),
            Identifier::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Text(s) => f.write_str(s),
            Identifier::Number(n) => write!(f, "{n}"),
        }
    }
}

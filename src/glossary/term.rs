// Glossary term type and name normalization

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of characters shown in a term card before the definition is cut
pub const DEFAULT_EXCERPT_CHARS: usize = 120;

/// A glossary term: a unique name and its definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Term {
    /// Term name, case preserved
    pub name: String,
    /// Free text definition, stored untruncated
    pub definition: String,
}

impl Term {
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
        }
    }

    /// Case-insensitive comparison key for this term's name
    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    /// Display excerpt of the definition.
    ///
    /// Definitions longer than `max_chars` characters are cut at a character
    /// boundary and suffixed with `...`.
    pub fn excerpt(&self, max_chars: usize) -> String {
        match self.definition.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.definition[..cut]),
            None => self.definition.clone(),
        }
    }
}

/// Fields of a term that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TermField {
    Name,
    Definition,
}

impl fmt::Display for TermField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermField::Name => f.write_str("name"),
            TermField::Definition => f.write_str("definition"),
        }
    }
}

/// Normalize a term name into its lookup key (trimmed, Unicode lowercase)
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Trim both fields, reporting every field left empty.
pub(crate) fn validate(name: &str, definition: &str) -> Result<Term, Vec<TermField>> {
    let name = name.trim();
    let definition = definition.trim();

    let mut invalid = Vec::new();
    if name.is_empty() {
        invalid.push(TermField::Name);
    }
    if definition.is_empty() {
        invalid.push(TermField::Definition);
    }

    if invalid.is_empty() {
        Ok(Term::new(name, definition))
    } else {
        Err(invalid)
    }
}

#[cfg(test)]
#[path = "term_test.rs"]
mod tests;

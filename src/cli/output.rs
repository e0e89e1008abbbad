// User-facing text for CLI output
// Maps store and config errors to messages; the store itself never formats text

use strsim::normalized_levenshtein;

use crate::config::ConfigError;
use crate::glossary::{DeleteFailure, GlossaryError, Term, DEFAULT_EXCERPT_CHARS};

/// Minimum similarity for a "did you mean" suggestion (0.0 to 1.0)
pub const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Map GlossaryError to user-friendly error messages
pub fn to_user_error(error: &GlossaryError) -> String {
    match error {
        GlossaryError::Validation(fields) => {
            let fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
            format!("Please fill in the {} of the term", fields.join(" and "))
        }
        GlossaryError::DuplicateTerm(name) => {
            format!("The term '{}' already exists in the glossary", name)
        }
        GlossaryError::StoreUnavailable(msg) => format!("Failed to reach the glossary: {}", msg),
        GlossaryError::PartialFailure { deleted, failed } => {
            let mut lines = vec![format!(
                "Deleted {} term(s), {} could not be deleted:",
                deleted.len(),
                failed.len()
            )];
            for failure in failed {
                let reason = match &failure.reason {
                    DeleteFailure::NotFound => "not found".to_string(),
                    DeleteFailure::Unavailable(msg) => msg.clone(),
                };
                lines.push(format!("  {}: {}", failure.name, reason));
            }
            lines.join("\n")
        }
    }
}

/// Map ConfigError to user-friendly error messages
pub fn config_user_error(error: &ConfigError) -> String {
    format!("Configuration error: {}", error)
}

/// One `name: excerpt` line per term
pub fn term_lines(terms: &[Term]) -> String {
    terms
        .iter()
        .map(|t| format!("{}: {}", t.name, t.excerpt(DEFAULT_EXCERPT_CHARS)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full detail view of a single term
pub fn term_detail(term: &Term) -> String {
    format!("{}\n\n{}", term.name, term.definition)
}

/// Closest stored name to `input`, if any is similar enough
pub fn closest_name<'a>(input: &str, terms: &'a [Term]) -> Option<&'a str> {
    let input = input.trim().to_lowercase();
    terms
        .iter()
        .map(|t| (t, normalized_levenshtein(&input, &t.key())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(t, _)| t.name.as_str())
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;

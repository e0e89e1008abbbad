// Tests for CLI error mapping and formatting

use super::*;
use crate::glossary::{FailedDelete, TermField};

#[test]
fn test_to_user_error_validation() {
    let message = to_user_error(&GlossaryError::Validation(vec![
        TermField::Name,
        TermField::Definition,
    ]));
    assert_eq!(message, "Please fill in the name and definition of the term");
}

#[test]
fn test_to_user_error_duplicate() {
    let message = to_user_error(&GlossaryError::DuplicateTerm("Bit".to_string()));
    assert!(message.contains("Bit"));
    assert!(message.contains("already exists"));
}

#[test]
fn test_to_user_error_unavailable() {
    let message = to_user_error(&GlossaryError::StoreUnavailable("disk full".to_string()));
    assert!(message.contains("disk full"));
}

#[test]
fn test_to_user_error_partial_failure_lists_each_name() {
    let message = to_user_error(&GlossaryError::PartialFailure {
        deleted: vec!["A".to_string()],
        failed: vec![
            FailedDelete {
                name: "B".to_string(),
                reason: DeleteFailure::NotFound,
            },
            FailedDelete {
                name: "C".to_string(),
                reason: DeleteFailure::Unavailable("locked".to_string()),
            },
        ],
    });

    assert!(message.starts_with("Deleted 1 term(s), 2 could not be deleted:"));
    assert!(message.contains("  B: not found"));
    assert!(message.contains("  C: locked"));
}

#[test]
fn test_term_lines_use_excerpt() {
    let terms = vec![
        Term::new("Bit", "Binary digit"),
        Term::new("Long", "x".repeat(200)),
    ];

    let output = term_lines(&terms);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Bit: Binary digit");
    assert_eq!(lines[1], format!("Long: {}...", "x".repeat(120)));
}

#[test]
fn test_term_detail_shows_full_definition() {
    let term = Term::new("Long", "y".repeat(200));
    assert_eq!(term_detail(&term), format!("Long\n\n{}", "y".repeat(200)));
}

#[test]
fn test_closest_name_suggests_similar() {
    let terms = vec![Term::new("Arduino", "board"), Term::new("Hardware", "parts")];

    assert_eq!(closest_name("arduno", &terms), Some("Arduino"));
    assert_eq!(closest_name("zzzz", &terms), None);
    assert_eq!(closest_name("anything", &[]), None);
}

// Tests for Term helpers and validation

use super::*;

#[test]
fn test_name_key_trims_and_lowercases() {
    assert_eq!(name_key("  Arduino "), "arduino");
    assert_eq!(name_key("ÉTICA"), "ética");
}

#[test]
fn test_validate_trims_fields() {
    let term = validate("  Hardware ", "\tPhysical components\n").unwrap();
    assert_eq!(term, Term::new("Hardware", "Physical components"));
}

#[test]
fn test_validate_reports_each_empty_field() {
    assert_eq!(validate("", "def"), Err(vec![TermField::Name]));
    assert_eq!(validate("name", "   "), Err(vec![TermField::Definition]));
    assert_eq!(
        validate(" ", ""),
        Err(vec![TermField::Name, TermField::Definition])
    );
}

#[test]
fn test_excerpt_short_definition_untouched() {
    let term = Term::new("Bit", "Binary digit");
    assert_eq!(term.excerpt(DEFAULT_EXCERPT_CHARS), "Binary digit");
}

#[test]
fn test_excerpt_cuts_long_definition() {
    let term = Term::new("Dato", "a".repeat(130));
    let excerpt = term.excerpt(DEFAULT_EXCERPT_CHARS);

    assert_eq!(excerpt.len(), 123);
    assert!(excerpt.ends_with("..."));
    // The stored definition is never shortened
    assert_eq!(term.definition.len(), 130);
}

#[test]
fn test_excerpt_respects_char_boundaries() {
    let term = Term::new("Canción", "ñandú ñandú");
    assert_eq!(term.excerpt(5), "ñandú...");
}

#[test]
fn test_term_serializes_name_and_definition() {
    let json = serde_json::to_string(&Term::new("RAM", "Memory")).unwrap();
    assert_eq!(json, r#"{"name":"RAM","definition":"Memory"}"#);
}

#[test]
fn test_term_field_display() {
    assert_eq!(TermField::Name.to_string(), "name");
    assert_eq!(TermField::Definition.to_string(), "definition");
}

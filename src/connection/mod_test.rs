// Tests for statements and rows

use super::*;

#[test]
fn test_bind_keeps_parameter_order() {
    let statement = Statement::new("SELECT 1 WHERE a = ?1 AND b = ?2")
        .bind("first")
        .bind(2_i64);

    assert_eq!(statement.sql(), "SELECT 1 WHERE a = ?1 AND b = ?2");
    assert_eq!(
        statement.params(),
        &[Value::Text("first".to_string()), Value::Integer(2)]
    );
}

#[test]
fn test_bind_keeps_quotes_literal() {
    let name = "a'); DROP TABLE glosario;--";
    let statement = Statement::new("SELECT 1 WHERE name = ?1").bind(name);

    // The SQL text is untouched; the value only lives in the parameter list
    assert!(!statement.sql().contains("DROP"));
    assert_eq!(statement.params(), &[Value::Text(name.to_string())]);
}

#[test]
fn test_bind_real_value() {
    let statement = Statement::new("?1").bind(2.5_f64);
    assert_eq!(statement.params(), &[Value::Real(2.5)]);
}

#[test]
fn test_bind_none_is_null() {
    let statement = Statement::new("?1").bind(None::<String>);
    assert_eq!(statement.params(), &[Value::Null]);
}

#[test]
fn test_row_typed_accessors() {
    let row = Row::new(vec![Value::Text("Arduino".to_string()), Value::Integer(7)]);

    assert_eq!(row.len(), 2);
    assert_eq!(row.text(0).unwrap(), "Arduino");
    assert_eq!(row.integer(1).unwrap(), 7);
}

#[test]
fn test_row_accessor_type_mismatch() {
    let row = Row::new(vec![Value::Null]);

    assert!(matches!(row.text(0), Err(ConnectionError::Query(_))));
    assert!(matches!(row.integer(0), Err(ConnectionError::Query(_))));
}

#[test]
fn test_row_accessor_out_of_range() {
    let row = Row::default();

    assert!(row.is_empty());
    match row.get(3) {
        Err(ConnectionError::Query(msg)) => assert!(msg.contains("out of range")),
        other => panic!("Expected Query error, got {:?}", other),
    }
}

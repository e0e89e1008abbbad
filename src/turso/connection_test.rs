use super::*;
use crate::turso::DatabaseLocation;

async fn setup() -> (TursoClient, TursoHandle) {
    let client = TursoClient::open(DatabaseLocation::Memory)
        .await
        .expect("Failed to open database");
    let handle = client.connect().await.expect("Failed to connect");
    (client, handle)
}

const INSERT: &str =
    "INSERT INTO glossary_term (name, name_key, definition, created_at) VALUES (?1, ?2, ?3, ?4)";

#[tokio::test]
async fn test_connect_initializes_schema() {
    let (client, handle) = setup().await;

    let rows = client
        .run_query(&handle, &Statement::new("SELECT COUNT(*) FROM glossary_term"))
        .await
        .expect("glossary_term should exist after connect");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].integer(0).unwrap(), 0);
}

#[tokio::test]
async fn test_run_statement_reports_affected_rows() {
    let (client, handle) = setup().await;

    let inserted = client
        .run_statement(
            &handle,
            &Statement::new(INSERT)
                .bind("Bit")
                .bind("bit")
                .bind("Binary digit")
                .bind("t0"),
        )
        .await
        .unwrap();
    assert_eq!(inserted, 1);

    let deleted = client
        .run_statement(
            &handle,
            &Statement::new("DELETE FROM glossary_term WHERE name_key = ?1").bind("missing"),
        )
        .await
        .unwrap();
    assert_eq!(deleted, 0);
}

#[tokio::test]
async fn test_run_query_round_trips_values() {
    let (client, handle) = setup().await;
    client
        .run_statement(
            &handle,
            &Statement::new(INSERT)
                .bind("Byte")
                .bind("byte")
                .bind("Eight bits")
                .bind("t0"),
        )
        .await
        .unwrap();

    let rows = client
        .run_query(
            &handle,
            &Statement::new("SELECT name, definition, id FROM glossary_term WHERE name_key = ?1")
                .bind("byte"),
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text(0).unwrap(), "Byte");
    assert_eq!(rows[0].text(1).unwrap(), "Eight bits");
    assert!(rows[0].integer(2).unwrap() > 0);
}

#[tokio::test]
async fn test_unique_violation_maps_to_constraint() {
    let (client, handle) = setup().await;
    let insert = |name: &'static str| {
        Statement::new(INSERT)
            .bind(name)
            .bind("ram")
            .bind("memory")
            .bind("t")
    };

    client.run_statement(&handle, &insert("RAM")).await.unwrap();
    let result = client.run_statement(&handle, &insert("ram")).await;

    assert!(
        matches!(result, Err(ConnectionError::Constraint(_))),
        "Expected Constraint, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_invalid_sql_maps_to_query_error() {
    let (client, handle) = setup().await;

    let result = client
        .run_query(&handle, &Statement::new("SELECT * FROM no_such_table"))
        .await;

    assert!(matches!(result, Err(ConnectionError::Query(_))));
}

#[tokio::test]
async fn test_run_query_round_trips_real_and_null() {
    let (client, handle) = setup().await;

    let rows = client
        .run_query(
            &handle,
            &Statement::new("SELECT ?1, ?2").bind(0.25_f64).bind(None::<i64>),
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 2);
    assert_eq!(rows[0].get(0).unwrap(), &Value::Real(0.25));
    assert_eq!(rows[0].get(1).unwrap(), &Value::Null);
}

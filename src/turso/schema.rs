// Database schema definitions and migration system
//
// This module defines the SQLite schema for the glossary table
// and provides a migration system for schema changes.

use super::client::{TursoError, TursoHandle};

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// SQL statements to create all tables (each as a separate string)
const CREATE_TABLES: &[&str] = &[
    // Glossary terms; name_key is the lowercased trimmed name
    r#"CREATE TABLE IF NOT EXISTS glossary_term (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        name_key TEXT NOT NULL,
        definition TEXT NOT NULL,
        created_at TEXT NOT NULL
    )"#,
    // Case-insensitive uniqueness for concurrent writers outside this process
    r#"CREATE UNIQUE INDEX IF NOT EXISTS idx_glossary_term_name_key ON glossary_term(name_key)"#,
];

/// Initialize the database schema.
///
/// Creates all tables if they don't exist and runs any pending migrations.
/// Called on every new connection by the TableConnection impl.
pub async fn initialize_schema(handle: &TursoHandle) -> Result<(), TursoError> {
    // First, ensure schema_version table exists (needed for version checking)
    handle
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await?;

    let current_version = get_schema_version(handle).await?;

    if current_version == 0 {
        // Fresh database - create all tables
        crate::info!("Initializing glossary database schema (version {})", SCHEMA_VERSION);

        for statement in CREATE_TABLES {
            handle.execute(statement, ()).await?;
        }

        set_schema_version(handle, SCHEMA_VERSION).await?;

        crate::info!("Glossary database schema initialized successfully");
    } else if current_version < SCHEMA_VERSION {
        crate::info!(
            "Migrating glossary database from version {} to {}",
            current_version,
            SCHEMA_VERSION
        );
        run_migrations(handle, current_version, SCHEMA_VERSION).await?;
        crate::info!("Glossary database migration complete");
    } else if current_version > SCHEMA_VERSION {
        return Err(TursoError::Connect(format!(
            "Database schema version {} is newer than supported version {}",
            current_version, SCHEMA_VERSION
        )));
    } else {
        crate::debug!("Glossary database schema is up to date (version {})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database.
/// Returns 0 if no version has been recorded yet.
pub async fn get_schema_version(handle: &TursoHandle) -> Result<i32, TursoError> {
    let mut rows = handle
        .query(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            (),
        )
        .await?;

    match rows.next().await.map_err(|e| TursoError::Query(e.to_string()))? {
        Some(row) => {
            let version: i32 = row.get(0).map_err(|e| TursoError::Query(e.to_string()))?;
            Ok(version)
        }
        None => Ok(0),
    }
}

/// Set the schema version in the database.
async fn set_schema_version(handle: &TursoHandle, version: i32) -> Result<(), TursoError> {
    handle
        .execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            libsql::params![version],
        )
        .await?;
    Ok(())
}

/// Run migrations from one version to another.
async fn run_migrations(
    handle: &TursoHandle,
    from_version: i32,
    to_version: i32,
) -> Result<(), TursoError> {
    for version in (from_version + 1)..=to_version {
        // Version-specific steps go here as the schema evolves
        crate::debug!("No migration needed for version {}", version);
        set_schema_version(handle, version).await?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;

// Turso/libsql client - opens the embedded database and runs raw SQL
//
// The glossary store never uses this type directly; it goes through the
// TableConnection impl in connection.rs.

use std::fmt;
use std::path::{Path, PathBuf};

use libsql::params::IntoParams;
use libsql::{Builder, Connection, Database, Rows};
use serde::{Deserialize, Serialize};

/// SQLite primary result code for constraint violations
const SQLITE_CONSTRAINT: i32 = 19;

/// libsql path that selects a private in-memory database
const MEMORY_PATH: &str = ":memory:";

/// Error types for Turso client operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TursoError {
    /// Failed to open the database or a connection to it
    #[error("Failed to open database: {0}")]
    Connect(String),
    /// Query or statement failed
    #[error("Query failed: {0}")]
    Query(String),
    /// Integrity constraint rejected the write
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl TursoError {
    fn classify(error: libsql::Error) -> Self {
        match &error {
            libsql::Error::SqliteFailure(code, msg) if code & 0xff == SQLITE_CONSTRAINT => {
                TursoError::Constraint(msg.clone())
            }
            _ => {
                let msg = error.to_string();
                if msg.contains("constraint failed") {
                    TursoError::Constraint(msg)
                } else {
                    TursoError::Query(msg)
                }
            }
        }
    }
}

/// Where the glossary database lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PathBuf", into = "PathBuf")]
pub enum DatabaseLocation {
    /// Private in-memory database, gone when the handle is dropped
    Memory,
    /// Embedded database file
    File(PathBuf),
}

impl DatabaseLocation {
    fn path(&self) -> &Path {
        match self {
            DatabaseLocation::Memory => Path::new(MEMORY_PATH),
            DatabaseLocation::File(path) => path,
        }
    }
}

impl From<PathBuf> for DatabaseLocation {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == MEMORY_PATH {
            DatabaseLocation::Memory
        } else {
            DatabaseLocation::File(path)
        }
    }
}

impl From<DatabaseLocation> for PathBuf {
    fn from(location: DatabaseLocation) -> Self {
        location.path().to_path_buf()
    }
}

impl fmt::Display for DatabaseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

/// Client for the embedded libsql database
pub struct TursoClient {
    db: Database,
    location: DatabaseLocation,
}

impl TursoClient {
    /// Open (or create) the database at the given location.
    ///
    /// Creates the parent directory of a file database if it does not exist.
    pub async fn open(location: DatabaseLocation) -> Result<Self, TursoError> {
        if let DatabaseLocation::File(path) = &location {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| TursoError::Connect(format!("{}: {}", parent.display(), e)))?;
            }
        }

        crate::debug!("Opening glossary database at {}", location);
        let db = Builder::new_local(location.path())
            .build()
            .await
            .map_err(|e| TursoError::Connect(e.to_string()))?;

        Ok(Self { db, location })
    }

    pub fn location(&self) -> &DatabaseLocation {
        &self.location
    }

    /// Open a new connection to the database.
    ///
    /// For [`DatabaseLocation::Memory`] every connection sees its own empty database.
    pub fn connection(&self) -> Result<TursoHandle, TursoError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| TursoError::Connect(e.to_string()))?;
        Ok(TursoHandle { conn })
    }
}

/// A single open libsql connection
pub struct TursoHandle {
    conn: Connection,
}

impl TursoHandle {
    /// Execute a statement, returning the number of affected rows.
    pub async fn execute(&self, sql: &str, params: impl IntoParams) -> Result<u64, TursoError> {
        self.conn
            .execute(sql, params)
            .await
            .map_err(TursoError::classify)
    }

    /// Run a query, returning the row cursor.
    pub async fn query(&self, sql: &str, params: impl IntoParams) -> Result<Rows, TursoError> {
        self.conn.query(sql, params).await.map_err(TursoError::classify)
    }
}

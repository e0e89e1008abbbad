//! Table connection capability.
//!
//! The glossary store never talks to a database directly. It goes through a
//! [`TableConnection`], which hands out a connection handle and runs
//! parameterized statements against it. Values always travel as bound
//! parameters, never spliced into the SQL text.

mod statement;

use async_trait::async_trait;

pub use statement::{Row, Statement, Value};

/// Error types for table connection operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConnectionError {
    /// The backing medium could not be opened or reached
    #[error("Connection error: {0}")]
    Connect(String),
    /// A query or statement failed to run
    #[error("Query error: {0}")]
    Query(String),
    /// A uniqueness or other integrity constraint rejected a write
    #[error("Constraint violation: {0}")]
    Constraint(String),
    /// The handle was used after the connection was closed
    #[error("Connection closed")]
    Closed,
}

/// Capability for reaching persistent table storage.
///
/// Implementations are connected once and the handle is reused across many
/// operations.
#[async_trait]
pub trait TableConnection: Send + Sync {
    /// Connection handle returned by [`TableConnection::connect`].
    type Handle: Send + Sync;

    /// Open a handle to the backing table storage.
    async fn connect(&self) -> Result<Self::Handle, ConnectionError>;

    /// Run a statement that returns rows.
    async fn run_query(
        &self,
        handle: &Self::Handle,
        statement: &Statement,
    ) -> Result<Vec<Row>, ConnectionError>;

    /// Run a statement that modifies rows, returning the affected row count.
    async fn run_statement(
        &self,
        handle: &Self::Handle,
        statement: &Statement,
    ) -> Result<u64, ConnectionError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

// Turso/libsql backend for the glossary store
//
// Provides the embedded database client, the schema/migration system and the
// TableConnection implementation used by GlossaryStore.

mod client;
mod connection;
mod schema;

pub use client::{DatabaseLocation, TursoClient, TursoError, TursoHandle};
pub use schema::{get_schema_version, initialize_schema, SCHEMA_VERSION};

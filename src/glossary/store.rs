// Glossary store - search, insert and delete over a TableConnection
//
// Mutations are serialized by an in-process lock held across the existence
// check and the write. Reads never take that lock.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;

use super::cache::ReadCache;
use super::sql;
use super::term::{name_key, validate, Term, TermField};
use crate::connection::{ConnectionError, Row, Statement, TableConnection};

/// Why a single name in a batch delete was not removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "message")]
pub enum DeleteFailure {
    /// No stored term has this name
    NotFound,
    /// The backing store rejected or could not run the delete
    Unavailable(String),
}

/// A name from a batch delete that was not removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedDelete {
    pub name: String,
    pub reason: DeleteFailure,
}

/// Outcome of a batch delete that fully succeeded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteSummary {
    /// Names removed, in request order
    pub deleted: Vec<String>,
}

/// Error types for glossary operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GlossaryError {
    /// One or more fields were empty after trimming
    #[error("Invalid term: empty {}", display_fields(.0))]
    Validation(Vec<TermField>),
    /// A term with this name (case-insensitively) already exists
    #[error("Term '{0}' already exists")]
    DuplicateTerm(String),
    /// The backing store could not be reached, read or written
    #[error("Glossary store unavailable: {0}")]
    StoreUnavailable(String),
    /// Some names in a batch delete were removed and others were not
    #[error("Deleted {} term(s), {} not deleted", .deleted.len(), .failed.len())]
    PartialFailure {
        deleted: Vec<String>,
        failed: Vec<FailedDelete>,
    },
}

fn display_fields(fields: &[TermField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" and ")
}

impl From<ConnectionError> for GlossaryError {
    fn from(error: ConnectionError) -> Self {
        GlossaryError::StoreUnavailable(error.to_string())
    }
}

fn term_from_row(row: &Row) -> Result<Term, ConnectionError> {
    Ok(Term::new(row.text(0)?, row.text(1)?))
}

/// Store for glossary terms over any [`TableConnection`]
pub struct GlossaryStore<C: TableConnection> {
    connection: C,
    handle: C::Handle,
    /// Serializes insert/delete, including their existence checks
    write_lock: Mutex<()>,
    cache: Option<ReadCache>,
}

impl<C: TableConnection> GlossaryStore<C> {
    /// Connect once and build a store that reuses the handle for every operation.
    pub async fn open(connection: C) -> Result<Self, GlossaryError> {
        let handle = connection.connect().await?;
        Ok(Self {
            connection,
            handle,
            write_lock: Mutex::new(()),
            cache: None,
        })
    }

    /// Serve reads from a snapshot of the term list for up to `ttl`.
    ///
    /// Mutations drop the snapshot before returning, so a caller always
    /// sees its own writes.
    pub fn with_read_cache(mut self, ttl: Duration) -> Self {
        self.cache = Some(ReadCache::new(ttl));
        self
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache.as_ref().map(ReadCache::ttl)
    }

    /// List every term in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Term>, GlossaryError> {
        match self.snapshot().await? {
            Some(terms) => Ok(terms.as_ref().clone()),
            None => self.query_terms(&Statement::new(sql::LIST_ALL)).await,
        }
    }

    /// Case-insensitive literal substring search on term names.
    ///
    /// A blank query returns every term.
    pub async fn search(&self, query: &str) -> Result<Vec<Term>, GlossaryError> {
        if query.trim().is_empty() {
            return self.list_all().await;
        }

        let needle = query.to_lowercase();
        if let Some(terms) = self.snapshot().await? {
            return Ok(terms
                .iter()
                .filter(|t| t.key().contains(&needle))
                .cloned()
                .collect());
        }

        self.query_terms(&Statement::new(sql::SEARCH).bind(needle))
            .await
    }

    /// Case-insensitive existence check on a term name.
    pub async fn exists(&self, name: &str) -> Result<bool, GlossaryError> {
        Ok(self.find(name).await?.is_some())
    }

    /// Look up a single term by name, ignoring case.
    pub async fn find(&self, name: &str) -> Result<Option<Term>, GlossaryError> {
        let key = name_key(name);
        if key.is_empty() {
            return Ok(None);
        }

        if let Some(terms) = self.snapshot().await? {
            return Ok(terms.iter().find(|t| t.key() == key).cloned());
        }

        let rows = self
            .connection
            .run_query(&self.handle, &Statement::new(sql::FIND).bind(key))
            .await?;
        Ok(rows.first().map(term_from_row).transpose()?)
    }

    /// Insert a new term.
    ///
    /// Both fields are trimmed. Empty fields and existing names are rejected
    /// before anything is written.
    pub async fn insert(&self, name: &str, definition: &str) -> Result<Term, GlossaryError> {
        let term = validate(name, definition).map_err(GlossaryError::Validation)?;
        let key = term.key();

        let _guard = self.write_lock.lock().await;

        if self.key_is_stored(&key).await? {
            return Err(GlossaryError::DuplicateTerm(term.name));
        }

        let created_at = chrono::Utc::now().to_rfc3339();
        let statement = Statement::new(sql::INSERT)
            .bind(term.name.as_str())
            .bind(key)
            .bind(term.definition.as_str())
            .bind(created_at);

        match self.connection.run_statement(&self.handle, &statement).await {
            Ok(_) => {}
            // Another writer outside this process got there first
            Err(ConnectionError::Constraint(_)) => {
                return Err(GlossaryError::DuplicateTerm(term.name));
            }
            Err(e) => return Err(e.into()),
        }

        self.invalidate_cache();
        crate::debug!("Inserted glossary term '{}'", term.name);
        Ok(term)
    }

    /// Delete a batch of terms by name, ignoring case.
    ///
    /// Names are deleted one statement at a time. Missing names are ignored
    /// unless some other name in the batch was removed, in which case the
    /// result is a [`GlossaryError::PartialFailure`] listing them.
    pub async fn delete<S: AsRef<str>>(&self, names: &[S]) -> Result<DeleteSummary, GlossaryError> {
        if names.is_empty() {
            return Ok(DeleteSummary::default());
        }

        let mut seen = HashSet::new();
        let requested: Vec<&str> = names
            .iter()
            .map(|n| n.as_ref())
            .filter(|n| seen.insert(name_key(n)))
            .collect();

        let _guard = self.write_lock.lock().await;

        let mut deleted = Vec::new();
        let mut failed = Vec::new();
        let mut unavailable = None;

        for name in requested {
            let statement = Statement::new(sql::DELETE).bind(name_key(name));
            match self.connection.run_statement(&self.handle, &statement).await {
                Ok(0) => failed.push(FailedDelete {
                    name: name.to_string(),
                    reason: DeleteFailure::NotFound,
                }),
                Ok(_) => deleted.push(name.to_string()),
                Err(e) => {
                    let message = e.to_string();
                    unavailable.get_or_insert_with(|| message.clone());
                    failed.push(FailedDelete {
                        name: name.to_string(),
                        reason: DeleteFailure::Unavailable(message),
                    });
                }
            }
        }

        // A failed statement may still have applied, so always drop cached reads
        self.invalidate_cache();
        crate::debug!(
            "Glossary delete: {} removed, {} not removed",
            deleted.len(),
            failed.len()
        );

        match (deleted.is_empty(), failed.is_empty(), unavailable) {
            (true, _, Some(message)) => Err(GlossaryError::StoreUnavailable(message)),
            (false, false, _) => Err(GlossaryError::PartialFailure { deleted, failed }),
            _ => Ok(DeleteSummary { deleted }),
        }
    }

    async fn key_is_stored(&self, key: &str) -> Result<bool, GlossaryError> {
        let rows = self
            .connection
            .run_query(&self.handle, &Statement::new(sql::EXISTS).bind(key))
            .await?;
        Ok(!rows.is_empty())
    }

    async fn query_terms(&self, statement: &Statement) -> Result<Vec<Term>, GlossaryError> {
        let rows = self.connection.run_query(&self.handle, statement).await?;
        let terms = rows
            .iter()
            .map(term_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(terms)
    }

    /// Fresh snapshot of every term, loading it if stale. `None` without a cache.
    async fn snapshot(&self) -> Result<Option<Arc<Vec<Term>>>, GlossaryError> {
        let Some(cache) = &self.cache else {
            return Ok(None);
        };
        if let Some(terms) = cache.get() {
            return Ok(Some(terms));
        }
        let generation = cache.generation();
        let terms = self.query_terms(&Statement::new(sql::LIST_ALL)).await?;
        Ok(Some(cache.store(generation, terms)))
    }

    fn invalidate_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate();
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

// Glossary module - terms, the store contract and its read cache

mod cache;
mod sql;
mod store;
mod term;

pub use store::{DeleteFailure, DeleteSummary, FailedDelete, GlossaryError, GlossaryStore};
pub use term::{name_key, Term, TermField, DEFAULT_EXCERPT_CHARS};

// Glossary store library: terms, the store contract and its libsql backend

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cli;
pub mod config;
pub mod connection;
pub mod glossary;
pub mod turso;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use glossary::{GlossaryError, GlossaryStore, Term};

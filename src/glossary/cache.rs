// Time-to-live snapshot of the full term list
//
// Every mutation bumps the generation and drops the snapshot. A reader that
// loaded rows under an older generation is not allowed to publish them.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::term::Term;

#[derive(Debug)]
struct Snapshot {
    terms: Arc<Vec<Term>>,
    loaded_at: Instant,
}

#[derive(Debug, Default)]
struct CacheState {
    generation: u64,
    snapshot: Option<Snapshot>,
}

/// Read cache for `list_all`, invalidated synchronously by mutations
#[derive(Debug)]
pub(crate) struct ReadCache {
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl ReadCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current snapshot if it is younger than the TTL
    pub fn get(&self) -> Option<Arc<Vec<Term>>> {
        let state = self.state.lock();
        state
            .snapshot
            .as_ref()
            .filter(|s| s.loaded_at.elapsed() < self.ttl)
            .map(|s| Arc::clone(&s.terms))
    }

    /// Generation to pass to [`ReadCache::store`] for a load that starts now
    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }

    /// Publish terms loaded under `generation`.
    ///
    /// The snapshot is only kept if no mutation happened since the load began.
    pub fn store(&self, generation: u64, terms: Vec<Term>) -> Arc<Vec<Term>> {
        let terms = Arc::new(terms);
        let mut state = self.state.lock();
        if state.generation == generation {
            state.snapshot = Some(Snapshot {
                terms: Arc::clone(&terms),
                loaded_at: Instant::now(),
            });
        } else {
            crate::trace!(
                "Discarding glossary snapshot from generation {} (now {})",
                generation,
                state.generation
            );
        }
        terms
    }

    pub fn invalidate(&self) {
        let mut state = self.state.lock();
        state.generation = state.generation.wrapping_add(1);
        state.snapshot = None;
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;

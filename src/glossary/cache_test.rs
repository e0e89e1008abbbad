use super::*;

fn terms(names: &[&str]) -> Vec<Term> {
    names.iter().map(|n| Term::new(*n, "def")).collect()
}

#[test]
fn test_empty_cache_misses() {
    let cache = ReadCache::new(Duration::from_secs(300));
    assert!(cache.get().is_none());
}

#[test]
fn test_store_then_get() {
    let cache = ReadCache::new(Duration::from_secs(300));
    let generation = cache.generation();

    cache.store(generation, terms(&["Bit", "Byte"]));

    let snapshot = cache.get().expect("Snapshot should be fresh");
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].name, "Bit");
}

#[test]
fn test_zero_ttl_never_serves() {
    let cache = ReadCache::new(Duration::ZERO);
    let generation = cache.generation();

    let returned = cache.store(generation, terms(&["Bit"]));

    // The loaded terms are still handed back to the caller
    assert_eq!(returned.len(), 1);
    assert!(cache.get().is_none());
}

#[test]
fn test_invalidate_drops_snapshot() {
    let cache = ReadCache::new(Duration::from_secs(300));
    cache.store(cache.generation(), terms(&["Bit"]));

    cache.invalidate();

    assert!(cache.get().is_none());
}

#[test]
fn test_stale_generation_is_not_published() {
    let cache = ReadCache::new(Duration::from_secs(300));
    let generation = cache.generation();

    // A mutation lands while the load is in flight
    cache.invalidate();
    cache.store(generation, terms(&["Stale"]));

    assert!(cache.get().is_none());
    assert_eq!(cache.generation(), generation + 1);
}

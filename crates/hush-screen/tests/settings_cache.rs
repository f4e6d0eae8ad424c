use hush_screen::{SettingsCache, StoreHandle, ENABLE_WHITELIST};
use hush_store::Store;
use std::sync::Arc;
use tempfile::tempdir;

fn migrated_handle() -> Arc<StoreHandle> {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    Arc::new(StoreHandle::with_store(store))
}

#[test]
fn booleans_default_to_false_and_require_the_canonical_encoding() {
    let cache = SettingsCache::new(migrated_handle());

    assert!(!cache.get_bool(ENABLE_WHITELIST));

    assert!(cache.set_string(ENABLE_WHITELIST, "yes"));
    assert!(!cache.get_bool(ENABLE_WHITELIST));

    assert!(cache.set_bool(ENABLE_WHITELIST, true));
    assert!(cache.get_bool(ENABLE_WHITELIST));

    assert!(cache.set_bool(ENABLE_WHITELIST, false));
    assert!(!cache.get_bool(ENABLE_WHITELIST));
}

#[test]
fn writes_reach_the_store_before_the_cache() {
    let handle = migrated_handle();
    let cache = SettingsCache::new(handle.clone());

    assert!(cache.set_bool(ENABLE_WHITELIST, true));

    let store = handle.get().expect("store available");
    let guard = store.lock().expect("lock store");
    assert_eq!(
        guard.settings().get(ENABLE_WHITELIST).expect("get"),
        Some("TRUE".to_string())
    );
}

#[test]
fn cached_reads_do_not_observe_out_of_band_writes() {
    let handle = migrated_handle();
    let cache = SettingsCache::new(handle.clone());

    {
        let store = handle.get().expect("store available");
        let guard = store.lock().expect("lock store");
        guard.settings().set("GREETING", "hello").expect("set");
    }
    assert_eq!(cache.get_string("GREETING").as_deref(), Some("hello"));

    {
        let store = handle.get().expect("store available");
        let guard = store.lock().expect("lock store");
        guard.settings().set("GREETING", "changed").expect("set");
    }
    // The cache was populated above and is never invalidated.
    assert_eq!(cache.get_string("GREETING").as_deref(), Some("hello"));
}

#[test]
fn an_unavailable_store_reads_unset_and_rejects_writes() {
    let dir = tempdir().expect("tempdir");
    let cache = SettingsCache::new(Arc::new(StoreHandle::open_at(dir.path())));

    assert!(cache.get_string(ENABLE_WHITELIST).is_none());
    assert!(!cache.get_bool(ENABLE_WHITELIST));
    assert!(!cache.set_bool(ENABLE_WHITELIST, true));
}

use inline_sql_lint::{
    cache::{DiagnosticCache, cache_diagnostics, content_version, evict, get_cached},
    diagnostics::{ScanOptions, scan_document}
};

fn sample_diagnostics() -> Vec<inline_sql_lint::diagnostics::Diagnostic> {
    scan_document(
        "var q = `SELECT * FROM t WHERE a = $2`\n",
        &ScanOptions::default()
    )
}

#[test]
fn test_cache_new() {
    let cache = DiagnosticCache::new(100);
    assert!(cache.get("file.go", 1).is_none());
}

#[test]
fn test_cache_insert_and_get() {
    let mut cache = DiagnosticCache::new(100);
    let diagnostics = sample_diagnostics();
    cache.insert("file.go", 1, diagnostics.clone());

    let cached = cache.get("file.go", 1);
    assert!(cached.is_some());
    assert_eq!(cached.unwrap().len(), diagnostics.len());
}

#[test]
fn test_cache_version_mismatch_misses() {
    let mut cache = DiagnosticCache::new(100);
    cache.insert("file.go", 1, sample_diagnostics());
    assert!(cache.get("file.go", 2).is_none());
}

#[test]
fn test_cache_overwrite_updates_version() {
    let mut cache = DiagnosticCache::new(100);
    cache.insert("file.go", 1, sample_diagnostics());
    cache.insert("file.go", 2, Vec::new());

    assert!(cache.get("file.go", 1).is_none());
    let cached = cache.get("file.go", 2).unwrap();
    assert!(cached.is_empty());
}

#[test]
fn test_cache_remove() {
    let mut cache = DiagnosticCache::new(100);
    cache.insert("file.go", 1, sample_diagnostics());
    cache.remove("file.go");
    assert!(cache.get("file.go", 1).is_none());
}

#[test]
fn test_cache_eviction_keeps_latest() {
    let mut cache = DiagnosticCache::new(3);
    cache.insert("a.go", 1, Vec::new());
    cache.insert("b.go", 1, Vec::new());
    cache.insert("c.go", 1, Vec::new());
    cache.insert("d.go", 1, Vec::new());
    assert!(cache.get("d.go", 1).is_some());
}

#[test]
fn test_content_version_stable() {
    assert_eq!(content_version("SELECT 1"), content_version("SELECT 1"));
}

#[test]
fn test_content_version_changes_with_content() {
    assert_ne!(content_version("SELECT 1"), content_version("SELECT 2"));
}

#[test]
fn test_global_cache_roundtrip() {
    let diagnostics = sample_diagnostics();
    cache_diagnostics("cache_test_global_doc", 7, diagnostics.clone());

    let cached = get_cached("cache_test_global_doc", 7);
    assert!(cached.is_some());
    assert_eq!(cached.unwrap().len(), diagnostics.len());
}

#[test]
fn test_global_cache_miss() {
    assert!(get_cached("cache_test_unknown_doc_xyz", 1).is_none());
}

#[test]
fn test_global_cache_evict() {
    cache_diagnostics("cache_test_evicted_doc", 1, Vec::new());
    assert!(get_cached("cache_test_evicted_doc", 1).is_some());

    evict("cache_test_evicted_doc");
    assert!(get_cached("cache_test_evicted_doc", 1).is_none());
}

/// Batched vertex resolution integration tests
///
/// Vertex terminals thread edge results through the resolver: fixed-size
/// endpoint partitions, one bulk fetch per partition, eager per-batch
/// draining, encounter order preserved, failures aborting the sequence.

mod common;

use common::{knows, person, person_entity, query, MemoryGraphStore};
use graph_traversal::{CloseableIterator, Direction, TraversalError};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Store with `n` outgoing edges from alice, each to a distinct endpoint
fn fanout_store(n: usize) -> Arc<MemoryGraphStore> {
    let mut store = MemoryGraphStore::new();
    for i in 0..n {
        let id = format!("p{:03}", i);
        store.add_edge(knows("alice", &id, json!({})));
        store.add_entity(person_entity(&id, json!({ "ordinal": i })));
    }
    Arc::new(store)
}

#[test]
fn test_batch_boundaries_at_101_edges() {
    let store = fanout_store(101);
    let mut q = query(store.clone(), "alice");
    q.direction(Direction::Out);

    let mut vertices = q.vertices().unwrap();
    let mut ids = Vec::new();
    for item in &mut vertices {
        ids.push(item.unwrap().id().to_string());
    }
    vertices.close();

    // 101 results in encounter order
    assert_eq!(ids.len(), 101);
    let expected: Vec<String> = (0..101).map(|i| format!("p{:03}", i)).collect();
    assert_eq!(ids, expected);

    // Exactly three bulk fetches: 50, 50, 1
    let calls = store.calls.lock();
    let sizes: Vec<usize> = calls.fetches.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![50, 50, 1]);
}

#[test]
fn test_exact_batch_multiple_has_no_empty_fetch() {
    let store = fanout_store(100);
    let mut q = query(store.clone(), "alice");
    q.direction(Direction::Out);

    let mut vertices = q.vertices().unwrap();
    let count = vertices.by_ref().filter(Result::is_ok).count();
    vertices.close();

    assert_eq!(count, 100);
    let calls = store.calls.lock();
    let sizes: Vec<usize> = calls.fetches.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![50, 50]);
}

#[test]
fn test_duplicate_endpoints_yield_duplicate_vertices() {
    let mut store = MemoryGraphStore::new();
    store.add_edge(knows("alice", "bob", json!({ "since": 2019 })));
    store.add_edge(knows("alice", "bob", json!({ "since": 2020 })));
    store.add_edge(knows("alice", "bob", json!({ "since": 2021 })));
    store.add_entity(person_entity("bob", json!({})));
    let store = Arc::new(store);

    let mut q = query(store, "alice");
    q.direction(Direction::Out);

    let mut vertices = q.vertices().unwrap();
    let ids: Vec<String> = vertices
        .by_ref()
        .map(|item| item.unwrap().id().to_string())
        .collect();
    vertices.close();

    // One vertex per qualifying edge, no deduplication
    assert_eq!(ids, vec!["bob", "bob", "bob"]);
}

#[test]
fn test_vertex_ids_projection() {
    let store = fanout_store(3);
    let mut q = query(store, "alice");
    q.direction(Direction::Out);

    let mut ids = q.vertex_ids().unwrap();
    let indexes: Vec<_> = ids.by_ref().map(|item| item.unwrap()).collect();
    ids.close();

    assert_eq!(
        indexes,
        vec![person("p000"), person("p001"), person("p002")]
    );
}

#[test]
fn test_unresolvable_endpoints_are_skipped() {
    let mut store = MemoryGraphStore::new();
    store.add_edge(knows("alice", "bob", json!({})));
    store.add_edge(knows("alice", "ghost", json!({})));
    store.add_entity(person_entity("bob", json!({})));
    let store = Arc::new(store);

    let mut q = query(store, "alice");
    q.direction(Direction::Out);

    let mut vertices = q.vertices().unwrap();
    let ids: Vec<String> = vertices
        .by_ref()
        .map(|item| item.unwrap().id().to_string())
        .collect();
    vertices.close();

    assert_eq!(ids, vec!["bob"]);
}

#[test]
fn test_batch_fetch_failure_aborts_sequence() {
    let store = fanout_store(120);
    store.fail_fetch_at(1);

    let mut q = query(store.clone(), "alice");
    q.direction(Direction::Out);

    let mut vertices = q.vertices().unwrap();
    let mut ok = 0usize;
    let mut failure = None;
    for item in &mut vertices {
        match item {
            Ok(_) => ok += 1,
            Err(error) => {
                failure = Some(error);
                break;
            }
        }
    }

    // First batch's vertices were already yielded and stay valid
    assert_eq!(ok, 50);
    match failure.expect("batch failure") {
        TraversalError::BatchFetch { batch, .. } => assert_eq!(batch, 1),
        other => panic!("expected BatchFetch, got {:?}", other),
    }

    // Fused after the failure; upstream scan released
    assert!(vertices.next().is_none());
    let calls = store.calls.lock();
    assert!(calls.adjacent[0].closed.load(Ordering::SeqCst));

    vertices.close();
}

#[test]
fn test_resolution_respects_limit() {
    let store = fanout_store(80);
    let mut q = query(store.clone(), "alice");
    q.direction(Direction::Out).limit(10);

    let mut vertices = q.vertices().unwrap();
    let count = vertices.by_ref().filter(Result::is_ok).count();
    vertices.close();

    assert_eq!(count, 10);
    // Capped upstream: a single fetch of exactly the surviving endpoints
    let calls = store.calls.lock();
    let sizes: Vec<usize> = calls.fetches.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![10]);
}

#[test]
fn test_closing_vertices_early_releases_scan() {
    let store = fanout_store(120);
    let mut q = query(store.clone(), "alice");
    q.direction(Direction::Out);

    let mut vertices = q.vertices().unwrap();
    let first = vertices.next().unwrap().unwrap();
    assert_eq!(first.id(), "p000");
    vertices.close();

    let calls = store.calls.lock();
    assert!(calls.adjacent[0].closed.load(Ordering::SeqCst));
    // Only the first partition was ever fetched
    assert_eq!(calls.fetches.len(), 1);
}

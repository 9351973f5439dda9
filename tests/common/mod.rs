#![allow(dead_code)]

/// Shared test support: a recording in-memory graph store
///
/// Implements the consumed `GraphStore` trait over plain collections,
/// emulating server-side pushdown with the same criteria evaluator the
/// post-filter uses. Every call is recorded so tests can assert what
/// actually crossed the store seam (criteria presence, batch sizes, scan
/// closure, elements pulled).

use graph_traversal::criteria::evaluate;
use graph_traversal::iter::Closing;
use graph_traversal::{
    Auths, CriteriaNode, Direction, EdgeRecord, EdgeScan, Entity, EntityIndex, EntityScan,
    GraphStore, StoreError, StoreResult, VertexTraversal,
};
use parking_lot::Mutex;
use serde_json::Value as JsonValue;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// One recorded adjacency scan
pub struct AdjacentCall {
    pub anchors: Vec<EntityIndex>,
    pub criteria: Option<CriteriaNode>,
    pub direction: Direction,
    pub labels: Option<HashSet<String>>,
    /// Set once the scan handed out is closed
    pub closed: Arc<AtomicBool>,
    /// Number of records pulled from the scan
    pub pulled: Arc<AtomicUsize>,
}

/// Everything the store was asked to do
#[derive(Default)]
pub struct CallLog {
    pub adjacent: Vec<AdjacentCall>,
    pub fetches: Vec<Vec<EntityIndex>>,
}

#[derive(Default)]
pub struct MemoryGraphStore {
    entities: HashMap<EntityIndex, Entity>,
    edges: Vec<EdgeRecord>,
    pub calls: Mutex<CallLog>,
    fail_scan: Mutex<bool>,
    fail_fetch_at: Mutex<Option<usize>>,
}

impl MemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.insert(entity.index.clone(), entity);
    }

    pub fn add_edge(&mut self, record: EdgeRecord) {
        self.edges.push(record);
    }

    /// Make the next adjacency scan fail to open
    pub fn fail_next_scan(&self) {
        *self.fail_scan.lock() = true;
    }

    /// Make the n-th bulk fetch (zero-based) fail
    pub fn fail_fetch_at(&self, call: usize) {
        *self.fail_fetch_at.lock() = Some(call);
    }
}

impl GraphStore for MemoryGraphStore {
    fn adjacent_edges(
        &self,
        anchors: &[EntityIndex],
        criteria: Option<&CriteriaNode>,
        direction: Direction,
        labels: Option<&HashSet<String>>,
        _auths: &Auths,
    ) -> StoreResult<EdgeScan> {
        {
            let mut fail = self.fail_scan.lock();
            if *fail {
                *fail = false;
                return Err(StoreError::ScanOpen("injected scan failure".to_string()));
            }
        }

        let matching: Vec<StoreResult<EdgeRecord>> = self
            .edges
            .iter()
            .filter(|edge| {
                anchors.iter().any(|anchor| match direction {
                    Direction::Out => edge.source == *anchor,
                    Direction::In => edge.destination == *anchor,
                    Direction::Both => edge.source == *anchor || edge.destination == *anchor,
                })
            })
            .filter(|edge| match labels {
                Some(set) => set.contains(&edge.label),
                None => true,
            })
            .filter(|edge| match criteria {
                Some(node) => evaluate(node, &edge.properties),
                None => true,
            })
            .cloned()
            .map(Ok)
            .collect();

        let closed = Arc::new(AtomicBool::new(false));
        let pulled = Arc::new(AtomicUsize::new(0));
        self.calls.lock().adjacent.push(AdjacentCall {
            anchors: anchors.to_vec(),
            criteria: criteria.cloned(),
            direction,
            labels: labels.cloned(),
            closed: closed.clone(),
            pulled: pulled.clone(),
        });

        let pull_counter = pulled;
        let close_flag = closed;
        let records = matching.into_iter().inspect(move |_| {
            pull_counter.fetch_add(1, Ordering::SeqCst);
        });
        Ok(Box::new(Closing::with_hook(records, move || {
            close_flag.store(true, Ordering::SeqCst);
        })))
    }

    fn get(
        &self,
        indexes: &[EntityIndex],
        criteria: Option<&CriteriaNode>,
        _auths: &Auths,
    ) -> StoreResult<EntityScan> {
        let call = {
            let mut log = self.calls.lock();
            log.fetches.push(indexes.to_vec());
            log.fetches.len() - 1
        };

        if *self.fail_fetch_at.lock() == Some(call) {
            return Err(StoreError::Fetch("injected fetch failure".to_string()));
        }

        // One entity per requested index, in request order; unknown indexes
        // are skipped, duplicates yield duplicates
        let results: Vec<StoreResult<Entity>> = indexes
            .iter()
            .filter_map(|index| self.entities.get(index).cloned())
            .filter(|entity| match criteria {
                Some(node) => evaluate(node, &entity.properties),
                None => true,
            })
            .map(Ok)
            .collect();

        Ok(Box::new(Closing::new(results.into_iter())))
    }
}

pub fn person(id: &str) -> EntityIndex {
    EntityIndex::new("person", id)
}

pub fn person_entity(id: &str, properties: JsonValue) -> Entity {
    Entity::new(person(id), properties)
}

pub fn knows(source: &str, destination: &str, properties: JsonValue) -> EdgeRecord {
    EdgeRecord::new("knows", person(source), person(destination), properties)
}

pub fn labeled(label: &str, source: &str, destination: &str, properties: JsonValue) -> EdgeRecord {
    EdgeRecord::new(label, person(source), person(destination), properties)
}

/// Traversal anchored at a person vertex, empty auths
pub fn query(store: Arc<MemoryGraphStore>, anchor: &str) -> VertexTraversal {
    VertexTraversal::new(person(anchor), store, Auths::empty())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

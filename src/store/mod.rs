/// Consumed store interfaces
///
/// The sorted key-value store underneath the entity/graph store is an
/// external collaborator; this module defines only the surface the traversal
/// layer consumes:
/// - GraphStore trait: adjacency scans and bulk entity fetches
/// - EdgeRecord: raw adjacency record as the store returns it
/// - Scan type aliases: lazy, closeable result sequences

pub mod error;

use crate::criteria::CriteriaNode;
use crate::iter::CloseableIterator;
use crate::types::{Auths, Direction, Entity, EntityIndex};
pub use error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::sync::Arc;

/// Raw adjacency record returned by an edge scan
///
/// Owned by the store; the traversal layer decorates it into a transient
/// `Edge` view and never writes it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Edge label (relationship type)
    pub label: String,

    /// Source endpoint
    pub source: EntityIndex,

    /// Destination endpoint
    pub destination: EntityIndex,

    /// Properties stored as JSON
    pub properties: JsonValue,
}

impl EdgeRecord {
    /// Create a new edge record
    pub fn new(
        label: impl Into<String>,
        source: EntityIndex,
        destination: EntityIndex,
        properties: JsonValue,
    ) -> Self {
        Self {
            label: label.into(),
            source,
            destination,
            properties,
        }
    }
}

/// Lazy scan of adjacency records; items surface store failures in-stream
pub type EdgeScan = Box<dyn CloseableIterator<Item = StoreResult<EdgeRecord>>>;

/// Lazy scan of resolved entities
pub type EntityScan = Box<dyn CloseableIterator<Item = StoreResult<Entity>>>;

/// Graph/entity store abstraction
///
/// Implementations execute scans server-side against the sorted key-value
/// store. Both operations hand back single-pass, closeable sequences; the
/// consumer owns their release.
pub trait GraphStore: Send + Sync {
    /// Scan edges adjacent to a set of anchor vertices
    ///
    /// # Arguments
    /// * `anchors` - Indexes of the anchor vertices (must be non-empty)
    /// * `criteria` - Predicate tree evaluated by the scan itself; `None`
    ///   means unfiltered
    /// * `direction` - Which endpoint the anchors must occupy
    /// * `labels` - Restrict to these edge labels; `None` means unrestricted,
    ///   an empty set means no results
    /// * `auths` - Authorization labels, passed through unmodified
    ///
    /// # Returns
    /// * `Ok(scan)` - Lazy edge sequence in the store's key order
    /// * `Err(StoreError)` if the scan session could not be opened
    fn adjacent_edges(
        &self,
        anchors: &[EntityIndex],
        criteria: Option<&CriteriaNode>,
        direction: Direction,
        labels: Option<&HashSet<String>>,
        auths: &Auths,
    ) -> StoreResult<EdgeScan>;

    /// Bulk-fetch entities by index
    ///
    /// Returns one entity per requested index, in request order; indexes that
    /// resolve to nothing are skipped. Duplicate indexes in the request yield
    /// duplicate entities.
    ///
    /// # Arguments
    /// * `indexes` - Indexes to fetch
    /// * `criteria` - Optional predicate applied by the store; `None` means
    ///   unfiltered
    /// * `auths` - Authorization labels, passed through unmodified
    ///
    /// # Returns
    /// * `Ok(scan)` - Lazy entity sequence
    /// * `Err(StoreError)` if the fetch could not be opened
    fn get(
        &self,
        indexes: &[EntityIndex],
        criteria: Option<&CriteriaNode>,
        auths: &Auths,
    ) -> StoreResult<EntityScan>;
}

/// Shared store handle
pub type SharedStore = Arc<dyn GraphStore>;

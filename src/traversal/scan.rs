use super::{TraversalError, TraversalResult};
use crate::criteria::CriteriaNode;
use crate::iter::{CloseableIter, Transform};
use crate::store::{EdgeRecord, GraphStore, StoreResult};
use crate::types::{Auths, Direction, Edge, EntityIndex};
use std::collections::HashSet;
use tracing::debug;

/// Issue an adjacency scan and decorate its records into edge views
///
/// The pushed criteria tree (if any) is evaluated by the scan itself;
/// direction and labels narrow the scan server-side. `labels` of `None`
/// means unrestricted, while a present-but-empty set means no results.
/// Iteration order is whatever the store's key order produces.
///
/// The returned sequence holds an open scan session: the consumer must close
/// it, on the success path and on early termination alike.
///
/// # Arguments
/// * `store` - The graph store collaborator
/// * `anchors` - Anchor vertex indexes (must be non-empty)
/// * `pushed` - Criteria evaluated by the scan, or `None`
/// * `direction` - Which endpoint the anchors must occupy
/// * `labels` - Edge label restriction, or `None`
/// * `auths` - Authorization labels, passed through unmodified
pub fn adjacent_edge_scan(
    store: &dyn GraphStore,
    anchors: &[EntityIndex],
    pushed: Option<&CriteriaNode>,
    direction: Direction,
    labels: Option<&HashSet<String>>,
    auths: &Auths,
) -> TraversalResult<CloseableIter<TraversalResult<Edge>>> {
    if anchors.is_empty() {
        return Err(TraversalError::EmptyAnchors);
    }

    debug!(
        anchors = anchors.len(),
        direction = %direction,
        labels = labels.map(|l| l.len()),
        pushed = pushed.is_some(),
        "issuing adjacency scan"
    );

    let scan = store
        .adjacent_edges(anchors, pushed, direction, labels, auths)
        .map_err(TraversalError::ResourceAcquisition)?;

    // Decoration is lazy: records become views only as the scan is pulled.
    // Each edge resolves its "other" endpoint against the anchor it matched.
    let anchor_set: Vec<EntityIndex> = anchors.to_vec();
    let edges = Transform::new(scan, move |record: StoreResult<EdgeRecord>| -> TraversalResult<Edge> {
        let record = record?;
        let anchor = anchor_set
            .iter()
            .find(|a| record.source == **a || record.destination == **a)
            .cloned()
            .unwrap_or_else(|| record.source.clone());
        Ok(Edge::new(record, anchor))
    });

    Ok(Box::new(edges))
}

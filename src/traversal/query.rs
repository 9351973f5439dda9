use super::filter::EdgePredicate;
use super::planner::ScanPlan;
use super::resolver::resolve_vertices;
use super::scan::adjacent_edge_scan;
use super::TraversalResult;
use crate::criteria::{comparison, Compare, CriteriaBuilder, CriteriaNode};
use crate::iter::{CloseableIter, CloseableIterator, Filtered, Limited, Transform};
use crate::store::SharedStore;
use crate::types::{Auths, Direction, Edge, EntityIndex, Vertex};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use tracing::debug;

/// Where a configured predicate is evaluated
///
/// `Pushed` predicates travel with the scan and run server-side; `PostFilter`
/// predicates run client-side after records are fetched, for properties the
/// scan cannot see (derived or computed after resolution). The default is
/// `Pushed`; post-filtering is an explicit opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Pushed,
    PostFilter,
}

/// Lazy edge results of a traversal
pub type EdgeIter = CloseableIter<TraversalResult<Edge>>;

/// Lazy vertex results of a traversal
pub type VertexIter = CloseableIter<TraversalResult<Vertex>>;

/// Lazy vertex-index results of a traversal
pub type EntityIndexIter = CloseableIter<TraversalResult<EntityIndex>>;

/// Fluent traversal query anchored at a single vertex
///
/// Callers configure direction, labels, predicates and an optional limit,
/// then request edges, vertices or a count. Each terminal call re-derives
/// the criteria trees from builder state, splits them into pushed and
/// residual portions, runs the adjacency scan, post-filters, and (for
/// vertex requests) resolves endpoints in bounded batches.
///
/// Configuration calls borrow mutably and return `&mut Self` for chaining.
/// Terminal calls borrow immutably, so one configured query can run several
/// times; the internal trees are read without synchronization, so concurrent
/// terminal calls need independent query instances.
pub struct VertexTraversal {
    store: SharedStore,
    anchor: EntityIndex,
    auths: Auths,
    direction: Direction,
    labels: Option<HashSet<String>>,
    limit: Option<usize>,
    pushed: CriteriaBuilder,
    residual: CriteriaBuilder,
}

impl std::fmt::Debug for VertexTraversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexTraversal")
            .field("store", &"<dyn GraphStore>")
            .field("anchor", &self.anchor)
            .field("auths", &self.auths)
            .field("direction", &self.direction)
            .field("labels", &self.labels)
            .field("limit", &self.limit)
            .field("pushed", &self.pushed)
            .field("residual", &self.residual)
            .finish()
    }
}

impl VertexTraversal {
    /// Create a traversal anchored at `anchor`
    pub fn new(anchor: EntityIndex, store: SharedStore, auths: Auths) -> Self {
        Self {
            store,
            anchor,
            auths,
            direction: Direction::Both,
            labels: None,
            limit: None,
            pushed: CriteriaBuilder::and(),
            residual: CriteriaBuilder::and(),
        }
    }

    /// Restrict the traversal direction (default: `Both`)
    pub fn direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = direction;
        self
    }

    /// Restrict results to edges carrying one of these labels
    ///
    /// An empty collection restricts to nothing; not calling this at all
    /// leaves labels unrestricted.
    pub fn labels<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Cap the number of results (default: unlimited)
    ///
    /// Applied after post-filtering: only edges surviving the residual
    /// predicates count against the cap. Reaching the cap closes the
    /// underlying scan.
    pub fn limit(&mut self, limit: usize) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    fn push_node(&mut self, node: CriteriaNode, placement: Placement) -> &mut Self {
        let slot = match placement {
            Placement::Pushed => &mut self.pushed,
            Placement::PostFilter => &mut self.residual,
        };
        let taken = std::mem::replace(slot, CriteriaBuilder::and());
        *slot = taken.node(node);
        self
    }

    /// Require the property to be present
    pub fn has(&mut self, key: impl Into<String>) -> &mut Self {
        self.has_placed(key, Placement::Pushed)
    }

    /// Require the property to be present, with explicit placement
    pub fn has_placed(&mut self, key: impl Into<String>, placement: Placement) -> &mut Self {
        self.push_node(CriteriaNode::Has { key: key.into() }, placement)
    }

    /// Require the property to be absent
    pub fn has_not(&mut self, key: impl Into<String>) -> &mut Self {
        self.has_not_placed(key, Placement::Pushed)
    }

    /// Require the property to be absent, with explicit placement
    pub fn has_not_placed(&mut self, key: impl Into<String>, placement: Placement) -> &mut Self {
        self.push_node(CriteriaNode::HasNot { key: key.into() }, placement)
    }

    /// Require the property to equal the value
    pub fn has_eq(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> &mut Self {
        self.has_eq_placed(key, value, Placement::Pushed)
    }

    /// Require the property to equal the value, with explicit placement
    pub fn has_eq_placed(
        &mut self,
        key: impl Into<String>,
        value: impl Into<JsonValue>,
        placement: Placement,
    ) -> &mut Self {
        self.push_node(
            CriteriaNode::Eq {
                key: key.into(),
                value: value.into(),
            },
            placement,
        )
    }

    /// Require the property to be present and differ from the value
    pub fn has_ne(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> &mut Self {
        self.has_ne_placed(key, value, Placement::Pushed)
    }

    /// Require the property to differ from the value, with explicit placement
    pub fn has_ne_placed(
        &mut self,
        key: impl Into<String>,
        value: impl Into<JsonValue>,
        placement: Placement,
    ) -> &mut Self {
        self.push_node(
            CriteriaNode::NotEq {
                key: key.into(),
                value: value.into(),
            },
            placement,
        )
    }

    /// Apply a typed comparison to the property
    ///
    /// Fails with `UnsupportedPredicate` for operators outside the supported
    /// comparison set, leaving the query state untouched.
    pub fn has_cmp(
        &mut self,
        key: impl Into<String>,
        compare: Compare,
        value: impl Into<JsonValue>,
    ) -> TraversalResult<&mut Self> {
        self.has_cmp_placed(key, compare, value, Placement::Pushed)
    }

    /// Apply a typed comparison with explicit placement
    pub fn has_cmp_placed(
        &mut self,
        key: impl Into<String>,
        compare: Compare,
        value: impl Into<JsonValue>,
        placement: Placement,
    ) -> TraversalResult<&mut Self> {
        let node = comparison(key, compare, value)?;
        Ok(self.push_node(node, placement))
    }

    /// Require the property to fall within [start, stop], inclusive
    pub fn interval(
        &mut self,
        key: impl Into<String>,
        start: impl Into<JsonValue>,
        stop: impl Into<JsonValue>,
    ) -> &mut Self {
        self.interval_placed(key, start, stop, Placement::Pushed)
    }

    /// Interval restriction with explicit placement
    pub fn interval_placed(
        &mut self,
        key: impl Into<String>,
        start: impl Into<JsonValue>,
        stop: impl Into<JsonValue>,
        placement: Placement,
    ) -> &mut Self {
        self.push_node(
            CriteriaNode::Range {
                key: key.into(),
                start: start.into(),
                stop: stop.into(),
            },
            placement,
        )
    }

    /// Run the traversal and return matching edges
    ///
    /// The sequence is lazy and single-pass; the caller must close it to
    /// release the underlying scan session.
    pub fn edges(&self) -> TraversalResult<EdgeIter> {
        let plan = ScanPlan::split(self.pushed.clone().build(), self.residual.clone().build());

        debug!(
            residual = plan.residual.is_some(),
            limit = self.limit,
            "executing edge traversal"
        );

        let scan = adjacent_edge_scan(
            self.store.as_ref(),
            std::slice::from_ref(&self.anchor),
            plan.pushed.as_ref(),
            self.direction,
            self.labels.as_ref(),
            &self.auths,
        )?;

        let mut edges: EdgeIter = scan;

        if let Some(residual) = plan.residual {
            let predicate = EdgePredicate::new(residual);
            edges = Box::new(Filtered::new(edges, move |item: &TraversalResult<Edge>| {
                match item {
                    Ok(edge) => predicate.matches(edge),
                    // Errors pass through; the consumer sees the failure
                    Err(_) => true,
                }
            }));
        }

        if let Some(limit) = self.limit {
            edges = Box::new(Limited::new(edges, limit));
        }

        Ok(edges)
    }

    /// Run the traversal and resolve the vertices at the far endpoints
    ///
    /// One vertex per qualifying edge, duplicates included; endpoints are
    /// fetched in bounded batches.
    pub fn vertices(&self) -> TraversalResult<VertexIter> {
        let edges = self.edges()?;
        Ok(resolve_vertices(edges, self.store.clone(), self.auths.clone()))
    }

    /// Run the traversal and return only the resolved vertex indexes
    pub fn vertex_ids(&self) -> TraversalResult<EntityIndexIter> {
        let vertices = self.vertices()?;
        Ok(Box::new(Transform::new(
            vertices,
            |item: TraversalResult<Vertex>| item.map(|vertex| vertex.index().clone()),
        )))
    }

    /// Count the edges the traversal would yield
    ///
    /// Cardinality requires full enumeration: the edge sequence is drained,
    /// counted, and closed. A mid-stream failure propagates after closing.
    pub fn count(&self) -> TraversalResult<u64> {
        let mut edges = self.edges()?;
        let mut count = 0u64;
        let mut failure = None;

        for item in &mut edges {
            match item {
                Ok(_) => count += 1,
                Err(error) => {
                    failure = Some(error);
                    break;
                }
            }
        }
        edges.close();

        match failure {
            Some(error) => Err(error),
            None => Ok(count),
        }
    }
}

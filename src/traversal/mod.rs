/// Graph traversal query engine
///
/// This module implements the traversal surface layered over the consumed
/// store interfaces:
/// - VertexTraversal: fluent predicate query anchored at a vertex
/// - ScanPlan: pushed vs. residual criteria split
/// - adjacency scan execution and edge decoration
/// - client-side post-filtering of residual predicates
/// - batched vertex resolution with bounded per-request cardinality

mod filter;
mod planner;
mod query;
mod resolver;
mod scan;

pub use filter::EdgePredicate;
pub use planner::ScanPlan;
pub use query::{EdgeIter, EntityIndexIter, Placement, VertexIter, VertexTraversal};
pub use resolver::{resolve_vertices, BATCH_SIZE};
pub use scan::adjacent_edge_scan;

use crate::criteria::CriteriaError;
use crate::store::StoreError;
use thiserror::Error;

/// Traversal errors
///
/// Everything surfaces to the caller of the terminal operation; nothing is
/// swallowed or retried. Elements a lazy sequence already yielded before a
/// failure stay valid.
#[derive(Error, Debug)]
pub enum TraversalError {
    /// Operator outside the supported comparison set
    #[error(transparent)]
    UnsupportedPredicate(#[from] CriteriaError),

    /// An adjacency scan was requested with no anchor vertices
    #[error("adjacency scan requires at least one anchor vertex")]
    EmptyAnchors,

    /// The store failed to open a scan or fetch
    #[error("failed to acquire scan resources: {0}")]
    ResourceAcquisition(#[source] StoreError),

    /// A bulk entity fetch for one partition failed mid-traversal
    #[error("bulk fetch for batch {batch} failed: {source}")]
    BatchFetch {
        batch: usize,
        #[source]
        source: StoreError,
    },

    /// A store failure surfaced mid-stream
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for traversal operations
pub type TraversalResult<T> = Result<T, TraversalError>;

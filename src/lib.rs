/// Graph Traversal Query Layer
///
/// A traversal query engine layered over an entity/graph store backed by a
/// sorted, column-oriented distributed key-value store.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │        Graph Traversal Query Layer               │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   VertexTraversal (fluent API) │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Scan Planner (push/residual) │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Adjacency Scan + Post-Filter │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Batched Vertex Resolver      │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Graph/Entity Store (trait)   │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (EntityIndex, Entity, Vertex, Edge, Direction, Auths)
/// - `criteria`: Predicate AST, fluent builder, translator and evaluator
/// - `iter`: Closeable iterator trait and close-propagating combinators
/// - `store`: Consumed store interfaces (adjacency scans, bulk fetches)
/// - `traversal`: Query surface, scan planning, post-filtering, resolution
/// - `env`: Scan execution environment consumed by lower-level iterators

pub mod criteria;
pub mod env;
pub mod iter;
pub mod store;
pub mod traversal;
pub mod types;

// Re-export commonly used types
pub use types::{Auths, Direction, Edge, Entity, EntityIndex, Vertex};

// Re-export criteria types
pub use criteria::{comparison, Compare, CriteriaBuilder, CriteriaError, CriteriaNode};

// Re-export iterator types
pub use iter::{CloseableIter, CloseableIterator};

// Re-export store types
pub use store::{EdgeRecord, EdgeScan, EntityScan, GraphStore, SharedStore, StoreError, StoreResult};

// Re-export traversal types
pub use traversal::{
    EdgeIter, EntityIndexIter, Placement, ScanPlan, TraversalError, TraversalResult, VertexIter,
    VertexTraversal,
};

// Re-export environment types
pub use env::{DefaultScanEnvironment, EnvError, EnvResult, ScanConfig, ScanEnvironment, ScanScope};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

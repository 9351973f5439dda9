/// Core data types for the graph traversal layer
///
/// This module defines the fundamental types used throughout the system:
/// - EntityIndex: composite key (entity type + entity id) for a stored entity
/// - Entity: decoded entity with its property map
/// - Vertex: read-only graph view over a resolved entity
/// - Edge: decorated view over a raw adjacency record
/// - Direction: adjacency scan direction (Out, In, Both)
/// - Auths: opaque authorization labels threaded through store calls

pub mod auths;
pub mod direction;
pub mod edge;
pub mod entity;
pub mod vertex;

pub use auths::Auths;
pub use direction::Direction;
pub use edge::Edge;
pub use entity::{Entity, EntityIndex};
pub use vertex::Vertex;

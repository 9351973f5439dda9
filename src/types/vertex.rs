use super::entity::{Entity, EntityIndex};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Vertex view over a resolved entity
///
/// Produced by vertex resolution after an adjacency scan. Read-only: the
/// underlying entity is owned by the store and this layer never writes it
/// back. Like edge views, vertex views become invalid once the sequence that
/// yielded them is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    entity: Entity,
}

impl Vertex {
    /// Wrap a resolved entity
    pub fn new(entity: Entity) -> Self {
        Self { entity }
    }

    /// Stable index of the underlying entity
    pub fn index(&self) -> &EntityIndex {
        &self.entity.index
    }

    /// Entity id (unique within the type)
    pub fn id(&self) -> &str {
        &self.entity.index.id
    }

    /// Entity type (class identifier)
    pub fn entity_type(&self) -> &str {
        &self.entity.index.entity_type
    }

    /// Get a property value by key
    pub fn get_property(&self, key: &str) -> Option<&JsonValue> {
        self.entity.get_property(key)
    }

    /// Check if the vertex has a specific property
    pub fn has_property(&self, key: &str) -> bool {
        self.entity.has_property(key)
    }

    /// Properties of the underlying entity
    pub fn properties(&self) -> &JsonValue {
        &self.entity.properties
    }

    /// Convert properties to a HashMap
    pub fn properties_as_map(&self) -> HashMap<String, JsonValue> {
        self.entity.properties_as_map()
    }

    /// Take back the underlying entity
    pub fn into_entity(self) -> Entity {
        self.entity
    }
}

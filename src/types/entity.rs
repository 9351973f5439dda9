use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt;

/// EntityIndex: composite key identifying a stored entity
///
/// Format: entity type + entity id
/// - Type: the entity's class (e.g. "person", "organization")
/// - Id: unique within the type
///
/// The underlying store keys its rows on this pair, so an index is all that
/// is needed to address an entity without materializing it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EntityIndex {
    /// Entity type (class identifier)
    pub entity_type: String,

    /// Entity id (unique within the type)
    pub id: String,
}

impl EntityIndex {
    /// Create a new entity index from a type and an id
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for EntityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.id)
    }
}

/// Entity resolved from the store
///
/// Represents a decoded entity with:
/// - Stable index (type + id)
/// - Properties (arbitrary JSON data)
///
/// Attribute decoding from the store's column format happens before an
/// Entity is constructed; this layer only reads the property map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    /// Stable index of this entity
    pub index: EntityIndex,

    /// Properties stored as JSON
    pub properties: JsonValue,
}

impl Entity {
    /// Create a new entity
    pub fn new(index: EntityIndex, properties: JsonValue) -> Self {
        Self { index, properties }
    }

    /// Create an entity with an empty property map
    pub fn new_empty(index: EntityIndex) -> Self {
        Self::new(index, JsonValue::Object(serde_json::Map::new()))
    }

    /// Get a property value by key
    pub fn get_property(&self, key: &str) -> Option<&JsonValue> {
        self.properties.get(key)
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: JsonValue) {
        if let JsonValue::Object(ref mut map) = self.properties {
            map.insert(key.into(), value);
        }
    }

    /// Remove a property
    pub fn remove_property(&mut self, key: &str) -> Option<JsonValue> {
        if let JsonValue::Object(ref mut map) = self.properties {
            map.remove(key)
        } else {
            None
        }
    }

    /// Get all property keys
    pub fn property_keys(&self) -> Vec<String> {
        if let JsonValue::Object(map) = &self.properties {
            map.keys().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Check if the entity has a specific property
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.get(key).is_some()
    }

    /// Convert properties to a HashMap
    pub fn properties_as_map(&self) -> HashMap<String, JsonValue> {
        if let JsonValue::Object(map) = &self.properties {
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
        } else {
            HashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_creation() {
        let index = EntityIndex::new("person", "alice");
        assert_eq!(index.entity_type, "person");
        assert_eq!(index.id, "alice");
        assert_eq!(index.to_string(), "person:alice");
    }

    #[test]
    fn test_index_ordering() {
        let a = EntityIndex::new("person", "alice");
        let b = EntityIndex::new("person", "bob");
        let c = EntityIndex::new("place", "berlin");

        assert!(a < b);
        assert!(c < a); // "place" sorts before "person"
    }

    #[test]
    fn test_entity_creation() {
        let props = json!({
            "name": "Alice",
            "age": 30
        });

        let entity = Entity::new(EntityIndex::new("person", "alice"), props);

        assert_eq!(entity.index, EntityIndex::new("person", "alice"));
        assert_eq!(entity.get_property("name"), Some(&json!("Alice")));
        assert_eq!(entity.get_property("age"), Some(&json!(30)));
    }

    #[test]
    fn test_entity_empty() {
        let entity = Entity::new_empty(EntityIndex::new("person", "alice"));

        assert_eq!(entity.index.id, "alice");
        assert!(entity.property_keys().is_empty());
    }

    #[test]
    fn test_entity_set_property() {
        let mut entity = Entity::new_empty(EntityIndex::new("person", "bob"));

        entity.set_property("name", json!("Bob"));
        entity.set_property("age", json!(25));

        assert_eq!(entity.get_property("name"), Some(&json!("Bob")));
        assert_eq!(entity.get_property("age"), Some(&json!(25)));
    }

    #[test]
    fn test_entity_remove_property() {
        let props = json!({
            "name": "Alice",
            "age": 30
        });
        let mut entity = Entity::new(EntityIndex::new("person", "alice"), props);

        let removed = entity.remove_property("age");
        assert_eq!(removed, Some(json!(30)));
        assert!(!entity.has_property("age"));
        assert!(entity.has_property("name"));
    }

    #[test]
    fn test_entity_serialization() {
        let props = json!({
            "name": "Alice",
            "age": 30
        });
        let entity = Entity::new(EntityIndex::new("person", "alice"), props);

        // Serialize to JSON
        let serialized = serde_json::to_string(&entity).unwrap();

        // Deserialize back
        let deserialized: Entity = serde_json::from_str(&serialized).unwrap();

        assert_eq!(entity, deserialized);
    }
}

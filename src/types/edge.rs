use super::entity::EntityIndex;
use crate::store::EdgeRecord;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Edge view produced by an adjacency scan
///
/// Decorates a raw edge record with the anchor vertex of the query that
/// produced it, so the "other" endpoint can be resolved without knowing the
/// scan direction. Views are transient: they are only valid while the scan
/// that yielded them is open.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    record: EdgeRecord,
    anchor: EntityIndex,
}

impl Edge {
    /// Decorate a raw edge record relative to an anchor vertex
    pub fn new(record: EdgeRecord, anchor: EntityIndex) -> Self {
        Self { record, anchor }
    }

    /// Edge label (e.g. "knows", "works_for")
    pub fn label(&self) -> &str {
        &self.record.label
    }

    /// Source endpoint of the stored record
    pub fn source(&self) -> &EntityIndex {
        &self.record.source
    }

    /// Destination endpoint of the stored record
    pub fn destination(&self) -> &EntityIndex {
        &self.record.destination
    }

    /// The anchor vertex this view was resolved against
    pub fn anchor(&self) -> &EntityIndex {
        &self.anchor
    }

    /// The endpoint that is not the anchor
    ///
    /// For an outgoing edge this is the destination, for an incoming edge the
    /// source. Self-loops resolve to the destination.
    pub fn other(&self) -> &EntityIndex {
        if self.record.source == self.anchor {
            &self.record.destination
        } else {
            &self.record.source
        }
    }

    /// Get a property value by key
    pub fn get_property(&self, key: &str) -> Option<&JsonValue> {
        self.record.properties.get(key)
    }

    /// Check if the edge has a specific property
    pub fn has_property(&self, key: &str) -> bool {
        self.record.properties.get(key).is_some()
    }

    /// Properties of the underlying record
    pub fn properties(&self) -> &JsonValue {
        &self.record.properties
    }

    /// Convert properties to a HashMap
    pub fn properties_as_map(&self) -> HashMap<String, JsonValue> {
        if let JsonValue::Object(map) = &self.record.properties {
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
        } else {
            HashMap::new()
        }
    }

    /// Check if this edge is a self-loop
    pub fn is_self_loop(&self) -> bool {
        self.record.source == self.record.destination
    }

    /// Take back the raw record
    pub fn into_record(self) -> EdgeRecord {
        self.record
    }
}

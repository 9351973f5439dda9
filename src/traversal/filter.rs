use crate::criteria::{evaluate, CriteriaNode};
use crate::types::Edge;

/// Residual predicate applied client-side after the scan
///
/// Constructed only when the residual tree is non-empty. Evaluation is
/// deferred until the wrapped sequence is pulled, and uses the same operator
/// semantics the scan applies server-side. Errors flowing up the stream pass
/// through untouched; the predicate only judges decoded edges.
#[derive(Debug, Clone)]
pub struct EdgePredicate {
    criteria: CriteriaNode,
}

impl EdgePredicate {
    /// Build a predicate from a residual criteria tree
    pub fn new(criteria: CriteriaNode) -> Self {
        Self { criteria }
    }

    /// Evaluate the residual criteria against an edge's decoded properties
    pub fn matches(&self, edge: &Edge) -> bool {
        evaluate(&self.criteria, edge.properties())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CriteriaBuilder;
    use crate::store::EdgeRecord;
    use crate::types::EntityIndex;
    use serde_json::json;

    fn edge(properties: serde_json::Value) -> Edge {
        let record = EdgeRecord::new(
            "knows",
            EntityIndex::new("person", "alice"),
            EntityIndex::new("person", "bob"),
            properties,
        );
        Edge::new(record, EntityIndex::new("person", "alice"))
    }

    #[test]
    fn test_predicate_drops_failing_edges() {
        let predicate = EdgePredicate::new(
            CriteriaBuilder::and().greater_than("score", 10).build(),
        );

        assert!(predicate.matches(&edge(json!({ "score": 15 }))));
        assert!(!predicate.matches(&edge(json!({ "score": 10 }))));
        assert!(!predicate.matches(&edge(json!({ "weight": 1 }))));
    }

    #[test]
    fn test_predicate_with_disjunction() {
        let predicate = EdgePredicate::new(
            CriteriaBuilder::or().eq("kind", "friend").eq("kind", "family").build(),
        );

        assert!(predicate.matches(&edge(json!({ "kind": "family" }))));
        assert!(!predicate.matches(&edge(json!({ "kind": "rival" }))));
    }
}

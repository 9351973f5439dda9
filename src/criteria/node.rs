use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Immutable predicate tree node
///
/// Leaves compare a single property key against a value (or test presence);
/// `And`/`Or` combine children. A junction with zero children means "no
/// constraint" and must be treated as an absent tree, never as "match
/// nothing" — `ScanPlan` enforces this at the store seam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CriteriaNode {
    /// Property is present, any value
    Has { key: String },

    /// Property is absent
    HasNot { key: String },

    /// Property equals the value
    Eq { key: String, value: JsonValue },

    /// Property is present and differs from the value
    NotEq { key: String, value: JsonValue },

    /// Property is strictly greater than the value
    GreaterThan { key: String, value: JsonValue },

    /// Property is strictly less than the value
    LessThan { key: String, value: JsonValue },

    /// Property is greater than or equal to the value
    GreaterThanEq { key: String, value: JsonValue },

    /// Property is less than or equal to the value
    LessThanEq { key: String, value: JsonValue },

    /// Property falls within [start, stop], both ends inclusive
    Range {
        key: String,
        start: JsonValue,
        stop: JsonValue,
    },

    /// All children match (an empty conjunction matches everything)
    And { children: Vec<CriteriaNode> },

    /// At least one child matches (an empty disjunction matches everything)
    Or { children: Vec<CriteriaNode> },
}

impl CriteriaNode {
    /// Children of a junction node; leaves have none
    pub fn children(&self) -> &[CriteriaNode] {
        match self {
            CriteriaNode::And { children } | CriteriaNode::Or { children } => children,
            _ => &[],
        }
    }

    /// True for a junction with zero children, i.e. "no constraint"
    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            CriteriaNode::And { children } | CriteriaNode::Or { children } if children.is_empty()
        )
    }

    /// True for a leaf comparison or presence test
    pub fn is_leaf(&self) -> bool {
        !matches!(self, CriteriaNode::And { .. } | CriteriaNode::Or { .. })
    }
}

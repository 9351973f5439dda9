use super::node::CriteriaNode;
use serde_json::Value as JsonValue;

/// How a builder joins the predicates added to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Junction {
    And,
    Or,
}

/// Fluent criteria builder
///
/// An accumulator passed by value: every call consumes the builder and
/// returns a new one, so no mutable state is shared across a chain.
/// Predicates added at the same level are implicitly conjoined (or disjoined
/// for a builder started with `or()`); `group` nests a sub-builder for
/// explicit AND-of-OR shapes. `build()` yields the immutable tree.
///
/// Malformed trees are impossible by construction, so there is no error
/// surface at this layer.
#[derive(Debug, Clone)]
pub struct CriteriaBuilder {
    junction: Junction,
    children: Vec<CriteriaNode>,
}

impl CriteriaBuilder {
    /// Start a conjunctive (AND) builder
    pub fn and() -> Self {
        Self {
            junction: Junction::And,
            children: Vec::new(),
        }
    }

    /// Start a disjunctive (OR) builder
    pub fn or() -> Self {
        Self {
            junction: Junction::Or,
            children: Vec::new(),
        }
    }

    fn push(mut self, node: CriteriaNode) -> Self {
        self.children.push(node);
        self
    }

    /// Require the property to be present
    pub fn has(self, key: impl Into<String>) -> Self {
        self.push(CriteriaNode::Has { key: key.into() })
    }

    /// Require the property to be absent
    pub fn has_not(self, key: impl Into<String>) -> Self {
        self.push(CriteriaNode::HasNot { key: key.into() })
    }

    /// Require the property to equal the value
    pub fn eq(self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.push(CriteriaNode::Eq {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Require the property to be present and differ from the value
    pub fn not_eq(self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.push(CriteriaNode::NotEq {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Require the property to be strictly greater than the value
    pub fn greater_than(self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.push(CriteriaNode::GreaterThan {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Require the property to be strictly less than the value
    pub fn less_than(self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.push(CriteriaNode::LessThan {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Require the property to be greater than or equal to the value
    pub fn greater_than_eq(self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.push(CriteriaNode::GreaterThanEq {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Require the property to be less than or equal to the value
    pub fn less_than_eq(self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.push(CriteriaNode::LessThanEq {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Require the property to fall within [start, stop], inclusive
    pub fn range(
        self,
        key: impl Into<String>,
        start: impl Into<JsonValue>,
        stop: impl Into<JsonValue>,
    ) -> Self {
        self.push(CriteriaNode::Range {
            key: key.into(),
            start: start.into(),
            stop: stop.into(),
        })
    }

    /// Append an already-built node
    pub fn node(self, node: CriteriaNode) -> Self {
        self.push(node)
    }

    /// Nest a sub-builder as a group; empty groups are dropped
    pub fn group(self, inner: CriteriaBuilder) -> Self {
        let node = inner.build();
        if node.is_empty() {
            self
        } else {
            self.push(node)
        }
    }

    /// True if no predicates have been added
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Build the immutable criteria tree
    pub fn build(self) -> CriteriaNode {
        match self.junction {
            Junction::And => CriteriaNode::And {
                children: self.children,
            },
            Junction::Or => CriteriaNode::Or {
                children: self.children,
            },
        }
    }
}

use super::{CriteriaError, CriteriaNode};
use serde_json::Value as JsonValue;
use std::fmt;

/// Comparison operators accepted by the query surface
///
/// Only the six ordering/equality operators translate onto the criteria
/// tree; `Within` and `Without` model containment predicates the underlying
/// scan cannot evaluate and are rejected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compare {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterThanEq,
    LessThanEq,
    Within,
    Without,
}

impl Compare {
    /// Operator name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Compare::Equal => "EQUAL",
            Compare::NotEqual => "NOT_EQUAL",
            Compare::GreaterThan => "GREATER_THAN",
            Compare::LessThan => "LESS_THAN",
            Compare::GreaterThanEq => "GREATER_THAN_EQUAL",
            Compare::LessThanEq => "LESS_THAN_EQUAL",
            Compare::Within => "WITHIN",
            Compare::Without => "WITHOUT",
        }
    }
}

impl fmt::Display for Compare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Translate a typed comparison request onto a criteria-tree node
///
/// `Equal` and `NotEqual` produce the same node forms the builder's
/// `eq`/`not_eq` calls do, keeping a single canonical representation for
/// those cases. Unsupported operators fail with
/// `CriteriaError::UnsupportedPredicate` carrying the operator's name.
pub fn comparison(
    key: impl Into<String>,
    compare: Compare,
    value: impl Into<JsonValue>,
) -> Result<CriteriaNode, CriteriaError> {
    let key = key.into();
    let value = value.into();
    match compare {
        Compare::Equal => Ok(CriteriaNode::Eq { key, value }),
        Compare::NotEqual => Ok(CriteriaNode::NotEq { key, value }),
        Compare::GreaterThan => Ok(CriteriaNode::GreaterThan { key, value }),
        Compare::LessThan => Ok(CriteriaNode::LessThan { key, value }),
        Compare::GreaterThanEq => Ok(CriteriaNode::GreaterThanEq { key, value }),
        Compare::LessThanEq => Ok(CriteriaNode::LessThanEq { key, value }),
        Compare::Within | Compare::Without => {
            Err(CriteriaError::UnsupportedPredicate(compare.name().to_string()))
        }
    }
}

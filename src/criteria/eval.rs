use super::node::CriteriaNode;
use serde_json::Value as JsonValue;
use std::cmp::Ordering;

/// Natural-ordering comparison of two property values
///
/// Numbers compare numerically (integer fast path, f64 otherwise), strings
/// lexically (RFC 3339 timestamps order correctly this way), booleans with
/// false < true. Mixed or non-scalar operands are incomparable and yield
/// `None`, which fails whatever predicate asked.
pub fn compare_values(a: &JsonValue, b: &JsonValue) -> Option<Ordering> {
    match (a, b) {
        (JsonValue::Number(x), JsonValue::Number(y)) => {
            if let (Some(xi), Some(yi)) = (x.as_i64(), y.as_i64()) {
                Some(xi.cmp(&yi))
            } else {
                x.as_f64().partial_cmp(&y.as_f64())
            }
        }
        (JsonValue::String(x), JsonValue::String(y)) => Some(x.cmp(y)),
        (JsonValue::Bool(x), JsonValue::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

fn values_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match compare_values(a, b) {
        Some(ord) => ord == Ordering::Equal,
        None => a == b,
    }
}

/// Evaluate a criteria tree against a property map
///
/// Value comparisons require the property to be present; an absent property
/// fails every leaf except `HasNot`. `And`/`Or` short-circuit. An empty
/// junction is "no constraint" and matches everything.
pub fn evaluate(node: &CriteriaNode, properties: &JsonValue) -> bool {
    match node {
        CriteriaNode::Has { key } => properties.get(key).is_some(),
        CriteriaNode::HasNot { key } => properties.get(key).is_none(),
        CriteriaNode::Eq { key, value } => match properties.get(key) {
            Some(actual) => values_equal(actual, value),
            None => false,
        },
        CriteriaNode::NotEq { key, value } => match properties.get(key) {
            Some(actual) => !values_equal(actual, value),
            None => false,
        },
        CriteriaNode::GreaterThan { key, value } => {
            compare_against(properties, key, value, |ord| ord == Ordering::Greater)
        }
        CriteriaNode::LessThan { key, value } => {
            compare_against(properties, key, value, |ord| ord == Ordering::Less)
        }
        CriteriaNode::GreaterThanEq { key, value } => {
            compare_against(properties, key, value, |ord| ord != Ordering::Less)
        }
        CriteriaNode::LessThanEq { key, value } => {
            compare_against(properties, key, value, |ord| ord != Ordering::Greater)
        }
        CriteriaNode::Range { key, start, stop } => {
            compare_against(properties, key, start, |ord| ord != Ordering::Less)
                && compare_against(properties, key, stop, |ord| ord != Ordering::Greater)
        }
        CriteriaNode::And { children } => children.iter().all(|c| evaluate(c, properties)),
        CriteriaNode::Or { children } => {
            children.is_empty() || children.iter().any(|c| evaluate(c, properties))
        }
    }
}

fn compare_against(
    properties: &JsonValue,
    key: &str,
    value: &JsonValue,
    test: impl Fn(Ordering) -> bool,
) -> bool {
    match properties.get(key) {
        Some(actual) => matches!(compare_values(actual, value), Some(ord) if test(ord)),
        None => false,
    }
}

/// Criteria trees and predicate translation
///
/// This module implements the predicate side of the query layer:
/// - CriteriaNode: immutable predicate AST combining comparisons via AND/OR
/// - CriteriaBuilder: fluent, by-value builder for criteria trees
/// - Compare + comparison(): translation of typed comparison requests
/// - evaluate(): client-side evaluation used by the post-filter stage

pub mod builder;
pub mod eval;
pub mod node;
pub mod translator;

pub use builder::CriteriaBuilder;
pub use eval::{compare_values, evaluate};
pub use node::CriteriaNode;
pub use translator::{comparison, Compare};

use thiserror::Error;

/// Criteria construction errors
#[derive(Error, Debug)]
pub enum CriteriaError {
    /// Operator outside the supported comparison set
    #[error("predicate with type {0} is not supported")]
    UnsupportedPredicate(String),
}

use crate::criteria::CriteriaNode;

/// Split of a query's criteria into pushed and residual portions
///
/// The scan engine underneath is assumed capable of the full criteria
/// language, so a non-empty scan-level tree is always fully pushable. The
/// actual split point is the placement a predicate was configured with; the
/// planner never mines a single tree for unsupported sub-predicates.
///
/// Empty trees map to `None`: a junction with zero children means "no
/// constraint", and handing the store an empty-but-present tree would read
/// as "match nothing".
#[derive(Debug, Clone, PartialEq)]
pub struct ScanPlan {
    /// Criteria evaluated by the server-side scan
    pub pushed: Option<CriteriaNode>,

    /// Criteria evaluated client-side after records are fetched
    pub residual: Option<CriteriaNode>,
}

impl ScanPlan {
    /// Derive the plan from the two per-placement criteria trees
    pub fn split(pushed: CriteriaNode, residual: CriteriaNode) -> Self {
        Self {
            pushed: Self::non_empty(pushed),
            residual: Self::non_empty(residual),
        }
    }

    fn non_empty(tree: CriteriaNode) -> Option<CriteriaNode> {
        if tree.is_empty() {
            None
        } else {
            Some(tree)
        }
    }
}

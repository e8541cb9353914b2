//! Search policy types.

use crate::error::SearchError;

/// Ordering, relaxation and budget configuration for one search run.
///
/// `Default` is textbook A*: `f = g + h` ordering, relaxed nodes are moved
/// under the node being expanded and re-queued with their improved key, and
/// there are no budgets. [`SearchPolicy::reference`] reproduces the legacy
/// engine this crate replaces, quirks included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// How frontier priority is computed.
    pub priority_rule: PriorityRule,
    /// Where a rediscovered node is attached when a shorter route is found.
    pub relaxation_rule: RelaxationRule,
    /// Re-queue a relaxed frontier node under its new key. When `false` the
    /// node keeps the key it was pushed with until it is popped.
    pub requeue_relaxed: bool,
    /// Stop after this many expansions.
    pub max_expansions: Option<u64>,
    /// Do not generate nodes deeper than this.
    pub max_depth: Option<u32>,
}

impl SearchPolicy {
    /// The legacy engine's behaviour: heuristic-only ordering, reparenting to
    /// the expanded node's parent, no re-queue, no budgets.
    ///
    /// Kept so move/open/closed counts recorded against the legacy engine can
    /// be reproduced. Paths found under this policy may contain steps that are
    /// not single transitions.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            priority_rule: PriorityRule::HeuristicOnly,
            relaxation_rule: RelaxationRule::ReparentToExpandedParent,
            requeue_relaxed: false,
            max_expansions: None,
            max_depth: None,
        }
    }

    /// Reject option combinations that cannot run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// JSON snapshot of the policy, used in run summaries and digests.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
            "priority_rule": self.priority_rule.as_str(),
            "relaxation_rule": self.relaxation_rule.as_str(),
            "requeue_relaxed": self.requeue_relaxed,
        })
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            priority_rule: PriorityRule::DepthPlusHeuristic,
            relaxation_rule: RelaxationRule::ReparentToExpanded,
            requeue_relaxed: true,
            max_expansions: None,
            max_depth: None,
        }
    }
}

/// Frontier priority rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityRule {
    /// `depth + heuristic` (A*). Default.
    DepthPlusHeuristic,
    /// `heuristic` alone (greedy best-first). This is what the legacy
    /// comparator degenerated to by reading one node's depth for both sides.
    HeuristicOnly,
}

impl PriorityRule {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthPlusHeuristic => "depth_plus_heuristic",
            Self::HeuristicOnly => "heuristic_only",
        }
    }
}

/// Parent assigned to a previously generated node found again via a
/// shallower expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxationRule {
    /// New parent is the node being expanded. Default.
    ReparentToExpanded,
    /// New parent is the expanded node's own parent (legacy). Skips a level,
    /// so the reconstructed path can contain a non-transition.
    ReparentToExpandedParent,
}

impl RelaxationRule {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReparentToExpanded => "reparent_to_expanded",
            Self::ReparentToExpandedParent => "reparent_to_expanded_parent",
        }
    }
}

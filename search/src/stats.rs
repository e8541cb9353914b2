//! Run outcome and counters.

use crate::node::NodeId;

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was popped from the frontier.
    GoalReached { node: NodeId },
    /// The frontier emptied without reaching a goal.
    FrontierExhausted,
    /// `max_expansions` was hit before a goal was popped.
    ExpansionBudgetExceeded,
    /// The frontier emptied, but `max_depth` withheld at least one successor.
    DepthBudgetExceeded,
}

impl TerminationReason {
    /// Whether a policy budget, not the search space, ended the run.
    #[must_use]
    pub fn is_aborted(self) -> bool {
        matches!(
            self,
            Self::ExpansionBudgetExceeded | Self::DepthBudgetExceeded
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::DepthBudgetExceeded => "depth_budget_exceeded",
        }
    }

    #[must_use]
    pub fn to_json_value(self) -> serde_json::Value {
        match self {
            Self::GoalReached { node } => {
                serde_json::json!({"node_id": node.index(), "type": self.as_str()})
            }
            _ => serde_json::json!({"type": self.as_str()}),
        }
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped, found not to be a goal, and expanded.
    pub expansions: u64,
    /// Successor states returned by the domain, duplicates included.
    pub successors_generated: u64,
    /// Successors that matched a node already open or closed.
    pub duplicates_suppressed: u64,
    /// Successors not turned into nodes because of `max_depth`.
    pub depth_limited: u64,
    /// Rediscovered nodes attached to a shallower parent.
    pub reparented: u64,
    /// Relaxed frontier nodes pushed again under their new key.
    pub requeued: u64,
    /// Nodes created, root included.
    pub nodes_created: u64,
    /// Largest simultaneous frontier size.
    pub frontier_high_water: u64,
}

impl SearchStats {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "depth_limited": self.depth_limited,
            "duplicates_suppressed": self.duplicates_suppressed,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "nodes_created": self.nodes_created,
            "reparented": self.reparented,
            "requeued": self.requeued,
            "successors_generated": self.successors_generated,
        })
    }
}

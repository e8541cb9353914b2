//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, budget exhausted) are expressed via
//! [`crate::stats::TerminationReason`] and never as errors.

use crate::node::NodeId;

/// Typed failure for pre-flight search validation.
///
/// Returned before the search loop starts; no nodes have been created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The policy combines options that cannot produce a meaningful run.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}

/// Misuse of the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// The id was not issued by this tree.
    #[error("node {node} does not belong to this search tree")]
    UnknownNode { node: NodeId },
    /// Reparenting would make a node its own ancestor.
    #[error("reparenting node {node} under {new_parent} would create a cycle")]
    WouldCreateCycle { node: NodeId, new_parent: NodeId },
}

//! Search nodes and the arena that owns them.
//!
//! A node wraps one problem state and points at its parent by [`NodeId`].
//! Children never hold their parent by value and parents never point at
//! children, so the tree is a set of back-references into one `Vec`.
//! Depth is not stored: it is the length of the parent chain, recomputed on
//! every call, so reparenting a node implicitly moves its whole subtree.

use std::cmp::Ordering;

use pathwise_kernel::contract::ProblemState;

use crate::error::NodeError;
use crate::policy::PriorityRule;

/// Index of a node inside its [`SearchTree`].
///
/// Ids are issued in creation order starting at 0 (the root), which makes
/// them usable as the final tie-breaker of the frontier ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One state in the search tree plus its parent link.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    id: NodeId,
    parent: Option<NodeId>,
    state: S,
    /// States are immutable, so the estimate is computed once at creation.
    heuristic: u32,
}

impl<S> SearchNode<S> {
    /// This node's id.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The parent node, `None` for a root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The wrapped state.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Cached `state.heuristic()`.
    #[must_use]
    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }
}

/// Arena of search nodes linked by parent references.
///
/// Invariant: every parent chain is acyclic and ends at a node with no
/// parent. [`SearchTree::set_parent`] rejects any change that would break it.
#[derive(Debug, Clone)]
pub struct SearchTree<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S: ProblemState> SearchTree<S> {
    /// Create a new empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node with no parent.
    pub fn push_root(&mut self, state: S) -> NodeId {
        self.push(state, None)
    }

    /// Add a node whose parent is `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::UnknownNode`] if `parent` was not issued by this
    /// tree.
    pub fn push_child(&mut self, state: S, parent: NodeId) -> Result<NodeId, NodeError> {
        self.check(parent)?;
        Ok(self.push(state, Some(parent)))
    }

    fn push(&mut self, state: S, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let heuristic = state.heuristic();
        self.nodes.push(SearchNode {
            id,
            parent,
            state,
            heuristic,
        });
        id
    }
}

impl<S> SearchTree<S> {
    fn check(&self, id: NodeId) -> Result<(), NodeError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(NodeError::UnknownNode { node: id })
        }
    }

    /// Look up a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<S>> {
        self.nodes.get(id.0)
    }

    /// Look up a node issued by this tree.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different tree and is out of range.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }

    /// The state wrapped by `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn state(&self, id: NodeId) -> &S {
        &self.node(id).state
    }

    /// The parent of `id`, `None` for a root.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Move `id` under `new_parent` (or make it a root with `None`).
    ///
    /// The node's state is untouched; every descendant's depth changes with
    /// it because depth is derived.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::UnknownNode`] if either id is foreign, and
    /// [`NodeError::WouldCreateCycle`] if `new_parent` is `id` itself or one of
    /// its descendants.
    pub fn set_parent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> Result<(), NodeError> {
        self.check(id)?;
        if let Some(parent) = new_parent {
            self.check(parent)?;
            if self.ancestors_inclusive(parent).any(|a| a == id) {
                return Err(NodeError::WouldCreateCycle {
                    node: id,
                    new_parent: parent,
                });
            }
        }
        self.nodes[id.0].parent = new_parent;
        Ok(())
    }

    /// Number of transitions between `id` and its root.
    ///
    /// O(depth): walks the parent chain on every call.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> u32 {
        let mut depth = 0u32;
        let mut cursor = self.node(id).parent;
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.nodes[parent.0].parent;
        }
        depth
    }

    /// `id`, its parent, its grandparent, ... up to the root.
    fn ancestors_inclusive(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |n| self.nodes[n.0].parent)
    }

    /// Node ids from the root down to `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path: Vec<NodeId> = self.ancestors_inclusive(id).collect();
        path.reverse();
        path
    }

    /// Frontier ordering key of `id` under `rule`, using the node's current
    /// depth.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn frontier_key(&self, id: NodeId, rule: PriorityRule) -> FrontierKey {
        let depth = self.depth(id);
        let heuristic = u64::from(self.node(id).heuristic);
        let priority = match rule {
            PriorityRule::DepthPlusHeuristic => heuristic + u64::from(depth),
            PriorityRule::HeuristicOnly => heuristic,
        };
        FrontierKey {
            priority,
            depth,
            node: id,
        }
    }

    /// Compare two nodes of this tree by priority, each with its own depth.
    ///
    /// # Panics
    ///
    /// Panics if either id does not belong to this tree.
    #[must_use]
    pub fn compare(&self, a: NodeId, b: NodeId, rule: PriorityRule) -> Ordering {
        self.frontier_key(a, rule).cmp(&self.frontier_key(b, rule))
    }

    /// Number of nodes ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S>> {
        self.nodes.iter()
    }
}

impl<S: ProblemState> Default for SearchTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// The frontier ordering key: `(priority, depth, node)`.
///
/// Lower priority first, then shallower depth, then older node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    /// `depth + heuristic`, or `heuristic` alone under
    /// [`PriorityRule::HeuristicOnly`].
    pub priority: u64,
    /// Depth of the node when the key was computed.
    pub depth: u32,
    pub node: NodeId,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.depth.cmp(&other.depth))
            .then(self.node.cmp(&other.node))
    }
}

//! Open and closed sets.
//!
//! The open set is a `BinaryHeap` for O(log n) pops plus a `BTreeMap` from
//! node id to its current key. The map is the source of truth for membership:
//! a heap entry whose key no longer matches the map is stale (the node was
//! re-queued or already popped) and is discarded when it surfaces.
//! `BTreeMap` rather than `HashMap` keeps membership iteration in node-id
//! order, so duplicate scans are deterministic.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::node::{FrontierKey, NodeId};

/// Best-first open set.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop the
/// lowest key first.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    live: BTreeMap<NodeId, FrontierKey>,
    high_water: usize,
}

impl Frontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node that is not yet in the frontier.
    ///
    /// Returns `false` (and changes nothing) if the node is already open.
    pub fn push(&mut self, key: FrontierKey) -> bool {
        if self.live.contains_key(&key.node) {
            return false;
        }
        self.live.insert(key.node, key);
        self.heap.push(Reverse(key));
        self.high_water = self.high_water.max(self.live.len());
        true
    }

    /// Replace the key of an open node.
    ///
    /// The old heap entry stays behind and is skipped on pop. Returns `false`
    /// if the node is not open or the key is unchanged.
    pub fn requeue(&mut self, key: FrontierKey) -> bool {
        match self.live.get_mut(&key.node) {
            Some(current) if *current != key => {
                *current = key;
                self.heap.push(Reverse(key));
                true
            }
            _ => false,
        }
    }

    /// Remove and return the open node with the lowest key.
    pub fn pop(&mut self) -> Option<FrontierKey> {
        while let Some(Reverse(key)) = self.heap.pop() {
            if self.live.get(&key.node) == Some(&key) {
                self.live.remove(&key.node);
                return Some(key);
            }
        }
        None
    }

    /// Whether `node` is open.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.live.contains_key(&node)
    }

    /// Open nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.live.keys().copied()
    }

    /// Number of open nodes (stale heap entries not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no node is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Largest number of simultaneously open nodes seen.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Heap entries that no longer describe an open node.
    #[must_use]
    pub fn stale_entries(&self) -> usize {
        self.heap.len() - self.live.len()
    }
}

/// Closed set: expanded nodes in expansion order.
///
/// Only consulted for duplicate detection; never reordered.
#[derive(Debug, Default)]
pub struct VisitedSet {
    order: Vec<NodeId>,
}

impl VisitedSet {
    /// Create a new empty visited set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node` as expanded.
    pub fn insert(&mut self, node: NodeId) {
        self.order.push(node);
    }

    /// Expanded nodes, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Number of expanded nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

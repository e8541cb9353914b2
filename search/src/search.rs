//! A* entry point and expansion loop.
//!
//! The whole search runs inside the constructor; an [`AStar`] value is the
//! finished run and only answers queries.

use std::cell::OnceCell;

use pathwise_kernel::contract::ProblemState;
use tracing::{debug, debug_span, info, trace, warn};

use crate::error::SearchError;
use crate::frontier::{Frontier, VisitedSet};
use crate::node::{NodeId, SearchTree};
use crate::policy::{RelaxationRule, SearchPolicy};
use crate::stats::{SearchStats, TerminationReason};

/// Expansions between progress events at debug level.
const PROGRESS_INTERVAL: u64 = 10_000;

/// A completed A* run over states of type `S`.
///
/// Owns the node arena, the open and closed sets, and the solution (if
/// any). None of them are reset or reused.
#[derive(Debug)]
pub struct AStar<S> {
    tree: SearchTree<S>,
    root: NodeId,
    frontier: Frontier,
    visited: VisitedSet,
    solution: Option<NodeId>,
    termination: TerminationReason,
    stats: SearchStats,
    policy: SearchPolicy,
    path: OnceCell<Vec<NodeId>>,
}

impl<S: ProblemState> AStar<S> {
    /// Search from `initial` with the default policy (textbook A*, no
    /// budgets).
    ///
    /// Returns once a goal is popped or the frontier is exhausted. Does not
    /// return at all if the reachable state space is infinite and contains no
    /// goal; use [`AStar::with_policy`] with a budget for such domains.
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self::run(initial, SearchPolicy::default())
    }

    /// Search from `initial` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `policy` fails
    /// [`SearchPolicy::validate`]. No search step is taken in that case.
    pub fn with_policy(initial: S, policy: &SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self::run(initial, policy.clone()))
    }

    fn run(initial: S, policy: SearchPolicy) -> Self {
        let mut tree = SearchTree::new();
        let root = tree.push_root(initial);
        let mut frontier = Frontier::new();
        frontier.push(tree.frontier_key(root, policy.priority_rule));

        let mut engine = Self {
            tree,
            root,
            frontier,
            visited: VisitedSet::new(),
            solution: None,
            termination: TerminationReason::FrontierExhausted,
            stats: SearchStats::default(),
            policy,
            path: OnceCell::new(),
        };
        engine.termination = engine.drive();
        engine.stats.nodes_created = engine.tree.len() as u64;
        engine.stats.frontier_high_water = engine.frontier.high_water() as u64;

        info!(
            termination = %engine.termination,
            moves = ?engine.moves(),
            opened = engine.opened_count(),
            closed = engine.closed_count(),
            expansions = engine.stats.expansions,
            "search finished"
        );
        engine
    }

    fn drive(&mut self) -> TerminationReason {
        let span = debug_span!(
            "astar",
            priority_rule = self.policy.priority_rule.as_str(),
            relaxation_rule = self.policy.relaxation_rule.as_str(),
        );
        let _guard = span.enter();

        let rule = self.policy.priority_rule;
        let mut withheld_by_depth = false;

        while let Some(key) = self.frontier.pop() {
            let current = key.node;

            if self.tree.state(current).is_goal() {
                debug!(node = %current, depth = key.depth, "goal popped");
                self.solution = Some(current);
                return TerminationReason::GoalReached { node: current };
            }

            if self
                .policy
                .max_expansions
                .is_some_and(|max| self.stats.expansions >= max)
            {
                // Not expanded, so it stays open.
                self.frontier.push(key);
                debug!(expansions = self.stats.expansions, "expansion budget exhausted");
                return TerminationReason::ExpansionBudgetExceeded;
            }

            self.visited.insert(current);
            self.stats.expansions += 1;
            if self.stats.expansions % PROGRESS_INTERVAL == 0 {
                debug!(
                    expansions = self.stats.expansions,
                    opened = self.frontier.len(),
                    closed = self.visited.len(),
                    priority = key.priority,
                    "search progress"
                );
            }

            let current_depth = self.tree.depth(current);
            let successors = self.tree.state(current).successors();
            self.stats.successors_generated += successors.len() as u64;
            trace!(node = %current, depth = current_depth, successors = successors.len(), "expanding");

            for successor in successors {
                if let Some(existing) = self.find_generated(&successor) {
                    self.stats.duplicates_suppressed += 1;
                    if self.shortens(existing, current_depth) {
                        self.relax(existing, current);
                    }
                    continue;
                }

                if self
                    .policy
                    .max_depth
                    .is_some_and(|max| current_depth >= max)
                {
                    self.stats.depth_limited += 1;
                    withheld_by_depth = true;
                    continue;
                }

                match self.tree.push_child(successor, current) {
                    Ok(child) => {
                        self.frontier.push(self.tree.frontier_key(child, rule));
                        trace!(node = %child, parent = %current, "opened");
                    }
                    Err(err) => warn!(%err, "child not created"),
                }
            }
        }

        if withheld_by_depth {
            TerminationReason::DepthBudgetExceeded
        } else {
            TerminationReason::FrontierExhausted
        }
    }

    /// Linear scan of the open set, then the closed set, for a node whose
    /// state equals `state`.
    fn find_generated(&self, state: &S) -> Option<NodeId> {
        self.frontier
            .iter()
            .chain(self.visited.iter())
            .find(|&id| self.tree.state(id).is_equal(state))
    }

    /// Whether reparenting `existing` under the relaxation rule would give it
    /// a strictly smaller depth.
    fn shortens(&self, existing: NodeId, current_depth: u32) -> bool {
        let depth = self.tree.depth(existing);
        match self.policy.relaxation_rule {
            RelaxationRule::ReparentToExpanded => depth > current_depth + 1,
            RelaxationRule::ReparentToExpandedParent => depth > current_depth,
        }
    }

    /// Attach `existing` to a shallower parent after it was reached again
    /// from `current`.
    fn relax(&mut self, existing: NodeId, current: NodeId) {
        let new_parent = match self.policy.relaxation_rule {
            RelaxationRule::ReparentToExpanded => Some(current),
            RelaxationRule::ReparentToExpandedParent => self.tree.parent(current),
        };

        if let Err(err) = self.tree.set_parent(existing, new_parent) {
            warn!(%err, "relaxation skipped");
            return;
        }
        self.stats.reparented += 1;
        trace!(node = %existing, parent = ?new_parent, "reparented");

        if self.policy.requeue_relaxed && self.frontier.contains(existing) {
            let key = self.tree.frontier_key(existing, self.policy.priority_rule);
            if self.frontier.requeue(key) {
                self.stats.requeued += 1;
            }
        }
    }
}

impl<S> AStar<S> {
    /// Why the run stopped.
    #[must_use]
    pub fn termination(&self) -> TerminationReason {
        self.termination
    }

    /// Whether a goal was reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Whether a policy budget stopped the run.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.termination.is_aborted()
    }

    /// The goal node, if one was reached.
    #[must_use]
    pub fn solution(&self) -> Option<NodeId> {
        self.solution
    }

    /// Number of transitions on the solution path.
    ///
    /// `None` when no goal was reached.
    #[must_use]
    pub fn moves(&self) -> Option<u32> {
        self.solution.map(|goal| self.tree.depth(goal))
    }

    /// States from the initial state to the goal, inclusive.
    ///
    /// Reconstructed on first call by walking parents from the goal, then
    /// cached. `None` when no goal was reached.
    #[must_use]
    pub fn solution_path(&self) -> Option<Vec<&S>> {
        let goal = self.solution?;
        let ids = self.path.get_or_init(|| self.tree.path_to(goal));
        Some(ids.iter().map(|&id| self.tree.state(id)).collect())
    }

    /// Final frontier size plus final visited size.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.opened_count() + self.closed_count()
    }

    /// Nodes still open when the run stopped.
    #[must_use]
    pub fn opened_count(&self) -> usize {
        self.frontier.len()
    }

    /// Nodes expanded during the run.
    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.visited.len()
    }

    /// The state the search started from.
    #[must_use]
    pub fn initial_state(&self) -> &S {
        self.tree.state(self.root)
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// The node arena, for inspection.
    #[must_use]
    pub fn tree(&self) -> &SearchTree<S> {
        &self.tree
    }

    /// Open nodes, in id order.
    pub fn open_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.frontier.iter()
    }

    /// Closed nodes, in expansion order.
    pub fn closed_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.visited.iter()
    }
}

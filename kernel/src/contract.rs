//! Problem-state contract: what a domain must provide to be searched.
//!
//! The engine never looks inside a state. Everything it needs (cost estimate,
//! identity, transitions, goal detection, display) goes through this trait.
//! Domains own their goal: each state keeps a shared, immutable handle to the
//! goal configuration it measures itself against.

/// A single configuration of a search problem.
///
/// # Contract
///
/// - `heuristic` must be deterministic for a given state. The engine does not
///   check admissibility; an overestimating heuristic silently loses
///   optimality.
/// - `is_equal` must be an equivalence relation that depends only on the
///   configuration, never on how the state was reached.
/// - `successors` must return every state reachable in exactly one
///   transition. Order is free but must be deterministic.
/// - `is_goal` is usually `self.is_equal(goal)`.
///
/// None of these are verified at runtime.
pub trait ProblemState: Sized {
    /// Estimated number of transitions from this state to the goal.
    fn heuristic(&self) -> u32;

    /// Whether `other` is the same configuration as `self`.
    fn is_equal(&self, other: &Self) -> bool;

    /// All states reachable from `self` in one transition.
    fn successors(&self) -> Vec<Self>;

    /// Whether this state satisfies the goal condition.
    fn is_goal(&self) -> bool;

    /// Human-readable rendering, used by drivers and diagnostics.
    fn render(&self) -> String;
}

//! Independent checks the engine's answers are compared against.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use pathwise_kernel::contract::ProblemState;

/// Fewest transitions from `start` to any goal, by breadth-first search.
///
/// `key` must map `is_equal` states to equal keys. Returns `None` if no goal
/// is reachable.
pub fn bfs_distance<S, K, F>(start: S, key: F) -> Option<u32>
where
    S: ProblemState,
    K: Hash + Eq,
    F: Fn(&S) -> K,
{
    let mut seen = HashSet::new();
    seen.insert(key(&start));
    let mut queue = VecDeque::from([(start, 0u32)]);

    while let Some((state, depth)) = queue.pop_front() {
        if state.is_goal() {
            return Some(depth);
        }
        for next in state.successors() {
            if seen.insert(key(&next)) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    None
}

/// Whether every consecutive pair in `path` is a single successor step and
/// the path starts at `initial` and ends at a goal.
pub fn is_valid_path<S: ProblemState>(initial: &S, path: &[&S]) -> bool {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return false;
    };
    first.is_equal(initial)
        && last.is_goal()
        && path
            .windows(2)
            .all(|pair| pair[0].successors().iter().any(|s| s.is_equal(pair[1])))
}

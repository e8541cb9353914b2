//! Shared helpers for pathwise benchmark suites.

use pathwise_harness::worlds::hanoi::{HanoiWorld, Tower};
use pathwise_harness::worlds::puzzle_generator::PuzzleGenerator;
use pathwise_harness::worlds::sliding_puzzle::{PuzzleGoal, PuzzleHeuristic, SlidingPuzzleWorld};
use pathwise_search::node::{FrontierKey, NodeId, SearchTree};
use pathwise_search::policy::PriorityRule;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scramble depths for the sliding-puzzle regimes, shallow to deep.
pub const PUZZLE_SCRAMBLES: [usize; 3] = [10, 20, 40];

/// Seed shared by every generated board and key set, so runs compare like
/// with like.
pub const PUZZLE_SEED: u64 = 0x5EED;

/// Standard Tower of Hanoi.
///
/// # Panics
///
/// Panics if the counts are out of range. Benchmark setup failures are fatal.
#[must_use]
pub fn hanoi(disks: usize, pegs: usize) -> HanoiWorld {
    HanoiWorld::standard(disks, pegs).expect("hanoi world")
}

/// 3×3 board scrambled by `steps` seeded random blank moves.
///
/// # Panics
///
/// Panics if the board cannot be built. Benchmark setup failures are fatal.
#[must_use]
pub fn scrambled_eight_puzzle(steps: usize, heuristic: PuzzleHeuristic) -> SlidingPuzzleWorld {
    let goal = PuzzleGoal::standard(3, heuristic).expect("3x3 goal");
    let mut generator = PuzzleGenerator::new(goal.clone(), Some(PUZZLE_SEED));
    let tiles = generator.scrambled_tiles(steps);
    SlidingPuzzleWorld::new(tiles, &goal).expect("scrambled board")
}

/// A tree that is a single chain of `len` nodes; returns the tree and the
/// deepest node.
///
/// # Panics
///
/// Panics if `len` is zero.
#[must_use]
pub fn chain_tree(len: usize) -> (SearchTree<Tower>, NodeId) {
    assert!(len > 0, "chain needs a root");
    let state = Tower::standard(3, 3).expect("tower");
    let mut tree = SearchTree::new();
    let mut tip = tree.push_root(state.clone());
    for _ in 1..len {
        tip = tree.push_child(state.clone(), tip).expect("live parent");
    }
    (tree, tip)
}

/// `n` frontier keys for distinct nodes with seeded random priorities.
#[must_use]
pub fn frontier_keys(n: usize) -> Vec<FrontierKey> {
    let state = Tower::standard(3, 3).expect("tower");
    let mut tree = SearchTree::new();
    let mut rng = StdRng::seed_from_u64(PUZZLE_SEED);
    (0..n)
        .map(|_| {
            let id = tree.push_root(state.clone());
            FrontierKey {
                priority: rng.gen_range(0..64),
                ..tree.frontier_key(id, PriorityRule::DepthPlusHeuristic)
            }
        })
        .collect()
}

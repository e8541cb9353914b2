//! A* with an admissible heuristic matches breadth-first search, returns a
//! walkable path, and never holds two equal states.

use lock_tests::fixtures::{puzzle_key, scrambled_puzzle};
use lock_tests::reference::{bfs_distance, is_valid_path};
use pathwise_harness::contract::World;
use pathwise_harness::worlds::hanoi::{HanoiWorld, Tower};
use pathwise_harness::worlds::sliding_puzzle::PuzzleHeuristic;
use pathwise_kernel::contract::ProblemState;
use pathwise_search::search::AStar;

fn tower_key(tower: &Tower) -> Vec<Vec<u8>> {
    tower.pegs().to_vec()
}

fn assert_no_duplicates<S: ProblemState>(astar: &AStar<S>) {
    let known: Vec<&S> = astar
        .open_nodes()
        .chain(astar.closed_nodes())
        .map(|id| astar.tree().state(id))
        .collect();
    for (i, a) in known.iter().enumerate() {
        for b in &known[i + 1..] {
            assert!(!a.is_equal(b), "duplicate state:\n{}", a.render());
        }
    }
}

#[test]
fn hanoi_moves_match_bfs() {
    for (disks, pegs) in [(1, 3), (2, 3), (3, 3), (4, 3), (3, 4), (4, 4)] {
        let world = HanoiWorld::standard(disks, pegs).unwrap();
        let expected = bfs_distance(world.initial_state(), tower_key);
        let astar = AStar::new(world.initial_state());
        assert_eq!(astar.moves(), expected, "{disks} disks on {pegs} pegs");
        assert!(is_valid_path(world.start(), &astar.solution_path().unwrap()));
    }
}

#[test]
fn hanoi_on_three_pegs_needs_two_to_the_n_minus_one() {
    for disks in 1..=5usize {
        let world = HanoiWorld::standard(disks, 3).unwrap();
        let astar = AStar::new(world.initial_state());
        assert_eq!(astar.moves(), Some((1u32 << disks) - 1));
    }
}

#[test]
fn partially_moved_tower_matches_bfs() {
    // Largest disk alone on A, the other two already stacked on B.
    let goal = Tower::standard(3, 3).unwrap().goal().clone();
    let start = Tower::new(vec![vec![3], vec![2, 1], vec![]], &goal).unwrap();
    let world = HanoiWorld::from_tower(start);

    let expected = bfs_distance(world.initial_state(), tower_key);
    assert_eq!(expected, Some(4));
    let astar = AStar::new(world.initial_state());
    assert_eq!(astar.moves(), expected);
    assert!(is_valid_path(world.start(), &astar.solution_path().unwrap()));
    assert_eq!(tower_key(world.start()), vec![vec![3], vec![2, 1], vec![]]);
}

#[test]
fn eight_puzzle_moves_match_bfs() {
    for seed in 1..=8 {
        let world = scrambled_puzzle(3, PuzzleHeuristic::Manhattan, seed, 18);
        let expected = bfs_distance(world.initial_state(), puzzle_key);
        let astar = AStar::new(world.initial_state());
        assert_eq!(astar.moves(), expected, "seed {seed}");
        assert!(is_valid_path(world.start(), &astar.solution_path().unwrap()));
    }
}

#[test]
fn hamming_heuristic_is_also_optimal() {
    for seed in [3, 9] {
        let world = scrambled_puzzle(3, PuzzleHeuristic::Hamming, seed, 14);
        let expected = bfs_distance(world.initial_state(), puzzle_key);
        let astar = AStar::new(world.initial_state());
        assert_eq!(astar.moves(), expected, "seed {seed}");
    }
}

#[test]
fn open_and_closed_sets_hold_distinct_states() {
    let world = scrambled_puzzle(3, PuzzleHeuristic::Manhattan, 5, 16);
    assert_no_duplicates(&AStar::new(world.initial_state()));

    let hanoi = HanoiWorld::standard(4, 3).unwrap();
    assert_no_duplicates(&AStar::new(hanoi.initial_state()));
}

#[test]
fn depth_is_parent_depth_plus_one() {
    let world = HanoiWorld::standard(3, 3).unwrap();
    let astar = AStar::new(world.initial_state());
    let tree = astar.tree();
    for node in tree.iter() {
        match node.parent() {
            None => assert_eq!(tree.depth(node.id()), 0),
            Some(parent) => assert_eq!(tree.depth(node.id()), tree.depth(parent) + 1),
        }
    }
}

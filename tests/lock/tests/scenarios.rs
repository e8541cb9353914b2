//! Concrete end-to-end scenarios on the demonstration worlds.

use lock_tests::fixtures::eight_puzzle;
use pathwise_harness::contract::World;
use pathwise_harness::runner::run_world;
use pathwise_harness::worlds::hanoi::HanoiWorld;
use pathwise_harness::worlds::sliding_puzzle::{PuzzleGoal, PuzzleHeuristic, SlidingPuzzleWorld};
use pathwise_kernel::contract::ProblemState;
use pathwise_search::policy::SearchPolicy;
use pathwise_search::search::AStar;
use pathwise_search::stats::TerminationReason;

#[test]
fn three_disk_hanoi_takes_seven_moves() {
    let world = HanoiWorld::standard(3, 3).unwrap();
    let astar = AStar::new(world.initial_state());
    assert_eq!(astar.moves(), Some(7));
    let path = astar.solution_path().unwrap();
    assert_eq!(path.len(), 8);
    assert!(path[0].is_equal(world.start()));
    assert!(path[7].is_goal());
}

#[test]
fn solved_puzzle_needs_no_expansion() {
    let world = eight_puzzle(&[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    let astar = AStar::new(world.initial_state());
    assert_eq!(astar.moves(), Some(0));
    assert_eq!(astar.solution_path().unwrap().len(), 1);
    assert_eq!(astar.closed_count(), 0);
    assert_eq!(astar.opened_count(), 0);
    assert_eq!(astar.expanded_count(), 0);
}

#[test]
fn one_slide_from_goal_takes_one_move() {
    for tiles in [
        [1, 2, 3, 4, 5, 6, 7, 0, 8],
        [1, 2, 3, 4, 5, 0, 7, 8, 6],
    ] {
        let astar = AStar::new(eight_puzzle(&tiles).initial_state());
        assert_eq!(astar.moves(), Some(1), "start {tiles:?}");
        assert_eq!(astar.closed_count(), 1);
    }
}

#[test]
fn unreachable_goal_exhausts_every_reachable_board() {
    // Swapping two tiles of a 2x2 goal leaves it in the other parity class,
    // so only the 12 boards of that class are ever seen.
    let goal = PuzzleGoal::standard(2, PuzzleHeuristic::Manhattan).unwrap();
    let world = SlidingPuzzleWorld::new(vec![2, 1, 3, 0], &goal).unwrap();
    assert!(!world.is_solvable());

    let astar = AStar::new(world.initial_state());
    assert_eq!(astar.termination(), TerminationReason::FrontierExhausted);
    assert!(astar.moves().is_none());
    assert!(astar.solution_path().is_none());
    assert_eq!(astar.opened_count(), 0);
    assert_eq!(astar.closed_count(), 12);
    assert_eq!(astar.expanded_count(), 12);
}

#[test]
fn expansion_budget_stops_a_long_search() {
    let world = HanoiWorld::standard(5, 3).unwrap();
    let policy = SearchPolicy {
        max_expansions: Some(20),
        ..SearchPolicy::default()
    };
    let report = run_world(&world, &policy).unwrap();
    assert_eq!(report.termination, TerminationReason::ExpansionBudgetExceeded);
    assert_eq!(report.stats.expansions, 20);
    assert_eq!(report.closed, 20);
    assert!(report.opened > 0);
    assert!(report.into_solved().is_err());
}

#[test]
fn depth_budget_below_solution_depth_aborts() {
    let world = HanoiWorld::standard(3, 3).unwrap();
    let shallow = SearchPolicy {
        max_depth: Some(6),
        ..SearchPolicy::default()
    };
    let report = run_world(&world, &shallow).unwrap();
    assert_eq!(report.termination, TerminationReason::DepthBudgetExceeded);
    assert!(report.stats.depth_limited > 0);

    let exact = SearchPolicy {
        max_depth: Some(7),
        ..SearchPolicy::default()
    };
    assert_eq!(run_world(&world, &exact).unwrap().moves, Some(7));
}

#[test]
fn reference_policy_still_reaches_a_goal() {
    let world = HanoiWorld::standard(3, 3).unwrap();
    let report = run_world(&world, &SearchPolicy::reference()).unwrap();
    assert!(matches!(
        report.termination,
        TerminationReason::GoalReached { .. }
    ));
    assert_eq!(report.policy, SearchPolicy::reference());
}

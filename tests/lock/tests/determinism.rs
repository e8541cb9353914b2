//! In-process determinism: repeated runs produce identical summaries.

use lock_tests::fixtures::{fixture_lines, scrambled_puzzle};
use pathwise_harness::runner::run_world;
use pathwise_harness::worlds::hanoi::HanoiWorld;
use pathwise_harness::worlds::sliding_puzzle::PuzzleHeuristic;
use pathwise_search::policy::SearchPolicy;

#[test]
fn hanoi_summary_identical_n10() {
    let world = HanoiWorld::standard(4, 3).unwrap();
    let first = run_world(&world, &SearchPolicy::default()).unwrap();
    let first_bytes = first.summary_bytes().unwrap();
    for _ in 1..10 {
        let again = run_world(&world, &SearchPolicy::default()).unwrap();
        assert_eq!(again.summary_bytes().unwrap(), first_bytes);
        assert_eq!(again.path, first.path);
        assert_eq!(again.stats, first.stats);
    }
}

#[test]
fn seeded_puzzle_is_reproducible() {
    let a = scrambled_puzzle(3, PuzzleHeuristic::Manhattan, 21, 30);
    let b = scrambled_puzzle(3, PuzzleHeuristic::Manhattan, 21, 30);
    assert_eq!(a.start().tiles(), b.start().tiles());

    let ra = run_world(&a, &SearchPolicy::default()).unwrap();
    let rb = run_world(&b, &SearchPolicy::default()).unwrap();
    assert_eq!(ra.summary_digest().unwrap(), rb.summary_digest().unwrap());
}

#[test]
fn fixture_lines_stable_across_calls() {
    assert_eq!(fixture_lines(), fixture_lines());
}

#[test]
fn fixture_lines_report_known_outcomes() {
    let lines = fixture_lines();
    for expected in [
        "hanoi_3x3.termination=goal_reached",
        "hanoi_3x3.moves=7",
        "puzzle_2x2_stuck.termination=frontier_exhausted",
        "puzzle_2x2_stuck.moves=none",
        "puzzle_2x2_stuck.closed=12",
        "puzzle_2x2_stuck.solution_digest=none",
    ] {
        assert!(
            lines.iter().any(|l| l == expected),
            "missing {expected} in {lines:#?}"
        );
    }
}

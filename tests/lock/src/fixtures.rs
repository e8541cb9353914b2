//! Fixed worlds and the deterministic output they must produce.

use pathwise_harness::runner::{run_world, RunReport};
use pathwise_harness::worlds::hanoi::HanoiWorld;
use pathwise_harness::worlds::puzzle_generator::PuzzleGenerator;
use pathwise_harness::worlds::sliding_puzzle::{
    PuzzleGoal, PuzzleHeuristic, SlidingPuzzle, SlidingPuzzleWorld,
};
use pathwise_search::policy::SearchPolicy;

/// 3×3 board with the standard goal.
pub fn eight_puzzle(tiles: &[u8]) -> SlidingPuzzleWorld {
    let goal = PuzzleGoal::standard(3, PuzzleHeuristic::Manhattan).expect("standard 3x3 goal");
    SlidingPuzzleWorld::new(tiles.to_vec(), &goal).expect("valid 3x3 board")
}

/// Seeded random-walk scramble of the standard goal.
pub fn scrambled_puzzle(
    size: usize,
    heuristic: PuzzleHeuristic,
    seed: u64,
    steps: usize,
) -> SlidingPuzzleWorld {
    let goal = PuzzleGoal::standard(size, heuristic).expect("standard goal");
    let mut generator = PuzzleGenerator::new(goal.clone(), Some(seed));
    let tiles = generator.scrambled_tiles(steps);
    SlidingPuzzleWorld::new(tiles, &goal).expect("scrambled board")
}

/// BFS key for a puzzle state.
pub fn puzzle_key(state: &SlidingPuzzle) -> Vec<u8> {
    state.tiles().to_vec()
}

/// Key/value lines describing one run. Excludes wall-clock time.
pub fn report_lines(label: &str, report: &RunReport) -> Vec<String> {
    let moves = report
        .moves
        .map_or_else(|| "none".to_string(), |m| m.to_string());
    vec![
        format!("{label}.termination={}", report.termination),
        format!("{label}.moves={moves}"),
        format!("{label}.opened={}", report.opened),
        format!("{label}.closed={}", report.closed),
        format!("{label}.expansions={}", report.stats.expansions),
        format!(
            "{label}.solution_digest={}",
            report
                .solution_digest
                .as_ref()
                .map_or("none", |d| d.as_str())
        ),
        format!(
            "{label}.summary_digest={}",
            report.summary_digest().expect("summary digest").as_str()
        ),
    ]
}

/// Every fixture run, in a fixed order.
pub fn fixture_lines() -> Vec<String> {
    let default = SearchPolicy::default();
    let reference = SearchPolicy::reference();
    let budget = SearchPolicy {
        max_expansions: Some(10),
        ..SearchPolicy::default()
    };

    let hanoi3 = HanoiWorld::standard(3, 3).expect("hanoi 3x3");
    let hanoi4 = HanoiWorld::standard(4, 4).expect("hanoi 4x4");
    let puzzle = scrambled_puzzle(3, PuzzleHeuristic::Manhattan, 7, 24);
    let stuck = {
        let goal = PuzzleGoal::standard(2, PuzzleHeuristic::Manhattan).expect("2x2 goal");
        SlidingPuzzleWorld::new(vec![2, 1, 3, 0], &goal).expect("2x2 board")
    };

    let runs = [
        ("hanoi_3x3", run_world(&hanoi3, &default)),
        ("hanoi_3x3_reference", run_world(&hanoi3, &reference)),
        ("hanoi_4x4", run_world(&hanoi4, &default)),
        ("puzzle_seed7", run_world(&puzzle, &default)),
        ("puzzle_seed7_budget", run_world(&puzzle, &budget)),
        ("puzzle_2x2_stuck", run_world(&stuck, &default)),
    ];

    runs.into_iter()
        .flat_map(|(label, report)| report_lines(label, &report.expect("fixture run")))
        .collect()
}

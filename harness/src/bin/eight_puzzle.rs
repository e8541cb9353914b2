//! Generate a sliding-tile puzzle (the 8-puzzle by default) and solve it.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use pathwise_harness::cli::{emit, init_tracing, SearchArgs};
use pathwise_harness::runner::{run_world, RunError};
use pathwise_harness::worlds::puzzle_generator::PuzzleGenerator;
use pathwise_harness::worlds::sliding_puzzle::{PuzzleGoal, PuzzleHeuristic, SlidingPuzzleWorld};
use tracing::warn;

const DEFAULT_SCRAMBLE: usize = 30;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Hamming,
}

impl From<HeuristicArg> for PuzzleHeuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => Self::Manhattan,
            HeuristicArg::Hamming => Self::Hamming,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "eight-puzzle")]
#[command(version)]
#[command(about = "Generate a sliding-tile puzzle and solve it with A*")]
struct Cli {
    /// Board edge length
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Seed for the board generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Start this many random blank moves away from the goal [default: 30]
    #[arg(long, value_name = "K", conflicts_with = "shuffle")]
    scramble: Option<usize>,

    /// Start from a uniformly random solvable board
    #[arg(long)]
    shuffle: bool,

    /// Remaining-cost estimate
    #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,

    #[command(flatten)]
    search: SearchArgs,
}

fn rows(tiles: &[u8], size: usize) -> String {
    tiles
        .chunks(size)
        .map(|row| format!("{row:?}"))
        .collect()
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let goal = PuzzleGoal::standard(cli.size, cli.heuristic.into())?;
    let mut generator = PuzzleGenerator::new(goal.clone(), cli.seed);
    let tiles = if cli.shuffle {
        generator.solvable_tiles()
    } else {
        generator.scrambled_tiles(cli.scramble.unwrap_or(DEFAULT_SCRAMBLE))
    };
    if cli.size > 3 && cli.shuffle {
        warn!(size = cli.size, "shuffled boards this large may take very long to solve");
    }

    let world = SlidingPuzzleWorld::new(tiles, &goal)?;
    if !cli.search.json {
        println!("Problem\t: {}", rows(world.start().tiles(), cli.size));
        println!("Goal\t: {}", rows(goal.tiles(), cli.size));
    }
    let report = run_world(&world, &cli.search.policy())?;
    emit(report, cli.search.json)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.search.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

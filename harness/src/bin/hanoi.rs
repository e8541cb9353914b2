//! Solve a Tower of Hanoi: all disks start on the first peg and must end on
//! the last.

use std::process::ExitCode;

use clap::Parser;
use pathwise_harness::cli::{emit, init_tracing, SearchArgs};
use pathwise_harness::runner::{run_world, RunError};
use pathwise_harness::worlds::hanoi::HanoiWorld;

#[derive(Debug, Parser)]
#[command(name = "hanoi")]
#[command(version)]
#[command(about = "Solve a Tower of Hanoi with A*")]
struct Cli {
    /// Number of disks
    #[arg(long, default_value_t = 6)]
    disks: usize,

    /// Number of pegs
    #[arg(long, default_value_t = 3)]
    pegs: usize,

    #[command(flatten)]
    search: SearchArgs,
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let world = HanoiWorld::standard(cli.disks, cli.pegs)?;
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

//! Pieces shared by the `hanoi` and `eight-puzzle` drivers.

use std::fmt::Write as _;

use clap::Args;
use pathwise_search::policy::SearchPolicy;
use tracing_subscriber::{fmt, EnvFilter};

use crate::runner::{RunError, RunReport};

/// Search and output flags common to every driver.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Use the legacy engine's ordering and relaxation rules
    #[arg(long)]
    pub reference: bool,

    /// Give up after this many expansions
    #[arg(long, value_name = "N")]
    pub max_expansions: Option<u64>,

    /// Do not generate nodes deeper than this
    #[arg(long, value_name = "N")]
    pub max_depth: Option<u32>,

    /// Print a canonical JSON summary instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SearchArgs {
    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        let base = if self.reference {
            SearchPolicy::reference()
        } else {
            SearchPolicy::default()
        };
        SearchPolicy {
            max_expansions: self.max_expansions,
            max_depth: self.max_depth,
            ..base
        }
    }
}

/// Install the stderr subscriber. With no `-v`, `RUST_LOG` decides.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Text report: counts, time, then every state on the solution path.
#[must_use]
pub fn format_report(report: &RunReport) -> String {
    let moves = report
        .moves
        .map_or_else(|| "none".to_string(), |m| m.to_string());

    let mut out = String::new();
    let _ = writeln!(out, "H-Value\t: {}", report.initial_heuristic);
    let _ = writeln!(out, "Moves\t: {moves}");
    let _ = writeln!(out, "Opened\t: {}", report.opened);
    let _ = writeln!(out, "Closed\t: {}", report.closed);
    let _ = writeln!(out, "Total\t: {}", report.expanded);
    let _ = writeln!(out, "Time\t: {} msecs", report.elapsed.as_millis());
    if !report.is_solved() {
        let _ = writeln!(out, "Result\t: {}", report.termination);
    }
    for state in &report.path {
        let _ = writeln!(out, "{state}");
    }
    out
}

/// Print `report` in the requested format, then fail if it is unsolved.
///
/// # Errors
///
/// Returns [`RunError::Canon`] if the JSON summary cannot be built, or
/// [`RunError::Unsolved`] after printing an unsolved report.
pub fn emit(report: RunReport, json: bool) -> Result<(), RunError> {
    if json {
        let bytes = report.summary_bytes()?;
        println!("{}", String::from_utf8_lossy(&bytes));
    } else {
        print!("{}", format_report(&report));
    }
    report.into_solved().map(|_| ())
}

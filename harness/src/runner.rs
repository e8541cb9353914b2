//! Harness runner: solves a world and packages the result.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → world.initial_state() → AStar::with_policy()
//!   → render solution path → canonical JSON → solution digest
//!   → RunReport (summary bytes and summary digest on demand)
//! ```
//!
//! Wall-clock time is reported but never enters a digest, so two runs of the
//! same world under the same policy produce identical summaries.

use std::time::{Duration, Instant};

use pathwise_kernel::contract::ProblemState;
use pathwise_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pathwise_kernel::proof::hash::{
    canonical_hash, ContentHash, DOMAIN_RUN_SUMMARY, DOMAIN_SEARCH_POLICY, DOMAIN_SOLUTION_PATH,
};
use pathwise_search::error::SearchError;
use pathwise_search::policy::SearchPolicy;
use pathwise_search::search::AStar;
use pathwise_search::stats::{SearchStats, TerminationReason};
use tracing::{debug, info_span};

use crate::contract::World;
use crate::worlds::WorldError;

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The policy was rejected before searching.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// World parameters were malformed.
    #[error("invalid world: {0}")]
    InvalidWorld(#[from] WorldError),
    /// The run ended without a solution.
    #[error("no solution: {termination}")]
    Unsolved { termination: TerminationReason },
    /// Canonical JSON serialization failed.
    #[error("canonical json: {0}")]
    Canon(#[from] CanonError),
}

/// Everything a driver prints about one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub world_id: String,
    pub parameters: serde_json::Value,
    pub policy: SearchPolicy,
    pub termination: TerminationReason,
    /// Heuristic of the initial state.
    pub initial_heuristic: u32,
    pub moves: Option<u32>,
    pub opened: usize,
    pub closed: usize,
    pub expanded: usize,
    pub stats: SearchStats,
    pub elapsed: Duration,
    /// Rendered states, initial first. Empty when unsolved.
    pub path: Vec<String>,
    /// `canonical_hash(DOMAIN_SOLUTION_PATH, canonical(path))`.
    pub solution_digest: Option<ContentHash>,
}

impl RunReport {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.moves.is_some()
    }

    /// Fail unless a goal was reached.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Unsolved`] carrying the termination reason.
    pub fn into_solved(self) -> Result<Self, RunError> {
        if self.is_solved() {
            Ok(self)
        } else {
            Err(RunError::Unsolved {
                termination: self.termination,
            })
        }
    }

    /// Digest of the policy the run used.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Canon`] if the policy snapshot is not canonical
    /// JSON.
    pub fn policy_digest(&self) -> Result<ContentHash, RunError> {
        let bytes = canonical_json_bytes(&self.policy.to_json_value())?;
        Ok(canonical_hash(DOMAIN_SEARCH_POLICY, &bytes))
    }

    /// Canonical JSON summary of the run, excluding wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Canon`] if the world parameters contain floats.
    pub fn summary_bytes(&self) -> Result<Vec<u8>, RunError> {
        let value = serde_json::json!({
            "closed": self.closed,
            "expanded": self.expanded,
            "initial_heuristic": self.initial_heuristic,
            "moves": self.moves,
            "opened": self.opened,
            "parameters": self.parameters,
            "policy": self.policy.to_json_value(),
            "policy_digest": self.policy_digest()?.as_str(),
            "solution_digest": self.solution_digest.as_ref().map(ContentHash::as_str),
            "stats": self.stats.to_json_value(),
            "termination": self.termination.to_json_value(),
            "world_id": self.world_id,
        });
        Ok(canonical_json_bytes(&value)?)
    }

    /// # Errors
    ///
    /// Same as [`RunReport::summary_bytes`].
    pub fn summary_digest(&self) -> Result<ContentHash, RunError> {
        Ok(canonical_hash(DOMAIN_RUN_SUMMARY, &self.summary_bytes()?))
    }
}

/// Digest of a rendered solution path.
///
/// # Errors
///
/// Returns [`CanonError`] only if canonicalization fails, which cannot
/// happen for an array of strings.
pub fn solution_digest(path: &[String]) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&serde_json::json!(path))?;
    Ok(canonical_hash(DOMAIN_SOLUTION_PATH, &bytes))
}

/// Solve `world` under `policy`.
///
/// An unsolved run is still `Ok`; call [`RunReport::into_solved`] to treat it
/// as an error.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the policy is invalid, or
/// [`RunError::Canon`] if the solution path cannot be digested.
pub fn run_world<W: World>(world: &W, policy: &SearchPolicy) -> Result<RunReport, RunError> {
    let span = info_span!("run_world", world_id = world.world_id());
    let _guard = span.enter();

    let initial = world.initial_state();
    let initial_heuristic = initial.heuristic();

    let started = Instant::now();
    let astar = AStar::with_policy(initial, policy)?;
    let elapsed = started.elapsed();

    let path: Vec<String> = astar
        .solution_path()
        .map(|states| states.iter().map(|s| s.render()).collect())
        .unwrap_or_default();
    let digest = if astar.is_solved() {
        Some(solution_digest(&path)?)
    } else {
        None
    };
    debug!(
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        digest = digest.as_ref().map(ContentHash::as_str),
        "run complete"
    );

    Ok(RunReport {
        world_id: world.world_id().to_string(),
        parameters: world.parameters(),
        policy: astar.policy().clone(),
        termination: astar.termination(),
        initial_heuristic,
        moves: astar.moves(),
        opened: astar.opened_count(),
        closed: astar.closed_count(),
        expanded: astar.expanded_count(),
        stats: *astar.stats(),
        elapsed,
        path,
        solution_digest: digest,
    })
}

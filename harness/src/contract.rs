//! World contract: the minimal trait a world must implement to be run.
//!
//! Worlds provide domain data only: an identifier, a starting state, and the
//! parameters that produced it. Worlds do NOT search, time, hash or print;
//! those are runner and driver concerns.

use pathwise_kernel::contract::ProblemState;

/// A runnable problem instance.
pub trait World {
    /// The state type the engine searches over.
    type State: ProblemState;

    /// Unique world identifier (e.g., `"hanoi"`).
    fn world_id(&self) -> &str;

    /// A fresh copy of the starting state. Each call starts an independent
    /// search.
    fn initial_state(&self) -> Self::State;

    /// Parameters that identify this instance, recorded in run summaries.
    ///
    /// Must contain integers, strings, booleans, arrays and objects only
    /// (no floats), so the summary can be written as canonical JSON.
    fn parameters(&self) -> serde_json::Value;
}

//! Pathwise Harness: demonstration worlds and drivers for the search engine.
//!
//! The harness turns a world (a starting state plus its parameters) into a
//! [`RunReport`](runner::RunReport) by handing the state to
//! [`AStar`](pathwise_search::search::AStar) and packaging the result with
//! canonical digests from the kernel.
//!
//! The harness does NOT implement search logic; it delegates to the engine.
//! Worlds provide domain data only; the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod contract;
pub mod runner;
pub mod worlds;

//! Pathwise Search: a generic A* engine over [`ProblemState`] domains.
//!
//! This crate provides the search layer for Pathwise. It depends only on
//! `pathwise_kernel`; it does NOT depend on `pathwise_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathwise_kernel  ←  pathwise_search  ←  pathwise_harness
//! (state contract,    (tree, frontier,     (worlds, runner,
//!  canonical hash)     A* loop)             drivers)
//! ```
//!
//! # Key types
//!
//! - [`AStar`](search::AStar) -- runs a search to completion and answers
//!   queries about the result
//! - [`SearchTree`](node::SearchTree) -- arena of nodes with parent links
//! - [`Frontier`](frontier::Frontier) -- best-first open set with lazy re-keying
//! - [`SearchPolicy`](policy::SearchPolicy) -- ordering, relaxation and budgets
//! - [`TerminationReason`](stats::TerminationReason) -- why a run stopped
//!
//! [`ProblemState`]: pathwise_kernel::contract::ProblemState

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;

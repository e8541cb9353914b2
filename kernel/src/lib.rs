//! Pathwise Kernel: the problem-state contract and canonical digests.
//!
//! # API Surface
//!
//! - [`contract::ProblemState`] -- the capability set a domain state must
//!   provide before the search engine can operate on it
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON writer
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashes
//!
//! # Module Dependency Direction
//!
//! `contract` and `proof` are independent of each other. Nothing in the
//! kernel depends on the search engine or on any concrete domain.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod proof;

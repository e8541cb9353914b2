//! Proof module: canonical JSON and content hashing.
//!
//! `hash` depends on nothing internal; `canon` is used by callers that hash
//! structured summaries.

pub mod canon;
pub mod hash;

//! Diff algorithm implementations.
//!
//! - `trim`: common prefix/suffix trimming, run before every strategy
//! - `hunt`: Hunt-Szymanski exact LCS, bounded by a candidate budget
//! - `hirschberg`: linear-space LCS, fallback for the exact matcher
//! - `myers`: bidirectional middle-snake search emitting spans
//! - `greedy`: single-pass heuristic
//! - `coalesce`: merging of adjacent run-length spans

mod coalesce;
pub(crate) mod greedy;
pub(crate) mod hirschberg;
pub(crate) mod hunt;
pub(crate) mod myers;
mod trim;

pub use coalesce::coalesce;
pub use trim::Trim;

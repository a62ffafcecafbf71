//! Compact, ordered selections of game ids produced by database scans.
//!
//! A scan over the game store reports its result as a dense *mask*: one
//! `u16` slot per game id, zero meaning "excluded" and a positive value
//! meaning "included, matched at this ply". [`GameFilter`] is the compacted,
//! immutable form of such a mask, and [`mask`] holds the seeding policy that
//! combines a new scan with a prior filter.

pub mod filter;
pub mod mask;
#[cfg(test)]
mod tests;

pub use filter::GameFilter;
pub use mask::{FilterOp, effective_op, seed_mask};

//! Paginated, projected, lazily-materialized views over a game store.
//!
//! A [`GameView`] is the read-only cursor handed to a row-oriented
//! consumer. It resolves a requested column [`Projection`], optionally runs
//! one header or board scan to establish a [`caissa_filter::GameFilter`],
//! and then materializes exactly one [`GameRecord`] at a time as the
//! consumer moves through rows.

pub mod column;
pub mod cursor;
pub mod record;
#[cfg(test)]
mod tests;

pub use column::{Column, Projection};
pub use cursor::{FilterStats, GameView, SearchArgs};
pub use record::{ColumnValue, GameRecord};

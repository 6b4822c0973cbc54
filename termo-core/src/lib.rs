//! termo-core
//!
//! Growable, validated temperature series and on-demand statistics.
//!
//! - `series`: the [`TempSeries`] container and its aggregate queries.
//! - `types`: re-exports of the shared DTOs from `termo-types`.
//!
//! Everything in this crate is synchronous and single-threaded. A
//! [`TempSeries`] is a plain owned value with no interior mutability, so
//! the borrow checker is the only synchronization; callers that share a
//! series across threads must provide their own locking.
#![warn(missing_docs)]

/// The temperature-series container and its derived-statistics queries.
pub mod series;
pub mod types;

pub use series::store::{ABSOLUTE_ZERO_C, TempSeries};
pub use types::*;

//! Re-export of foundational types from `termo-types`.
// Consolidated re-exports so downstream crates can depend on `termo-core` only

pub use termo_types::{SummaryStatistics, TermoError};

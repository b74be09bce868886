//! Domain models used by the purchase pipeline.
//!
//! - `totals` — per ticket type totals produced by aggregation.
pub mod totals;

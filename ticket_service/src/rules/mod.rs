//! Validation and pricing rules, in the order a purchase applies them.
//!
//! - `account` — account id check.
//! - `shape` — request list size check.
//! - `aggregate` — per-entry checks and per-type summation.
//! - `allocation` — cross-type seat rules and cost calculation.
pub mod account;
pub mod aggregate;
pub mod allocation;
pub mod shape;

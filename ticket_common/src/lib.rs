//!
//! Common types and utilities shared by the ticket service and client.
//!
//! This crate aggregates:
//! - `error` — validation kinds, the outward `InvalidPurchase` error and the
//!   workspace-wide `TicketError`.
//! - `result` — handy `Result<T, TicketError>` alias.
//! - `ticket_type` — the closed set of ticket types and their unit prices.
//! - `request` — ticket type request entries and parsing helpers.
//! - `policy` — purchase limits and their configuration.
#![warn(missing_docs)]
pub mod error;
pub mod policy;
pub mod request;
pub mod result;
pub mod ticket_type;

pub use error::{InvalidPurchase, TicketError, ValidationError};
pub use policy::PurchasePolicy;
pub use request::TicketTypeRequest;
pub use result::Result;
pub use ticket_type::TicketType;

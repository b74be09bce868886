//! Ticket purchase validation and pricing.
//!
//! A purchase runs a short, synchronous pipeline:
//!
//! - `rules::account` — the account id must be present and positive.
//! - `rules::shape` — the request list must be non-empty and within the entry limit.
//! - `rules::aggregate` — each entry is checked and counts are summed per ticket type
//!   into `TypeTotals`.
//! - `rules::allocation` — cross-type rules (an ADULT is present, INFANTs do not
//!   outnumber ADULTs, seats stay within the limit), then the total cost.
//!
//! `TicketService` composes these steps and, only when all of them pass, hands the
//! totals to the payment and seat reservation collaborators. Any rejection is
//! returned as a single `InvalidPurchase` error carrying the originating rule.
#![warn(missing_docs)]
pub mod collaborators;
pub mod model;
pub mod rules;
pub mod service;

pub use collaborators::{
    LoggingPaymentService, LoggingSeatReservationService, SeatReservationService,
    TicketPaymentService,
};
pub use model::totals::TypeTotals;
pub use service::{PurchaseOutcome, TicketService};

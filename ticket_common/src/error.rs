//! Error types shared between the service and the client.
//!
//! Validation failures are modelled as a flat `ValidationError` enum. The
//! purchase boundary wraps every kind exactly once into `InvalidPurchase`, so
//! callers see a single error type that still carries the originating kind.
//! `TicketError` unifies everything else (I/O, JSON, request parsing, policy
//! configuration) for code that reads inputs before purchasing.
use std::io;

use thiserror::Error;

/// A business rule rejected the purchase before any side effect happened.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Account id is absent or not greater than zero.
    #[error("The account id supplied is invalid")]
    AccountInvalid,

    /// No ticket type requests were supplied.
    #[error("The ticket type requests supplied are empty")]
    RequestSetEmpty,

    /// More request entries than the policy allows in one purchase.
    #[error("The maximum of {max} ticket type requests is exceeded: {actual}")]
    TooManyRequestEntries {
        /// Configured maximum number of entries.
        max: usize,
        /// Number of entries supplied.
        actual: usize,
    },

    /// An entry carries no recognised ticket type.
    #[error("There was an error with a ticket type")]
    UnknownTicketType,

    /// An entry asks for zero, a negative or too many tickets.
    #[error("There was an error with a requested number of tickets")]
    InvalidTicketCount,

    /// No ADULT ticket is present to admit the other ticket types.
    #[error("There were 0 ADULT tickets included in the request")]
    NoQualifyingTicket,

    /// More INFANT tickets than ADULT tickets.
    #[error("There were more INFANT tickets ({infants}) requested than ADULT ({adults})")]
    TooManyDependents {
        /// Total ADULT tickets requested.
        adults: u64,
        /// Total INFANT tickets requested.
        infants: u64,
    },

    /// ADULT and CHILD seats together exceed the seat limit.
    #[error("Max tickets allowed is {limit}, number ADULT & CHILD requested is {requested}")]
    SeatLimitExceeded {
        /// Configured seat limit.
        limit: u32,
        /// Seats the request would occupy.
        requested: u64,
    },
}

/// Outward-facing purchase error.
///
/// Displays the message of the wrapped `ValidationError` unchanged and exposes
/// it both through [`InvalidPurchase::kind`] and `Error::source`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{source}")]
pub struct InvalidPurchase {
    #[from]
    source: ValidationError,
}

impl InvalidPurchase {
    /// The validation rule that rejected the purchase.
    pub fn kind(&self) -> ValidationError {
        self.source
    }
}

/// Unified error type shared by the service and the client.
#[derive(Error, Debug)]
pub enum TicketError {
    /// I/O error while reading request or policy files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A ticket type request could not be parsed from text.
    #[error("Parse request error: {0}")]
    ParseRequest(String),

    /// The purchase policy holds values that cannot be enforced.
    #[error("Invalid purchase policy: {0}")]
    Config(String),

    /// The purchase was rejected by a validation rule.
    #[error(transparent)]
    Purchase(#[from] InvalidPurchase),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_purchase_preserves_message_and_kind() {
        let kind = ValidationError::SeatLimitExceeded {
            limit: 20,
            requested: 21,
        };
        let err = InvalidPurchase::from(kind);

        assert_eq!(err.kind(), kind);
        assert_eq!(
            err.to_string(),
            "Max tickets allowed is 20, number ADULT & CHILD requested is 21"
        );
        assert_eq!(err.to_string(), kind.to_string());
        let source = err.source().map(ToString::to_string);
        assert_eq!(source, Some(kind.to_string()));
    }

    #[test]
    fn ticket_error_is_transparent_for_purchases() {
        let err = TicketError::from(InvalidPurchase::from(ValidationError::AccountInvalid));
        assert_eq!(err.to_string(), "The account id supplied is invalid");
    }
}

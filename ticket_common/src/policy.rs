//! Purchase limits and their configuration.
//!
//! The reference values are exposed as constants. `PurchasePolicy` carries
//! them at runtime and can be loaded from JSON, with absent fields falling
//! back to the reference values.
use std::io::Read;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::TicketError;
use crate::ticket_type::TicketType;

/// Maximum ADULT and CHILD seats a single purchase may reserve.
pub const MAX_SEATS: u32 = 20;

/// Maximum tickets a single request entry may ask for. No entry may exceed
/// the seat limit on its own.
pub const MAX_TICKETS_PER_REQUEST: u32 = MAX_SEATS;

/// Maximum number of request entries in one purchase.
///
/// Twice the seat limit: the largest purchase that can still pass the seat
/// limit when every entry asks for a single ticket is `MAX_SEATS` ADULT
/// entries plus `MAX_SEATS` INFANT entries.
pub const MAX_TICKET_TYPE_REQUESTS: usize = 2 * MAX_SEATS as usize;

/// Limits enforced by the purchase pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PurchasePolicy {
    /// Maximum seats (ADULT + CHILD) per purchase.
    pub max_seats: u32,
    /// Maximum request entries per purchase.
    pub max_request_entries: usize,
    /// Maximum tickets per request entry.
    pub max_tickets_per_entry: u32,
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            max_seats: MAX_SEATS,
            max_request_entries: MAX_TICKET_TYPE_REQUESTS,
            max_tickets_per_entry: MAX_TICKETS_PER_REQUEST,
        }
    }
}

impl PurchasePolicy {
    /// Reads a policy from JSON and validates it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TicketError> {
        let policy: Self = serde_json::from_reader(reader)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Checks that every limit admits at least one ticket and that the largest
    /// purchase the limits let through can be counted and priced in `u64`.
    pub fn validate(&self) -> Result<(), TicketError> {
        if self.max_seats == 0 {
            return Err(TicketError::Config("max_seats must be greater than 0".into()));
        }
        if self.max_request_entries == 0 {
            return Err(TicketError::Config(
                "max_request_entries must be greater than 0".into(),
            ));
        }
        if self.max_tickets_per_entry == 0 {
            return Err(TicketError::Config(
                "max_tickets_per_entry must be greater than 0".into(),
            ));
        }

        let Some(most_tickets) = self.worst_case_tickets() else {
            return Err(TicketError::Config(format!(
                "max_request_entries ({}) * max_tickets_per_entry ({}) overflows u64",
                self.max_request_entries, self.max_tickets_per_entry
            )));
        };
        let top_price = TicketType::iter()
            .map(TicketType::unit_price)
            .max()
            .unwrap_or(0);
        if most_tickets.checked_mul(u64::from(top_price)).is_none() {
            return Err(TicketError::Config(format!(
                "cost of {most_tickets} tickets at {top_price} overflows u64"
            )));
        }
        Ok(())
    }

    /// Most tickets a purchase can carry through aggregation, if it fits in `u64`.
    pub fn worst_case_tickets(&self) -> Option<u64> {
        u64::try_from(self.max_request_entries)
            .ok()?
            .checked_mul(u64::from(self.max_tickets_per_entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_limits() {
        let policy = PurchasePolicy::default();
        assert_eq!(policy.max_seats, 20);
        assert_eq!(policy.max_request_entries, 40);
        assert_eq!(policy.max_tickets_per_entry, 20);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let policy = PurchasePolicy::from_reader(r#"{"max_seats": 10}"#.as_bytes())
            .expect("valid policy");
        assert_eq!(policy.max_seats, 10);
        assert_eq!(policy.max_request_entries, MAX_TICKET_TYPE_REQUESTS);
        assert_eq!(policy.max_tickets_per_entry, MAX_TICKETS_PER_REQUEST);
    }

    #[test]
    fn rejects_zero_limits() {
        let err = PurchasePolicy::from_reader(r#"{"max_tickets_per_entry": 0}"#.as_bytes())
            .expect_err("zero limit");
        assert!(matches!(err, TicketError::Config(_)));
    }

    #[test]
    fn accepts_the_widest_u32_limits() {
        let policy = PurchasePolicy {
            max_seats: u32::MAX,
            max_request_entries: MAX_TICKET_TYPE_REQUESTS,
            max_tickets_per_entry: u32::MAX,
        };
        assert!(policy.validate().is_ok());
        assert_eq!(policy.worst_case_tickets(), Some(40 * u64::from(u32::MAX)));
    }

    #[test]
    fn rejects_limits_whose_totals_overflow() {
        let json = format!(
            r#"{{"max_request_entries": {}, "max_tickets_per_entry": {}}}"#,
            u64::MAX / 2,
            u32::MAX
        );
        let err = PurchasePolicy::from_reader(json.as_bytes()).expect_err("overflowing limits");
        assert!(matches!(err, TicketError::Config(_)));
    }

    #[test]
    fn rejects_limits_whose_cost_overflows() {
        let policy = PurchasePolicy {
            max_seats: MAX_SEATS,
            max_request_entries: usize::try_from(u64::MAX / u64::from(u32::MAX))
                .unwrap_or(usize::MAX),
            max_tickets_per_entry: u32::MAX,
        };
        assert!(policy.worst_case_tickets().is_some());
        assert!(matches!(policy.validate(), Err(TicketError::Config(_))));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = PurchasePolicy::from_reader(r#"{"max_seat": 10}"#.as_bytes())
            .expect_err("typo in field name");
        assert!(matches!(err, TicketError::SerdeJson(_)));
    }
}

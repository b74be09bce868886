//! Seat allocation rules and cost calculation.
//!
//! Only ADULT and CHILD tickets take a seat. INFANT tickets are free and sit
//! on an ADULT's lap, so there can be no more of them than ADULT tickets.
use ticket_common::{PurchasePolicy, TicketType, ValidationError};

use crate::model::totals::TypeTotals;

/// Checks the cross-type rules and returns the number of seats to reserve.
pub fn validate_and_count_seats(
    totals: &TypeTotals,
    policy: &PurchasePolicy,
) -> Result<u32, ValidationError> {
    let adults = totals.count(TicketType::Adult);
    if adults == 0 {
        return Err(ValidationError::NoQualifyingTicket);
    }

    let infants = totals.count(TicketType::Infant);
    if infants > adults {
        return Err(ValidationError::TooManyDependents { adults, infants });
    }

    let total_seats: u64 = totals
        .iter()
        .filter(|(ticket_type, _)| ticket_type.occupies_seat())
        .map(|(_, count)| count)
        .sum();

    u32::try_from(total_seats)
        .ok()
        .filter(|seats| *seats <= policy.max_seats)
        .ok_or(ValidationError::SeatLimitExceeded {
            limit: policy.max_seats,
            requested: total_seats,
        })
}

/// Total price of every ticket requested, INFANT tickets included at their
/// unit price.
pub fn calculate_cost(totals: &TypeTotals) -> u64 {
    totals
        .iter()
        .map(|(ticket_type, count)| u64::from(ticket_type.unit_price()) * count)
        .sum()
}

//! Per-entry validation and per-type summation.
use ticket_common::{PurchasePolicy, TicketType, TicketTypeRequest, ValidationError};

use crate::model::totals::TypeTotals;

/// Checks every entry and sums the requested counts per ticket type.
///
/// Entries are visited in list order and the first invalid one stops the
/// aggregation. The error kinds carry no detail about which entry failed.
pub fn aggregate(
    requests: &[TicketTypeRequest],
    policy: &PurchasePolicy,
) -> Result<TypeTotals, ValidationError> {
    requests
        .iter()
        .map(|request| validate_entry(request, policy))
        .collect()
}

/// Returns the entry's type and count if both are acceptable.
fn validate_entry(
    request: &TicketTypeRequest,
    policy: &PurchasePolicy,
) -> Result<(TicketType, u64), ValidationError> {
    let ticket_type = request
        .ticket_type()
        .ok_or(ValidationError::UnknownTicketType)?;

    let count = u32::try_from(request.count())
        .ok()
        .filter(|count| (1..=policy.max_tickets_per_entry).contains(count))
        .map(u64::from)
        .ok_or(ValidationError::InvalidTicketCount)?;

    Ok((ticket_type, count))
}

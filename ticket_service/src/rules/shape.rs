//! Request list shape validation.
//!
//! Only the list itself is checked here. Individual entries are checked while
//! aggregating, see `rules::aggregate`.
use ticket_common::{PurchasePolicy, TicketTypeRequest, ValidationError};

/// Returns the requests if there is at least one and no more than
/// `policy.max_request_entries`.
pub fn validate_shape<'a>(
    requests: Option<&'a [TicketTypeRequest]>,
    policy: &PurchasePolicy,
) -> Result<&'a [TicketTypeRequest], ValidationError> {
    let requests = match requests {
        Some(requests) if !requests.is_empty() => requests,
        _ => return Err(ValidationError::RequestSetEmpty),
    };

    if requests.len() > policy.max_request_entries {
        return Err(ValidationError::TooManyRequestEntries {
            max: policy.max_request_entries,
            actual: requests.len(),
        });
    }

    Ok(requests)
}

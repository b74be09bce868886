//! Purchase orchestration.
//!
//! `TicketService::purchase_tickets` validates and prices a purchase, then
//! takes payment and reserves seats. The steps run in a fixed order and stop
//! at the first rejection; collaborators are only called once every rule has
//! passed. Rejections leave the service as a single `InvalidPurchase` error.
use log::{debug, info, warn};
use serde::Serialize;
use ticket_common::{
    InvalidPurchase, PurchasePolicy, Result, TicketTypeRequest, ValidationError,
};

use crate::collaborators::{SeatReservationService, TicketPaymentService};
use crate::rules::account::validate_account;
use crate::rules::aggregate::aggregate;
use crate::rules::allocation::{calculate_cost, validate_and_count_seats};
use crate::rules::shape::validate_shape;

/// Seats reserved and amount charged by a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseOutcome {
    /// ADULT and CHILD seats reserved.
    pub total_seats: u32,
    /// Amount charged, in whole currency units.
    pub total_cost: u64,
}

/// Validates, prices and books ticket purchases.
#[derive(Debug, Clone)]
pub struct TicketService<P, S> {
    payment: P,
    reservation: S,
    policy: PurchasePolicy,
}

impl<P, S> TicketService<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    /// Creates a service enforcing the default purchase policy.
    pub fn new(payment: P, reservation: S) -> Self {
        Self::with_policy(payment, reservation, PurchasePolicy::default())
    }

    /// Creates a service enforcing `policy`.
    pub fn with_policy(payment: P, reservation: S, policy: PurchasePolicy) -> Self {
        Self {
            payment,
            reservation,
            policy,
        }
    }

    /// The limits this service enforces.
    pub fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    /// Purchases tickets for `account_id`.
    ///
    /// On success the payment collaborator has been charged the total cost and
    /// the reservation collaborator asked for the total seats, both exactly once.
    /// On failure neither has been called.
    pub fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: Option<&[TicketTypeRequest]>,
    ) -> Result<PurchaseOutcome, InvalidPurchase> {
        let (account_id, outcome) = self.evaluate(account_id, requests).inspect_err(|e| {
            warn!("Purchase rejected: {}", e);
        })?;

        self.payment.make_payment(account_id, outcome.total_cost);
        self.reservation
            .reserve_seats(account_id, outcome.total_seats);

        info!(
            "Total cost: {} | Number of seats reserved: {}",
            outcome.total_cost, outcome.total_seats
        );
        Ok(outcome)
    }

    /// Runs every rule without touching the collaborators.
    fn evaluate(
        &self,
        account_id: Option<i64>,
        requests: Option<&[TicketTypeRequest]>,
    ) -> Result<(i64, PurchaseOutcome), ValidationError> {
        let account_id = validate_account(account_id)?;
        let requests = validate_shape(requests, &self.policy)?;
        let totals = aggregate(requests, &self.policy)?;
        debug!("Tickets requested per type: {:?}", totals);

        let total_seats = validate_and_count_seats(&totals, &self.policy)?;
        let total_cost = calculate_cost(&totals);

        Ok((
            account_id,
            PurchaseOutcome {
                total_seats,
                total_cost,
            },
        ))
    }
}

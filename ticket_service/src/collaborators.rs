//! Payment and seat reservation collaborators.
//!
//! Both are external services trusted to succeed once invoked, so their
//! methods return nothing. The logging implementations stand in for the real
//! services when running the client locally.
use log::info;

/// Takes payment for a purchase.
pub trait TicketPaymentService {
    /// Charges `amount` whole currency units to `account_id`.
    fn make_payment(&self, account_id: i64, amount: u64);
}

/// Reserves seats for a purchase.
pub trait SeatReservationService {
    /// Reserves `seat_count` seats for `account_id`.
    fn reserve_seats(&self, account_id: i64, seat_count: u32);
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: i64, amount: u64) {
        (**self).make_payment(account_id, amount);
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seats(&self, account_id: i64, seat_count: u32) {
        (**self).reserve_seats(account_id, seat_count);
    }
}

/// Payment service that only logs the charge.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentService;

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: i64, amount: u64) {
        info!("Payment of {} taken from account {}", amount, account_id);
    }
}

/// Seat reservation service that only logs the reservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seats(&self, account_id: i64, seat_count: u32) {
        info!("{} seats reserved for account {}", seat_count, account_id);
    }
}

//! Ticket types and their unit prices.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Closed set of ticket types sold for a venue.
///
/// Names parse case-insensitively (`adult`, `Adult`, `ADULT`) and display in
/// upper case.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum TicketType {
    /// Admits one adult; the only type that qualifies a purchase on its own.
    Adult,
    /// Admits one child; occupies a seat.
    Child,
    /// Admits one infant sitting on an adult's lap; free of charge.
    Infant,
}

impl TicketType {
    /// Price of one ticket of this type, in whole currency units.
    pub const fn unit_price(self) -> u32 {
        match self {
            TicketType::Adult => 20,
            TicketType::Child => 10,
            TicketType::Infant => 0,
        }
    }

    /// Whether a ticket of this type takes up a seat.
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

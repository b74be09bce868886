//! Per ticket type totals.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;
use ticket_common::TicketType;

/// Total tickets requested for each ticket type.
///
/// Always holds exactly one entry per `TicketType`; types nobody asked for
/// are present with a total of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTotals {
    counts: BTreeMap<TicketType, u64>,
}

impl Default for TypeTotals {
    fn default() -> Self {
        Self {
            counts: TicketType::iter().map(|ticket_type| (ticket_type, 0)).collect(),
        }
    }
}

impl TypeTotals {
    /// Total tickets of `ticket_type`, zero if none were requested.
    pub fn count(&self, ticket_type: TicketType) -> u64 {
        self.counts.get(&ticket_type).copied().unwrap_or(0)
    }

    /// Adds `count` tickets of `ticket_type`.
    pub fn add(&mut self, ticket_type: TicketType, count: u64) {
        *self.counts.entry(ticket_type).or_insert(0) += count;
    }

    /// Iterates over every ticket type and its total, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TicketType, u64)> + '_ {
        self.counts
            .iter()
            .map(|(ticket_type, count)| (*ticket_type, *count))
    }

    /// Total tickets of all types, seated or not.
    pub fn total_tickets(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl FromIterator<(TicketType, u64)> for TypeTotals {
    fn from_iter<I: IntoIterator<Item = (TicketType, u64)>>(iter: I) -> Self {
        let mut totals = Self::default();
        for (ticket_type, count) in iter {
            totals.add(ticket_type, count);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_holds_every_type_at_zero() {
        let totals = TypeTotals::default();
        assert_eq!(totals.iter().count(), 3);
        assert!(totals.iter().all(|(_, count)| count == 0));
    }

    #[test]
    fn count_defaults_to_zero_for_absent_types() {
        let totals: TypeTotals = [(TicketType::Adult, 2)].into_iter().collect();
        assert_eq!(totals.count(TicketType::Adult), 2);
        assert_eq!(totals.count(TicketType::Child), 0);
        assert_eq!(totals.count(TicketType::Infant), 0);
    }

    #[test]
    fn collecting_sums_repeated_types() {
        let totals: TypeTotals = [
            (TicketType::Child, 1),
            (TicketType::Adult, 3),
            (TicketType::Child, 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(totals.count(TicketType::Adult), 3);
        assert_eq!(totals.count(TicketType::Child), 3);
        assert_eq!(totals.total_tickets(), 6);
    }

    #[test]
    fn iterates_in_declaration_order() {
        let types: Vec<_> = TypeTotals::default().iter().map(|(t, _)| t).collect();
        assert_eq!(
            types,
            vec![TicketType::Adult, TicketType::Child, TicketType::Infant]
        );
    }
}

//! Ticket type request entries and text parsing helpers.
//!
//! A `TicketTypeRequest` is one line item of a purchase: a ticket type and a
//! number of tickets. Instances are immutable but not validated on
//! construction; rejecting unknown types and bad counts is the job of the
//! purchase pipeline.
//!
//! Text form, used by request files and the command line: `<type> <count>`,
//! where the separator is whitespace, `=` or `:`. In both the text and the
//! JSON form an unrecognised type name yields a request with no type rather
//! than a parse error, and names are matched ignoring case.
use std::io::BufRead;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TicketError;
use crate::ticket_type::TicketType;

/// One `(type, count)` line item of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(default, deserialize_with = "ticket_type_by_name")]
    ticket_type: Option<TicketType>,
    count: i64,
}

fn ticket_type_by_name<'de, D>(deserializer: D) -> Result<Option<TicketType>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.and_then(|name| name.parse().ok()))
}

impl TicketTypeRequest {
    /// Creates a request for `count` tickets of `ticket_type`.
    pub const fn new(ticket_type: TicketType, count: i64) -> Self {
        Self {
            ticket_type: Some(ticket_type),
            count,
        }
    }

    /// Creates a request whose ticket type was not given or not recognised.
    pub const fn untyped(count: i64) -> Self {
        Self {
            ticket_type: None,
            count,
        }
    }

    /// Requested ticket type, if one was recognised.
    pub const fn ticket_type(&self) -> Option<TicketType> {
        self.ticket_type
    }

    /// Requested number of tickets, as supplied.
    pub const fn count(&self) -> i64 {
        self.count
    }
}

impl FromStr for TicketTypeRequest {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c.is_whitespace() || c == '=' || c == ':')
            .filter(|part| !part.is_empty());

        let (Some(name), Some(raw_count), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(TicketError::ParseRequest(format!(
                "expected `<type> <count>`, got `{}`",
                s.trim()
            )));
        };

        let count = raw_count.parse::<i64>().map_err(|e| {
            TicketError::ParseRequest(format!("invalid ticket count `{raw_count}`: {e}"))
        })?;

        Ok(Self {
            ticket_type: name.parse::<TicketType>().ok(),
            count,
        })
    }
}

/// Trait providing file parsing for ticket type requests.
pub trait RequestParser: Sized {
    /// Parses requests from a buffered reader.
    ///
    /// Each non-empty line that does not start with `#` is parsed as a single
    /// request using `FromStr`. Returns an error naming the line number if any
    /// line cannot be parsed.
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Self>, TicketError>;

    /// Parses requests from a JSON array of `{ "ticket_type": .., "count": .. }`.
    fn parse_from_json<R: BufRead>(reader: R) -> Result<Vec<Self>, TicketError>;
}

impl RequestParser for TicketTypeRequest {
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Self>, TicketError> {
        let mut requests = Vec::new();

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }

            match trimmed_line.parse::<Self>() {
                Ok(request) => requests.push(request),
                Err(TicketError::ParseRequest(reason)) => {
                    return Err(TicketError::ParseRequest(format!(
                        "line {}: {}",
                        index + 1,
                        reason
                    )));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(requests)
    }

    fn parse_from_json<R: BufRead>(reader: R) -> Result<Vec<Self>, TicketError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

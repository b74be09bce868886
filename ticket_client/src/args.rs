//! Command-line arguments for the ticket client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use ticket_common::TicketTypeRequest;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Account to charge. Omitting it makes the purchase fail validation.
    #[clap(long, allow_hyphen_values = true)]
    pub account_id: Option<i64>,

    /// Ticket request as `<type>:<count>`, e.g. `adult:2`. May be repeated.
    #[clap(long = "ticket", value_name = "TYPE:COUNT")]
    pub tickets: Vec<TicketTypeRequest>,

    /// Path to a file with one `<type> <count>` request per line.
    #[clap(long)]
    pub path: Option<String>,

    /// Read the request file as a JSON array instead of lines.
    #[clap(long, requires = "path")]
    pub json: bool,

    /// Path to a JSON purchase policy overriding the default limits.
    #[clap(long)]
    pub policy: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticket_common::TicketType;

    #[test]
    fn parses_repeated_tickets() {
        let args = Args::try_parse_from([
            "ticket_client",
            "--account-id",
            "3",
            "--ticket",
            "adult:2",
            "--ticket",
            "infant=1",
        ])
        .expect("valid arguments");

        assert_eq!(args.account_id, Some(3));
        assert_eq!(
            args.tickets,
            vec![
                TicketTypeRequest::new(TicketType::Adult, 2),
                TicketTypeRequest::new(TicketType::Infant, 1),
            ]
        );
    }

    #[test]
    fn keeps_invalid_values_for_the_service_to_reject() {
        let args = Args::try_parse_from([
            "ticket_client",
            "--account-id",
            "-5",
            "--ticket",
            "senior:-1",
        ])
        .expect("syntactically valid arguments");

        assert_eq!(args.account_id, Some(-5));
        assert_eq!(args.tickets, vec![TicketTypeRequest::untyped(-1)]);
    }

    #[test]
    fn rejects_malformed_tickets() {
        assert!(Args::try_parse_from(["ticket_client", "--ticket", "adult"]).is_err());
    }

    #[test]
    fn json_requires_a_path() {
        assert!(Args::try_parse_from(["ticket_client", "--json"]).is_err());
    }
}

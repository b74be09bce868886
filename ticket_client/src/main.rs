//! Ticket Client — validates and prices a ticket purchase from the command line.
//!
//! Requests come from repeated `--ticket` arguments, a request file, or both. The
//! purchase runs against logging payment and seat reservation services, and the
//! outcome is printed to stdout as JSON.
//!
//! Usage example (CLI):
//! ```bash
//! ticket_client --account-id 1 --ticket adult:2 --ticket child:1
//! ticket_client --account-id 1 --path ./family.txt --policy ./policy.json
//! ```
//!
//! The request file holds one `<type> <count>` entry per line; see
//! `ticket_common::request` for details.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::{error, info};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use ticket_common::request::RequestParser;
use ticket_common::{PurchasePolicy, Result, TicketError, TicketTypeRequest};
use ticket_service::{LoggingPaymentService, LoggingSeatReservationService, TicketService};

fn main() -> Result<(), TicketError> {
    init_logger();
    let args = Args::parse();

    let policy = match &args.policy {
        Some(raw) => load_policy(&normalize_path(raw))?,
        None => PurchasePolicy::default(),
    };
    info!("Purchase policy: {:?}", policy);

    let mut requests = args.tickets.clone();
    if let Some(raw) = &args.path {
        requests.extend(load_requests(&normalize_path(raw), args.json)?);
    }
    info!("Ticket requests: {:?}", requests);

    let service = TicketService::with_policy(
        LoggingPaymentService,
        LoggingSeatReservationService,
        policy,
    );
    let requests = (!requests.is_empty()).then_some(requests.as_slice());

    match service.purchase_tickets(args.account_id, requests) {
        Ok(outcome) => {
            println!("{}", serde_json::to_string(&outcome)?);
            Ok(())
        }
        Err(e) => {
            error!("Purchase failed: {}", e);
            Err(e.into())
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn load_policy(path: &Path) -> Result<PurchasePolicy> {
    let file = File::open(path)?;
    PurchasePolicy::from_reader(BufReader::new(file))
}

fn load_requests(path: &Path, json: bool) -> Result<Vec<TicketTypeRequest>> {
    let reader = BufReader::new(File::open(path)?);
    if json {
        TicketTypeRequest::parse_from_json(reader)
    } else {
        TicketTypeRequest::parse_from_reader(reader)
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

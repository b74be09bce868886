//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `TicketError`, so functions can simply return `Result<T>`.
use crate::error::TicketError;

/// Workspace-wide `Result` alias with `TicketError` as the default error.
pub type Result<T, E = TicketError> = std::result::Result<T, E>;

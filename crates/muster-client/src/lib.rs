// ABOUTME: Fleet-management API client library
// ABOUTME: One method per remote operation, plus broadcast log tailing

mod client;
mod error;
mod models;

pub use client::{FleetClient, LogTail};
pub use error::FleetError;
pub use models::*;

// Re-export the protocol types callers see in return values.
pub use muster_proto as proto;

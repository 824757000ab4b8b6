//! Connection tracking and the application-facing controller session.
//!
//! The protocol crate decodes and encodes byte buffers; this crate owns the
//! small amount of mutable state around it: whether a pad is currently
//! active, the previous snapshot used for event diffing, and the player
//! number retained across rumble commands. Delivery is single-threaded by
//! contract: both the transport notifications and the report stream feed
//! the session through `&mut self`.

#![deny(static_mut_refs)]

pub mod session;
pub mod tracker;

pub use session::{PadEventHandler, PadSession};
pub use tracker::{ConnectionTracker, ReportDisposition};

use openpad_hid_common::PadHidError;
use openpad_hid_dualshock_protocol::DualShockError;
use thiserror::Error;

/// Errors surfaced by session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A report failed to decode. The session keeps its previous state.
    #[error("Protocol error: {0}")]
    Protocol(#[from] DualShockError),

    /// The outbound transport refused a report. Not retried.
    #[error("Transport error: {0}")]
    Transport(#[from] PadHidError),
}

pub type SessionResult<T> = Result<T, SessionError>;

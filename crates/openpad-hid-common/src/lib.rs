//! Common HID utilities for gamepad protocol implementations
//!
//! This crate provides the transport seam and shared error taxonomy used by
//! the OpenPad protocol and session crates. The transport itself (Bluetooth
//! L2CAP, hidraw, a test harness) lives behind [`PadTransport`]; everything
//! above it deals in plain report byte buffers.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod transport;

pub use transport::*;

use thiserror::Error;

/// Errors shared across the OpenPad HID stack.
///
/// Malformed input is never fatal: callers keep their previous state and the
/// transport layer owns any retry or reframing policy.
#[derive(Error, Debug)]
pub enum PadHidError {
    /// An input report was shorter than the fields a decoder needs to read.
    #[error("Malformed report: need at least {expected} bytes, got {actual}")]
    MalformedReport { expected: usize, actual: usize },

    /// The outbound transport refused or failed a write. Not retried here.
    #[error("Failed to write to device: {0}")]
    WriteError(String),

    /// The peripheral link is down; writes are impossible until reconnect.
    #[error("Device disconnected")]
    Disconnected,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type PadHidResult<T> = Result<T, PadHidError>;

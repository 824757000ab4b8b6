//! DualShock 4 HID protocol: input report parsing, event diffing, and
//! rumble/LED command encoding.
//!
//! This crate is intentionally I/O-free and allocation-free on hot paths.
//! It provides pure functions and types that can be tested without hardware:
//! the transport that carries the buffers lives behind the traits in
//! `openpad-hid-common`, and the connection state machine lives in
//! `openpad-session`.

#![deny(static_mut_refs)]

pub mod event;
pub mod ids;
pub mod input;
pub mod output;
pub mod types;

pub use event::{PadEvent, StickDelta, TriggerDelta};
pub use ids::{product_ids, SONY_VENDOR_ID};
pub use input::parse_input_report;
pub use output::{
    build_enable_report, encode_control_report, player_led_mask, rumble_duration_to_raw,
    rumble_intensity_to_raw, CONTROL_REPORT_LEN, ENABLE_REPORT_LEN,
};
pub use types::{
    AnalogSticks, AnalogTriggers, BatteryLevel, ButtonSet, ConnectionMedium, ControlCommand,
    DualShockState, LedSelection, Rumble, RumbleDuration, Sensors, Status,
};

use openpad_hid_common::PadHidError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DualShockError {
    #[error("Invalid report size: expected at least {expected}, got {actual}")]
    InvalidReportSize { expected: usize, actual: usize },

    #[error("HID error: {0}")]
    HidError(String),
}

pub type DualShockResult<T> = Result<T, DualShockError>;

impl From<PadHidError> for DualShockError {
    fn from(e: PadHidError) -> Self {
        DualShockError::HidError(e.to_string())
    }
}

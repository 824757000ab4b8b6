//! DualShock 4 input report parsing.
//!
//! All functions are pure and allocation-free. Decoding is total over any
//! buffer of at least [`INPUT_REPORT_MIN_LEN`] bytes: every field is read
//! independently at a fixed offset and no byte pattern is invalid.

#![deny(static_mut_refs)]

use crate::ids::{button_masks, input_offsets, INPUT_REPORT_MIN_LEN};
use crate::types::{AnalogSticks, AnalogTriggers, ButtonSet, DualShockState, Sensors, Status};
use crate::{DualShockError, DualShockResult};

/// Unsigned stick samples are biased around this center value.
const STICK_BIAS: u8 = 0x80;

/// Parse a raw input report into a [`DualShockState`] snapshot.
///
/// Status and sensor fields are intentionally left at their defaults: their
/// extraction is disabled in the wire mapping this codec reproduces, and the
/// reserved region is only counted toward the minimum length.
///
/// # Errors
///
/// [`DualShockError::InvalidReportSize`] when `data` is shorter than
/// [`INPUT_REPORT_MIN_LEN`]. No partial snapshot is produced.
pub fn parse_input_report(data: &[u8]) -> DualShockResult<DualShockState> {
    if data.len() < INPUT_REPORT_MIN_LEN {
        return Err(DualShockError::InvalidReportSize {
            expected: INPUT_REPORT_MIN_LEN,
            actual: data.len(),
        });
    }

    Ok(DualShockState {
        buttons: parse_buttons(data),
        sticks: parse_sticks(data),
        triggers: parse_triggers(data),
        status: Status::default(),
        sensors: Sensors::default(),
    })
}

/// Decode the four stick axes, shifting the unsigned center to 0.
fn parse_sticks(data: &[u8]) -> AnalogSticks {
    AnalogSticks {
        lx: (data[input_offsets::STICK_LX].wrapping_sub(STICK_BIAS)) as i8,
        ly: (data[input_offsets::STICK_LY].wrapping_sub(STICK_BIAS)) as i8,
        rx: (data[input_offsets::STICK_RX].wrapping_sub(STICK_BIAS)) as i8,
        ry: (data[input_offsets::STICK_RY].wrapping_sub(STICK_BIAS)) as i8,
    }
}

fn parse_triggers(data: &[u8]) -> AnalogTriggers {
    AnalogTriggers {
        l2: data[input_offsets::TRIGGER_L2],
        r2: data[input_offsets::TRIGGER_R2],
    }
}

/// Decode the 4-byte little-endian button word: hat nibble plus 14
/// single-bit flags.
fn parse_buttons(data: &[u8]) -> ButtonSet {
    let base = input_offsets::BUTTONS;
    let word = u32::from_le_bytes([data[base], data[base + 1], data[base + 2], data[base + 3]]);

    let (up, right, down, left) = hat_directions((word & button_masks::HAT) as u8);

    ButtonSet {
        up,
        right,
        down,
        left,

        square: word & button_masks::SQUARE != 0,
        cross: word & button_masks::CROSS != 0,
        circle: word & button_masks::CIRCLE != 0,
        triangle: word & button_masks::TRIANGLE != 0,

        l1: word & button_masks::L1 != 0,
        r1: word & button_masks::R1 != 0,
        l2: word & button_masks::L2 != 0,
        r2: word & button_masks::R2 != 0,

        share: word & button_masks::SHARE != 0,
        options: word & button_masks::OPTIONS != 0,
        l3: word & button_masks::L3 != 0,
        r3: word & button_masks::R3 != 0,

        ps: word & button_masks::PS != 0,
        touchpad: word & button_masks::TOUCHPAD != 0,
    }
}

/// Map a 4-bit hat code onto `(up, right, down, left)`.
///
/// Codes 0–7 walk the compass clockwise from north; anything else is
/// neutral. Opposite directions are never both true.
fn hat_directions(hat: u8) -> (bool, bool, bool, bool) {
    match hat {
        0 => (true, false, false, false),
        1 => (true, true, false, false),
        2 => (false, true, false, false),
        3 => (false, true, true, false),
        4 => (false, false, true, false),
        5 => (false, false, true, true),
        6 => (false, false, false, true),
        7 => (true, false, false, true),
        _ => (false, false, false, false),
    }
}

//! Output report encoders: the enable feature report and the rumble/LED
//! control report.
//!
//! Encoding never fails. Out-of-range inputs are clamped into the wire
//! domain, so every [`ControlCommand`] maps to exactly one byte sequence.

#![deny(static_mut_refs)]

use crate::ids::{
    control_offsets, hid_cmd, led_masks, report_ids, CONTROL_PAYLOAD_LEN, ENABLE_PAYLOAD,
    HID_HEADER_LEN, LED_ARGUMENTS,
};
use crate::types::{ControlCommand, LedSelection, Rumble, RumbleDuration};

/// Total length of the enable feature report, header included.
pub const ENABLE_REPORT_LEN: usize = HID_HEADER_LEN + ENABLE_PAYLOAD.len();

/// Total length of the control report, header included.
pub const CONTROL_REPORT_LEN: usize = HID_HEADER_LEN + CONTROL_PAYLOAD_LEN;

/// Maximum bounded rumble duration in milliseconds.
const MAX_RUMBLE_MILLIS: u16 = 5000;

/// Raw duration value meaning "rumble until told otherwise".
const DURATION_INDEFINITE: u8 = 255;

/// Build the feature report that switches the pad into full streaming mode.
///
/// Must be sent once per connection before the pad produces complete input
/// reports.
pub fn build_enable_report() -> [u8; ENABLE_REPORT_LEN] {
    let mut report = [0u8; ENABLE_REPORT_LEN];
    report[0] = hid_cmd::SET_REPORT | hid_cmd::TYPE_FEATURE;
    report[1] = report_ids::ENABLE;
    report[HID_HEADER_LEN..].copy_from_slice(&ENABLE_PAYLOAD);
    report
}

/// Encode a [`ControlCommand`] into the fixed-size control report.
///
/// Bytes not covered by a field stay zero. The per-LED argument block is
/// copied once for every lit LED; unlit LED slots stay zeroed.
pub fn encode_control_report(command: &ControlCommand) -> [u8; CONTROL_REPORT_LEN] {
    let mut report = [0u8; CONTROL_REPORT_LEN];
    report[0] = hid_cmd::SET_REPORT | hid_cmd::TYPE_OUTPUT;
    report[1] = report_ids::CONTROL;

    let payload = &mut report[HID_HEADER_LEN..];

    write_rumble(
        payload,
        &command.rumble_right,
        control_offsets::RUMBLE_RIGHT_DURATION,
        control_offsets::RUMBLE_RIGHT_INTENSITY,
    );
    write_rumble(
        payload,
        &command.rumble_left,
        control_offsets::RUMBLE_LEFT_DURATION,
        control_offsets::RUMBLE_LEFT_INTENSITY,
    );

    let logical = match command.leds {
        LedSelection::Player(player) => player_led_mask(player),
        LedSelection::Mask(mask) => mask & 0x0F,
    };
    // The wire mask leaves bit 0 unused: logical LED1..LED4 occupy bits 1..4.
    payload[control_offsets::LEDS] = (logical & 0x0F) << 1;

    let argument_slots = [
        (led_masks::LED1, control_offsets::LED1_ARGUMENTS),
        (led_masks::LED2, control_offsets::LED2_ARGUMENTS),
        (led_masks::LED3, control_offsets::LED3_ARGUMENTS),
        (led_masks::LED4, control_offsets::LED4_ARGUMENTS),
    ];
    for (wire_bit, offset) in argument_slots {
        if payload[control_offsets::LEDS] & wire_bit != 0 {
            payload[offset..offset + LED_ARGUMENTS.len()].copy_from_slice(&LED_ARGUMENTS);
        }
    }

    report
}

fn write_rumble(payload: &mut [u8], rumble: &Rumble, duration_offset: usize, intensity_offset: usize) {
    payload[duration_offset] = rumble_duration_to_raw(rumble.duration);
    payload[intensity_offset] = rumble_intensity_to_raw(rumble.intensity);
}

/// Scale a percentage intensity in [0, 100] onto the raw byte domain
/// [0, 255]. Out-of-range and non-finite values clamp to the endpoints.
pub fn rumble_intensity_to_raw(intensity: f32) -> u8 {
    let clamped = if intensity.is_finite() {
        intensity.clamp(0.0, 100.0)
    } else if intensity > 0.0 {
        100.0
    } else {
        0.0
    };
    (clamped * 255.0 / 100.0).round() as u8
}

/// Scale a rumble duration onto the raw byte domain: bounded durations are
/// clamped to [0, 5000] ms and mapped onto [0, 254]; 255 is reserved for
/// indefinite rumble.
pub fn rumble_duration_to_raw(duration: RumbleDuration) -> u8 {
    match duration {
        RumbleDuration::Millis(ms) => {
            let ms = ms.min(MAX_RUMBLE_MILLIS) as u32;
            (ms * u32::from(DURATION_INDEFINITE - 1) / u32::from(MAX_RUMBLE_MILLIS)) as u8
        }
        RumbleDuration::Indefinite => DURATION_INDEFINITE,
    }
}

/// Decompose a player slot in [1, 10] into the canonical logical LED mask
/// (bit 0 = LED1 … bit 3 = LED4).
///
/// Decomposition is greedy over the LED weights 4, 3, 2, 1, so low slots
/// light a single LED (player 1 = LED1, player 4 = LED4) and higher slots
/// combine them (player 5 = LED4 + LED1, player 10 = all four). Slots above
/// 10 saturate to the all-four pattern; slot 0 lights nothing.
pub fn player_led_mask(player: u8) -> u8 {
    let mut remaining = player.min(10);
    let mut mask = 0u8;
    for (weight, bit) in [(4u8, 0b1000u8), (3, 0b0100), (2, 0b0010), (1, 0b0001)] {
        if remaining >= weight {
            mask |= bit;
            remaining -= weight;
        }
    }
    mask
}

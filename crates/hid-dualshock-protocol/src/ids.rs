//! DualShock 4 USB/Bluetooth identifiers and wire layout constants.
//!
//! Byte offsets and masks below are fixed protocol constants, not
//! configuration. They must match the peripheral exactly.

#![deny(static_mut_refs)]

/// Sony Interactive Entertainment USB vendor ID.
pub const SONY_VENDOR_ID: u16 = 0x054C;

/// Known DualShock 4 product IDs.
pub mod product_ids {
    /// DualShock 4 (first generation, CUH-ZCT1).
    pub const DUALSHOCK4: u16 = 0x05C4;
    /// DualShock 4 (second generation, CUH-ZCT2).
    pub const DUALSHOCK4_V2: u16 = 0x09CC;
    /// Sony wireless adapter dongle.
    pub const WIRELESS_ADAPTER: u16 = 0x0BA0;
}

/// HID transaction header bytes (Bluetooth HIDP framing).
pub mod hid_cmd {
    /// SET_REPORT transaction type (high nibble of the first header byte).
    pub const SET_REPORT: u8 = 0x50;
    /// Output report type (low nibble).
    pub const TYPE_OUTPUT: u8 = 0x02;
    /// Feature report type (low nibble).
    pub const TYPE_FEATURE: u8 = 0x03;
}

/// Report identifiers (second header byte).
pub mod report_ids {
    /// Feature report that switches the pad into full streaming mode.
    pub const ENABLE: u8 = 0xF4;
    /// Rumble/LED output report.
    pub const CONTROL: u8 = 0x01;
}

/// Length of the HID header (transaction byte + report identifier).
pub const HID_HEADER_LEN: usize = 2;

/// Constant payload of the enable feature report.
pub const ENABLE_PAYLOAD: [u8; 4] = [0x42, 0x03, 0x00, 0x00];

/// Constant per-LED blink/brightness argument block copied into the control
/// report for every lit LED.
pub const LED_ARGUMENTS: [u8; 5] = [0xFF, 0x27, 0x10, 0x00, 0x32];

/// Control report payload size (excluding the HID header).
pub const CONTROL_PAYLOAD_LEN: usize = 48;

/// Minimum input report length covering every field this codec reads,
/// including the reserved status/sensor region.
pub const INPUT_REPORT_MIN_LEN: usize = 58;

/// Input report byte offsets.
pub mod input_offsets {
    pub const STICK_LX: usize = 11;
    pub const STICK_LY: usize = 12;
    pub const STICK_RX: usize = 13;
    pub const STICK_RY: usize = 14;

    /// Start of the 4-byte little-endian button word.
    pub const BUTTONS: usize = 15;

    pub const TRIGGER_L2: usize = 18;
    pub const TRIGGER_R2: usize = 19;

    /// Battery/connection status block (reserved, not decoded).
    pub const STATUS: usize = 39;

    /// Big-endian 16-bit sensor samples (reserved, not decoded).
    pub const ACCEL_X: usize = 51;
    pub const ACCEL_Y: usize = 53;
    pub const ACCEL_Z: usize = 55;
    pub const GYRO_Z: usize = 57;
}

/// Bit masks over the 4-byte button word at [`input_offsets::BUTTONS`].
pub mod button_masks {
    /// 4-bit hat code in the low nibble (compass direction, 8 = neutral).
    pub const HAT: u32 = 0xF;

    pub const SQUARE: u32 = 1 << 4;
    pub const CROSS: u32 = 1 << 5;
    pub const CIRCLE: u32 = 1 << 6;
    pub const TRIANGLE: u32 = 1 << 7;

    pub const L1: u32 = 1 << 8;
    pub const R1: u32 = 1 << 9;
    pub const L2: u32 = 1 << 10;
    pub const R2: u32 = 1 << 11;

    pub const SHARE: u32 = 1 << 12;
    pub const OPTIONS: u32 = 1 << 13;
    pub const L3: u32 = 1 << 14;
    pub const R3: u32 = 1 << 15;

    pub const PS: u32 = 1 << 16;
    pub const TOUCHPAD: u32 = 1 << 17;
}

/// Control report payload byte offsets (relative to the payload, i.e. after
/// the HID header).
pub mod control_offsets {
    pub const RUMBLE_RIGHT_DURATION: usize = 1;
    pub const RUMBLE_RIGHT_INTENSITY: usize = 2;
    pub const RUMBLE_LEFT_DURATION: usize = 3;
    pub const RUMBLE_LEFT_INTENSITY: usize = 4;

    /// LED enable bitmask byte.
    pub const LEDS: usize = 9;

    /// Argument blocks are laid out LED4 first.
    pub const LED4_ARGUMENTS: usize = 10;
    pub const LED3_ARGUMENTS: usize = 15;
    pub const LED2_ARGUMENTS: usize = 20;
    pub const LED1_ARGUMENTS: usize = 25;
}

/// Wire bit masks for the LED enable byte. Bit 0 is unused on the wire.
pub mod led_masks {
    pub const LED1: u8 = 1 << 1;
    pub const LED2: u8 = 1 << 2;
    pub const LED3: u8 = 1 << 3;
    pub const LED4: u8 = 1 << 4;
}

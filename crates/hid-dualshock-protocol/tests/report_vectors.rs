//! Golden byte-vector tests: exact wire images for known inputs.
//!
//! If any assertion here fails, the wire layout in `ids.rs` has drifted from
//! the peripheral. Fix the constants, not the vectors.

use openpad_hid_dualshock_protocol::{
    build_enable_report, encode_control_report, parse_input_report, product_ids, ControlCommand,
    LedSelection, Rumble, RumbleDuration, SONY_VENDOR_ID,
};

// ── VID / PID golden values ──────────────────────────────────────────────────

/// Sony VID must be 0x054C (Sony Interactive Entertainment).
#[test]
fn vendor_id_is_054c() {
    assert_eq!(SONY_VENDOR_ID, 0x054C);
}

#[test]
fn dualshock4_pid_is_05c4() {
    assert_eq!(product_ids::DUALSHOCK4, 0x05C4);
}

#[test]
fn dualshock4_v2_pid_is_09cc() {
    assert_eq!(product_ids::DUALSHOCK4_V2, 0x09CC);
}

#[test]
fn wireless_adapter_pid_is_0ba0() {
    assert_eq!(product_ids::WIRELESS_ADAPTER, 0x0BA0);
}

// ── Input report vectors ─────────────────────────────────────────────────────

fn neutral_report() -> [u8; 58] {
    let mut data = [0u8; 58];
    data[11] = 0x80;
    data[12] = 0x80;
    data[13] = 0x80;
    data[14] = 0x80;
    data[15] = 0x08;
    data
}

/// A captured-style report: cross held, left stick pushed right, R2 half
/// pulled, hat pressed up-left.
#[test]
fn decode_known_report() -> Result<(), Box<dyn std::error::Error>> {
    let mut data = neutral_report();
    data[11] = 0xC0; // lx = +64
    data[15] = 0x20 | 0x07; // cross + hat up-left
    data[19] = 0x7F; // r2 half pull

    let state = parse_input_report(&data)?;
    assert_eq!(state.sticks.lx, 64);
    assert!(state.buttons.cross);
    assert!(state.buttons.up);
    assert!(state.buttons.left);
    assert!(!state.buttons.right);
    assert_eq!(state.triggers.r2, 0x7F);
    Ok(())
}

/// Every single-bit flag in the button word, decoded in isolation.
#[test]
fn decode_each_button_flag() -> Result<(), Box<dyn std::error::Error>> {
    // (bit, accessor)
    let flags: [(u32, fn(&openpad_hid_dualshock_protocol::ButtonSet) -> bool); 14] = [
        (1 << 4, |b| b.square),
        (1 << 5, |b| b.cross),
        (1 << 6, |b| b.circle),
        (1 << 7, |b| b.triangle),
        (1 << 8, |b| b.l1),
        (1 << 9, |b| b.r1),
        (1 << 10, |b| b.l2),
        (1 << 11, |b| b.r2),
        (1 << 12, |b| b.share),
        (1 << 13, |b| b.options),
        (1 << 14, |b| b.l3),
        (1 << 15, |b| b.r3),
        (1 << 16, |b| b.ps),
        (1 << 17, |b| b.touchpad),
    ];

    for (bit, accessor) in flags {
        let mut data = neutral_report();
        let word = bit | 0x08; // keep the hat neutral
        data[15..19].copy_from_slice(&word.to_le_bytes());

        let state = parse_input_report(&data)?;
        assert!(accessor(&state.buttons), "bit {bit:#x} must set its flag");
        assert_eq!(state.buttons.count(), 1, "bit {bit:#x} must set only its flag");
    }
    Ok(())
}

// ── Output report vectors ────────────────────────────────────────────────────

#[test]
fn enable_report_exact_bytes() {
    assert_eq!(build_enable_report(), [0x53, 0xF4, 0x42, 0x03, 0x00, 0x00]);
}

/// Full golden image for a representative command: both actuators rumbling,
/// player 1 LED lit.
#[test]
fn control_report_exact_bytes() {
    let command = ControlCommand {
        rumble_right: Rumble::new(100.0, RumbleDuration::Indefinite),
        rumble_left: Rumble::new(100.0, RumbleDuration::Indefinite),
        leds: LedSelection::Player(1),
    };

    let mut expected = [0u8; 50];
    expected[0] = 0x52; // SET_REPORT | output
    expected[1] = 0x01; // control report ID
    expected[3] = 0xFF; // right duration (indefinite)
    expected[4] = 0xFF; // right intensity
    expected[5] = 0xFF; // left duration (indefinite)
    expected[6] = 0xFF; // left intensity
    expected[11] = 0x02; // LED1 wire bit
    expected[27..32].copy_from_slice(&[0xFF, 0x27, 0x10, 0x00, 0x32]); // LED1 arguments

    assert_eq!(encode_control_report(&command), expected);
}

/// Player slots 1..=10 produce the canonical wire LED masks.
#[test]
fn control_report_player_wire_masks() {
    // (player, wire mask at payload offset 9)
    let table = [
        (1u8, 0b0000_0010u8),
        (2, 0b0000_0100),
        (3, 0b0000_1000),
        (4, 0b0001_0000),
        (5, 0b0001_0010),
        (6, 0b0001_0100),
        (7, 0b0001_1000),
        (8, 0b0001_1010),
        (9, 0b0001_1100),
        (10, 0b0001_1110),
    ];

    for (player, wire) in table {
        let command = ControlCommand::default().with_leds(LedSelection::Player(player));
        let report = encode_control_report(&command);
        assert_eq!(report[11], wire, "player {player}");
    }
}

/// An all-default command is all zeroes after the header.
#[test]
fn control_report_default_is_zeroed() {
    let report = encode_control_report(&ControlCommand::default());
    assert_eq!(&report[..2], &[0x52, 0x01]);
    assert!(report[2..].iter().all(|&b| b == 0));
}

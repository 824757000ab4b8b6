//! Type definitions for the DualShock 4 protocol.
//!
//! A [`DualShockState`] is one fully decoded controller snapshot. It is an
//! immutable value, replaced wholesale on every decoded report; there are no
//! partial updates.

#![deny(static_mut_refs)]

use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, Not};

/// The 18 independent button flags of a DualShock 4.
///
/// The four directional flags originate from a single 4-bit hat code and are
/// mutually constrained: opposite directions are never both true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonSet {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,

    pub square: bool,
    pub cross: bool,
    pub circle: bool,
    pub triangle: bool,

    pub l1: bool,
    pub r1: bool,
    pub l2: bool,
    pub r2: bool,

    pub share: bool,
    pub options: bool,
    pub l3: bool,
    pub r3: bool,

    pub ps: bool,
    pub touchpad: bool,
}

impl ButtonSet {
    /// True when no flag is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Number of flags currently set.
    pub fn count(&self) -> usize {
        [
            self.up,
            self.right,
            self.down,
            self.left,
            self.square,
            self.cross,
            self.circle,
            self.triangle,
            self.l1,
            self.r1,
            self.l2,
            self.r2,
            self.share,
            self.options,
            self.l3,
            self.r3,
            self.ps,
            self.touchpad,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}

impl BitAnd for ButtonSet {
    type Output = ButtonSet;

    fn bitand(self, rhs: ButtonSet) -> ButtonSet {
        ButtonSet {
            up: self.up & rhs.up,
            right: self.right & rhs.right,
            down: self.down & rhs.down,
            left: self.left & rhs.left,
            square: self.square & rhs.square,
            cross: self.cross & rhs.cross,
            circle: self.circle & rhs.circle,
            triangle: self.triangle & rhs.triangle,
            l1: self.l1 & rhs.l1,
            r1: self.r1 & rhs.r1,
            l2: self.l2 & rhs.l2,
            r2: self.r2 & rhs.r2,
            share: self.share & rhs.share,
            options: self.options & rhs.options,
            l3: self.l3 & rhs.l3,
            r3: self.r3 & rhs.r3,
            ps: self.ps & rhs.ps,
            touchpad: self.touchpad & rhs.touchpad,
        }
    }
}

impl Not for ButtonSet {
    type Output = ButtonSet;

    fn not(self) -> ButtonSet {
        ButtonSet {
            up: !self.up,
            right: !self.right,
            down: !self.down,
            left: !self.left,
            square: !self.square,
            cross: !self.cross,
            circle: !self.circle,
            triangle: !self.triangle,
            l1: !self.l1,
            r1: !self.r1,
            l2: !self.l2,
            r2: !self.r2,
            share: !self.share,
            options: !self.options,
            l3: !self.l3,
            r3: !self.r3,
            ps: !self.ps,
            touchpad: !self.touchpad,
        }
    }
}

/// Bias-corrected analog stick axes. Raw unsigned samples have 0x80
/// subtracted, so center rests at 0 and the full raw domain [0, 255] maps
/// onto [-128, 127].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalogSticks {
    pub lx: i8,
    pub ly: i8,
    pub rx: i8,
    pub ry: i8,
}

/// Raw analog trigger pressure, 0 = released, 255 = fully pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalogTriggers {
    pub l2: u8,
    pub r2: u8,
}

/// Battery charge level as reported in the status block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatteryLevel {
    Shutdown,
    Dying,
    Low,
    High,
    Full,
    Charging,
}

/// Physical link the pad is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionMedium {
    Usb,
    Bluetooth,
}

/// Battery and link status.
///
/// Status decoding is disabled in the wire mapping this codec reproduces:
/// the decoder never populates these fields, so they always hold their
/// defaults (`None`/`false`). The type is kept so the snapshot shape matches
/// the peripheral's full report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Status {
    pub battery: Option<BatteryLevel>,
    pub medium: Option<ConnectionMedium>,
    pub charging: bool,
    pub rumbling: bool,
}

/// Accelerometer (3-axis) and gyroscope (z-axis) samples, bias-corrected by
/// subtracting 512 from the big-endian raw value.
///
/// Like [`Status`], sensor decoding is disabled upstream and these fields
/// always stay at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sensors {
    pub accel_x: i16,
    pub accel_y: i16,
    pub accel_z: i16,
    pub gyro_z: i16,
}

/// One fully decoded controller snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DualShockState {
    pub buttons: ButtonSet,
    pub sticks: AnalogSticks,
    pub triggers: AnalogTriggers,
    pub status: Status,
    pub sensors: Sensors,
}

impl DualShockState {
    /// Neutral snapshot: no buttons, centered sticks, released triggers.
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// How long a rumble command should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RumbleDuration {
    /// Bounded duration in milliseconds, clamped to [0, 5000] on encode.
    Millis(u16),
    /// Rumble until explicitly stopped.
    Indefinite,
}

impl Default for RumbleDuration {
    fn default() -> Self {
        RumbleDuration::Millis(0)
    }
}

/// One actuator's rumble request. Intensity is a percentage in [0, 100];
/// out-of-range values are clamped on encode, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rumble {
    pub intensity: f32,
    pub duration: RumbleDuration,
}

impl Rumble {
    pub fn new(intensity: f32, duration: RumbleDuration) -> Self {
        Self {
            intensity,
            duration,
        }
    }

    /// No rumble at all.
    pub fn off() -> Self {
        Self::default()
    }
}

/// Which player LEDs to light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedSelection {
    /// Player slot in [1, 10], decomposed into the canonical LED pattern.
    Player(u8),
    /// Explicit logical 4-bit mask: bit 0 = LED1 … bit 3 = LED4. Upper bits
    /// are ignored on encode.
    Mask(u8),
}

impl Default for LedSelection {
    fn default() -> Self {
        LedSelection::Mask(0)
    }
}

/// A complete rumble + LED command, consumed once by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlCommand {
    pub rumble_right: Rumble,
    pub rumble_left: Rumble,
    pub leds: LedSelection,
}

impl ControlCommand {
    /// Apply the same rumble to both actuators.
    pub fn rumble_both(rumble: Rumble) -> Self {
        Self {
            rumble_right: rumble,
            rumble_left: rumble,
            leds: LedSelection::default(),
        }
    }

    pub fn with_leds(mut self, leds: LedSelection) -> Self {
        self.leds = leds;
        self
    }
}

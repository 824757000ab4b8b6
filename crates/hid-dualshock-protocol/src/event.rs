//! Edge-triggered event model: the difference between two snapshots.
//!
//! Diffing is a pure function of `(previous, current)`; the session layer
//! owns which snapshots get compared.

#![deny(static_mut_refs)]

use crate::types::{ButtonSet, DualShockState};
use serde::{Deserialize, Serialize};

/// Per-axis stick movement since the previous snapshot.
///
/// Deltas are stored as wrapping 8-bit signed differences. A swing wider
/// than 127 counts (e.g. full-left to full-right in one report) wraps
/// silently; this mirrors the peripheral's original driver and is pinned by
/// tests rather than widened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StickDelta {
    pub lx: i8,
    pub ly: i8,
    pub rx: i8,
    pub ry: i8,
}

/// Trigger pressure change since the previous snapshot, same wrapping 8-bit
/// representation as [`StickDelta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TriggerDelta {
    pub l2: i8,
    pub r2: i8,
}

/// Button edges and analog deltas between two consecutive snapshots.
///
/// For every button flag, `pressed` and `released` are mutually exclusive
/// by construction; diffing a snapshot against itself yields the default
/// (all-false, all-zero) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PadEvent {
    pub pressed: ButtonSet,
    pub released: ButtonSet,
    pub stick_delta: StickDelta,
    pub trigger_delta: TriggerDelta,
}

impl PadEvent {
    /// Compute the edge-triggered event between two snapshots.
    pub fn between(prev: &DualShockState, cur: &DualShockState) -> Self {
        PadEvent {
            pressed: !prev.buttons & cur.buttons,
            released: prev.buttons & !cur.buttons,
            stick_delta: StickDelta {
                lx: cur.sticks.lx.wrapping_sub(prev.sticks.lx),
                ly: cur.sticks.ly.wrapping_sub(prev.sticks.ly),
                rx: cur.sticks.rx.wrapping_sub(prev.sticks.rx),
                ry: cur.sticks.ry.wrapping_sub(prev.sticks.ry),
            },
            trigger_delta: TriggerDelta {
                l2: cur.triggers.l2.wrapping_sub(prev.triggers.l2) as i8,
                r2: cur.triggers.r2.wrapping_sub(prev.triggers.r2) as i8,
            },
        }
    }

    /// True when nothing changed between the two snapshots.
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }
}

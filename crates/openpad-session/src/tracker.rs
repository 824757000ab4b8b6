//! Connection tracker: the two-state machine gating report delivery.
//!
//! A pad is considered connected the moment its first report decodes, and
//! disconnected only when the owner says so. There are no timers and no
//! retry logic; absence of reports is not a signal.

use openpad_hid_dualshock_protocol::{DualShockState, PadEvent};

/// What the session should do with a freshly decoded snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDisposition {
    /// First report after being inactive: signal a connection. The snapshot
    /// itself is consumed as the diffing baseline and not delivered.
    FirstReport,
    /// Subsequent report: deliver the snapshot and its diff against the
    /// previous one.
    Input {
        state: DualShockState,
        event: PadEvent,
    },
}

/// Tracks whether a pad session is active and holds the previous snapshot
/// used for event diffing.
///
/// The tracker is a plain value; callers that share it across threads own
/// the locking. [`crate::PadSession`] drives it through `&mut self`.
#[derive(Debug, Default)]
pub struct ConnectionTracker {
    active: bool,
    last: Option<DualShockState>,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one decoded snapshot through the state machine.
    pub fn on_report(&mut self, state: DualShockState) -> ReportDisposition {
        let previous = self.last.replace(state);
        if self.active {
            let prev = previous.unwrap_or_else(DualShockState::neutral);
            ReportDisposition::Input {
                state,
                event: PadEvent::between(&prev, &state),
            }
        } else {
            self.active = true;
            ReportDisposition::FirstReport
        }
    }

    /// Mark the pad disconnected and drop the stored snapshot. Returns
    /// whether a session was actually active, so the caller can suppress
    /// spurious disconnect signals.
    pub fn on_disconnect(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        self.last = None;
        was_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_cross() -> DualShockState {
        let mut state = DualShockState::neutral();
        state.buttons.cross = true;
        state
    }

    #[test]
    fn test_first_report_connects_without_input() {
        let mut tracker = ConnectionTracker::new();
        assert!(!tracker.is_active());

        let disposition = tracker.on_report(snapshot_with_cross());
        assert_eq!(disposition, ReportDisposition::FirstReport);
        assert!(tracker.is_active());
    }

    #[test]
    fn test_second_report_diffs_against_first() {
        let mut tracker = ConnectionTracker::new();
        let first = snapshot_with_cross();
        let _ = tracker.on_report(first);

        let mut second = first;
        second.buttons.cross = false;
        second.buttons.triangle = true;

        match tracker.on_report(second) {
            ReportDisposition::Input { state, event } => {
                assert_eq!(state, second);
                assert!(event.pressed.triangle);
                assert!(event.released.cross);
            }
            other => panic!("expected Input, got {other:?}"),
        }
    }

    #[test]
    fn test_identical_reports_produce_quiet_events() {
        let mut tracker = ConnectionTracker::new();
        let state = snapshot_with_cross();
        let _ = tracker.on_report(state);

        match tracker.on_report(state) {
            ReportDisposition::Input { event, .. } => assert!(event.is_quiet()),
            other => panic!("expected Input, got {other:?}"),
        }
    }

    #[test]
    fn test_disconnect_clears_state() {
        let mut tracker = ConnectionTracker::new();
        let _ = tracker.on_report(snapshot_with_cross());
        assert!(tracker.is_active());

        assert!(tracker.on_disconnect());
        assert!(!tracker.is_active());

        // A second disconnect is reported as spurious.
        assert!(!tracker.on_disconnect());

        // After reconnecting, the first report gates again; no diff against
        // the pre-disconnect snapshot leaks through.
        let disposition = tracker.on_report(DualShockState::neutral());
        assert_eq!(disposition, ReportDisposition::FirstReport);
    }
}

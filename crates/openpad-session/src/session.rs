//! Application-facing session: wires the codec, the connection tracker, and
//! an outbound transport behind one handler trait.
//!
//! The session owns no I/O loop. The embedding transport calls
//! [`PadSession::notify_connected`] / [`PadSession::notify_disconnected`]
//! when the link comes and goes, and [`PadSession::deliver_report`] for each
//! inbound report buffer. All delivery is `&mut self`; callers serialize.

use openpad_hid_common::PadTransport;
use openpad_hid_dualshock_protocol::{
    build_enable_report, encode_control_report, parse_input_report, ControlCommand, DualShockState,
    LedSelection, PadEvent, Rumble, RumbleDuration,
};
use tracing::{debug, warn};

use crate::tracker::{ConnectionTracker, ReportDisposition};
use crate::SessionResult;

/// Callbacks the application implements to observe the pad.
///
/// Default implementations are no-ops, so a handler only implements the
/// signals it cares about.
pub trait PadEventHandler {
    /// The pad produced its first report after being inactive. That report's
    /// data is consumed as the diffing baseline and not delivered.
    fn on_connect(&mut self) {}

    /// The link went away while a session was active.
    fn on_disconnect(&mut self) {}

    /// A decoded snapshot and its diff against the previous one.
    fn on_input(&mut self, _state: &DualShockState, _event: &PadEvent) {}
}

/// One controller session over an outbound transport.
pub struct PadSession<T, H> {
    transport: T,
    handler: H,
    tracker: ConnectionTracker,
    player: u8,
}

impl<T: PadTransport, H: PadEventHandler> PadSession<T, H> {
    pub fn new(transport: T, handler: H) -> Self {
        Self {
            transport,
            handler,
            tracker: ConnectionTracker::new(),
            player: 0,
        }
    }

    /// Whether a pad is currently active (has produced at least one report
    /// since the last disconnect).
    pub fn is_active(&self) -> bool {
        self.tracker.is_active()
    }

    /// The link came up: switch the pad into full streaming mode and claim
    /// the player 1 LED.
    ///
    /// Sent once per connection; the transport owns reconnect policy.
    ///
    /// # Errors
    ///
    /// Transmit failures surface as [`crate::SessionError::Transport`].
    pub fn notify_connected(&mut self) -> SessionResult<()> {
        debug!("pad link up, sending enable report");
        let report = build_enable_report();
        self.transport.send(&report)?;
        self.set_player(1)
    }

    /// The link went down: reset the tracker and signal the handler if a
    /// session was actually active.
    pub fn notify_disconnected(&mut self) {
        if self.tracker.on_disconnect() {
            debug!("pad disconnected");
            self.handler.on_disconnect();
        }
    }

    /// Decode one inbound report and dispatch it through the tracker.
    ///
    /// The first report after inactivity signals `on_connect` and is
    /// otherwise dropped; later reports are delivered with their diff.
    ///
    /// # Errors
    ///
    /// Decode failures surface as [`crate::SessionError::Protocol`] and
    /// leave the tracker and the stored previous snapshot untouched.
    pub fn deliver_report(&mut self, data: &[u8]) -> SessionResult<()> {
        let state = match parse_input_report(data) {
            Ok(state) => state,
            Err(err) => {
                warn!("dropping malformed input report: {err}");
                return Err(err.into());
            }
        };

        match self.tracker.on_report(state) {
            ReportDisposition::FirstReport => {
                debug!("pad active");
                self.handler.on_connect();
            }
            ReportDisposition::Input { state, event } => {
                self.handler.on_input(&state, &event);
            }
        }
        Ok(())
    }

    /// Light the LEDs for a player slot in [1, 10] and remember the slot for
    /// later rumble commands.
    ///
    /// # Errors
    ///
    /// Transmit failures surface as [`crate::SessionError::Transport`]; the
    /// player slot is still retained.
    pub fn set_player(&mut self, player: u8) -> SessionResult<()> {
        self.player = player;
        self.send_command(&ControlCommand {
            leds: LedSelection::Player(player),
            ..ControlCommand::default()
        })
    }

    /// Rumble both actuators at the same intensity while keeping the current
    /// player LEDs lit.
    ///
    /// # Errors
    ///
    /// Transmit failures surface as [`crate::SessionError::Transport`].
    pub fn set_rumble(&mut self, intensity: f32, duration: RumbleDuration) -> SessionResult<()> {
        let command = ControlCommand::rumble_both(Rumble::new(intensity, duration))
            .with_leds(LedSelection::Player(self.player));
        self.send_command(&command)
    }

    /// Encode and transmit an arbitrary control command.
    ///
    /// # Errors
    ///
    /// Transmit failures surface as [`crate::SessionError::Transport`]. No
    /// retry; the caller decides whether to resend.
    pub fn send_command(&mut self, command: &ControlCommand) -> SessionResult<()> {
        let report = encode_control_report(command);
        self.transport.send(&report)?;
        Ok(())
    }
}

//! Outbound transport trait and test doubles
//!
//! The core never opens or owns a link. It is handed something that can ship
//! a finished report buffer to the peripheral, and it calls `send` exactly
//! once per encoded report: the enable feature report on connect, and one
//! output report per command. No retries, no queuing.

use crate::{PadHidError, PadHidResult};

/// Outbound half of the transport: ship one raw report to the peripheral.
pub trait PadTransport: Send {
    /// Transmit a complete report buffer. Returns the number of bytes
    /// accepted by the link.
    ///
    /// # Errors
    ///
    /// [`PadHidError::Disconnected`] when the link is down, or
    /// [`PadHidError::WriteError`] when the link rejects the write. The
    /// caller surfaces these; it never retries.
    fn send(&mut self, report: &[u8]) -> PadHidResult<usize>;

    fn is_connected(&self) -> bool;
}

pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory [`PadTransport`] that records every write.
    ///
    /// Clones share the same backing state, so a test can keep one handle
    /// for inspection while the session owns another.
    #[derive(Clone)]
    pub struct MockTransport {
        sent: Arc<Mutex<Vec<Vec<u8>>>>,
        connected: Arc<Mutex<bool>>,
        fail_writes: Arc<Mutex<bool>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self {
                sent: Arc::new(Mutex::new(Vec::new())),
                connected: Arc::new(Mutex::new(true)),
                fail_writes: Arc::new(Mutex::new(false)),
            }
        }

        /// Every report buffer passed to `send`, oldest first.
        pub fn sent_reports(&self) -> Vec<Vec<u8>> {
            let sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
            sent.clone()
        }

        pub fn disconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = false;
        }

        pub fn reconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = true;
        }

        /// Make subsequent writes fail with [`PadHidError::WriteError`]
        /// while keeping the link "connected".
        pub fn fail_writes(&self, fail: bool) {
            let mut flag = self.fail_writes.lock().unwrap_or_else(|e| e.into_inner());
            *flag = fail;
        }
    }

    impl Default for MockTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl PadTransport for MockTransport {
        fn send(&mut self, report: &[u8]) -> PadHidResult<usize> {
            if !self.is_connected() {
                return Err(PadHidError::Disconnected);
            }
            let failing = *self.fail_writes.lock().unwrap_or_else(|e| e.into_inner());
            if failing {
                return Err(PadHidError::WriteError("mock write failure".to_string()));
            }

            let mut sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
            sent.push(report.to_vec());
            Ok(report.len())
        }

        fn is_connected(&self) -> bool {
            *self.connected.lock().unwrap_or_else(|e| e.into_inner())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;

    #[test]
    fn test_mock_transport_records_writes() {
        let mut transport = MockTransport::new();

        let n = transport.send(&[0x52, 0x01, 0x00]).expect("send succeeds");
        assert_eq!(n, 3);

        let sent = transport.sent_reports();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], vec![0x52, 0x01, 0x00]);
    }

    #[test]
    fn test_mock_transport_disconnect() {
        let mut transport = MockTransport::new();
        transport.disconnect();

        assert!(!transport.is_connected());
        let result = transport.send(&[0x01]);
        assert!(matches!(result, Err(PadHidError::Disconnected)));
    }

    #[test]
    fn test_mock_transport_clone_shares_state() {
        let transport = MockTransport::new();
        let mut writer = transport.clone();

        writer.send(&[0xAA]).expect("send succeeds");
        assert_eq!(transport.sent_reports(), vec![vec![0xAA]]);
    }

    #[test]
    fn test_mock_transport_write_failure() {
        let mut transport = MockTransport::new();
        transport.fail_writes(true);

        let result = transport.send(&[0x01]);
        assert!(matches!(result, Err(PadHidError::WriteError(_))));
        assert!(transport.sent_reports().is_empty());

        transport.fail_writes(false);
        let n = transport.send(&[0x01]).expect("send succeeds again");
        assert_eq!(n, 1);
    }
}

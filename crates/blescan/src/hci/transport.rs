//! Transport seam between the scan session and a controller
//!
//! [`HciSocket`](crate::hci::HciSocket) is the Linux implementation. Tests
//! drive the session with an in-memory transport instead.

use crate::error::HciError;
use crate::hci::command::HciCommand;
use crate::hci::constants::*;

/// Socket level event filter, laid out like BlueZ's `struct hci_filter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventFilter {
    pub type_mask: u32,
    pub event_mask: [u32; 2],
    pub opcode: u16,
}

impl EventFilter {
    /// Event packets only, every event code
    pub fn all_events() -> Self {
        let mut filter = Self::default();
        filter.set_packet_type(HCI_EVENT_PKT);
        filter.event_mask = [u32::MAX; 2];
        filter
    }

    pub fn set_packet_type(&mut self, packet_type: u8) {
        self.type_mask |= 1 << (packet_type & 0x1F);
    }

    pub fn set_event(&mut self, event_code: u8) {
        let bit = (event_code & 0x3F) as usize;
        self.event_mask[bit >> 5] |= 1 << (bit & 0x1F);
    }

    pub fn accepts_event(&self, event_code: u8) -> bool {
        let bit = (event_code & 0x3F) as usize;
        self.event_mask[bit >> 5] & (1 << (bit & 0x1F)) != 0
    }
}

/// The operations a scan session needs from a controller connection
pub trait HciTransport {
    /// Send one command; does not wait for its completion event
    fn send_command(&mut self, command: &HciCommand) -> Result<(), HciError>;

    /// Restrict which packets [`receive`](Self::receive) delivers
    fn set_event_filter(&mut self, filter: &EventFilter) -> Result<(), HciError>;

    /// Block until one packet arrives and return at most `max_len` bytes of it
    ///
    /// Implementations with a read timeout return [`HciError::Timeout`] when
    /// it expires.
    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>, HciError>;

    /// Release the connection. Further calls may fail.
    fn close(&mut self) -> Result<(), HciError> {
        Ok(())
    }
}

impl<T: HciTransport + ?Sized> HciTransport for Box<T> {
    fn send_command(&mut self, command: &HciCommand) -> Result<(), HciError> {
        (**self).send_command(command)
    }

    fn set_event_filter(&mut self, filter: &EventFilter) -> Result<(), HciError> {
        (**self).set_event_filter(filter)
    }

    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>, HciError> {
        (**self).receive(max_len)
    }

    fn close(&mut self) -> Result<(), HciError> {
        (**self).close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_filter_masks() {
        let filter = EventFilter::all_events();
        assert_eq!(filter.type_mask, 1 << HCI_EVENT_PKT);
        assert!(filter.accepts_event(EVT_LE_META_EVENT));

        let mut filter = EventFilter::default();
        filter.set_event(EVT_LE_META_EVENT);
        filter.set_event(EVT_CMD_COMPLETE);
        assert_eq!(filter.event_mask, [1 << EVT_CMD_COMPLETE, 1 << (EVT_LE_META_EVENT - 32)]);
        assert!(!filter.accepts_event(EVT_DISCONN_COMPLETE));
    }
}

use crate::gap::AddressType;
use crate::hci::constants::HCI_MAX_EVENT_SIZE;
use crate::hci::{FilterPolicy, ScanType};
use std::time::Duration;

/// Settings for a [`ScanSession`](super::ScanSession)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// HCI device index, 0 for hci0
    pub device_id: u16,
    pub scan_type: ScanType,
    /// Scan interval, low byte only (0.625 ms units)
    pub interval: u8,
    /// Scan window, low byte only (0.625 ms units)
    pub window: u8,
    pub own_address_type: AddressType,
    pub filter_policy: FilterPolicy,
    pub filter_duplicates: bool,
    /// Largest packet accepted from the transport
    pub max_packet_len: usize,
    /// How long one receive may block before the cancel flag is checked again
    pub receive_timeout: Option<Duration>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            device_id: 0,
            scan_type: ScanType::Active,
            interval: 0x10,
            window: 0x10,
            own_address_type: AddressType::Random,
            filter_policy: FilterPolicy::AllowAll,
            filter_duplicates: false,
            max_packet_len: HCI_MAX_EVENT_SIZE,
            receive_timeout: Some(Duration::from_secs(1)),
        }
    }
}

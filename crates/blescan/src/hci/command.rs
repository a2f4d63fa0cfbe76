//! HCI command encoding
//!
//! Only the two LE scan commands are encoded here. [`HciCommand`] carries any
//! opcode plus raw parameters, so callers can still hand other commands to a
//! transport.

use crate::error::HciError;
use crate::gap::AddressType;
use crate::hci::constants::*;
use crate::hci::opcode::Opcode;

/// LE scan type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanType {
    Passive,
    #[default]
    Active,
}

impl From<ScanType> for u8 {
    fn from(value: ScanType) -> Self {
        match value {
            ScanType::Passive => LE_SCAN_PASSIVE,
            ScanType::Active => LE_SCAN_ACTIVE,
        }
    }
}

/// LE scanning filter policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPolicy {
    #[default]
    AllowAll,
    WhitelistOnly,
}

impl From<FilterPolicy> for u8 {
    fn from(value: FilterPolicy) -> Self {
        match value {
            FilterPolicy::AllowAll => LE_FILTER_ALLOW_ALL,
            FilterPolicy::WhitelistOnly => LE_FILTER_WHITELIST_ONLY,
        }
    }
}

/// Parameter bytes for LE Set Scan Parameters
///
/// Interval and window are 16-bit on the wire but only one byte of each is
/// set here, each preceded by a zero byte:
/// `[scan_type, 0, interval, 0, window, own_addr_type, filter_policy]`.
pub fn scan_parameters(
    scan_type: ScanType,
    interval: u8,
    window: u8,
    own_addr_type: AddressType,
    filter_policy: FilterPolicy,
) -> [u8; 7] {
    [
        scan_type.into(),
        0x00,
        interval,
        0x00,
        window,
        own_addr_type.into(),
        filter_policy.into(),
    ]
}

/// Parameter bytes for LE Set Scan Enable
pub fn scan_enable(enable: bool, filter_duplicates: bool) -> [u8; 2] {
    let duplicates = if filter_duplicates {
        LE_FILTER_DUPLICATES_ON
    } else {
        LE_FILTER_DUPLICATES_OFF
    };
    [enable as u8, duplicates]
}

/// An HCI command: opcode plus at most 255 parameter bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HciCommand {
    opcode: Opcode,
    params: Vec<u8>,
}

impl HciCommand {
    /// Creates a command, rejecting parameters that do not fit the length byte
    pub fn new(opcode: Opcode, params: Vec<u8>) -> Result<Self, HciError> {
        if params.len() > HCI_MAX_PARAM_LEN {
            return Err(HciError::InvalidParamLength(params.len()));
        }
        Ok(Self { opcode, params })
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn params(&self) -> &[u8] {
        &self.params
    }

    pub fn le_set_scan_parameters(
        scan_type: ScanType,
        interval: u8,
        window: u8,
        own_addr_type: AddressType,
        filter_policy: FilterPolicy,
    ) -> Self {
        Self {
            opcode: Opcode::LE_SET_SCAN_PARAMETERS,
            params: scan_parameters(scan_type, interval, window, own_addr_type, filter_policy)
                .to_vec(),
        }
    }

    pub fn le_set_scan_enable(enable: bool, filter_duplicates: bool) -> Self {
        Self {
            opcode: Opcode::LE_SET_SCAN_ENABLE,
            params: scan_enable(enable, filter_duplicates).to_vec(),
        }
    }

    /// Convert the command to a raw HCI packet
    pub fn to_packet(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(HCI_COMMAND_HDR_SIZE + self.params.len());
        packet.push(HCI_COMMAND_PKT);
        packet.extend_from_slice(&self.opcode.to_le_bytes());
        // Fits: `new` and the builders cap params at 255 bytes
        packet.push(self.params.len() as u8);
        packet.extend_from_slice(&self.params);
        packet
    }
}

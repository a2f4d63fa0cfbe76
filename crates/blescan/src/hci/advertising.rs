//! LE Advertising Report decoding
//!
//! The advertising report sub-event carries a count followed by that many
//! variable length reports:
//!
//! ```text
//! num_reports | event_type addr_type addr[6] len data[len] rssi | ...
//! ```
//!
//! Report boundaries depend on each `len` byte, so offsets are computed one
//! report at a time.

use crate::error::DecodeError;
use crate::gap::{self, AdStructures, AddressType, BdAddr};
use crate::hci::constants::*;
use crate::hci::frame::{byte_at, field, hex_spaced};
use std::fmt;

// event_type, addr_type, address, data length
const REPORT_FIXED_LEN: usize = 9;

/// Advertising event type of a single report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvertisingReportType {
    Ind,
    DirectInd,
    ScanInd,
    NonconnInd,
    ScanRsp,
    Unknown(u8),
}

impl From<u8> for AdvertisingReportType {
    fn from(value: u8) -> Self {
        match value {
            LE_ADV_IND => Self::Ind,
            LE_ADV_DIRECT_IND => Self::DirectInd,
            LE_ADV_SCAN_IND => Self::ScanInd,
            LE_ADV_NONCONN_IND => Self::NonconnInd,
            LE_ADV_SCAN_RSP => Self::ScanRsp,
            other => Self::Unknown(other),
        }
    }
}

impl AdvertisingReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ind => "LE_ADV_IND",
            Self::DirectInd => "LE_ADV_DIRECT_IND",
            Self::ScanInd => "LE_ADV_SCAN_IND",
            Self::NonconnInd => "LE_ADV_NONCONN_IND",
            Self::ScanRsp => "LE_ADV_SCAN_RSP",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for AdvertisingReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One advertising report, borrowing its payload from the event buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvertisingReport<'a> {
    pub report_type: AdvertisingReportType,
    pub peer_addr_type: u8,
    pub peer_address: BdAddr,
    pub payload: &'a [u8],
    pub rssi: i8,
}

impl<'a> AdvertisingReport<'a> {
    pub fn address_type(&self) -> AddressType {
        AddressType::from(self.peer_addr_type)
    }

    /// Canonical address string, e.g. `AA:BB:CC:DD:EE:FF`
    pub fn address_string(&self) -> String {
        self.peer_address.to_string()
    }

    /// Low three address bytes, e.g. `DD:EE:FF`
    pub fn short_address(&self) -> String {
        self.peer_address.short()
    }

    pub fn payload_hex(&self) -> String {
        hex_spaced(self.payload)
    }

    pub fn ad_structures(&self) -> AdStructures<'a> {
        AdStructures::new(self.payload)
    }

    pub fn local_name(&self) -> Option<String> {
        gap::advertising::local_name(self.payload)
    }

    pub fn manufacturer_data(&self) -> Option<(u16, &'a [u8])> {
        gap::advertising::manufacturer_data(self.payload)
    }
}

/// Decode the body of an advertising report sub-event (after the sub-event code)
pub fn decode_reports(data: &[u8]) -> Result<Vec<AdvertisingReport<'_>>, DecodeError> {
    let num_reports = byte_at(data, 0)?;
    let mut reports = Vec::with_capacity(num_reports as usize);
    let mut cursor = 1;

    for _ in 0..num_reports {
        let (report, next) = decode_report(data, cursor)?;
        reports.push(report);
        cursor = next;
    }

    Ok(reports)
}

/// Decode one report at `cursor`, returning it with the offset of the next one
fn decode_report(data: &[u8], cursor: usize) -> Result<(AdvertisingReport<'_>, usize), DecodeError> {
    let fixed = field(data, cursor, REPORT_FIXED_LEN)?;
    let report_type = AdvertisingReportType::from(fixed[0]);
    let peer_addr_type = fixed[1];
    let mut address = [0u8; 6];
    address.copy_from_slice(&fixed[2..8]);
    let data_len = fixed[8] as usize;

    let payload_start = cursor + REPORT_FIXED_LEN;
    let payload = field(data, payload_start, data_len)?;
    let rssi = byte_at(data, payload_start + data_len)? as i8;

    let report = AdvertisingReport {
        report_type,
        peer_addr_type,
        peer_address: BdAddr::new(address),
        payload,
        rssi,
    };

    Ok((report, payload_start + data_len + 1))
}

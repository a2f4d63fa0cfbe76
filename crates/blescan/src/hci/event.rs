//! HCI event decoding
//!
//! [`decode`] turns one raw event packet into exactly one [`Event`]. The
//! frame header selects a decoder by event code; LE meta events are
//! dispatched a second time by their sub-event code. Decoders only borrow
//! from the input buffer and never read past it.

use crate::error::DecodeError;
use crate::gap::BdAddr;
use crate::hci::advertising::{decode_reports, AdvertisingReport};
use crate::hci::constants::*;
use crate::hci::features::LeFeatures;
use crate::hci::frame::{byte_at, field, RawFrame};
use crate::hci::opcode::Opcode;
use crate::hci::status::Status;
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use std::io::{self, Cursor};

/// A decoded HCI event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    CommandComplete(CommandComplete<'a>),
    CommandStatus(CommandStatus),
    DisconnectionComplete(DisconnectionComplete),
    NumCompletedPackets(Vec<CompletedPackets>),
    InquiryResult(Vec<InquiryResponse>),
    LeConnectionComplete(LeConnectionComplete),
    LeRemoteFeaturesComplete(LeRemoteFeaturesComplete),
    LeAdvertisingReports {
        reports: Vec<AdvertisingReport<'a>>,
    },
    /// A well formed event this crate does not decode
    Unknown { event_code: u8, raw_bytes: &'a [u8] },
}

impl<'a> Event<'a> {
    /// Decode a full event packet, starting at the H4 packet type byte
    pub fn decode(data: &'a [u8]) -> Result<Self, DecodeError> {
        decode(data)
    }

    /// Label for logging
    pub fn name(&self) -> &'static str {
        match self {
            Event::CommandComplete(_) => "EVT_CMD_COMPLETE",
            Event::CommandStatus(_) => "EVT_CMD_STATUS",
            Event::DisconnectionComplete(_) => "EVT_DISCONN_COMPLETE",
            Event::NumCompletedPackets(_) => "EVT_NUM_COMP_PKTS",
            Event::InquiryResult(_) => "EVT_INQUIRY_RESULT",
            Event::LeConnectionComplete(_) => "EVT_LE_CONN_COMPLETE",
            Event::LeRemoteFeaturesComplete(_) => "EVT_LE_READ_REMOTE_USED_FEATURES_COMPLETE",
            Event::LeAdvertisingReports { .. } => "EVT_LE_ADVERTISING_REPORT",
            Event::Unknown { .. } => "UNKNOWN",
        }
    }

    /// The advertising reports carried by this event, if any
    pub fn advertising_reports(&self) -> Option<&[AdvertisingReport<'a>]> {
        match self {
            Event::LeAdvertisingReports { reports } => Some(reports),
            _ => None,
        }
    }
}

/// Decode a full event packet, starting at the H4 packet type byte
pub fn decode(data: &[u8]) -> Result<Event<'_>, DecodeError> {
    decode_frame(RawFrame::parse(data)?)
}

/// Dispatch an already parsed frame on its event code
pub fn decode_frame(frame: RawFrame<'_>) -> Result<Event<'_>, DecodeError> {
    let payload = frame.payload;
    match frame.event_code {
        EVT_LE_META_EVENT => decode_le_meta(payload),
        EVT_CMD_COMPLETE => CommandComplete::decode(payload).map(Event::CommandComplete),
        EVT_CMD_STATUS => CommandStatus::decode(payload).map(Event::CommandStatus),
        EVT_DISCONN_COMPLETE => {
            DisconnectionComplete::decode(payload).map(Event::DisconnectionComplete)
        }
        EVT_NUM_COMP_PKTS => decode_num_completed_packets(payload).map(Event::NumCompletedPackets),
        EVT_INQUIRY_RESULT => decode_inquiry_result(payload, false).map(Event::InquiryResult),
        EVT_INQUIRY_RESULT_WITH_RSSI => {
            decode_inquiry_result(payload, true).map(Event::InquiryResult)
        }
        EVT_INQUIRY_COMPLETE => Err(DecodeError::NotSupported("EVT_INQUIRY_COMPLETE")),
        event_code => Ok(Event::Unknown {
            event_code,
            raw_bytes: payload,
        }),
    }
}

/// Decode the parameters of an LE meta event (sub-event code first)
pub fn decode_le_meta(data: &[u8]) -> Result<Event<'_>, DecodeError> {
    let subevent = byte_at(data, 0)?;
    let body = &data[1..];

    match subevent {
        EVT_LE_ADVERTISING_REPORT => Ok(Event::LeAdvertisingReports {
            reports: decode_reports(body)?,
        }),
        EVT_LE_CONN_COMPLETE => LeConnectionComplete::decode(body).map(Event::LeConnectionComplete),
        EVT_LE_READ_REMOTE_USED_FEATURES_COMPLETE => {
            LeRemoteFeaturesComplete::decode(body).map(Event::LeRemoteFeaturesComplete)
        }
        EVT_LE_CONN_UPDATE_COMPLETE => Err(DecodeError::NotSupported("EVT_LE_CONN_UPDATE_COMPLETE")),
        _ => Ok(Event::Unknown {
            event_code: EVT_LE_META_EVENT,
            raw_bytes: data,
        }),
    }
}

/// Bounds check `len` bytes up front, then read them sequentially
fn read_fixed<T>(
    data: &[u8],
    len: usize,
    read: impl FnOnce(&mut Cursor<&[u8]>) -> io::Result<T>,
) -> Result<T, DecodeError> {
    let bytes = field(data, 0, len)?;
    read(&mut Cursor::new(bytes)).map_err(|_| DecodeError::TruncatedPayload {
        needed: len,
        available: data.len(),
    })
}

fn read_bdaddr(rdr: &mut Cursor<&[u8]>) -> io::Result<BdAddr> {
    let mut bytes = [0u8; 6];
    io::Read::read_exact(rdr, &mut bytes)?;
    Ok(BdAddr::new(bytes))
}

/// Command Complete: `num_commands, opcode`, then command specific return values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandComplete<'a> {
    pub num_commands: u8,
    pub opcode: Opcode,
    /// Left uninterpreted; its layout depends on the opcode
    pub return_payload: &'a [u8],
}

impl<'a> CommandComplete<'a> {
    pub const LEN: usize = 3;

    pub fn decode(data: &'a [u8]) -> Result<Self, DecodeError> {
        let (num_commands, opcode) = read_fixed(data, Self::LEN, |rdr| {
            Ok((rdr.read_u8()?, rdr.read_u16::<LittleEndian>()?))
        })?;

        Ok(Self {
            num_commands,
            opcode: Opcode(opcode),
            return_payload: &data[Self::LEN..],
        })
    }

    /// Most commands put their status first in the return values
    pub fn status(&self) -> Option<Status> {
        self.return_payload.first().map(|&s| Status::from(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub status: u8,
    pub num_commands: u8,
    pub opcode: Opcode,
}

impl CommandStatus {
    pub const LEN: usize = 4;

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        read_fixed(data, Self::LEN, |rdr| {
            Ok(Self {
                status: rdr.read_u8()?,
                num_commands: rdr.read_u8()?,
                opcode: Opcode(rdr.read_u16::<LittleEndian>()?),
            })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisconnectionComplete {
    pub status: u8,
    pub handle: u16,
    pub reason: u8,
}

impl DisconnectionComplete {
    pub const LEN: usize = 4;

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        read_fixed(data, Self::LEN, |rdr| {
            Ok(Self {
                status: rdr.read_u8()?,
                handle: rdr.read_u16::<LittleEndian>()?,
                reason: rdr.read_u8()?,
            })
        })
    }
}

/// LE Connection Complete sub-event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeConnectionComplete {
    pub status: u8,
    pub handle: u16,
    pub role: u8,
    pub peer_addr_type: u8,
    pub peer_address: BdAddr,
    /// Connection interval in 1.25 ms units
    pub interval: u16,
    pub latency: u16,
    /// Supervision timeout in 10 ms units
    pub supervision_timeout: u16,
    pub clock_accuracy: u8,
}

impl LeConnectionComplete {
    /// Parameter bytes after the sub-event code
    pub const LEN: usize = 18;

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        read_fixed(data, Self::LEN, |rdr| {
            Ok(Self {
                status: rdr.read_u8()?,
                handle: rdr.read_u16::<LittleEndian>()?,
                role: rdr.read_u8()?,
                peer_addr_type: rdr.read_u8()?,
                peer_address: read_bdaddr(rdr)?,
                interval: rdr.read_u16::<LittleEndian>()?,
                latency: rdr.read_u16::<LittleEndian>()?,
                supervision_timeout: rdr.read_u16::<LittleEndian>()?,
                clock_accuracy: rdr.read_u8()?,
            })
        })
    }

    pub fn is_master(&self) -> bool {
        self.role == LE_ROLE_MASTER
    }
}

/// LE Read Remote Used Features Complete sub-event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeRemoteFeaturesComplete {
    pub status: u8,
    pub handle: u16,
    /// One byte per feature page
    pub features: [u8; 8],
}

impl LeRemoteFeaturesComplete {
    pub const LEN: usize = 11;

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        read_fixed(data, Self::LEN, |rdr| {
            let status = rdr.read_u8()?;
            let handle = rdr.read_u16::<LittleEndian>()?;
            let mut features = [0u8; 8];
            io::Read::read_exact(rdr, &mut features)?;
            Ok(Self {
                status,
                handle,
                features,
            })
        })
    }

    pub fn le_features(&self) -> LeFeatures {
        LeFeatures::from_le_bytes(self.features)
    }
}

/// Per-handle entry of a Number Of Completed Packets event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedPackets {
    pub handle: u16,
    pub completed: u16,
}

fn decode_num_completed_packets(data: &[u8]) -> Result<Vec<CompletedPackets>, DecodeError> {
    let num_handles = byte_at(data, 0)? as usize;
    let entries = field(data, 1, num_handles * 4)?;

    Ok(entries
        .chunks_exact(4)
        .map(|entry| CompletedPackets {
            handle: LittleEndian::read_u16(&entry[0..2]),
            completed: LittleEndian::read_u16(&entry[2..4]),
        })
        .collect())
}

/// One response of an Inquiry Result event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InquiryResponse {
    pub address: BdAddr,
    pub page_scan_repetition_mode: u8,
    pub class_of_device: [u8; 3],
    pub clock_offset: u16,
    /// Only present in Inquiry Result with RSSI
    pub rssi: Option<i8>,
}

/// Inquiry results lay out each parameter as an array over all responses:
/// `addr[n] psrm[n] reserved[n] class[n] clock_offset[n] (rssi[n])`.
/// The reserved field is two bytes wide without RSSI and one byte with it.
fn decode_inquiry_result(data: &[u8], with_rssi: bool) -> Result<Vec<InquiryResponse>, DecodeError> {
    let n = byte_at(data, 0)? as usize;
    let reserved_len = if with_rssi { 1 } else { 2 };

    let addr_base = 1;
    let psrm_base = addr_base + 6 * n;
    let class_base = psrm_base + n + reserved_len * n;
    let clock_base = class_base + 3 * n;
    let rssi_base = clock_base + 2 * n;
    let end = if with_rssi { rssi_base + n } else { rssi_base };
    field(data, 0, end)?;

    let mut responses = Vec::with_capacity(n);
    for i in 0..n {
        let mut address = [0u8; 6];
        address.copy_from_slice(field(data, addr_base + 6 * i, 6)?);
        let mut class_of_device = [0u8; 3];
        class_of_device.copy_from_slice(field(data, class_base + 3 * i, 3)?);

        responses.push(InquiryResponse {
            address: BdAddr::new(address),
            page_scan_repetition_mode: byte_at(data, psrm_base + i)?,
            class_of_device,
            clock_offset: LittleEndian::read_u16(field(data, clock_base + 2 * i, 2)?),
            rssi: if with_rssi {
                Some(byte_at(data, rssi_base + i)? as i8)
            } else {
                None
            },
        });
    }

    Ok(responses)
}

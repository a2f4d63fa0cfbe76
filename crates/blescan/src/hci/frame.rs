//! HCI event frame header
//!
//! A frame as read from a raw HCI socket starts with the H4 packet type,
//! followed by the event code and the parameter length.

use crate::error::DecodeError;
use crate::hci::constants::*;

/// Borrowed view of one HCI event packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame<'a> {
    pub packet_type: u8,
    pub event_code: u8,
    pub param_len: u8,
    /// Exactly `param_len` bytes; anything after them in the input is ignored
    pub payload: &'a [u8],
}

impl<'a> RawFrame<'a> {
    /// Parse the event header and borrow the payload
    pub fn parse(data: &'a [u8]) -> Result<Self, DecodeError> {
        if data.len() < HCI_EVENT_HDR_SIZE {
            return Err(DecodeError::TruncatedHeader(data.len()));
        }

        let packet_type = data[0];
        if packet_type != HCI_EVENT_PKT {
            return Err(DecodeError::UnexpectedPacketType(packet_type));
        }

        let event_code = data[1];
        let param_len = data[2];

        let rest = &data[HCI_EVENT_HDR_SIZE..];
        let payload = rest
            .get(..param_len as usize)
            .ok_or(DecodeError::TruncatedPayload {
                needed: param_len as usize,
                available: rest.len(),
            })?;

        Ok(RawFrame {
            packet_type,
            event_code,
            param_len,
            payload,
        })
    }

    /// Header plus payload as uppercase, space separated hex
    pub fn to_hex(&self) -> String {
        let header = [self.packet_type, self.event_code, self.param_len];
        hex_spaced(header.iter().chain(self.payload))
    }
}

/// Formats bytes as `"04 3E 0C"`
pub fn hex_spaced<'b>(bytes: impl IntoIterator<Item = &'b u8>) -> String {
    bytes
        .into_iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Borrow `len` bytes at `offset`, or report how many bytes were needed
pub(crate) fn field(data: &[u8], offset: usize, len: usize) -> Result<&[u8], DecodeError> {
    let end = offset + len;
    data.get(offset..end).ok_or(DecodeError::TruncatedPayload {
        needed: end,
        available: data.len(),
    })
}

/// Read the single byte at `offset`
pub(crate) fn byte_at(data: &[u8], offset: usize) -> Result<u8, DecodeError> {
    field(data, offset, 1).map(|b| b[0])
}

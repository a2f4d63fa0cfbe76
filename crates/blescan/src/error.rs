//! Error types for the blescan library
//!
//! Decoding problems are reported through [`DecodeError`] and never abort a
//! scan. Everything that touches the controller is reported through
//! [`HciError`].

use thiserror::Error;

/// Errors produced while decoding an HCI event frame
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("HCI event header truncated: got {0} bytes, need 3")]
    TruncatedHeader(usize),

    #[error("HCI payload truncated: need {needed} bytes, got {available}")]
    TruncatedPayload { needed: usize, available: usize },

    #[error("Event not supported: {0}")]
    NotSupported(&'static str),

    #[error("Unexpected HCI packet type: {0:#04x}")]
    UnexpectedPacketType(u8),
}

/// Errors produced when building an opcode from its two fields
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeError {
    #[error("Opcode group field out of range: {0:#x} (max 0x3f)")]
    GroupOutOfRange(u16),

    #[error("Opcode command field out of range: {0:#x} (max 0x3ff)")]
    CommandOutOfRange(u16),
}

/// Errors that can occur when working with HCI sockets and scan sessions
#[derive(Error, Debug)]
pub enum HciError {
    #[error("Failed to open HCI socket: {0}")]
    SocketError(#[from] std::io::Error),

    #[error("Failed to bind to HCI device: {0}")]
    BindError(std::io::Error),

    #[error("Failed to install HCI event filter: {0}")]
    FilterError(std::io::Error),

    #[error("Failed to send HCI command: {0}")]
    SendError(std::io::Error),

    #[error("Failed to receive HCI event: {0}")]
    ReceiveError(std::io::Error),

    #[error("Timed out waiting for HCI event")]
    Timeout,

    #[error("Invalid parameter length: {0}")]
    InvalidParamLength(usize),

    #[error("No event callback installed")]
    MissingCallback,

    #[error("Scan session is {0}, operation not allowed")]
    InvalidState(&'static str),

    #[error(transparent)]
    Opcode(#[from] OpcodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl HciError {
    /// True for transport failures that must end a scan loop
    pub fn is_fatal(&self) -> bool {
        !matches!(self, HciError::Timeout | HciError::Decode(_))
    }
}

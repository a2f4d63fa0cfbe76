//! blescan - Bluetooth LE HCI event decoding and active scanning
//!
//! This library decodes HCI event packets received from a Bluetooth
//! controller into typed [`Event`] values, with particular attention to LE
//! advertising reports, and drives an active LE scan over a raw HCI socket on
//! Linux.
//!
//! Decoding is pure and works on borrowed buffers:
//!
//! ```
//! use blescan::{decode, Event};
//!
//! let packet = [0x04, 0x0F, 0x04, 0x00, 0x01, 0x0B, 0x20];
//! match decode(&packet).unwrap() {
//!     Event::CommandStatus(status) => assert_eq!(status.opcode.ocf(), 0x000B),
//!     other => panic!("unexpected {}", other.name()),
//! }
//! ```

pub mod error;
pub mod gap;
pub mod hci;
pub mod scan;

// Re-export common types for convenience
pub use error::{DecodeError, HciError, OpcodeError};
pub use gap::{AdStructure, AdStructures, AddressType, BdAddr};
pub use hci::{
    decode, AdvertisingReport, AdvertisingReportType, Event, EventFilter, HciCommand, HciSocket,
    HciTransport, Opcode, RawFrame, Status,
};
pub use scan::{CancelHandle, ScanConfig, ScanSession, ScanState, ScanStats};

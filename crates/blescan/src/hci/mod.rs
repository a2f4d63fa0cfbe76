//! Bluetooth HCI (Host Controller Interface) implementation
//!
//! Event decoding, the LE scan commands, and the raw socket transport.

pub mod advertising;
pub mod command;
pub mod constants;
pub mod event;
pub mod features;
pub mod frame;
pub mod opcode;
pub mod socket;
pub mod status;
pub mod transport;


pub use advertising::{AdvertisingReport, AdvertisingReportType};
pub use command::{scan_enable, scan_parameters, FilterPolicy, HciCommand, ScanType};
pub use event::{
    decode, CommandComplete, CommandStatus, CompletedPackets, DisconnectionComplete, Event,
    InquiryResponse, LeConnectionComplete, LeRemoteFeaturesComplete,
};
pub use features::LeFeatures;
pub use frame::RawFrame;
pub use opcode::Opcode;
pub use socket::HciSocket;
pub use status::Status;
pub use transport::{EventFilter, HciTransport};

//! Bluetooth LE scanning functionality
//!
//! A [`ScanSession`] owns a transport, enables active scanning, and feeds
//! every decoded event through an optional filter into a callback until it
//! is cancelled.

pub mod config;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::ScanConfig;
pub use session::{
    advertising_only, CancelHandle, EventCallback, EventFilterFn, ScanSession, ScanSessionBuilder,
    ScanState, ScanStats,
};

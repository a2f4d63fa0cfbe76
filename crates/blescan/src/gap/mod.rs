//! Generic Access Profile types shared by the decoders
//!
//! Device addresses, address types and the AD structures carried in
//! advertising payloads.

pub mod advertising;
pub mod constants;
pub mod types;

pub use advertising::{AdStructure, AdStructures};
pub use constants::*;
pub use types::*;

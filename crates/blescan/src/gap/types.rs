//! Device addresses and address types

use crate::gap::constants::*;
use std::fmt;
use std::str::FromStr;

/// Address type of a peer or of the local device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    Public,
    Random,
    PublicIdentity,
    RandomIdentity,
    /// Reserved codes, kept so they survive a round trip
    Other(u8),
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Public => "public",
            AddressType::Random => "random",
            AddressType::PublicIdentity => "public identity",
            AddressType::RandomIdentity => "random identity",
            AddressType::Other(_) => "reserved",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<u8> for AddressType {
    fn from(code: u8) -> Self {
        match code {
            PUBLIC_DEVICE_ADDRESS => Self::Public,
            RANDOM_DEVICE_ADDRESS => Self::Random,
            PUBLIC_IDENTITY_ADDRESS => Self::PublicIdentity,
            RANDOM_IDENTITY_ADDRESS => Self::RandomIdentity,
            code => Self::Other(code),
        }
    }
}

impl From<AddressType> for u8 {
    fn from(kind: AddressType) -> Self {
        match kind {
            AddressType::Public => PUBLIC_DEVICE_ADDRESS,
            AddressType::Random => RANDOM_DEVICE_ADDRESS,
            AddressType::PublicIdentity => PUBLIC_IDENTITY_ADDRESS,
            AddressType::RandomIdentity => RANDOM_IDENTITY_ADDRESS,
            AddressType::Other(code) => code,
        }
    }
}

/// A Bluetooth device address
///
/// `bytes` holds the address exactly as transmitted, least significant byte
/// first. [`fmt::Display`] renders the conventional most-significant-first
/// form, e.g. `AA:BB:CC:DD:EE:FF`, and [`FromStr`] parses it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BdAddr {
    pub bytes: [u8; 6],
}

impl BdAddr {
    pub fn new(bytes: [u8; 6]) -> Self {
        Self { bytes }
    }

    /// Takes the first six bytes of `slice`
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 6] = slice.get(..6)?.try_into().ok()?;
        Some(Self::new(bytes))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Address bytes in display order, most significant first
    pub fn to_be_bytes(&self) -> [u8; 6] {
        let mut bytes = self.bytes;
        bytes.reverse();
        bytes
    }

    /// The low three bytes in display order, e.g. `DD:EE:FF`
    pub fn short(&self) -> String {
        join_hex(self.bytes[..3].iter().rev())
    }
}

fn join_hex<'a>(bytes: impl Iterator<Item = &'a u8>) -> String {
    bytes
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(":")
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_hex(self.to_be_bytes().iter()))
    }
}

impl FromStr for BdAddr {
    type Err = hex::FromHexError;

    /// Parses `AA:BB:CC:DD:EE:FF` (any case)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.split(':').collect();
        if digits.len() != 12 || s.split(':').count() != 6 {
            return Err(hex::FromHexError::InvalidStringLength);
        }

        let mut bytes = [0u8; 6];
        hex::decode_to_slice(digits, &mut bytes)?;
        bytes.reverse();
        Ok(Self::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bdaddr_display_reverses_wire_order() {
        let addr = BdAddr::new([0xFF, 0xEE, 0xDD, 0xCC, 0xBB, 0xAA]);
        assert_eq!(addr.to_string(), "AA:BB:CC:DD:EE:FF");
        assert_eq!(addr.short(), "DD:EE:FF");
        assert_eq!(addr.to_be_bytes(), [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn test_bdaddr_parse() {
        let addr: BdAddr = "aa:bb:cc:dd:ee:0f".parse().unwrap();
        assert_eq!(addr.bytes, [0x0F, 0xEE, 0xDD, 0xCC, 0xBB, 0xAA]);
        assert_eq!(addr.to_string(), "AA:BB:CC:DD:EE:0F");

        assert!("AA:BB:CC:DD:EE".parse::<BdAddr>().is_err());
        assert!("AABB:CC:DD:EE:FF".parse::<BdAddr>().is_err());
        assert!("AA:BB:CC:DD:EE:GG".parse::<BdAddr>().is_err());
    }

    #[test]
    fn test_bdaddr_from_short_slice() {
        assert!(BdAddr::from_slice(&[1, 2, 3]).is_none());
        assert_eq!(
            BdAddr::from_slice(&[1, 2, 3, 4, 5, 6, 7]),
            Some(BdAddr::new([1, 2, 3, 4, 5, 6]))
        );
    }

    #[test]
    fn test_address_type_round_trip() {
        assert_eq!(AddressType::from(0x01), AddressType::Random);
        assert_eq!(u8::from(AddressType::Public), 0x00);
        assert_eq!(AddressType::from(0x7F), AddressType::Other(0x7F));
        assert_eq!(u8::from(AddressType::Other(0x7F)), 0x7F);
        assert_eq!(AddressType::RandomIdentity.to_string(), "random identity");
    }
}

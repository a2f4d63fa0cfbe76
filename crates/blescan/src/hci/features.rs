//! LE link layer feature bits reported by Read Remote Used Features

use bitflags::bitflags;

bitflags! {
    /// LE supported features, bit numbers per Bluetooth Core Vol 6, Part B, 4.6
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LeFeatures: u64 {
        const ENCRYPTION = 1 << 0;
        const CONNECTION_PARAMETERS_REQUEST = 1 << 1;
        const EXTENDED_REJECT_INDICATION = 1 << 2;
        const PERIPHERAL_INITIATED_FEATURES_EXCHANGE = 1 << 3;
        const PING = 1 << 4;
        const DATA_PACKET_LENGTH_EXTENSION = 1 << 5;
        const LL_PRIVACY = 1 << 6;
        const EXTENDED_SCANNER_FILTER_POLICIES = 1 << 7;
        const LE_2M_PHY = 1 << 8;
        const STABLE_MODULATION_INDEX_TX = 1 << 9;
        const STABLE_MODULATION_INDEX_RX = 1 << 10;
        const LE_CODED_PHY = 1 << 11;
        const EXTENDED_ADVERTISING = 1 << 12;
        const PERIODIC_ADVERTISING = 1 << 13;
        const CHANNEL_SELECTION_ALGORITHM_2 = 1 << 14;
        const POWER_CLASS_1 = 1 << 15;
        const MIN_USED_CHANNELS = 1 << 16;
    }
}

impl LeFeatures {
    /// Interpret the 8 feature bytes of an event, keeping unnamed bits
    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self::from_bits_retain(u64::from_le_bytes(bytes))
    }
}

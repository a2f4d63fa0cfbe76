//! GAP constants: address types and advertising data types

// Address types
pub const PUBLIC_DEVICE_ADDRESS: u8 = 0x00;
pub const RANDOM_DEVICE_ADDRESS: u8 = 0x01;
pub const PUBLIC_IDENTITY_ADDRESS: u8 = 0x02;
pub const RANDOM_IDENTITY_ADDRESS: u8 = 0x03;

// Advertising Data Types
pub const ADV_TYPE_FLAGS: u8 = 0x01;
pub const ADV_TYPE_16BIT_SERVICE_UUID_MORE_AVAILABLE: u8 = 0x02;
pub const ADV_TYPE_16BIT_SERVICE_UUID_COMPLETE: u8 = 0x03;
pub const ADV_TYPE_32BIT_SERVICE_UUID_MORE_AVAILABLE: u8 = 0x04;
pub const ADV_TYPE_32BIT_SERVICE_UUID_COMPLETE: u8 = 0x05;
pub const ADV_TYPE_128BIT_SERVICE_UUID_MORE_AVAILABLE: u8 = 0x06;
pub const ADV_TYPE_128BIT_SERVICE_UUID_COMPLETE: u8 = 0x07;
pub const ADV_TYPE_SHORT_LOCAL_NAME: u8 = 0x08;
pub const ADV_TYPE_COMPLETE_LOCAL_NAME: u8 = 0x09;
pub const ADV_TYPE_TX_POWER_LEVEL: u8 = 0x0A;
pub const ADV_TYPE_CLASS_OF_DEVICE: u8 = 0x0D;
pub const ADV_TYPE_SIMPLE_PAIRING_HASH_C: u8 = 0x0E;
pub const ADV_TYPE_SIMPLE_PAIRING_RANDOMIZER_R: u8 = 0x0F;
pub const ADV_TYPE_SECURITY_MANAGER_TK_VALUE: u8 = 0x10;
pub const ADV_TYPE_SECURITY_MANAGER_OOB_FLAGS: u8 = 0x11;
pub const ADV_TYPE_SLAVE_CONNECTION_INTERVAL_RANGE: u8 = 0x12;
pub const ADV_TYPE_SOLICITED_SERVICE_UUIDS_16BIT: u8 = 0x14;
pub const ADV_TYPE_SOLICITED_SERVICE_UUIDS_128BIT: u8 = 0x15;
pub const ADV_TYPE_SERVICE_DATA: u8 = 0x16;
pub const ADV_TYPE_PUBLIC_TARGET_ADDRESS: u8 = 0x17;
pub const ADV_TYPE_RANDOM_TARGET_ADDRESS: u8 = 0x18;
pub const ADV_TYPE_APPEARANCE: u8 = 0x19;
pub const ADV_TYPE_MANUFACTURER_SPECIFIC_DATA: u8 = 0xFF;

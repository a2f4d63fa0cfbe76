//! HCI protocol constants
//!
//! This module contains constants used in the Bluetooth HCI protocol.

// HCI packet types
pub const HCI_COMMAND_PKT: u8 = 0x01;
pub const HCI_ACL_PKT: u8 = 0x02;
pub const HCI_SCO_PKT: u8 = 0x03;
pub const HCI_EVENT_PKT: u8 = 0x04;

// Header sizes
pub const HCI_EVENT_HDR_SIZE: usize = 3;
pub const HCI_COMMAND_HDR_SIZE: usize = 4;

// Maximum size of HCI command parameters
pub const HCI_MAX_PARAM_LEN: usize = 255;

// Packet type, event code, length, 255 bytes of parameters
pub const HCI_MAX_EVENT_SIZE: usize = 258;

// OGF (Opcode Group Field) values
pub const OGF_LINK_CTL: u16 = 0x01;
pub const OGF_HOST_CTL: u16 = 0x03;
pub const OGF_LE_CTL: u16 = 0x08;

// LE Command OCF values (OGF: 0x08)
pub const OCF_LE_SET_EVENT_MASK: u16 = 0x0001;
pub const OCF_LE_READ_BUFFER_SIZE: u16 = 0x0002;
pub const OCF_LE_READ_LOCAL_SUPPORTED_FEATURES: u16 = 0x0003;
pub const OCF_LE_SET_RANDOM_ADDRESS: u16 = 0x0005;
pub const OCF_LE_SET_ADVERTISING_PARAMETERS: u16 = 0x0006;
pub const OCF_LE_READ_ADVERTISING_CHANNEL_TX_POWER: u16 = 0x0007;
pub const OCF_LE_SET_ADVERTISING_DATA: u16 = 0x0008;
pub const OCF_LE_SET_SCAN_RESPONSE_DATA: u16 = 0x0009;
pub const OCF_LE_SET_ADVERTISE_ENABLE: u16 = 0x000A;
pub const OCF_LE_SET_SCAN_PARAMETERS: u16 = 0x000B;
pub const OCF_LE_SET_SCAN_ENABLE: u16 = 0x000C;
pub const OCF_LE_CREATE_CONN: u16 = 0x000D;
pub const OCF_LE_CREATE_CONN_CANCEL: u16 = 0x000E;
pub const OCF_LE_READ_WHITE_LIST_SIZE: u16 = 0x000F;
pub const OCF_LE_CLEAR_WHITE_LIST: u16 = 0x0010;
pub const OCF_LE_ADD_DEVICE_TO_WHITE_LIST: u16 = 0x0011;
pub const OCF_LE_REMOVE_DEVICE_FROM_WHITE_LIST: u16 = 0x0012;
pub const OCF_LE_CONN_UPDATE: u16 = 0x0013;
pub const OCF_LE_SET_HOST_CHANNEL_CLASSIFICATION: u16 = 0x0014;
pub const OCF_LE_READ_CHANNEL_MAP: u16 = 0x0015;
pub const OCF_LE_READ_REMOTE_USED_FEATURES: u16 = 0x0016;
pub const OCF_LE_ENCRYPT: u16 = 0x0017;
pub const OCF_LE_RAND: u16 = 0x0018;
pub const OCF_LE_START_ENCRYPTION: u16 = 0x0019;
pub const OCF_LE_LTK_REPLY: u16 = 0x001A;
pub const OCF_LE_LTK_NEG_REPLY: u16 = 0x001B;
pub const OCF_LE_READ_SUPPORTED_STATES: u16 = 0x001C;
pub const OCF_LE_RECEIVER_TEST: u16 = 0x001D;
pub const OCF_LE_TRANSMITTER_TEST: u16 = 0x001E;
pub const OCF_LE_TEST_END: u16 = 0x001F;

// HCI Events
pub const EVT_INQUIRY_COMPLETE: u8 = 0x01;
pub const EVT_INQUIRY_RESULT: u8 = 0x02;
pub const EVT_DISCONN_COMPLETE: u8 = 0x05;
pub const EVT_CMD_COMPLETE: u8 = 0x0E;
pub const EVT_CMD_STATUS: u8 = 0x0F;
pub const EVT_NUM_COMP_PKTS: u8 = 0x13;
pub const EVT_INQUIRY_RESULT_WITH_RSSI: u8 = 0x22;
pub const EVT_LE_META_EVENT: u8 = 0x3E;

// LE Meta Events
pub const EVT_LE_CONN_COMPLETE: u8 = 0x01;
pub const EVT_LE_ADVERTISING_REPORT: u8 = 0x02;
pub const EVT_LE_CONN_UPDATE_COMPLETE: u8 = 0x03;
pub const EVT_LE_READ_REMOTE_USED_FEATURES_COMPLETE: u8 = 0x04;
pub const EVT_LE_LTK_REQUEST: u8 = 0x05;

// Connection roles
pub const LE_ROLE_MASTER: u8 = 0x00;
pub const LE_ROLE_SLAVE: u8 = 0x01;

// Advertising event types
pub const LE_ADV_IND: u8 = 0x00;
pub const LE_ADV_DIRECT_IND: u8 = 0x01;
pub const LE_ADV_SCAN_IND: u8 = 0x02;
pub const LE_ADV_NONCONN_IND: u8 = 0x03;
pub const LE_ADV_SCAN_RSP: u8 = 0x04;

// Scan types
pub const LE_SCAN_PASSIVE: u8 = 0x00;
pub const LE_SCAN_ACTIVE: u8 = 0x01;

// Scan filter policies
pub const LE_FILTER_ALLOW_ALL: u8 = 0x00;
pub const LE_FILTER_WHITELIST_ONLY: u8 = 0x01;
pub const LE_FILTER_DUPLICATES_OFF: u8 = 0x00;
pub const LE_FILTER_DUPLICATES_ON: u8 = 0x01;

// Legacy advertising data limit
pub const LE_ADV_DATA_MAX_LEN: usize = 31;

// Socket level options (linux/net/bluetooth/hci.h)
pub const SOL_HCI: i32 = 0;
pub const HCI_FILTER: i32 = 2;

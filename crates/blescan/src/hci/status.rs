//! HCI status and error codes
//!
//! Events report the outcome of a command as a single status byte. This maps
//! the byte to a named code for logging.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    UnknownCommand,
    NoConnection,
    HardwareFailure,
    PageTimeout,
    AuthenticationFailure,
    PinOrKeyMissing,
    MemoryFull,
    ConnectionTimeout,
    MaxNumberOfConnections,
    MaxNumberOfScoConnections,
    AclConnectionExists,
    CommandDisallowed,
    RejectedLimitedResources,
    RejectedSecurity,
    RejectedPersonal,
    HostTimeout,
    UnsupportedFeature,
    InvalidParameters,
    RemoteUserEndedConnection,
    RemoteLowResources,
    RemotePowerOff,
    ConnectionTerminated,
    RepeatedAttempts,
    PairingNotAllowed,
    UnknownLmpPdu,
    UnsupportedRemoteFeature,
    ScoOffsetRejected,
    ScoIntervalRejected,
    AirModeRejected,
    InvalidLmpParameters,
    UnspecifiedError,
    UnsupportedLmpParameterValue,
    RoleChangeNotAllowed,
    LmpResponseTimeout,
    LmpErrorTransactionCollision,
    LmpPduNotAllowed,
    EncryptionModeNotAccepted,
    UnitLinkKeyUsed,
    QosNotSupported,
    InstantPassed,
    PairingNotSupported,
    TransactionCollision,
    QosUnacceptableParameter,
    QosRejected,
    ClassificationNotSupported,
    InsufficientSecurity,
    ParameterOutOfRange,
    RoleSwitchPending,
    SlotViolation,
    RoleSwitchFailed,
    EirTooLarge,
    SimplePairingNotSupported,
    HostBusyPairing,
    Unknown(u8),
}

impl From<u8> for Status {
    fn from(code: u8) -> Self {
        match code {
            0x00 => Status::Success,
            0x01 => Status::UnknownCommand,
            0x02 => Status::NoConnection,
            0x03 => Status::HardwareFailure,
            0x04 => Status::PageTimeout,
            0x05 => Status::AuthenticationFailure,
            0x06 => Status::PinOrKeyMissing,
            0x07 => Status::MemoryFull,
            0x08 => Status::ConnectionTimeout,
            0x09 => Status::MaxNumberOfConnections,
            0x0A => Status::MaxNumberOfScoConnections,
            0x0B => Status::AclConnectionExists,
            0x0C => Status::CommandDisallowed,
            0x0D => Status::RejectedLimitedResources,
            0x0E => Status::RejectedSecurity,
            0x0F => Status::RejectedPersonal,
            0x10 => Status::HostTimeout,
            0x11 => Status::UnsupportedFeature,
            0x12 => Status::InvalidParameters,
            0x13 => Status::RemoteUserEndedConnection,
            0x14 => Status::RemoteLowResources,
            0x15 => Status::RemotePowerOff,
            0x16 => Status::ConnectionTerminated,
            0x17 => Status::RepeatedAttempts,
            0x18 => Status::PairingNotAllowed,
            0x19 => Status::UnknownLmpPdu,
            0x1A => Status::UnsupportedRemoteFeature,
            0x1B => Status::ScoOffsetRejected,
            0x1C => Status::ScoIntervalRejected,
            0x1D => Status::AirModeRejected,
            0x1E => Status::InvalidLmpParameters,
            0x1F => Status::UnspecifiedError,
            0x20 => Status::UnsupportedLmpParameterValue,
            0x21 => Status::RoleChangeNotAllowed,
            0x22 => Status::LmpResponseTimeout,
            0x23 => Status::LmpErrorTransactionCollision,
            0x24 => Status::LmpPduNotAllowed,
            0x25 => Status::EncryptionModeNotAccepted,
            0x26 => Status::UnitLinkKeyUsed,
            0x27 => Status::QosNotSupported,
            0x28 => Status::InstantPassed,
            0x29 => Status::PairingNotSupported,
            0x2A => Status::TransactionCollision,
            0x2C => Status::QosUnacceptableParameter,
            0x2D => Status::QosRejected,
            0x2E => Status::ClassificationNotSupported,
            0x2F => Status::InsufficientSecurity,
            0x30 => Status::ParameterOutOfRange,
            0x32 => Status::RoleSwitchPending,
            0x34 => Status::SlotViolation,
            0x35 => Status::RoleSwitchFailed,
            0x36 => Status::EirTooLarge,
            0x37 => Status::SimplePairingNotSupported,
            0x38 => Status::HostBusyPairing,
            other => Status::Unknown(other),
        }
    }
}

impl Status {
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::UnknownCommand => "Unknown HCI command",
            Status::NoConnection => "Unknown connection identifier",
            Status::HardwareFailure => "Hardware failure",
            Status::PageTimeout => "Page timeout",
            Status::AuthenticationFailure => "Authentication failure",
            Status::PinOrKeyMissing => "PIN or key missing",
            Status::MemoryFull => "Memory capacity exceeded",
            Status::ConnectionTimeout => "Connection timeout",
            Status::MaxNumberOfConnections => "Connection limit exceeded",
            Status::MaxNumberOfScoConnections => "Synchronous connection limit exceeded",
            Status::AclConnectionExists => "Connection already exists",
            Status::CommandDisallowed => "Command disallowed",
            Status::RejectedLimitedResources => "Connection rejected due to limited resources",
            Status::RejectedSecurity => "Connection rejected due to security reasons",
            Status::RejectedPersonal => "Connection rejected due to unacceptable address",
            Status::HostTimeout => "Connection accept timeout exceeded",
            Status::UnsupportedFeature => "Unsupported feature or parameter value",
            Status::InvalidParameters => "Invalid HCI command parameters",
            Status::RemoteUserEndedConnection => "Remote user terminated connection",
            Status::RemoteLowResources => "Remote device terminated connection due to low resources",
            Status::RemotePowerOff => "Remote device terminated connection due to power off",
            Status::ConnectionTerminated => "Connection terminated by local host",
            Status::RepeatedAttempts => "Repeated attempts",
            Status::PairingNotAllowed => "Pairing not allowed",
            Status::UnknownLmpPdu => "Unknown LMP PDU",
            Status::UnsupportedRemoteFeature => "Unsupported remote feature",
            Status::ScoOffsetRejected => "SCO offset rejected",
            Status::ScoIntervalRejected => "SCO interval rejected",
            Status::AirModeRejected => "SCO air mode rejected",
            Status::InvalidLmpParameters => "Invalid LMP / LL parameters",
            Status::UnspecifiedError => "Unspecified error",
            Status::UnsupportedLmpParameterValue => "Unsupported LMP / LL parameter value",
            Status::RoleChangeNotAllowed => "Role change not allowed",
            Status::LmpResponseTimeout => "LMP / LL response timeout",
            Status::LmpErrorTransactionCollision => "LMP error transaction collision",
            Status::LmpPduNotAllowed => "LMP PDU not allowed",
            Status::EncryptionModeNotAccepted => "Encryption mode not acceptable",
            Status::UnitLinkKeyUsed => "Link key cannot be changed",
            Status::QosNotSupported => "Requested QoS not supported",
            Status::InstantPassed => "Instant passed",
            Status::PairingNotSupported => "Pairing with unit key not supported",
            Status::TransactionCollision => "Different transaction collision",
            Status::QosUnacceptableParameter => "QoS unacceptable parameter",
            Status::QosRejected => "QoS rejected",
            Status::ClassificationNotSupported => "Channel classification not supported",
            Status::InsufficientSecurity => "Insufficient security",
            Status::ParameterOutOfRange => "Parameter out of mandatory range",
            Status::RoleSwitchPending => "Role switch pending",
            Status::SlotViolation => "Reserved slot violation",
            Status::RoleSwitchFailed => "Role switch failed",
            Status::EirTooLarge => "Extended inquiry response too large",
            Status::SimplePairingNotSupported => "Secure simple pairing not supported by host",
            Status::HostBusyPairing => "Host busy - pairing",
            Status::Unknown(_) => "Unknown status",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Unknown(code) => write!(f, "Unknown status ({:#04x})", code),
            other => f.write_str(other.description()),
        }
    }
}

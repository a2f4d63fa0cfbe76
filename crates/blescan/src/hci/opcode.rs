//! HCI command opcodes
//!
//! An opcode packs a 6-bit Opcode Group Field (OGF) in its upper bits and a
//! 10-bit Opcode Command Field (OCF) in its lower bits.

use crate::error::OpcodeError;
use crate::hci::constants::*;
use std::fmt;

const OCF_MASK: u16 = 0x03FF;
const OGF_SHIFT: u16 = 10;
const OGF_MAX: u16 = 0x3F;

/// A 16-bit HCI command opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opcode(pub u16);

impl Opcode {
    pub const LE_SET_SCAN_PARAMETERS: Opcode = Opcode::pack(OGF_LE_CTL, OCF_LE_SET_SCAN_PARAMETERS);
    pub const LE_SET_SCAN_ENABLE: Opcode = Opcode::pack(OGF_LE_CTL, OCF_LE_SET_SCAN_ENABLE);

    const fn pack(ogf: u16, ocf: u16) -> Opcode {
        Opcode((ogf << OGF_SHIFT) | (ocf & OCF_MASK))
    }

    /// Builds an opcode from its group and command fields
    ///
    /// Fails instead of truncating when either field does not fit.
    pub fn join(group: u16, command: u16) -> Result<Self, OpcodeError> {
        if group > OGF_MAX {
            return Err(OpcodeError::GroupOutOfRange(group));
        }
        if command > OCF_MASK {
            return Err(OpcodeError::CommandOutOfRange(command));
        }
        Ok(Opcode::pack(group, command))
    }

    /// Splits the opcode into `(group, command)`
    pub fn split(self) -> (u16, u16) {
        (self.ogf(), self.ocf())
    }

    /// Opcode Group Field
    pub fn ogf(self) -> u16 {
        self.0 >> OGF_SHIFT
    }

    /// Opcode Command Field
    pub fn ocf(self) -> u16 {
        self.0 & OCF_MASK
    }

    pub fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl From<u16> for Opcode {
    fn from(value: u16) -> Self {
        Opcode(value)
    }
}

impl From<Opcode> for u16 {
    fn from(value: Opcode) -> Self {
        value.0
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x} (OGF {:#04x}, OCF {:#06x})", self.0, self.ogf(), self.ocf())
    }
}

//! HCI command opcodes
//!
//! A command opcode is a 16-bit value combining a 6-bit opcode group field
//! (OGF) with a 10-bit opcode command field (OCF):
//! `opcode = (OGF << 10) | OCF`, transmitted little-endian.

use crate::constants::*;
use crate::error::HciError;
use std::fmt;

/// A packed 16-bit HCI command opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode(u16);

const fn pack(ogf: u8, ocf: u16) -> u16 {
    ((ogf as u16) << 10) | (ocf & OCF_MAX)
}

impl Opcode {
    /// The NOP opcode (OGF 0, OCF 0)
    pub const NOP: Opcode = Opcode(0x0000);

    pub const INQUIRY: Opcode = Opcode(pack(OGF_LINK_CTL, OCF_INQUIRY));
    pub const INQUIRY_CANCEL: Opcode = Opcode(pack(OGF_LINK_CTL, OCF_INQUIRY_CANCEL));
    pub const CREATE_CONNECTION: Opcode = Opcode(pack(OGF_LINK_CTL, OCF_CREATE_CONNECTION));
    pub const DISCONNECT: Opcode = Opcode(pack(OGF_LINK_CTL, OCF_DISCONNECT));
    pub const SNIFF_MODE: Opcode = Opcode(pack(OGF_LINK_POLICY, OCF_SNIFF_MODE));
    pub const EXIT_SNIFF_MODE: Opcode = Opcode(pack(OGF_LINK_POLICY, OCF_EXIT_SNIFF_MODE));
    pub const SET_EVENT_MASK: Opcode = Opcode(pack(OGF_HOST_CTL, OCF_SET_EVENT_MASK));
    pub const RESET: Opcode = Opcode(pack(OGF_HOST_CTL, OCF_RESET));
    pub const READ_LOCAL_VERSION: Opcode =
        Opcode(pack(OGF_INFO_PARAM, OCF_READ_LOCAL_VERSION_INFORMATION));
    pub const READ_BD_ADDR: Opcode = Opcode(pack(OGF_INFO_PARAM, OCF_READ_BD_ADDR));
    pub const READ_RSSI: Opcode = Opcode(pack(OGF_STATUS_PARAM, OCF_READ_RSSI));
    pub const LE_SET_EVENT_MASK: Opcode = Opcode(pack(OGF_LE, OCF_LE_SET_EVENT_MASK));
    pub const LE_SET_SCAN_PARAMETERS: Opcode = Opcode(pack(OGF_LE, OCF_LE_SET_SCAN_PARAMETERS));
    pub const LE_SET_SCAN_ENABLE: Opcode = Opcode(pack(OGF_LE, OCF_LE_SET_SCAN_ENABLE));
    pub const LE_CREATE_CONNECTION: Opcode = Opcode(pack(OGF_LE, OCF_LE_CREATE_CONNECTION));

    /// Pack an OGF/OCF pair, validating both field widths
    pub fn new(ogf: u8, ocf: u16) -> Result<Self, HciError> {
        if ogf > OGF_MAX || ocf > OCF_MAX {
            return Err(HciError::InvalidOpcodeFields { ogf, ocf });
        }
        Ok(Opcode(pack(ogf, ocf)))
    }

    /// Reinterpret a raw 16-bit opcode value
    pub const fn from_raw(raw: u16) -> Self {
        Opcode(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The opcode group field (top 6 bits)
    pub const fn ogf(self) -> u8 {
        (self.0 >> 10) as u8
    }

    /// The opcode command field (bottom 10 bits)
    pub const fn ocf(self) -> u16 {
        self.0 & OCF_MAX
    }
}

impl From<Opcode> for u16 {
    fn from(opcode: Opcode) -> u16 {
        opcode.0
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#06X} (OGF {:#04X}, OCF {:#06X})",
            self.0,
            self.ogf(),
            self.ocf()
        )
    }
}

//! Device addresses and link handles

use crate::constants::*;
use crate::error::HciError;
use std::fmt;
use std::str::FromStr;

/// A 48-bit Bluetooth device address, stored least-significant byte first
/// as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BdAddr {
    pub bytes: [u8; 6],
}

impl BdAddr {
    /// The all-zero address
    pub const ZERO: BdAddr = BdAddr { bytes: [0; 6] };

    pub fn new(bytes: [u8; 6]) -> Self {
        Self { bytes }
    }

    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() >= 6 {
            let mut bytes = [0u8; 6];
            bytes.copy_from_slice(&slice[0..6]);
            Some(Self { bytes })
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.bytes[5],
            self.bytes[4],
            self.bytes[3],
            self.bytes[2],
            self.bytes[1],
            self.bytes[0]
        )
    }
}

impl FromStr for BdAddr {
    type Err = hex::FromHexError;

    /// Parse colon-separated hex, most significant byte first
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.chars().filter(|c| *c != ':').collect();
        let mut bytes = [0u8; 6];
        hex::decode_to_slice(&cleaned, &mut bytes)?;
        bytes.reverse();
        Ok(Self { bytes })
    }
}

/// A connection handle for ACL, SCO and LE links
///
/// Valid handles fall in 0x0000..=0x0EFF; 0xF000 is the reserved
/// known-invalid sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionHandle(u16);

impl ConnectionHandle {
    pub const INVALID: ConnectionHandle = ConnectionHandle(HCI_CONNECTION_HANDLE_INVALID);

    /// Create a handle, rejecting values outside the valid range
    pub fn new(raw: u16) -> Result<Self, HciError> {
        if raw > HCI_CONNECTION_HANDLE_MAX {
            return Err(HciError::InvalidConnectionHandle(raw));
        }
        Ok(ConnectionHandle(raw))
    }

    /// Wrap a raw handle value without range checking, e.g. one masked out
    /// of a received handle word
    pub const fn from_raw(raw: u16) -> Self {
        ConnectionHandle(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 <= HCI_CONNECTION_HANDLE_MAX
    }
}

impl fmt::Display for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.0)
    }
}

/// An AMP physical link handle; 0x00 is invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhysicalLinkHandle(u8);

impl PhysicalLinkHandle {
    pub const fn from_raw(raw: u8) -> Self {
        PhysicalLinkHandle(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != 0x00
    }
}

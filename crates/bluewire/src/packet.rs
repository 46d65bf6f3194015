//! HCI packet structures and codecs
//!
//! The four packet categories share one shape: a small fixed header with
//! little-endian multi-byte fields, followed by a length-prefixed payload.
//! ACL and SCO packets carry their connection handle and flag bits packed
//! into a single 16-bit word.

use crate::constants::*;
use crate::error::HciError;
use crate::opcode::Opcode;
use crate::types::ConnectionHandle;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// The 1-byte tag that frames every packet on the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketType {
    Command,
    AclData,
    ScoData,
    Event,
    IsoData,
}

impl PacketType {
    pub fn from_u8(value: u8) -> Result<Self, HciError> {
        match value {
            HCI_COMMAND_PKT => Ok(PacketType::Command),
            HCI_ACL_PKT => Ok(PacketType::AclData),
            HCI_SCO_PKT => Ok(PacketType::ScoData),
            HCI_EVENT_PKT => Ok(PacketType::Event),
            HCI_ISO_PKT => Ok(PacketType::IsoData),
            other => Err(HciError::InvalidPacketType(other)),
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            PacketType::Command => HCI_COMMAND_PKT,
            PacketType::AclData => HCI_ACL_PKT,
            PacketType::ScoData => HCI_SCO_PKT,
            PacketType::Event => HCI_EVENT_PKT,
            PacketType::IsoData => HCI_ISO_PKT,
        }
    }
}

/// An HCI command: a 16-bit opcode and up to 255 parameter bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPacket {
    pub opcode: Opcode,
    pub parameters: Vec<u8>,
}

impl CommandPacket {
    pub fn new(opcode: Opcode, parameters: Vec<u8>) -> Self {
        Self { opcode, parameters }
    }

    /// Serialize to the on-wire body: opcode, length byte, parameters
    pub fn to_bytes(&self) -> Result<Vec<u8>, HciError> {
        if self.parameters.len() > HCI_MAX_PARAM_LEN {
            return Err(HciError::PayloadTooLarge {
                len: self.parameters.len(),
                max: HCI_MAX_PARAM_LEN,
            });
        }

        let mut packet = Vec::with_capacity(HCI_COMMAND_HEADER_SIZE + self.parameters.len());
        packet.extend_from_slice(&self.opcode.raw().to_le_bytes());
        packet.push(self.parameters.len() as u8);
        packet.extend_from_slice(&self.parameters);
        Ok(packet)
    }

    /// Parse a command body starting at the opcode
    pub fn parse(data: &[u8]) -> Result<Self, HciError> {
        if data.len() < HCI_COMMAND_HEADER_SIZE {
            return Err(HciError::UnderflowHeader);
        }

        let opcode = Opcode::from_raw(u16::from_le_bytes([data[0], data[1]]));
        let param_len = data[2] as usize;

        let needed = HCI_COMMAND_HEADER_SIZE + param_len;
        if data.len() < needed {
            return Err(HciError::TruncatedPacket {
                needed,
                available: data.len(),
            });
        }

        Ok(Self {
            opcode,
            parameters: data[HCI_COMMAND_HEADER_SIZE..needed].to_vec(),
        })
    }
}

/// An HCI event: a 1-byte event code and up to 255 parameter bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPacket {
    pub event_code: u8,
    pub parameters: Vec<u8>,
}

impl EventPacket {
    pub fn new(event_code: u8, parameters: Vec<u8>) -> Self {
        Self {
            event_code,
            parameters,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, HciError> {
        if self.parameters.len() > HCI_MAX_PARAM_LEN {
            return Err(HciError::PayloadTooLarge {
                len: self.parameters.len(),
                max: HCI_MAX_PARAM_LEN,
            });
        }

        let mut packet = Vec::with_capacity(HCI_EVENT_HEADER_SIZE + self.parameters.len());
        packet.push(self.event_code);
        packet.push(self.parameters.len() as u8);
        packet.extend_from_slice(&self.parameters);
        Ok(packet)
    }

    pub fn parse(data: &[u8]) -> Result<Self, HciError> {
        if data.len() < HCI_EVENT_HEADER_SIZE {
            return Err(HciError::UnderflowHeader);
        }

        let event_code = data[0];
        let param_len = data[1] as usize;

        let needed = HCI_EVENT_HEADER_SIZE + param_len;
        if data.len() < needed {
            return Err(HciError::TruncatedPacket {
                needed,
                available: data.len(),
            });
        }

        Ok(Self {
            event_code,
            parameters: data[HCI_EVENT_HEADER_SIZE..needed].to_vec(),
        })
    }
}

/// Packet-boundary flag of an ACL data packet (handle word bits 12-13)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AclBoundaryFlag {
    /// First packet of a non-automatically-flushable L2CAP PDU
    FirstNonFlushable,
    /// Continuing fragment
    Continuing,
    /// First packet of an automatically-flushable L2CAP PDU
    FirstFlushable,
    /// A complete L2CAP PDU
    Complete,
}

impl AclBoundaryFlag {
    fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0b00 => AclBoundaryFlag::FirstNonFlushable,
            0b01 => AclBoundaryFlag::Continuing,
            0b10 => AclBoundaryFlag::FirstFlushable,
            _ => AclBoundaryFlag::Complete,
        }
    }

    fn to_bits(self) -> u16 {
        match self {
            AclBoundaryFlag::FirstNonFlushable => 0b00,
            AclBoundaryFlag::Continuing => 0b01,
            AclBoundaryFlag::FirstFlushable => 0b10,
            AclBoundaryFlag::Complete => 0b11,
        }
    }
}

/// Broadcast flag of an ACL data packet (handle word bits 14-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AclBroadcastFlag {
    PointToPoint,
    ActiveBroadcast,
    PiconetBroadcast,
    Reserved,
}

impl AclBroadcastFlag {
    fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0b00 => AclBroadcastFlag::PointToPoint,
            0b01 => AclBroadcastFlag::ActiveBroadcast,
            0b10 => AclBroadcastFlag::PiconetBroadcast,
            _ => AclBroadcastFlag::Reserved,
        }
    }

    fn to_bits(self) -> u16 {
        match self {
            AclBroadcastFlag::PointToPoint => 0b00,
            AclBroadcastFlag::ActiveBroadcast => 0b01,
            AclBroadcastFlag::PiconetBroadcast => 0b10,
            AclBroadcastFlag::Reserved => 0b11,
        }
    }
}

/// An ACL data packet
///
/// The handle word packs a 12-bit connection handle with the boundary and
/// broadcast flags; the flag bits must be masked off before the handle is
/// used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclDataPacket {
    pub handle: ConnectionHandle,
    pub boundary: AclBoundaryFlag,
    pub broadcast: AclBroadcastFlag,
    pub data: Vec<u8>,
}

impl AclDataPacket {
    pub fn new(
        handle: ConnectionHandle,
        boundary: AclBoundaryFlag,
        broadcast: AclBroadcastFlag,
        data: Vec<u8>,
    ) -> Self {
        Self {
            handle,
            boundary,
            broadcast,
            data,
        }
    }

    /// The packed handle-and-flags word
    pub fn handle_word(&self) -> u16 {
        (self.handle.raw() & HCI_HANDLE_MASK)
            | (self.boundary.to_bits() << HCI_ACL_PB_FLAG_SHIFT)
            | (self.broadcast.to_bits() << HCI_ACL_BC_FLAG_SHIFT)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, HciError> {
        if !self.handle.is_valid() {
            return Err(HciError::InvalidConnectionHandle(self.handle.raw()));
        }
        if self.data.len() > HCI_MAX_ACL_LEN {
            return Err(HciError::PayloadTooLarge {
                len: self.data.len(),
                max: HCI_MAX_ACL_LEN,
            });
        }

        let mut packet = Vec::with_capacity(HCI_ACL_HEADER_SIZE + self.data.len());
        packet.extend_from_slice(&self.handle_word().to_le_bytes());
        packet.extend_from_slice(&(self.data.len() as u16).to_le_bytes());
        packet.extend_from_slice(&self.data);
        Ok(packet)
    }

    pub fn parse(data: &[u8]) -> Result<Self, HciError> {
        if data.len() < HCI_ACL_HEADER_SIZE {
            return Err(HciError::UnderflowHeader);
        }

        let mut cursor = Cursor::new(data);
        let word = cursor
            .read_u16::<LittleEndian>()
            .map_err(|_| HciError::UnderflowHeader)?;
        let data_len = cursor
            .read_u16::<LittleEndian>()
            .map_err(|_| HciError::UnderflowHeader)? as usize;

        let needed = HCI_ACL_HEADER_SIZE + data_len;
        if data.len() < needed {
            return Err(HciError::TruncatedPacket {
                needed,
                available: data.len(),
            });
        }

        Ok(Self {
            handle: ConnectionHandle::from_raw(word & HCI_HANDLE_MASK),
            boundary: AclBoundaryFlag::from_bits(word >> HCI_ACL_PB_FLAG_SHIFT),
            broadcast: AclBroadcastFlag::from_bits(word >> HCI_ACL_BC_FLAG_SHIFT),
            data: data[HCI_ACL_HEADER_SIZE..needed].to_vec(),
        })
    }
}

/// Packet-status flag of a received SCO data packet (handle word bits 12-13)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoPacketStatusFlag {
    CorrectlyReceived,
    PossiblyInvalid,
    NoDataReceived,
    PartiallyLost,
}

impl ScoPacketStatusFlag {
    fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0b00 => ScoPacketStatusFlag::CorrectlyReceived,
            0b01 => ScoPacketStatusFlag::PossiblyInvalid,
            0b10 => ScoPacketStatusFlag::NoDataReceived,
            _ => ScoPacketStatusFlag::PartiallyLost,
        }
    }

    fn to_bits(self) -> u16 {
        match self {
            ScoPacketStatusFlag::CorrectlyReceived => 0b00,
            ScoPacketStatusFlag::PossiblyInvalid => 0b01,
            ScoPacketStatusFlag::NoDataReceived => 0b10,
            ScoPacketStatusFlag::PartiallyLost => 0b11,
        }
    }
}

/// A SCO or eSCO data packet; the length field is a single byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoDataPacket {
    pub handle: ConnectionHandle,
    pub status_flag: ScoPacketStatusFlag,
    pub data: Vec<u8>,
}

impl ScoDataPacket {
    pub fn new(
        handle: ConnectionHandle,
        status_flag: ScoPacketStatusFlag,
        data: Vec<u8>,
    ) -> Self {
        Self {
            handle,
            status_flag,
            data,
        }
    }

    pub fn handle_word(&self) -> u16 {
        (self.handle.raw() & HCI_HANDLE_MASK)
            | (self.status_flag.to_bits() << HCI_SCO_STATUS_FLAG_SHIFT)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, HciError> {
        if !self.handle.is_valid() {
            return Err(HciError::InvalidConnectionHandle(self.handle.raw()));
        }
        if self.data.len() > HCI_MAX_SCO_LEN {
            return Err(HciError::PayloadTooLarge {
                len: self.data.len(),
                max: HCI_MAX_SCO_LEN,
            });
        }

        let mut packet = Vec::with_capacity(HCI_SCO_HEADER_SIZE + self.data.len());
        packet.extend_from_slice(&self.handle_word().to_le_bytes());
        packet.push(self.data.len() as u8);
        packet.extend_from_slice(&self.data);
        Ok(packet)
    }

    pub fn parse(data: &[u8]) -> Result<Self, HciError> {
        if data.len() < HCI_SCO_HEADER_SIZE {
            return Err(HciError::UnderflowHeader);
        }

        let word = u16::from_le_bytes([data[0], data[1]]);
        let data_len = data[2] as usize;

        let needed = HCI_SCO_HEADER_SIZE + data_len;
        if data.len() < needed {
            return Err(HciError::TruncatedPacket {
                needed,
                available: data.len(),
            });
        }

        Ok(Self {
            handle: ConnectionHandle::from_raw(word & HCI_HANDLE_MASK),
            status_flag: ScoPacketStatusFlag::from_bits(word >> HCI_SCO_STATUS_FLAG_SHIFT),
            data: data[HCI_SCO_HEADER_SIZE..needed].to_vec(),
        })
    }
}

/// A complete transport-level frame: packet-type tag plus body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HciPacket {
    Command(CommandPacket),
    AclData(AclDataPacket),
    ScoData(ScoDataPacket),
    Event(EventPacket),
}

impl HciPacket {
    pub fn packet_type(&self) -> PacketType {
        match self {
            HciPacket::Command(_) => PacketType::Command,
            HciPacket::AclData(_) => PacketType::AclData,
            HciPacket::ScoData(_) => PacketType::ScoData,
            HciPacket::Event(_) => PacketType::Event,
        }
    }

    /// Serialize with the leading packet-type byte
    pub fn to_bytes(&self) -> Result<Vec<u8>, HciError> {
        let body = match self {
            HciPacket::Command(command) => command.to_bytes()?,
            HciPacket::AclData(acl) => acl.to_bytes()?,
            HciPacket::ScoData(sco) => sco.to_bytes()?,
            HciPacket::Event(event) => event.to_bytes()?,
        };

        let mut packet = Vec::with_capacity(1 + body.len());
        packet.push(self.packet_type().as_u8());
        packet.extend_from_slice(&body);
        Ok(packet)
    }

    /// Parse a frame starting at the packet-type byte
    pub fn parse(data: &[u8]) -> Result<Self, HciError> {
        if data.is_empty() {
            return Err(HciError::UnderflowHeader);
        }

        let body = &data[1..];
        match PacketType::from_u8(data[0])? {
            PacketType::Command => Ok(HciPacket::Command(CommandPacket::parse(body)?)),
            PacketType::AclData => Ok(HciPacket::AclData(AclDataPacket::parse(body)?)),
            PacketType::ScoData => Ok(HciPacket::ScoData(ScoDataPacket::parse(body)?)),
            PacketType::Event => Ok(HciPacket::Event(EventPacket::parse(body)?)),
            // ISO data postdates the packet layouts modeled here
            PacketType::IsoData => Err(HciError::InvalidPacketType(HCI_ISO_PKT)),
        }
    }
}

//! BlueWire - A Rust codec for the Bluetooth HCI wire format
//!
//! This library implements the Host Controller Interface packet layouts used
//! between a Bluetooth host stack and its controller: command, event, ACL data
//! and SCO data packets, together with the opcode, status, event-mask and
//! feature-bit tables from the Core Specification (1.0b through 4.1).
//! A raw HCI socket transport is included for exercising the codec against a
//! real controller on Linux.

pub mod company;
pub mod constants;
pub mod error;
pub mod events;
pub mod masks;
pub mod opcode;
pub mod packet;
pub mod raw;
pub mod records;
pub mod socket;
pub mod status;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export common types for convenience
pub use company::company_name;
pub use error::{HciError, HciResult};
pub use events::{
    CommandCompleteEvent, CommandStatusEvent, DisconnectionCompleteEvent, InquiryResultEvent,
    LeAdvertisingReport, LeConnectionCompleteEvent, LeMetaEvent, NumberOfCompletedPacketsEvent,
    ReturnLinkKeysEvent,
};
pub use masks::{EventMask, LeEventMask, LeFeatures, LmpFeatures};
pub use opcode::Opcode;
pub use packet::{
    AclBoundaryFlag, AclBroadcastFlag, AclDataPacket, CommandPacket, EventPacket, HciPacket,
    PacketType, ScoDataPacket, ScoPacketStatusFlag,
};
pub use raw::{RawPacket, RawPayload};
pub use records::RecordView;
pub use socket::HciSocket;
pub use status::Status;
pub use types::{BdAddr, ConnectionHandle, PhysicalLinkHandle};

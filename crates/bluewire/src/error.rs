//! Error types for the bluewire library
//!
//! Every malformed input is reported to the immediate caller; there is no
//! retry or recovery at this layer.

use thiserror::Error;

/// Result alias used throughout the library
pub type HciResult<T> = Result<T, HciError>;

/// Errors produced by the HCI codec and the socket transport
#[derive(Error, Debug)]
pub enum HciError {
    #[error("Failed to open HCI socket: {0}")]
    SocketError(#[from] std::io::Error),

    #[error("Failed to bind to HCI device: {0}")]
    BindError(std::io::Error),

    #[error("Failed to send HCI packet: {0}")]
    SendError(std::io::Error),

    #[error("Failed to receive HCI packet: {0}")]
    ReceiveError(std::io::Error),

    #[error("Packet shorter than its fixed header")]
    UnderflowHeader,

    #[error("Truncated packet: need {needed} bytes, have {available}")]
    TruncatedPacket { needed: usize, available: usize },

    #[error("Payload of {len} bytes exceeds the {max}-byte limit")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("Opcode fields out of range: OGF {ogf:#04x}, OCF {ocf:#05x}")]
    InvalidOpcodeFields { ogf: u8, ocf: u16 },

    #[error("Record index {index} out of range for {count} records")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Unknown HCI packet type: {0:#04x}")]
    InvalidPacketType(u8),

    #[error("Invalid connection handle: {0:#06x}")]
    InvalidConnectionHandle(u16),

    #[error("Expected event code {expected:#04x}, found {actual:#04x}")]
    UnexpectedEventCode { expected: u8, actual: u8 },

    #[error("Out-of-line payload decoded without its buffer")]
    MissingPayloadBuffer,

    #[error("Invalid HCI packet format")]
    InvalidPacketFormat,
}

//! Typed views over HCI event parameters
//!
//! Each view parses the parameter block of an [`EventPacket`] whose event
//! code matches. The caller decodes the generic event first and picks the
//! view from the code; a mismatched code is an error, not a panic.

use crate::constants::*;
use crate::error::HciError;
use crate::opcode::Opcode;
use crate::packet::EventPacket;
use crate::records::RecordView;
use crate::status::Status;
use crate::types::{BdAddr, ConnectionHandle};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

fn expect_code(event: &EventPacket, expected: u8) -> Result<(), HciError> {
    if event.event_code != expected {
        return Err(HciError::UnexpectedEventCode {
            expected,
            actual: event.event_code,
        });
    }
    Ok(())
}

fn expect_len(parameters: &[u8], needed: usize) -> Result<(), HciError> {
    if parameters.len() < needed {
        return Err(HciError::TruncatedPacket {
            needed,
            available: parameters.len(),
        });
    }
    Ok(())
}

/// Command Complete (event 0x0E)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCompleteEvent {
    pub num_hci_command_packets: u8,
    pub opcode: Opcode,
    pub return_parameters: Vec<u8>,
}

impl CommandCompleteEvent {
    pub fn parse(event: &EventPacket) -> Result<Self, HciError> {
        expect_code(event, EVT_CMD_COMPLETE)?;
        expect_len(&event.parameters, 3)?;

        let p = &event.parameters;
        Ok(Self {
            num_hci_command_packets: p[0],
            opcode: Opcode::from_raw(u16::from_le_bytes([p[1], p[2]])),
            return_parameters: p[3..].to_vec(),
        })
    }

    /// The status byte most command returns lead with, if present
    pub fn status(&self) -> Option<Status> {
        self.return_parameters.first().map(|&b| Status::from(b))
    }
}

/// Command Status (event 0x0F)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStatusEvent {
    pub status: Status,
    pub num_hci_command_packets: u8,
    pub opcode: Opcode,
}

impl CommandStatusEvent {
    pub fn parse(event: &EventPacket) -> Result<Self, HciError> {
        expect_code(event, EVT_CMD_STATUS)?;
        expect_len(&event.parameters, 4)?;

        let p = &event.parameters;
        Ok(Self {
            status: Status::from(p[0]),
            num_hci_command_packets: p[1],
            opcode: Opcode::from_raw(u16::from_le_bytes([p[2], p[3]])),
        })
    }
}

/// Disconnection Complete (event 0x05)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisconnectionCompleteEvent {
    pub status: Status,
    pub handle: ConnectionHandle,
    pub reason: Status,
}

impl DisconnectionCompleteEvent {
    pub fn parse(event: &EventPacket) -> Result<Self, HciError> {
        expect_code(event, EVT_DISCONN_COMPLETE)?;
        expect_len(&event.parameters, 4)?;

        let p = &event.parameters;
        Ok(Self {
            status: Status::from(p[0]),
            handle: ConnectionHandle::from_raw(u16::from_le_bytes([p[1], p[2]]) & HCI_HANDLE_MASK),
            reason: Status::from(p[3]),
        })
    }
}

/// A single inquiry response entry (event 0x02, 14-byte stride)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InquiryResult {
    pub bd_addr: BdAddr,
    pub page_scan_repetition_mode: u8,
    pub class_of_device: [u8; 3],
    pub clock_offset: u16,
}

/// Inquiry Result (event 0x02)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryResultEvent {
    pub results: Vec<InquiryResult>,
}

impl InquiryResultEvent {
    pub fn parse(event: &EventPacket) -> Result<Self, HciError> {
        expect_code(event, EVT_INQUIRY_RESULT)?;
        expect_len(&event.parameters, 1)?;

        let count = event.parameters[0] as usize;
        let records = RecordView::new(&event.parameters[1..], INQUIRY_RESULT_STRIDE, count)?;

        let mut results = Vec::with_capacity(count);
        for record in records.iter() {
            let mut class_of_device = [0u8; 3];
            class_of_device.copy_from_slice(&record[9..12]);

            results.push(InquiryResult {
                bd_addr: BdAddr::from_slice(&record[0..6]).ok_or(HciError::InvalidPacketFormat)?,
                page_scan_repetition_mode: record[6],
                // record[7..9] is reserved
                class_of_device,
                clock_offset: u16::from_le_bytes([record[12], record[13]]),
            });
        }

        Ok(Self { results })
    }
}

/// Return Link Keys (event 0x15)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnLinkKeysEvent {
    pub keys: Vec<(BdAddr, [u8; LINK_KEY_SIZE])>,
}

impl ReturnLinkKeysEvent {
    pub fn parse(event: &EventPacket) -> Result<Self, HciError> {
        expect_code(event, EVT_RETURN_LINK_KEYS)?;
        expect_len(&event.parameters, 1)?;

        let count = event.parameters[0] as usize;
        let records = RecordView::new(&event.parameters[1..], RETURN_LINK_KEYS_STRIDE, count)?;

        let mut keys = Vec::with_capacity(count);
        for record in records.iter() {
            let bd_addr =
                BdAddr::from_slice(&record[0..6]).ok_or(HciError::InvalidPacketFormat)?;
            let mut key = [0u8; LINK_KEY_SIZE];
            key.copy_from_slice(&record[6..22]);
            keys.push((bd_addr, key));
        }

        Ok(Self { keys })
    }
}

/// Number Of Completed Packets (event 0x13)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberOfCompletedPacketsEvent {
    pub completed: Vec<(ConnectionHandle, u16)>,
}

impl NumberOfCompletedPacketsEvent {
    pub fn parse(event: &EventPacket) -> Result<Self, HciError> {
        expect_code(event, EVT_NUM_COMPLETED_PACKETS)?;
        expect_len(&event.parameters, 1)?;

        let count = event.parameters[0] as usize;
        let records = RecordView::new(
            &event.parameters[1..],
            NUM_COMPLETED_PACKETS_STRIDE,
            count,
        )?;

        let mut completed = Vec::with_capacity(count);
        for record in records.iter() {
            let mut cursor = Cursor::new(record);
            let word = cursor
                .read_u16::<LittleEndian>()
                .map_err(|_| HciError::InvalidPacketFormat)?;
            let packets = cursor
                .read_u16::<LittleEndian>()
                .map_err(|_| HciError::InvalidPacketFormat)?;
            completed.push((ConnectionHandle::from_raw(word & HCI_HANDLE_MASK), packets));
        }

        Ok(Self { completed })
    }
}

/// LE Meta (event 0x3E): the umbrella for all LE subevents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeMetaEvent {
    pub subevent_code: u8,
    pub parameters: Vec<u8>,
}

impl LeMetaEvent {
    pub fn parse(event: &EventPacket) -> Result<Self, HciError> {
        expect_code(event, EVT_LE_META_EVENT)?;
        expect_len(&event.parameters, 1)?;

        Ok(Self {
            subevent_code: event.parameters[0],
            parameters: event.parameters[1..].to_vec(),
        })
    }
}

/// LE Connection Complete (subevent 0x01)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeConnectionCompleteEvent {
    pub status: Status,
    pub handle: ConnectionHandle,
    pub role: u8,
    pub peer_address_type: u8,
    pub peer_address: BdAddr,
    pub conn_interval: u16,
    pub conn_latency: u16,
    pub supervision_timeout: u16,
    pub master_clock_accuracy: u8,
}

impl LeConnectionCompleteEvent {
    pub fn parse(event: &EventPacket) -> Result<Self, HciError> {
        let meta = LeMetaEvent::parse(event)?;
        if meta.subevent_code != EVT_LE_CONN_COMPLETE {
            return Err(HciError::UnexpectedEventCode {
                expected: EVT_LE_CONN_COMPLETE,
                actual: meta.subevent_code,
            });
        }
        expect_len(&meta.parameters, 18)?;

        let p = &meta.parameters;
        Ok(Self {
            status: Status::from(p[0]),
            handle: ConnectionHandle::from_raw(u16::from_le_bytes([p[1], p[2]]) & HCI_HANDLE_MASK),
            role: p[3],
            peer_address_type: p[4],
            peer_address: BdAddr::from_slice(&p[5..11]).ok_or(HciError::InvalidPacketFormat)?,
            conn_interval: u16::from_le_bytes([p[11], p[12]]),
            conn_latency: u16::from_le_bytes([p[13], p[14]]),
            supervision_timeout: u16::from_le_bytes([p[15], p[16]]),
            master_clock_accuracy: p[17],
        })
    }
}

/// One report from an LE Advertising Report (subevent 0x02)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeAdvertisingReport {
    pub event_type: u8,
    pub address_type: u8,
    pub address: BdAddr,
    pub data: Vec<u8>,
    pub rssi: i8,
}

impl LeAdvertisingReport {
    /// Parse every report carried by an LE Meta event.
    ///
    /// Reports have a variable per-entry size (the advertising data length
    /// differs between entries), so the body is walked sequentially rather
    /// than through a fixed-stride view.
    pub fn parse_from_event(event: &EventPacket) -> Result<Vec<Self>, HciError> {
        let meta = LeMetaEvent::parse(event)?;
        if meta.subevent_code != EVT_LE_ADVERTISING_REPORT {
            return Err(HciError::UnexpectedEventCode {
                expected: EVT_LE_ADVERTISING_REPORT,
                actual: meta.subevent_code,
            });
        }
        expect_len(&meta.parameters, 1)?;

        let num_reports = meta.parameters[0] as usize;
        let mut reports = Vec::with_capacity(num_reports);
        let mut rest = &meta.parameters[1..];

        for _ in 0..num_reports {
            // fixed preamble: event type, address type, address, data length
            expect_len(rest, 9)?;
            let event_type = rest[0];
            let address_type = rest[1];
            let address = BdAddr::from_slice(&rest[2..8]).ok_or(HciError::InvalidPacketFormat)?;
            let data_len = rest[8] as usize;

            expect_len(rest, 9 + data_len + 1)?;
            let data = rest[9..9 + data_len].to_vec();
            let rssi = rest[9 + data_len] as i8;
            rest = &rest[9 + data_len + 1..];

            reports.push(Self {
                event_type,
                address_type,
                address,
                data,
                rssi,
            });
        }

        Ok(reports)
    }
}

//! Unit tests for HCI packet parsing and serialization

use crate::constants::*;
use crate::error::HciError;
use crate::events::*;
use crate::masks::{EventMask, LeEventMask, LmpFeatures};
use crate::opcode::Opcode;
use crate::packet::*;
use crate::raw::{RawPacket, RawPayload};
use crate::records::RecordView;
use crate::status::Status;
use crate::types::{BdAddr, ConnectionHandle, PhysicalLinkHandle};

#[test]
fn test_opcode_packing() {
    // Every in-range OGF/OCF pair must survive the pack/unpack cycle
    for ogf in 0..=OGF_MAX {
        for ocf in (0..=OCF_MAX).step_by(7) {
            let opcode = Opcode::new(ogf, ocf).unwrap();
            assert_eq!(opcode.ogf(), ogf);
            assert_eq!(opcode.ocf(), ocf);
            assert_eq!(Opcode::from_raw(opcode.raw()), opcode);
        }
    }

    // Known compositions
    assert_eq!(Opcode::INQUIRY.raw(), 0x0401);
    assert_eq!(Opcode::RESET.raw(), 0x0C03);
    assert_eq!(Opcode::LE_SET_SCAN_ENABLE.raw(), 0x200C);

    // Out-of-width fields are rejected
    assert!(matches!(
        Opcode::new(0x40, 0x0001),
        Err(HciError::InvalidOpcodeFields { .. })
    ));
    assert!(matches!(
        Opcode::new(0x01, 0x0400),
        Err(HciError::InvalidOpcodeFields { .. })
    ));
}

#[test]
fn test_command_serialization() {
    // Inquiry with the GIAC, 10.24s inquiry length, unlimited responses
    let mut params = Vec::new();
    params.extend_from_slice(&GIAC_LAP);
    params.push(0x08);
    params.push(0x00);

    let command = CommandPacket::new(Opcode::INQUIRY, params);
    let bytes = command.to_bytes().unwrap();
    assert_eq!(bytes, [0x01, 0x04, 0x05, 0x33, 0x8B, 0x9E, 0x08, 0x00]);

    // The framed form carries the packet-type tag up front
    let framed = HciPacket::Command(command.clone()).to_bytes().unwrap();
    assert_eq!(framed[0], HCI_COMMAND_PKT);
    assert_eq!(&framed[1..], &bytes[..]);

    // Reset has no parameters
    let reset = CommandPacket::new(Opcode::RESET, vec![]);
    assert_eq!(reset.to_bytes().unwrap(), [0x03, 0x0C, 0x00]);

    // The length byte always matches the supplied parameter block
    for len in [0usize, 1, 17, 255] {
        let command = CommandPacket::new(Opcode::RESET, vec![0xAA; len]);
        let bytes = command.to_bytes().unwrap();
        assert_eq!(bytes[2] as usize, len);
        assert_eq!(bytes.len(), HCI_COMMAND_HEADER_SIZE + len);
    }
}

#[test]
fn test_command_parsing() {
    let bytes = [0x01, 0x04, 0x05, 0x33, 0x8B, 0x9E, 0x08, 0x00];
    let command = CommandPacket::parse(&bytes).unwrap();
    assert_eq!(command.opcode, Opcode::INQUIRY);
    assert_eq!(command.parameters, vec![0x33, 0x8B, 0x9E, 0x08, 0x00]);

    // Fewer than three bytes cannot hold the header
    assert!(matches!(
        CommandPacket::parse(&[0x01, 0x04]),
        Err(HciError::UnderflowHeader)
    ));

    // A declared length larger than the remaining bytes is truncation
    assert!(matches!(
        CommandPacket::parse(&[0x01, 0x04, 0x05, 0x33]),
        Err(HciError::TruncatedPacket {
            needed: 8,
            available: 4
        })
    ));
}

#[test]
fn test_parameter_length_limits() {
    // Exactly 255 bytes fits the 1-byte length field
    let command = CommandPacket::new(Opcode::RESET, vec![0u8; 255]);
    assert!(command.to_bytes().is_ok());

    // 256 does not
    let command = CommandPacket::new(Opcode::RESET, vec![0u8; 256]);
    assert!(matches!(
        command.to_bytes(),
        Err(HciError::PayloadTooLarge { len: 256, max: 255 })
    ));

    let event = EventPacket::new(EVT_VENDOR, vec![0u8; 256]);
    assert!(matches!(
        event.to_bytes(),
        Err(HciError::PayloadTooLarge { len: 256, max: 255 })
    ));

    let handle = ConnectionHandle::new(0x0001).unwrap();
    let sco = ScoDataPacket::new(handle, ScoPacketStatusFlag::CorrectlyReceived, vec![0; 256]);
    assert!(matches!(
        sco.to_bytes(),
        Err(HciError::PayloadTooLarge { len: 256, max: 255 })
    ));
}

#[test]
fn test_event_parsing() {
    // Command Complete for Reset
    let data = [
        EVT_CMD_COMPLETE, // Event code
        4,                // Parameter length
        1,                // Num_HCI_Command_Packets
        0x03,             // Command_Opcode (low byte)
        0x0C,             // Command_Opcode (high byte)
        0x00,             // Status
    ];

    let event = EventPacket::parse(&data).unwrap();
    assert_eq!(event.event_code, EVT_CMD_COMPLETE);
    assert_eq!(event.parameters, vec![1, 0x03, 0x0C, 0x00]);

    // Encoding writes the parameter length back out unchanged
    assert_eq!(event.to_bytes().unwrap(), data);

    assert!(matches!(
        EventPacket::parse(&[]),
        Err(HciError::UnderflowHeader)
    ));
    assert!(matches!(
        EventPacket::parse(&[EVT_CMD_COMPLETE, 10, 1, 2]),
        Err(HciError::TruncatedPacket { .. })
    ));
}

#[test]
fn test_command_complete_and_status_events() {
    let event = EventPacket::new(EVT_CMD_COMPLETE, vec![1, 0x03, 0x0C, 0x00]);
    let complete = CommandCompleteEvent::parse(&event).unwrap();
    assert_eq!(complete.num_hci_command_packets, 1);
    assert_eq!(complete.opcode, Opcode::RESET);
    assert_eq!(complete.return_parameters, vec![0x00]);
    assert_eq!(complete.status(), Some(Status::Success));

    let event = EventPacket::new(EVT_CMD_STATUS, vec![0x0C, 1, 0x01, 0x04]);
    let status = CommandStatusEvent::parse(&event).unwrap();
    assert_eq!(status.status, Status::CommandDisallowed);
    assert_eq!(status.num_hci_command_packets, 1);
    assert_eq!(status.opcode, Opcode::INQUIRY);

    // Views reject an event with the wrong code
    let event = EventPacket::new(EVT_CMD_STATUS, vec![0x00, 1, 0x03, 0x0C]);
    assert!(matches!(
        CommandCompleteEvent::parse(&event),
        Err(HciError::UnexpectedEventCode {
            expected: EVT_CMD_COMPLETE,
            actual: EVT_CMD_STATUS
        })
    ));

    let event = EventPacket::new(EVT_DISCONN_COMPLETE, vec![0x00, 0x40, 0x00, 0x13]);
    let disconn = DisconnectionCompleteEvent::parse(&event).unwrap();
    assert_eq!(disconn.status, Status::Success);
    assert_eq!(disconn.handle.raw(), 0x0040);
    assert_eq!(disconn.reason, Status::RemoteUserTerminatedConnection);
}

#[test]
fn test_acl_flag_isolation() {
    // Packing then unpacking must recover the handle and each flag field
    // without bits leaking between them
    let boundaries = [
        AclBoundaryFlag::FirstNonFlushable,
        AclBoundaryFlag::Continuing,
        AclBoundaryFlag::FirstFlushable,
        AclBoundaryFlag::Complete,
    ];
    let broadcasts = [
        AclBroadcastFlag::PointToPoint,
        AclBroadcastFlag::ActiveBroadcast,
        AclBroadcastFlag::PiconetBroadcast,
        AclBroadcastFlag::Reserved,
    ];

    for &handle in &[0x0000u16, 0x0001, 0x0ABC, 0x0EFF] {
        for &boundary in &boundaries {
            for &broadcast in &broadcasts {
                let packet = AclDataPacket::new(
                    ConnectionHandle::new(handle).unwrap(),
                    boundary,
                    broadcast,
                    vec![0xDE, 0xAD],
                );
                let parsed = AclDataPacket::parse(&packet.to_bytes().unwrap()).unwrap();
                assert_eq!(parsed.handle.raw(), handle);
                assert_eq!(parsed.boundary, boundary);
                assert_eq!(parsed.broadcast, broadcast);
                assert_eq!(parsed.data, vec![0xDE, 0xAD]);
            }
        }
    }

    // Header word 0x200C: handle 0x00C, first automatically-flushable
    // packet, no broadcast
    let parsed = AclDataPacket::parse(&[0x0C, 0x20, 0x00, 0x00]).unwrap();
    assert_eq!(parsed.handle.raw(), 0x000C);
    assert_eq!(parsed.boundary, AclBoundaryFlag::FirstFlushable);
    assert_eq!(parsed.broadcast, AclBroadcastFlag::PointToPoint);
    assert!(parsed.data.is_empty());

    // Encoding refuses a handle outside the valid range
    let packet = AclDataPacket::new(
        ConnectionHandle::from_raw(0x0FFF),
        AclBoundaryFlag::Complete,
        AclBroadcastFlag::PointToPoint,
        vec![],
    );
    assert!(matches!(
        packet.to_bytes(),
        Err(HciError::InvalidConnectionHandle(0x0FFF))
    ));

    assert!(matches!(
        AclDataPacket::parse(&[0x0C, 0x20, 0x05, 0x00, 0xAA]),
        Err(HciError::TruncatedPacket { .. })
    ));
}

#[test]
fn test_sco_packets() {
    let handle = ConnectionHandle::new(0x002A).unwrap();
    let packet = ScoDataPacket::new(
        handle,
        ScoPacketStatusFlag::PossiblyInvalid,
        vec![0x01, 0x02, 0x03],
    );

    let bytes = packet.to_bytes().unwrap();
    // bits 12-13 carry the packet-status flag
    assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 0x102A);
    assert_eq!(bytes[2], 3);

    let parsed = ScoDataPacket::parse(&bytes).unwrap();
    assert_eq!(parsed, packet);

    assert!(matches!(
        ScoDataPacket::parse(&[0x2A, 0x10]),
        Err(HciError::UnderflowHeader)
    ));
}

#[test]
fn test_connection_handle_validity() {
    assert!(ConnectionHandle::new(0x0000).unwrap().is_valid());
    assert!(ConnectionHandle::new(0x0EFF).unwrap().is_valid());
    assert!(ConnectionHandle::new(0x0F00).is_err());
    assert!(ConnectionHandle::new(0xF000).is_err());

    assert!(!ConnectionHandle::INVALID.is_valid());
    assert!(!ConnectionHandle::from_raw(0x0F00).is_valid());

    assert!(PhysicalLinkHandle::from_raw(0x01).is_valid());
    assert!(PhysicalLinkHandle::from_raw(0xFF).is_valid());
    assert!(!PhysicalLinkHandle::from_raw(0x00).is_valid());
}

#[test]
fn test_inquiry_result_event() {
    // Two responses, 14 bytes each
    let mut params = vec![2u8];
    // first entry
    params.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]); // BD_ADDR
    params.push(0x01); // Page_Scan_Repetition_Mode
    params.extend_from_slice(&[0x00, 0x00]); // Reserved
    params.extend_from_slice(&[0x0C, 0x02, 0x5A]); // Class_Of_Device
    params.extend_from_slice(&[0x34, 0x12]); // Clock_Offset
    // second entry
    params.extend_from_slice(&[0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6]);
    params.push(0x02);
    params.extend_from_slice(&[0x00, 0x00]);
    params.extend_from_slice(&[0x04, 0x01, 0x1F]);
    params.extend_from_slice(&[0x78, 0x56]);

    let event = EventPacket::new(EVT_INQUIRY_RESULT, params);
    let result = InquiryResultEvent::parse(&event).unwrap();
    assert_eq!(result.results.len(), 2);

    let first = &result.results[0];
    assert_eq!(first.bd_addr, BdAddr::new([0x01, 0x02, 0x03, 0x04, 0x05, 0x06]));
    assert_eq!(first.page_scan_repetition_mode, 0x01);
    assert_eq!(first.class_of_device, [0x0C, 0x02, 0x5A]);
    assert_eq!(first.clock_offset, 0x1234);

    let second = &result.results[1];
    assert_eq!(second.clock_offset, 0x5678);

    // A count that overruns the parameter block is truncation
    let event = EventPacket::new(EVT_INQUIRY_RESULT, vec![3, 0x00, 0x00]);
    assert!(matches!(
        InquiryResultEvent::parse(&event),
        Err(HciError::TruncatedPacket { .. })
    ));
}

#[test]
fn test_link_key_and_completed_packet_events() {
    let mut params = vec![1u8];
    params.extend_from_slice(&[0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
    params.extend_from_slice(&[0xAB; 16]);

    let event = EventPacket::new(EVT_RETURN_LINK_KEYS, params);
    let keys = ReturnLinkKeysEvent::parse(&event).unwrap();
    assert_eq!(keys.keys.len(), 1);
    assert_eq!(
        keys.keys[0].0,
        BdAddr::new([0x11, 0x22, 0x33, 0x44, 0x55, 0x66])
    );
    assert_eq!(keys.keys[0].1, [0xAB; 16]);

    // Two handle/count pairs
    let event = EventPacket::new(
        EVT_NUM_COMPLETED_PACKETS,
        vec![2, 0x40, 0x00, 0x05, 0x00, 0x41, 0x00, 0x02, 0x00],
    );
    let completed = NumberOfCompletedPacketsEvent::parse(&event).unwrap();
    assert_eq!(
        completed.completed,
        vec![
            (ConnectionHandle::from_raw(0x0040), 5),
            (ConnectionHandle::from_raw(0x0041), 2),
        ]
    );
}

#[test]
fn test_le_meta_events() {
    let data = [
        EVT_LE_META_EVENT,    // Event code
        19,                   // Parameter length
        EVT_LE_CONN_COMPLETE, // Subevent code
        0x00,                 // Status
        0x40,
        0x00, // Connection_Handle
        0x00, // Role
        0x00, // Peer_Address_Type
        0x01,
        0x02,
        0x03,
        0x04,
        0x05,
        0x06, // Peer_Address
        0x0A,
        0x00, // Conn_Interval
        0x00,
        0x00, // Conn_Latency
        0x80,
        0x0C, // Supervision_Timeout
        0x00, // Master_Clock_Accuracy
    ];

    let event = EventPacket::parse(&data).unwrap();
    let meta = LeMetaEvent::parse(&event).unwrap();
    assert_eq!(meta.subevent_code, EVT_LE_CONN_COMPLETE);

    let conn = LeConnectionCompleteEvent::parse(&event).unwrap();
    assert_eq!(conn.status, Status::Success);
    assert_eq!(conn.handle.raw(), 0x0040);
    assert_eq!(
        conn.peer_address,
        BdAddr::new([0x01, 0x02, 0x03, 0x04, 0x05, 0x06])
    );
    assert_eq!(conn.conn_interval, 0x000A);
    assert_eq!(conn.supervision_timeout, 0x0C80);

    // Two advertising reports with different data lengths in one event
    let mut params = vec![EVT_LE_ADVERTISING_REPORT, 2];
    params.extend_from_slice(&[0x00, 0x00]); // Event_Type, Address_Type
    params.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    params.push(3); // Data_Length
    params.extend_from_slice(&[0x02, 0x01, 0x06]);
    params.push(0xC3); // RSSI (-61 dBm)
    params.extend_from_slice(&[0x03, 0x01]); // second report
    params.extend_from_slice(&[0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6]);
    params.push(0); // no data
    params.push(0xB0);

    let event = EventPacket::new(EVT_LE_META_EVENT, params);
    let reports = LeAdvertisingReport::parse_from_event(&event).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].data, vec![0x02, 0x01, 0x06]);
    assert_eq!(reports[0].rssi, -61);
    assert_eq!(reports[1].event_type, 0x03);
    assert!(reports[1].data.is_empty());
    assert_eq!(reports[1].rssi, -80);

    // Wrong subevent
    let event = EventPacket::new(EVT_LE_META_EVENT, vec![EVT_LE_CONN_COMPLETE, 0x00]);
    assert!(LeAdvertisingReport::parse_from_event(&event).is_err());

    // No reports
    let event = EventPacket::new(EVT_LE_META_EVENT, vec![EVT_LE_ADVERTISING_REPORT, 0]);
    assert_eq!(
        LeAdvertisingReport::parse_from_event(&event).unwrap().len(),
        0
    );
}

#[test]
fn test_record_view() {
    let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
    let view = RecordView::new(&data, 2, 3).unwrap();

    assert_eq!(view.count(), 3);
    assert_eq!(view.get(0).unwrap(), &[0x01, 0x02]);
    assert_eq!(view.get(2).unwrap(), &[0x05, 0x06]);
    assert_eq!(view.iter().collect::<Vec<_>>().len(), 3);

    // Indexing at the declared count must fail even though the buffer
    // could hold more
    assert!(matches!(
        view.get(3),
        Err(HciError::IndexOutOfRange { index: 3, count: 3 })
    ));

    assert!(matches!(
        RecordView::new(&data, 4, 2),
        Err(HciError::TruncatedPacket {
            needed: 8,
            available: 6
        })
    ));
}

#[test]
fn test_raw_packet_container() {
    // Inline payload rides in the same buffer, top length bit clear
    let packet = RawPacket::inline(PacketType::Command, vec![0x03, 0x0C, 0x00]);
    let bytes = packet.to_bytes().unwrap();
    assert_eq!(bytes[0], HCI_COMMAND_PKT);
    assert_eq!(u32::from_le_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]), 3);
    assert_eq!(&bytes[5..], &[0x03, 0x0C, 0x00]);
    assert_eq!(RawPacket::parse(&bytes, None).unwrap(), packet);

    // Referenced payload lives in a caller-owned buffer, top bit set
    let payload: Box<[u8]> = vec![0xAA; 16].into_boxed_slice();
    let packet = RawPacket::referenced(PacketType::AclData, payload.clone());
    let bytes = packet.to_bytes().unwrap();
    assert_eq!(bytes.len(), 5);
    let word = u32::from_le_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]);
    assert_eq!(word, 16 | 0x8000_0000);

    let parsed = RawPacket::parse(&bytes, Some(&payload[..])).unwrap();
    assert_eq!(parsed.payload, RawPayload::Referenced(payload));

    // Without the external buffer the referenced form cannot be decoded
    assert!(matches!(
        RawPacket::parse(&bytes, None),
        Err(HciError::MissingPayloadBuffer)
    ));

    assert!(matches!(
        RawPacket::parse(&[0x01, 0x05, 0x00, 0x00, 0x00, 0x01], None),
        Err(HciError::TruncatedPacket { .. })
    ));
}

#[test]
fn test_event_masks() {
    assert_eq!(EventMask::DEFAULT.bits(), 0x0000_1FFF_FFFF_FFFF);
    assert!(EventMask::DEFAULT.contains(EventMask::INQUIRY_COMPLETE));
    assert!(EventMask::DEFAULT.contains(EventMask::INQUIRY_RESULT_WITH_RSSI));
    assert!(!EventMask::DEFAULT.contains(EventMask::LE_META));

    assert_eq!(EventMask::LE_META.bits(), 1 << 61);
    assert_eq!(
        EventMask::INQUIRY_COMPLETE.to_le_bytes(),
        [0x01, 0, 0, 0, 0, 0, 0, 0]
    );

    assert_eq!(LeEventMask::DEFAULT.bits(), 0x1F);
    assert!(LeEventMask::all().contains(LeEventMask::REMOTE_CONNECTION_PARAMETER_REQUEST));

    let features = LmpFeatures::from_le_bytes([0x00, 0x00, 0x00, 0x00, 0x40, 0, 0, 0]);
    assert!(features.contains(LmpFeatures::LE_SUPPORTED_CONTROLLER));
    assert_eq!(features.to_le_bytes()[4], 0x40);
}

#[test]
fn test_status_codes() {
    // Every assigned value survives the byte round trip
    for value in 0x00..=0x40u8 {
        let status = Status::from(value);
        assert_eq!(u8::from(status), value);
    }

    assert_eq!(Status::from(0x00), Status::Success);
    assert!(Status::from(0x00).is_success());
    assert_eq!(Status::from(0x0C), Status::CommandDisallowed);
    assert_eq!(Status::from(0x13), Status::RemoteUserTerminatedConnection);
    assert_eq!(Status::from(0x40), Status::CoarseClockAdjustmentRejected);

    // Reserved values pass through unchanged
    assert_eq!(Status::from(0x2B), Status::Unknown(0x2B));
    assert_eq!(u8::from(Status::Unknown(0x77)), 0x77);

    assert_eq!(Status::PageTimeout.to_string(), "Page Timeout");
}

#[test]
fn test_company_identifiers() {
    use crate::company::company_name;

    assert_eq!(company_name(0x0000), Some("Ericsson Technology Licensing"));
    assert_eq!(company_name(0x000D), Some("Texas Instruments Inc."));
    assert_eq!(company_name(0x004C), Some("Apple, Inc."));
    assert_eq!(company_name(0x005E), Some("Stonestreet One, LLC"));
    assert_eq!(company_name(0x1234), None);
}

#[test]
fn test_bd_addr() {
    let addr = BdAddr::new([0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    assert_eq!(addr.to_string(), "06:05:04:03:02:01");

    let parsed: BdAddr = "06:05:04:03:02:01".parse().unwrap();
    assert_eq!(parsed, addr);

    assert!("06:05:04".parse::<BdAddr>().is_err());
    assert!(BdAddr::from_slice(&[0x01, 0x02]).is_none());
}

#[test]
fn test_random_round_trips() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0x42);

    for _ in 0..200 {
        let ogf = rng.gen_range(0..=OGF_MAX);
        let ocf = rng.gen_range(0..=OCF_MAX);
        let len = rng.gen_range(0..=HCI_MAX_PARAM_LEN);
        let params: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let command = CommandPacket::new(Opcode::new(ogf, ocf).unwrap(), params);
        let parsed = CommandPacket::parse(&command.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed, command);
    }

    for _ in 0..200 {
        let handle = ConnectionHandle::new(rng.gen_range(0..=HCI_CONNECTION_HANDLE_MAX)).unwrap();
        let len = rng.gen_range(0..512usize);
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let packet = AclDataPacket::new(
            handle,
            AclBoundaryFlag::Complete,
            AclBroadcastFlag::PointToPoint,
            data,
        );
        let framed = HciPacket::AclData(packet.clone());
        let parsed = HciPacket::parse(&framed.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed, framed);
    }

    for _ in 0..100 {
        let handle = ConnectionHandle::new(rng.gen_range(0..=HCI_CONNECTION_HANDLE_MAX)).unwrap();
        let len = rng.gen_range(0..=HCI_MAX_SCO_LEN);
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let packet = ScoDataPacket::new(handle, ScoPacketStatusFlag::CorrectlyReceived, data);
        let parsed = ScoDataPacket::parse(&packet.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed, packet);
    }
}

#[test]
fn test_framed_packet_parsing() {
    assert!(matches!(
        HciPacket::parse(&[]),
        Err(HciError::UnderflowHeader)
    ));
    assert!(matches!(
        HciPacket::parse(&[0x07, 0x00]),
        Err(HciError::InvalidPacketType(0x07))
    ));
    assert!(matches!(
        HciPacket::parse(&[HCI_ISO_PKT, 0x00, 0x00]),
        Err(HciError::InvalidPacketType(HCI_ISO_PKT))
    ));

    let bytes = [HCI_EVENT_PKT, EVT_CMD_STATUS, 4, 0x00, 1, 0x03, 0x0C];
    match HciPacket::parse(&bytes).unwrap() {
        HciPacket::Event(event) => assert_eq!(event.event_code, EVT_CMD_STATUS),
        other => panic!("expected event packet, got {:?}", other),
    }
}

//! Event masks and controller feature bits
//!
//! Bit positions are fixed by the Core Specification. Command Complete and
//! Command Status are not maskable, which is why bits 13 and 14 of the event
//! mask are absent.

use bitflags::bitflags;

bitflags! {
    /// The 64-bit mask written with Set_Event_Mask
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventMask: u64 {
        const INQUIRY_COMPLETE = 1 << 0;
        const INQUIRY_RESULT = 1 << 1;
        const CONNECTION_COMPLETE = 1 << 2;
        const CONNECTION_REQUEST = 1 << 3;
        const DISCONNECTION_COMPLETE = 1 << 4;
        const AUTHENTICATION_COMPLETE = 1 << 5;
        const REMOTE_NAME_REQUEST_COMPLETE = 1 << 6;
        const ENCRYPTION_CHANGE = 1 << 7;
        const CHANGE_CONNECTION_LINK_KEY_COMPLETE = 1 << 8;
        const MASTER_LINK_KEY_COMPLETE = 1 << 9;
        const READ_REMOTE_SUPPORTED_FEATURES_COMPLETE = 1 << 10;
        const READ_REMOTE_VERSION_INFORMATION_COMPLETE = 1 << 11;
        const QOS_SETUP_COMPLETE = 1 << 12;
        const HARDWARE_ERROR = 1 << 15;
        const FLUSH_OCCURRED = 1 << 16;
        const ROLE_CHANGE = 1 << 17;
        const MODE_CHANGE = 1 << 19;
        const RETURN_LINK_KEYS = 1 << 20;
        const PIN_CODE_REQUEST = 1 << 21;
        const LINK_KEY_REQUEST = 1 << 22;
        const LINK_KEY_NOTIFICATION = 1 << 23;
        const LOOPBACK_COMMAND = 1 << 24;
        const DATA_BUFFER_OVERFLOW = 1 << 25;
        const MAX_SLOTS_CHANGE = 1 << 26;
        const READ_CLOCK_OFFSET_COMPLETE = 1 << 27;
        const CONNECTION_PACKET_TYPE_CHANGED = 1 << 28;
        const QOS_VIOLATION = 1 << 29;
        const PAGE_SCAN_MODE_CHANGE = 1 << 30;
        const PAGE_SCAN_REPETITION_MODE_CHANGE = 1 << 31;
        const FLOW_SPECIFICATION_COMPLETE = 1 << 32;
        const INQUIRY_RESULT_WITH_RSSI = 1 << 33;
        const READ_REMOTE_EXTENDED_FEATURES_COMPLETE = 1 << 34;
        const SYNCHRONOUS_CONNECTION_COMPLETE = 1 << 43;
        const SYNCHRONOUS_CONNECTION_CHANGED = 1 << 44;
        const SNIFF_SUBRATING = 1 << 45;
        const EXTENDED_INQUIRY_RESULT = 1 << 46;
        const ENCRYPTION_KEY_REFRESH_COMPLETE = 1 << 47;
        const IO_CAPABILITY_REQUEST = 1 << 48;
        const IO_CAPABILITY_RESPONSE = 1 << 49;
        const USER_CONFIRMATION_REQUEST = 1 << 50;
        const USER_PASSKEY_REQUEST = 1 << 51;
        const REMOTE_OOB_DATA_REQUEST = 1 << 52;
        const SIMPLE_PAIRING_COMPLETE = 1 << 53;
        const LINK_SUPERVISION_TIMEOUT_CHANGED = 1 << 55;
        const ENHANCED_FLUSH_COMPLETE = 1 << 56;
        const USER_PASSKEY_NOTIFICATION = 1 << 58;
        const KEYPRESS_NOTIFICATION = 1 << 59;
        const REMOTE_HOST_SUPPORTED_FEATURES_NOTIFICATION = 1 << 60;
        const LE_META = 1 << 61;
    }
}

impl EventMask {
    /// The controller reset default (events of the 1.x core set)
    pub const DEFAULT: EventMask = EventMask::from_bits_retain(0x0000_1FFF_FFFF_FFFF);

    /// Wire form, little-endian
    pub fn to_le_bytes(self) -> [u8; 8] {
        self.bits().to_le_bytes()
    }
}

bitflags! {
    /// The 64-bit mask written with LE_Set_Event_Mask
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LeEventMask: u64 {
        const CONNECTION_COMPLETE = 1 << 0;
        const ADVERTISING_REPORT = 1 << 1;
        const CONNECTION_UPDATE_COMPLETE = 1 << 2;
        const READ_REMOTE_USED_FEATURES_COMPLETE = 1 << 3;
        const LONG_TERM_KEY_REQUEST = 1 << 4;
        const REMOTE_CONNECTION_PARAMETER_REQUEST = 1 << 5;
    }
}

impl LeEventMask {
    /// The controller reset default
    pub const DEFAULT: LeEventMask = LeEventMask::from_bits_retain(0x0000_0000_0000_001F);

    pub fn to_le_bytes(self) -> [u8; 8] {
        self.bits().to_le_bytes()
    }
}

bitflags! {
    /// LMP feature bits, page 0 (Read_Local_Supported_Features)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LmpFeatures: u64 {
        const THREE_SLOT_PACKETS = 1 << 0;
        const FIVE_SLOT_PACKETS = 1 << 1;
        const ENCRYPTION = 1 << 2;
        const SLOT_OFFSET = 1 << 3;
        const TIMING_ACCURACY = 1 << 4;
        const ROLE_SWITCH = 1 << 5;
        const HOLD_MODE = 1 << 6;
        const SNIFF_MODE = 1 << 7;
        const PARK_STATE = 1 << 8;
        const POWER_CONTROL_REQUESTS = 1 << 9;
        const CHANNEL_QUALITY_DRIVEN_DATA_RATE = 1 << 10;
        const SCO_LINK = 1 << 11;
        const HV2_PACKETS = 1 << 12;
        const HV3_PACKETS = 1 << 13;
        const U_LAW_LOG_SYNCHRONOUS_DATA = 1 << 14;
        const A_LAW_LOG_SYNCHRONOUS_DATA = 1 << 15;
        const CVSD_SYNCHRONOUS_DATA = 1 << 16;
        const PAGING_PARAMETER_NEGOTIATION = 1 << 17;
        const POWER_CONTROL = 1 << 18;
        const TRANSPARENT_SYNCHRONOUS_DATA = 1 << 19;
        const BROADCAST_ENCRYPTION = 1 << 23;
        const EDR_ACL_2MBPS = 1 << 25;
        const EDR_ACL_3MBPS = 1 << 26;
        const ENHANCED_INQUIRY_SCAN = 1 << 27;
        const INTERLACED_INQUIRY_SCAN = 1 << 28;
        const INTERLACED_PAGE_SCAN = 1 << 29;
        const RSSI_WITH_INQUIRY_RESULTS = 1 << 30;
        const ESCO_EV3_PACKETS = 1 << 31;
        const EV4_PACKETS = 1 << 32;
        const EV5_PACKETS = 1 << 33;
        const AFH_CAPABLE_SLAVE = 1 << 35;
        const AFH_CLASSIFICATION_SLAVE = 1 << 36;
        const BR_EDR_NOT_SUPPORTED = 1 << 37;
        const LE_SUPPORTED_CONTROLLER = 1 << 38;
        const THREE_SLOT_EDR_ACL_PACKETS = 1 << 39;
        const FIVE_SLOT_EDR_ACL_PACKETS = 1 << 40;
        const SNIFF_SUBRATING = 1 << 41;
        const PAUSE_ENCRYPTION = 1 << 42;
        const AFH_CAPABLE_MASTER = 1 << 43;
        const AFH_CLASSIFICATION_MASTER = 1 << 44;
        const EDR_ESCO_2MBPS = 1 << 45;
        const EDR_ESCO_3MBPS = 1 << 46;
        const THREE_SLOT_EDR_ESCO_PACKETS = 1 << 47;
        const EXTENDED_INQUIRY_RESPONSE = 1 << 48;
        const SIMULTANEOUS_LE_AND_BR_EDR = 1 << 49;
        const SECURE_SIMPLE_PAIRING = 1 << 51;
        const ENCAPSULATED_PDU = 1 << 52;
        const ERRONEOUS_DATA_REPORTING = 1 << 53;
        const NON_FLUSHABLE_PACKET_BOUNDARY_FLAG = 1 << 54;
        const LINK_SUPERVISION_TIMEOUT_CHANGED_EVENT = 1 << 56;
        const INQUIRY_TX_POWER_LEVEL = 1 << 57;
        const ENHANCED_POWER_CONTROL = 1 << 58;
        const EXTENDED_FEATURES = 1 << 63;
    }
}

impl LmpFeatures {
    /// Parse the 8-byte little-endian feature block of a features event
    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        LmpFeatures::from_bits_retain(u64::from_le_bytes(bytes))
    }

    pub fn to_le_bytes(self) -> [u8; 8] {
        self.bits().to_le_bytes()
    }
}

bitflags! {
    /// LE controller feature bits (LE_Read_Local_Supported_Features)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LeFeatures: u64 {
        const ENCRYPTION = 1 << 0;
        const CONNECTION_PARAMETERS_REQUEST = 1 << 1;
        const EXTENDED_REJECT_INDICATION = 1 << 2;
        const SLAVE_INITIATED_FEATURES_EXCHANGE = 1 << 3;
        const PING = 1 << 4;
    }
}

impl LeFeatures {
    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        LeFeatures::from_bits_retain(u64::from_le_bytes(bytes))
    }

    pub fn to_le_bytes(self) -> [u8; 8] {
        self.bits().to_le_bytes()
    }
}

//! HCI protocol constants
//!
//! Numeric assignments from the Bluetooth Core Specification, versions 1.0b
//! through 4.1. Where the specification gave two command names the same value
//! across revisions, both names are kept as aliases of one value.

// HCI packet types
pub const HCI_COMMAND_PKT: u8 = 0x01;
pub const HCI_ACL_PKT: u8 = 0x02;
pub const HCI_SCO_PKT: u8 = 0x03;
pub const HCI_EVENT_PKT: u8 = 0x04;
pub const HCI_ISO_PKT: u8 = 0x05;

// Fixed header sizes
pub const HCI_COMMAND_HEADER_SIZE: usize = 3;
pub const HCI_EVENT_HEADER_SIZE: usize = 2;
pub const HCI_ACL_HEADER_SIZE: usize = 4;
pub const HCI_SCO_HEADER_SIZE: usize = 3;

// Maximum size of HCI command/event parameters (8-bit length field)
pub const HCI_MAX_PARAM_LEN: usize = 255;

// Maximum size of an ACL data payload (16-bit length field)
pub const HCI_MAX_ACL_LEN: usize = 65535;

// Maximum size of a SCO data payload (8-bit length field)
pub const HCI_MAX_SCO_LEN: usize = 255;

// Opcode field widths
pub const OGF_MAX: u8 = 0x3F;
pub const OCF_MAX: u16 = 0x03FF;

// Connection handle range; 0xF000 is the reserved known-invalid sentinel
pub const HCI_CONNECTION_HANDLE_MAX: u16 = 0x0EFF;
pub const HCI_CONNECTION_HANDLE_INVALID: u16 = 0xF000;

// ACL/SCO handle word layout: bits 0-11 handle, 12-15 flags
pub const HCI_HANDLE_MASK: u16 = 0x0FFF;
pub const HCI_ACL_PB_FLAG_MASK: u16 = 0x3000;
pub const HCI_ACL_PB_FLAG_SHIFT: u16 = 12;
pub const HCI_ACL_BC_FLAG_MASK: u16 = 0xC000;
pub const HCI_ACL_BC_FLAG_SHIFT: u16 = 14;
pub const HCI_SCO_STATUS_FLAG_MASK: u16 = 0x3000;
pub const HCI_SCO_STATUS_FLAG_SHIFT: u16 = 12;

// Inquiry access codes (lower address parts)
pub const GIAC_LAP: [u8; 3] = [0x33, 0x8B, 0x9E];
pub const LIAC_LAP: [u8; 3] = [0x00, 0x8B, 0x9E];

// OGF (Opcode Group Field) values
pub const OGF_LINK_CTL: u8 = 0x01;
pub const OGF_LINK_POLICY: u8 = 0x02;
pub const OGF_HOST_CTL: u8 = 0x03;
pub const OGF_INFO_PARAM: u8 = 0x04;
pub const OGF_STATUS_PARAM: u8 = 0x05;
pub const OGF_TESTING: u8 = 0x06;
pub const OGF_LE: u8 = 0x08;
pub const OGF_VENDOR: u8 = 0x3F;

// Link Control commands (OGF 0x01)
pub const OCF_INQUIRY: u16 = 0x0001;
pub const OCF_INQUIRY_CANCEL: u16 = 0x0002;
pub const OCF_PERIODIC_INQUIRY: u16 = 0x0003;
pub const OCF_EXIT_PERIODIC_INQUIRY: u16 = 0x0004;
pub const OCF_CREATE_CONNECTION: u16 = 0x0005;
pub const OCF_DISCONNECT: u16 = 0x0006;
pub const OCF_ADD_SCO_CONNECTION: u16 = 0x0007;
pub const OCF_CREATE_CONNECTION_CANCEL: u16 = 0x0008;
pub const OCF_ACCEPT_CONNECTION_REQUEST: u16 = 0x0009;
pub const OCF_REJECT_CONNECTION_REQUEST: u16 = 0x000A;
pub const OCF_LINK_KEY_REQUEST_REPLY: u16 = 0x000B;
pub const OCF_LINK_KEY_REQUEST_NEGATIVE_REPLY: u16 = 0x000C;
pub const OCF_PIN_CODE_REQUEST_REPLY: u16 = 0x000D;
pub const OCF_PIN_CODE_REQUEST_NEGATIVE_REPLY: u16 = 0x000E;
pub const OCF_CHANGE_CONNECTION_PACKET_TYPE: u16 = 0x000F;
pub const OCF_AUTHENTICATION_REQUESTED: u16 = 0x0011;
pub const OCF_SET_CONNECTION_ENCRYPTION: u16 = 0x0013;
pub const OCF_CHANGE_CONNECTION_LINK_KEY: u16 = 0x0015;
pub const OCF_MASTER_LINK_KEY: u16 = 0x0017;
pub const OCF_REMOTE_NAME_REQUEST: u16 = 0x0019;
pub const OCF_REMOTE_NAME_REQUEST_CANCEL: u16 = 0x001A;
pub const OCF_READ_REMOTE_SUPPORTED_FEATURES: u16 = 0x001B;
pub const OCF_READ_REMOTE_EXTENDED_FEATURES: u16 = 0x001C;
pub const OCF_READ_REMOTE_VERSION_INFORMATION: u16 = 0x001D;
pub const OCF_READ_CLOCK_OFFSET: u16 = 0x001F;
pub const OCF_READ_LMP_HANDLE: u16 = 0x0020;
pub const OCF_SETUP_SYNCHRONOUS_CONNECTION: u16 = 0x0028;
pub const OCF_ACCEPT_SYNCHRONOUS_CONNECTION: u16 = 0x0029;
pub const OCF_REJECT_SYNCHRONOUS_CONNECTION: u16 = 0x002A;
pub const OCF_IO_CAPABILITY_REQUEST_REPLY: u16 = 0x002B;
pub const OCF_USER_CONFIRMATION_REQUEST_REPLY: u16 = 0x002C;
pub const OCF_USER_CONFIRMATION_REQUEST_NEGATIVE_REPLY: u16 = 0x002D;
pub const OCF_USER_PASSKEY_REQUEST_REPLY: u16 = 0x002E;
pub const OCF_USER_PASSKEY_REQUEST_NEGATIVE_REPLY: u16 = 0x002F;
pub const OCF_REMOTE_OOB_DATA_REQUEST_REPLY: u16 = 0x0030;
pub const OCF_REMOTE_OOB_DATA_REQUEST_NEGATIVE_REPLY: u16 = 0x0033;
pub const OCF_IO_CAPABILITY_REQUEST_NEGATIVE_REPLY: u16 = 0x0034;

// Link Policy commands (OGF 0x02)
pub const OCF_HOLD_MODE: u16 = 0x0001;
pub const OCF_SNIFF_MODE: u16 = 0x0003;
pub const OCF_EXIT_SNIFF_MODE: u16 = 0x0004;
pub const OCF_PARK_STATE: u16 = 0x0005;
pub const OCF_EXIT_PARK_STATE: u16 = 0x0006;
pub const OCF_QOS_SETUP: u16 = 0x0007;
pub const OCF_ROLE_DISCOVERY: u16 = 0x0009;
pub const OCF_SWITCH_ROLE: u16 = 0x000B;
pub const OCF_READ_LINK_POLICY_SETTINGS: u16 = 0x000C;
pub const OCF_WRITE_LINK_POLICY_SETTINGS: u16 = 0x000D;
pub const OCF_READ_DEFAULT_LINK_POLICY_SETTINGS: u16 = 0x000E;
pub const OCF_WRITE_DEFAULT_LINK_POLICY_SETTINGS: u16 = 0x000F;
pub const OCF_FLOW_SPECIFICATION: u16 = 0x0010;
pub const OCF_SNIFF_SUBRATING: u16 = 0x0011;

// Controller and Baseband commands (OGF 0x03)
pub const OCF_SET_EVENT_MASK: u16 = 0x0001;
pub const OCF_RESET: u16 = 0x0003;
pub const OCF_SET_EVENT_FILTER: u16 = 0x0005;
pub const OCF_FLUSH: u16 = 0x0008;
pub const OCF_READ_PIN_TYPE: u16 = 0x0009;
pub const OCF_WRITE_PIN_TYPE: u16 = 0x000A;
pub const OCF_CREATE_NEW_UNIT_KEY: u16 = 0x000B;
pub const OCF_READ_STORED_LINK_KEY: u16 = 0x000D;
pub const OCF_WRITE_STORED_LINK_KEY: u16 = 0x0011;
pub const OCF_DELETE_STORED_LINK_KEY: u16 = 0x0012;
// Change_Local_Name was renamed Write_Local_Name across spec revisions;
// both names refer to the same opcode.
pub const OCF_CHANGE_LOCAL_NAME: u16 = 0x0013;
pub const OCF_WRITE_LOCAL_NAME: u16 = OCF_CHANGE_LOCAL_NAME;
pub const OCF_READ_LOCAL_NAME: u16 = 0x0014;
pub const OCF_READ_CONNECTION_ACCEPT_TIMEOUT: u16 = 0x0015;
pub const OCF_WRITE_CONNECTION_ACCEPT_TIMEOUT: u16 = 0x0016;
pub const OCF_READ_PAGE_TIMEOUT: u16 = 0x0017;
pub const OCF_WRITE_PAGE_TIMEOUT: u16 = 0x0018;
pub const OCF_READ_SCAN_ENABLE: u16 = 0x0019;
pub const OCF_WRITE_SCAN_ENABLE: u16 = 0x001A;
pub const OCF_READ_PAGE_SCAN_ACTIVITY: u16 = 0x001B;
pub const OCF_WRITE_PAGE_SCAN_ACTIVITY: u16 = 0x001C;
pub const OCF_READ_INQUIRY_SCAN_ACTIVITY: u16 = 0x001D;
pub const OCF_WRITE_INQUIRY_SCAN_ACTIVITY: u16 = 0x001E;
pub const OCF_READ_AUTHENTICATION_ENABLE: u16 = 0x001F;
pub const OCF_WRITE_AUTHENTICATION_ENABLE: u16 = 0x0020;
pub const OCF_READ_CLASS_OF_DEVICE: u16 = 0x0023;
pub const OCF_WRITE_CLASS_OF_DEVICE: u16 = 0x0024;
pub const OCF_READ_VOICE_SETTING: u16 = 0x0025;
pub const OCF_WRITE_VOICE_SETTING: u16 = 0x0026;
pub const OCF_READ_TRANSMIT_POWER_LEVEL: u16 = 0x002D;
pub const OCF_HOST_BUFFER_SIZE: u16 = 0x0033;
pub const OCF_HOST_NUMBER_OF_COMPLETED_PACKETS: u16 = 0x0035;
pub const OCF_READ_CURRENT_IAC_LAP: u16 = 0x0039;
pub const OCF_WRITE_CURRENT_IAC_LAP: u16 = 0x003A;
pub const OCF_READ_INQUIRY_MODE: u16 = 0x0044;
pub const OCF_WRITE_INQUIRY_MODE: u16 = 0x0045;
pub const OCF_READ_EXTENDED_INQUIRY_RESPONSE: u16 = 0x0051;
pub const OCF_WRITE_EXTENDED_INQUIRY_RESPONSE: u16 = 0x0052;
pub const OCF_READ_SIMPLE_PAIRING_MODE: u16 = 0x0055;
pub const OCF_WRITE_SIMPLE_PAIRING_MODE: u16 = 0x0056;
pub const OCF_SET_EVENT_MASK_PAGE_2: u16 = 0x0063;
pub const OCF_READ_LE_HOST_SUPPORT: u16 = 0x006C;
pub const OCF_WRITE_LE_HOST_SUPPORT: u16 = 0x006D;

// Informational commands (OGF 0x04)
pub const OCF_READ_LOCAL_VERSION_INFORMATION: u16 = 0x0001;
pub const OCF_READ_LOCAL_SUPPORTED_COMMANDS: u16 = 0x0002;
pub const OCF_READ_LOCAL_SUPPORTED_FEATURES: u16 = 0x0003;
pub const OCF_READ_LOCAL_EXTENDED_FEATURES: u16 = 0x0004;
pub const OCF_READ_BUFFER_SIZE: u16 = 0x0005;
pub const OCF_READ_BD_ADDR: u16 = 0x0009;
pub const OCF_READ_DATA_BLOCK_SIZE: u16 = 0x000A;

// Status commands (OGF 0x05)
pub const OCF_READ_FAILED_CONTACT_COUNTER: u16 = 0x0001;
pub const OCF_RESET_FAILED_CONTACT_COUNTER: u16 = 0x0002;
pub const OCF_READ_LINK_QUALITY: u16 = 0x0003;
pub const OCF_READ_RSSI: u16 = 0x0005;
pub const OCF_READ_AFH_CHANNEL_MAP: u16 = 0x0006;
pub const OCF_READ_CLOCK: u16 = 0x0007;
pub const OCF_READ_ENCRYPTION_KEY_SIZE: u16 = 0x0008;

// Testing commands (OGF 0x06)
pub const OCF_READ_LOOPBACK_MODE: u16 = 0x0001;
pub const OCF_WRITE_LOOPBACK_MODE: u16 = 0x0002;
pub const OCF_ENABLE_DEVICE_UNDER_TEST_MODE: u16 = 0x0003;

// LE commands (OGF 0x08)
pub const OCF_LE_SET_EVENT_MASK: u16 = 0x0001;
pub const OCF_LE_READ_BUFFER_SIZE: u16 = 0x0002;
pub const OCF_LE_READ_LOCAL_SUPPORTED_FEATURES: u16 = 0x0003;
pub const OCF_LE_SET_RANDOM_ADDRESS: u16 = 0x0005;
pub const OCF_LE_SET_ADVERTISING_PARAMETERS: u16 = 0x0006;
pub const OCF_LE_READ_ADVERTISING_CHANNEL_TX_POWER: u16 = 0x0007;
pub const OCF_LE_SET_ADVERTISING_DATA: u16 = 0x0008;
pub const OCF_LE_SET_SCAN_RESPONSE_DATA: u16 = 0x0009;
pub const OCF_LE_SET_ADVERTISING_ENABLE: u16 = 0x000A;
pub const OCF_LE_SET_SCAN_PARAMETERS: u16 = 0x000B;
pub const OCF_LE_SET_SCAN_ENABLE: u16 = 0x000C;
pub const OCF_LE_CREATE_CONNECTION: u16 = 0x000D;
pub const OCF_LE_CREATE_CONNECTION_CANCEL: u16 = 0x000E;
pub const OCF_LE_READ_WHITE_LIST_SIZE: u16 = 0x000F;
pub const OCF_LE_CLEAR_WHITE_LIST: u16 = 0x0010;
pub const OCF_LE_ADD_DEVICE_TO_WHITE_LIST: u16 = 0x0011;
pub const OCF_LE_REMOVE_DEVICE_FROM_WHITE_LIST: u16 = 0x0012;
pub const OCF_LE_CONNECTION_UPDATE: u16 = 0x0013;
pub const OCF_LE_SET_HOST_CHANNEL_CLASSIFICATION: u16 = 0x0014;
pub const OCF_LE_READ_CHANNEL_MAP: u16 = 0x0015;
pub const OCF_LE_READ_REMOTE_USED_FEATURES: u16 = 0x0016;
pub const OCF_LE_ENCRYPT: u16 = 0x0017;
pub const OCF_LE_RAND: u16 = 0x0018;
pub const OCF_LE_START_ENCRYPTION: u16 = 0x0019;
pub const OCF_LE_LONG_TERM_KEY_REQUEST_REPLY: u16 = 0x001A;
pub const OCF_LE_LONG_TERM_KEY_REQUEST_NEGATIVE_REPLY: u16 = 0x001B;
pub const OCF_LE_READ_SUPPORTED_STATES: u16 = 0x001C;
pub const OCF_LE_RECEIVER_TEST: u16 = 0x001D;
pub const OCF_LE_TRANSMITTER_TEST: u16 = 0x001E;
pub const OCF_LE_TEST_END: u16 = 0x001F;

// HCI events
pub const EVT_INQUIRY_COMPLETE: u8 = 0x01;
pub const EVT_INQUIRY_RESULT: u8 = 0x02;
pub const EVT_CONN_COMPLETE: u8 = 0x03;
pub const EVT_CONN_REQUEST: u8 = 0x04;
pub const EVT_DISCONN_COMPLETE: u8 = 0x05;
pub const EVT_AUTH_COMPLETE: u8 = 0x06;
pub const EVT_REMOTE_NAME_REQ_COMPLETE: u8 = 0x07;
pub const EVT_ENCRYPTION_CHANGE: u8 = 0x08;
pub const EVT_CHANGE_CONN_LINK_KEY_COMPLETE: u8 = 0x09;
pub const EVT_MASTER_LINK_KEY_COMPLETE: u8 = 0x0A;
pub const EVT_READ_REMOTE_FEATURES_COMPLETE: u8 = 0x0B;
pub const EVT_READ_REMOTE_VERSION_COMPLETE: u8 = 0x0C;
pub const EVT_QOS_SETUP_COMPLETE: u8 = 0x0D;
pub const EVT_CMD_COMPLETE: u8 = 0x0E;
pub const EVT_CMD_STATUS: u8 = 0x0F;
pub const EVT_HARDWARE_ERROR: u8 = 0x10;
pub const EVT_FLUSH_OCCURRED: u8 = 0x11;
pub const EVT_ROLE_CHANGE: u8 = 0x12;
pub const EVT_NUM_COMPLETED_PACKETS: u8 = 0x13;
pub const EVT_MODE_CHANGE: u8 = 0x14;
pub const EVT_RETURN_LINK_KEYS: u8 = 0x15;
pub const EVT_PIN_CODE_REQUEST: u8 = 0x16;
pub const EVT_LINK_KEY_REQUEST: u8 = 0x17;
pub const EVT_LINK_KEY_NOTIFICATION: u8 = 0x18;
pub const EVT_LOOPBACK_COMMAND: u8 = 0x19;
pub const EVT_DATA_BUFFER_OVERFLOW: u8 = 0x1A;
pub const EVT_MAX_SLOTS_CHANGE: u8 = 0x1B;
pub const EVT_READ_CLOCK_OFFSET_COMPLETE: u8 = 0x1C;
pub const EVT_CONN_PACKET_TYPE_CHANGED: u8 = 0x1D;
pub const EVT_QOS_VIOLATION: u8 = 0x1E;
pub const EVT_PAGE_SCAN_REP_MODE_CHANGE: u8 = 0x20;
pub const EVT_FLOW_SPECIFICATION_COMPLETE: u8 = 0x21;
pub const EVT_INQUIRY_RESULT_WITH_RSSI: u8 = 0x22;
pub const EVT_READ_REMOTE_EXT_FEATURES_COMPLETE: u8 = 0x23;
pub const EVT_SYNC_CONN_COMPLETE: u8 = 0x2C;
pub const EVT_SYNC_CONN_CHANGED: u8 = 0x2D;
pub const EVT_SNIFF_SUBRATING: u8 = 0x2E;
pub const EVT_EXTENDED_INQUIRY_RESULT: u8 = 0x2F;
pub const EVT_ENCRYPTION_KEY_REFRESH_COMPLETE: u8 = 0x30;
pub const EVT_IO_CAPABILITY_REQUEST: u8 = 0x31;
pub const EVT_IO_CAPABILITY_RESPONSE: u8 = 0x32;
pub const EVT_USER_CONFIRMATION_REQUEST: u8 = 0x33;
pub const EVT_USER_PASSKEY_REQUEST: u8 = 0x34;
pub const EVT_REMOTE_OOB_DATA_REQUEST: u8 = 0x35;
pub const EVT_SIMPLE_PAIRING_COMPLETE: u8 = 0x36;
pub const EVT_LINK_SUPERVISION_TIMEOUT_CHANGED: u8 = 0x38;
pub const EVT_ENHANCED_FLUSH_COMPLETE: u8 = 0x39;
pub const EVT_USER_PASSKEY_NOTIFICATION: u8 = 0x3B;
pub const EVT_KEYPRESS_NOTIFICATION: u8 = 0x3C;
pub const EVT_REMOTE_HOST_FEATURES_NOTIFICATION: u8 = 0x3D;
pub const EVT_LE_META_EVENT: u8 = 0x3E;
pub const EVT_PHYSICAL_LINK_COMPLETE: u8 = 0x40;
pub const EVT_CHANNEL_SELECTED: u8 = 0x41;
pub const EVT_DISCONNECTION_PHYSICAL_LINK_COMPLETE: u8 = 0x42;
pub const EVT_NUMBER_OF_COMPLETED_DATA_BLOCKS: u8 = 0x48;
pub const EVT_VENDOR: u8 = 0xFF;

// LE Meta event subevents
pub const EVT_LE_CONN_COMPLETE: u8 = 0x01;
pub const EVT_LE_ADVERTISING_REPORT: u8 = 0x02;
pub const EVT_LE_CONN_UPDATE_COMPLETE: u8 = 0x03;
pub const EVT_LE_READ_REMOTE_USED_FEATURES_COMPLETE: u8 = 0x04;
pub const EVT_LE_LONG_TERM_KEY_REQUEST: u8 = 0x05;
pub const EVT_LE_REMOTE_CONNECTION_PARAMETER_REQUEST: u8 = 0x06;

// Variable-record strides inside event bodies
pub const INQUIRY_RESULT_STRIDE: usize = 14;
pub const RETURN_LINK_KEYS_STRIDE: usize = 22;
pub const NUM_COMPLETED_PACKETS_STRIDE: usize = 4;

// Link key length in stored-link-key records
pub const LINK_KEY_SIZE: usize = 16;

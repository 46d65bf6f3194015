//! HCI socket transport for Linux
//!
//! A thin wrapper around the raw `AF_BLUETOOTH` socket interface, used to
//! exercise the codec against a real controller. Command dispatch, retry and
//! flow control belong to a host stack above this layer.

use crate::error::HciError;
use crate::packet::{AclDataPacket, CommandPacket, EventPacket, HciPacket, ScoDataPacket};
use log::{debug, trace};
use std::os::unix::io::{AsRawFd, RawFd};
use std::time::Duration;

// Bluetooth socket constants
const AF_BLUETOOTH: i32 = 31;
const BTPROTO_HCI: i32 = 1;
const HCI_CHANNEL_RAW: i32 = 0;

// Largest frame the transport can hand us: packet type byte plus an ACL
// header and a maximal ACL payload
const MAX_FRAME_SIZE: usize = 1 + 4 + 65535;

/// A raw HCI socket bound to one controller
#[derive(Debug)]
pub struct HciSocket {
    fd: RawFd,
}

// The sockaddr_hci structure used by bind()
#[repr(C)]
struct SockaddrHci {
    hci_family: libc::sa_family_t,
    hci_dev: u16,
    hci_channel: u16,
}

impl HciSocket {
    /// Opens a raw HCI socket bound to the given device (0 for the first)
    pub fn open(dev_id: u16) -> Result<Self, HciError> {
        let fd = unsafe { libc::socket(AF_BLUETOOTH, libc::SOCK_RAW, BTPROTO_HCI) };

        if fd < 0 {
            return Err(HciError::SocketError(std::io::Error::last_os_error()));
        }

        let addr = SockaddrHci {
            hci_family: AF_BLUETOOTH as libc::sa_family_t,
            hci_dev: dev_id,
            hci_channel: HCI_CHANNEL_RAW as u16,
        };

        let result = unsafe {
            libc::bind(
                fd,
                &addr as *const _ as *const libc::sockaddr,
                std::mem::size_of::<SockaddrHci>() as libc::socklen_t,
            )
        };

        if result < 0 {
            unsafe { libc::close(fd) };
            return Err(HciError::BindError(std::io::Error::last_os_error()));
        }

        debug!("opened HCI socket for hci{}", dev_id);
        Ok(HciSocket { fd })
    }

    /// Sends a complete framed packet to the controller
    pub fn send_packet(&self, packet: &HciPacket) -> Result<(), HciError> {
        let bytes = packet.to_bytes()?;
        trace!("-> {:02X?}", bytes);

        match unsafe {
            libc::write(self.fd, bytes.as_ptr() as *const libc::c_void, bytes.len())
        } {
            -1 => Err(HciError::SendError(std::io::Error::last_os_error())),
            _ => Ok(()),
        }
    }

    /// Sends an HCI command
    pub fn send_command(&self, command: &CommandPacket) -> Result<(), HciError> {
        debug!("sending command {}", command.opcode);
        self.send_packet(&HciPacket::Command(command.clone()))
    }

    /// Sends ACL data
    pub fn send_acl(&self, acl: &AclDataPacket) -> Result<(), HciError> {
        self.send_packet(&HciPacket::AclData(acl.clone()))
    }

    /// Sends SCO data
    pub fn send_sco(&self, sco: &ScoDataPacket) -> Result<(), HciError> {
        self.send_packet(&HciPacket::ScoData(sco.clone()))
    }

    /// Reads and decodes the next packet from the controller
    pub fn read_packet(&self) -> Result<HciPacket, HciError> {
        let mut buffer = vec![0u8; MAX_FRAME_SIZE];

        let bytes_read = unsafe {
            libc::read(
                self.fd,
                buffer.as_mut_ptr() as *mut libc::c_void,
                buffer.len(),
            )
        };

        if bytes_read < 0 {
            return Err(HciError::ReceiveError(std::io::Error::last_os_error()));
        }

        trace!("<- {:02X?}", &buffer[..bytes_read as usize]);
        HciPacket::parse(&buffer[..bytes_read as usize])
    }

    /// Reads the next packet, expecting an event
    pub fn read_event(&self) -> Result<EventPacket, HciError> {
        match self.read_packet()? {
            HciPacket::Event(event) => Ok(event),
            _ => Err(HciError::InvalidPacketFormat),
        }
    }

    /// Reads an event, giving up after `timeout` if nothing arrives
    pub fn read_event_timeout(&self, timeout: Option<Duration>) -> Result<EventPacket, HciError> {
        if let Some(timeout) = timeout {
            let mut read_fds: libc::fd_set = unsafe { std::mem::zeroed() };
            unsafe {
                libc::FD_ZERO(&mut read_fds);
                libc::FD_SET(self.fd, &mut read_fds);
            }

            let mut timeout_val = libc::timeval {
                tv_sec: timeout.as_secs() as libc::time_t,
                tv_usec: timeout.subsec_micros() as libc::suseconds_t,
            };

            let result = unsafe {
                libc::select(
                    self.fd + 1,
                    &mut read_fds,
                    std::ptr::null_mut(),
                    std::ptr::null_mut(),
                    &mut timeout_val,
                )
            };

            if result < 0 {
                return Err(HciError::ReceiveError(std::io::Error::last_os_error()));
            }

            if result == 0 {
                return Err(HciError::ReceiveError(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    "Timed out waiting for HCI event",
                )));
            }
        }

        self.read_event()
    }
}

impl AsRawFd for HciSocket {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for HciSocket {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.fd);
        }
    }
}

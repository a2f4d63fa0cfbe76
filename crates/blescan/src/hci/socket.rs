//! Raw HCI socket transport (Linux only)
//!
//! Binds an `AF_BLUETOOTH`/`BTPROTO_HCI` socket to one controller on the raw
//! channel, so the host stack keeps running alongside the scanner.

use crate::error::HciError;
use crate::hci::command::HciCommand;
use crate::hci::constants::{HCI_FILTER, SOL_HCI};
use crate::hci::transport::{EventFilter, HciTransport};
use log::{debug, trace};
use std::io;
use std::mem;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};
use std::time::Duration;

const BTPROTO_HCI: libc::c_int = 1;
const HCI_CHANNEL_RAW: libc::c_ushort = 0;

#[repr(C)]
struct SockaddrHci {
    hci_family: libc::sa_family_t,
    hci_dev: libc::c_ushort,
    hci_channel: libc::c_ushort,
}

// struct hci_filter
#[repr(C)]
struct HciFilter {
    type_mask: u32,
    event_mask: [u32; 2],
    opcode: u16,
}

/// A raw HCI socket bound to one controller
///
/// The descriptor is released on [`close`](HciTransport::close) or drop,
/// whichever comes first.
#[derive(Debug)]
pub struct HciSocket {
    fd: Option<OwnedFd>,
    dev_id: u16,
    timeout: Option<Duration>,
}

impl HciSocket {
    /// Opens a raw HCI socket bound to `dev_id` (0 for hci0)
    pub fn open(dev_id: u16) -> Result<Self, HciError> {
        let raw = unsafe {
            libc::socket(
                libc::AF_BLUETOOTH,
                libc::SOCK_RAW | libc::SOCK_CLOEXEC,
                BTPROTO_HCI,
            )
        };
        if raw < 0 {
            return Err(HciError::SocketError(io::Error::last_os_error()));
        }
        let fd = unsafe { OwnedFd::from_raw_fd(raw) };

        let addr = SockaddrHci {
            hci_family: libc::AF_BLUETOOTH as libc::sa_family_t,
            hci_dev: dev_id,
            hci_channel: HCI_CHANNEL_RAW,
        };
        let bound = unsafe {
            libc::bind(
                fd.as_raw_fd(),
                (&addr as *const SockaddrHci).cast(),
                mem::size_of::<SockaddrHci>() as libc::socklen_t,
            )
        };
        if bound < 0 {
            // fd is dropped (and closed) on return
            return Err(HciError::BindError(io::Error::last_os_error()));
        }

        debug!("Opened HCI socket for hci{}", dev_id);
        Ok(Self {
            fd: Some(fd),
            dev_id,
            timeout: None,
        })
    }

    pub fn dev_id(&self) -> u16 {
        self.dev_id
    }

    /// Bound every [`receive`](HciTransport::receive) by `timeout`; `None` blocks forever
    pub fn set_receive_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    fn raw_fd(&self) -> Result<RawFd, HciError> {
        self.fd
            .as_ref()
            .map(AsRawFd::as_raw_fd)
            .ok_or(HciError::InvalidState("closed"))
    }

    /// Wait for input with poll(2); a signal counts as a timeout so the
    /// caller gets to check its cancel flag
    fn wait_readable(fd: RawFd, timeout: Duration) -> Result<(), HciError> {
        let mut pollfd = libc::pollfd {
            fd,
            events: libc::POLLIN,
            revents: 0,
        };
        let millis = libc::c_int::try_from(timeout.as_millis()).unwrap_or(libc::c_int::MAX);

        match unsafe { libc::poll(&mut pollfd, 1, millis) } {
            0 => Err(HciError::Timeout),
            n if n < 0 => {
                let err = io::Error::last_os_error();
                match err.kind() {
                    io::ErrorKind::Interrupted => Err(HciError::Timeout),
                    _ => Err(HciError::ReceiveError(err)),
                }
            }
            _ => Ok(()),
        }
    }
}

impl HciTransport for HciSocket {
    fn send_command(&mut self, command: &HciCommand) -> Result<(), HciError> {
        let fd = self.raw_fd()?;
        let packet = command.to_packet();
        trace!("HCI command {} ({} param bytes)", command.opcode(), command.params().len());

        let written = unsafe { libc::write(fd, packet.as_ptr().cast(), packet.len()) };
        usize::try_from(written).map_err(|_| HciError::SendError(io::Error::last_os_error()))?;
        Ok(())
    }

    fn set_event_filter(&mut self, filter: &EventFilter) -> Result<(), HciError> {
        let fd = self.raw_fd()?;
        let raw = HciFilter {
            type_mask: filter.type_mask,
            event_mask: filter.event_mask,
            opcode: filter.opcode,
        };

        let result = unsafe {
            libc::setsockopt(
                fd,
                SOL_HCI,
                HCI_FILTER,
                (&raw as *const HciFilter).cast(),
                mem::size_of::<HciFilter>() as libc::socklen_t,
            )
        };
        if result < 0 {
            return Err(HciError::FilterError(io::Error::last_os_error()));
        }
        Ok(())
    }

    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>, HciError> {
        let fd = self.raw_fd()?;
        if let Some(timeout) = self.timeout {
            Self::wait_readable(fd, timeout)?;
        }

        let mut buffer = vec![0u8; max_len];
        let read = unsafe { libc::read(fd, buffer.as_mut_ptr().cast(), buffer.len()) };
        let len = usize::try_from(read)
            .map_err(|_| HciError::ReceiveError(io::Error::last_os_error()))?;

        buffer.truncate(len);
        Ok(buffer)
    }

    fn close(&mut self) -> Result<(), HciError> {
        if self.fd.take().is_some() {
            debug!("Closed HCI socket for hci{}", self.dev_id);
        }
        Ok(())
    }
}

impl AsRawFd for HciSocket {
    /// Returns -1 once the socket is closed
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_ref().map_or(-1, AsRawFd::as_raw_fd)
    }
}

use std::default::Default;

use crate::ForciblyClosed;

const DEFAULT_SEND_BUFFER_SIZE: usize = 1024 * 1024;
const DEFAULT_RECV_BUFFER_SIZE: usize = 1024 * 1024;

/// Contains Config properties which will be used by a platform backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocketConfig {
    /// Requested kernel send buffer size in bytes. 0 keeps the OS default.
    pub send_buffer_size: usize,
    /// Requested kernel receive buffer size in bytes. 0 keeps the OS default.
    pub recv_buffer_size: usize,
    /// Whether a "connection forcibly closed" error should be swallowed
    /// instead of tearing the connection down. Connectionless sockets see
    /// these when a previous datagram bounced off a closed port.
    pub ignore_forcibly_closed: bool,
}

impl SocketConfig {
    pub fn new(send_buffer_size: usize, recv_buffer_size: usize) -> Self {
        Self {
            send_buffer_size,
            recv_buffer_size,
            ..Self::default()
        }
    }

    pub(crate) fn forcibly_closed_disposition(&self) -> ForciblyClosed {
        if self.ignore_forcibly_closed {
            ForciblyClosed::Ignore
        } else {
            ForciblyClosed::Disconnect
        }
    }
}

impl Default for SocketConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
            ignore_forcibly_closed: true,
        }
    }
}

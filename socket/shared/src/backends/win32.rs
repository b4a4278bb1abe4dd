use std::{io, mem};

use log::{debug, info, warn};
use windows::Win32::Networking::WinSock::{
    closesocket, ioctlsocket, setsockopt, WSACleanup, WSAGetLastError, WSAStartup, FIONBIO,
    SOCKET, SOL_SOCKET, SO_RCVBUF, SO_SNDBUF, WSADATA, WSAECONNRESET, WSAEWOULDBLOCK,
};

use crate::{ErrorCode, ForciblyClosed, SocketConfig, SocketError, SocketFd, SocketPlatform};

/// WinSock 2.2
const WINSOCK_VERSION: u16 = 0x0202;

/// Socket backend for Windows, driving WinSock through `WSAStartup`/`WSACleanup`.
#[derive(Clone, Debug, Default)]
pub struct WindowsPlatform {
    config: SocketConfig,
}

impl WindowsPlatform {
    pub fn new(config: SocketConfig) -> Self {
        Self { config }
    }

    fn socket(socket_fd: SocketFd) -> SOCKET {
        SOCKET(socket_fd.as_raw() as usize)
    }

    fn set_buffer_size(socket: SOCKET, option: i32, size: usize) -> bool {
        let value: i32 = i32::try_from(size).unwrap_or(i32::MAX);
        let bytes = value.to_ne_bytes();
        unsafe { setsockopt(socket, SOL_SOCKET, option, Some(&bytes)) == 0 }
    }

    fn os_error(&self) -> (ErrorCode, String) {
        let code = self.last_network_error();
        (code, self.network_error_desc(code))
    }
}

impl SocketPlatform for WindowsPlatform {
    fn config(&self) -> &SocketConfig {
        &self.config
    }

    fn initialize_network_layer(&self) -> Result<(), SocketError> {
        let mut data: WSADATA = unsafe { mem::zeroed() };
        let code = unsafe { WSAStartup(WINSOCK_VERSION, &mut data) };
        if code != 0 {
            let description = self.network_error_desc(code);
            warn!("Failed to initialize network layer ({}:{})", code, description);
            return Err(SocketError::Initialize { code, description });
        }

        info!("Network layer initialized");
        Ok(())
    }

    fn shutdown_network_layer(&self) -> Result<(), SocketError> {
        if unsafe { WSACleanup() } != 0 {
            let (code, description) = self.os_error();
            warn!("Failed to shut down network layer ({}:{})", code, description);
            return Err(SocketError::Shutdown { code, description });
        }

        info!("Network layer shut down");
        Ok(())
    }

    fn set_socket_non_blocking(&self, socket_fd: SocketFd) -> Result<(), SocketError> {
        if !socket_fd.is_valid() {
            return Err(SocketError::InvalidHandle {
                operation: "set_socket_non_blocking",
            });
        }

        let mut non_blocking: u32 = 1;
        if unsafe { ioctlsocket(Self::socket(socket_fd), FIONBIO, &mut non_blocking) } != 0 {
            let (code, description) = self.os_error();
            warn!(
                "Failed to set non-blocking for socket ({}:{})",
                code, description
            );
            return Err(SocketError::SetNonBlocking { code, description });
        }

        Ok(())
    }

    fn set_socket_buffer_sizes(
        &self,
        socket_fd: SocketFd,
        send_size: usize,
        recv_size: usize,
    ) -> Result<(), SocketError> {
        if !socket_fd.is_valid() {
            return Err(SocketError::InvalidHandle {
                operation: "set_socket_buffer_sizes",
            });
        }

        let socket = Self::socket(socket_fd);
        let send_ok = send_size == 0 || Self::set_buffer_size(socket, SO_SNDBUF, send_size);
        let recv_ok = send_ok && (recv_size == 0 || Self::set_buffer_size(socket, SO_RCVBUF, recv_size));
        if !recv_ok {
            let (code, description) = self.os_error();
            warn!(
                "Failed to set socket buffer sizes, send: {} recv: {} ({}:{})",
                send_size, recv_size, code, description
            );
            return Err(SocketError::SetBufferSizes {
                send_size,
                recv_size,
                code,
                description,
            });
        }

        Ok(())
    }

    fn close_socket(&self, socket_fd: SocketFd) {
        if !socket_fd.is_valid() {
            debug!("Ignoring close of invalid socket handle");
            return;
        }

        if unsafe { closesocket(Self::socket(socket_fd)) } != 0 {
            let (code, description) = self.os_error();
            debug!("Close of {:?} reported ({}:{})", socket_fd, code, description);
        }
    }

    fn last_network_error(&self) -> ErrorCode {
        unsafe { WSAGetLastError() }.0
    }

    fn error_is_would_block(&self, error_code: ErrorCode) -> bool {
        error_code == WSAEWOULDBLOCK.0
    }

    fn error_is_forcibly_closed(&self, error_code: ErrorCode) -> Option<ForciblyClosed> {
        // 10054: on UDP sockets this surfaces after an ICMP port unreachable
        if error_code == WSAECONNRESET.0 {
            Some(self.config.forcibly_closed_disposition())
        } else {
            None
        }
    }

    fn network_error_desc(&self, error_code: ErrorCode) -> String {
        // FormatMessageW into a buffer owned by this call
        let mut description = io::Error::from_raw_os_error(error_code).to_string();
        if let Some(index) = description.find(" (os error") {
            description.truncate(index);
        }
        description
    }
}

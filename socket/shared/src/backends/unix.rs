use std::{cell::RefCell, ffi::CStr, io, mem};

use libc::{c_char, c_int, c_void, socklen_t};
use log::{debug, info, warn};

use crate::{ErrorCode, ForciblyClosed, SocketConfig, SocketError, SocketFd, SocketPlatform};

const ERROR_DESC_BUFFER_SIZE: usize = 1024;

thread_local! {
    static ERROR_DESC_BUFFER: RefCell<[c_char; ERROR_DESC_BUFFER_SIZE]> =
        const { RefCell::new([0; ERROR_DESC_BUFFER_SIZE]) };
}

/// Socket backend for POSIX-like systems. The network layer needs no
/// process-wide setup here, so initialize and shutdown only log.
#[derive(Clone, Debug, Default)]
pub struct UnixPlatform {
    config: SocketConfig,
}

impl UnixPlatform {
    pub fn new(config: SocketConfig) -> Self {
        Self { config }
    }

    fn set_buffer_size(fd: c_int, option: c_int, size: usize) -> bool {
        let value: c_int = c_int::try_from(size).unwrap_or(c_int::MAX);
        let result = unsafe {
            libc::setsockopt(
                fd,
                libc::SOL_SOCKET,
                option,
                &value as *const c_int as *const c_void,
                mem::size_of::<c_int>() as socklen_t,
            )
        };
        result == 0
    }
}

impl SocketPlatform for UnixPlatform {
    fn config(&self) -> &SocketConfig {
        &self.config
    }

    fn initialize_network_layer(&self) -> Result<(), SocketError> {
        info!("Network layer initialized");
        Ok(())
    }

    fn shutdown_network_layer(&self) -> Result<(), SocketError> {
        info!("Network layer shut down");
        Ok(())
    }

    fn set_socket_non_blocking(&self, socket_fd: SocketFd) -> Result<(), SocketError> {
        if !socket_fd.is_valid() {
            return Err(SocketError::InvalidHandle {
                operation: "set_socket_non_blocking",
            });
        }

        let fd = socket_fd.as_raw();
        let flags = unsafe { libc::fcntl(fd, libc::F_GETFL) };
        if flags < 0 || unsafe { libc::fcntl(fd, libc::F_SETFL, flags | libc::O_NONBLOCK) } < 0 {
            let code = self.last_network_error();
            let description = self.network_error_desc(code);
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

        let fd = socket_fd.as_raw();
        let send_ok = send_size == 0 || Self::set_buffer_size(fd, libc::SO_SNDBUF, send_size);
        let recv_ok = send_ok && (recv_size == 0 || Self::set_buffer_size(fd, libc::SO_RCVBUF, recv_size));
        if !recv_ok {
            let code = self.last_network_error();
            let description = self.network_error_desc(code);
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

        if unsafe { libc::close(socket_fd.as_raw()) } < 0 {
            let code = self.last_network_error();
            debug!(
                "Close of {:?} reported ({}:{})",
                socket_fd,
                code,
                self.network_error_desc(code)
            );
        }
    }

    fn last_network_error(&self) -> ErrorCode {
        io::Error::last_os_error().raw_os_error().unwrap_or(0)
    }

    fn error_is_would_block(&self, error_code: ErrorCode) -> bool {
        error_code == libc::EWOULDBLOCK || error_code == libc::EAGAIN
    }

    fn error_is_forcibly_closed(&self, error_code: ErrorCode) -> Option<ForciblyClosed> {
        if error_code == libc::ECONNRESET {
            Some(self.config.forcibly_closed_disposition())
        } else {
            None
        }
    }

    fn network_error_desc(&self, error_code: ErrorCode) -> String {
        ERROR_DESC_BUFFER.with(|buffer| {
            let mut buffer = buffer.borrow_mut();
            buffer[0] = 0;
            // XSI strerror_r: always NUL terminates within the buffer on success
            let result =
                unsafe { libc::strerror_r(error_code, buffer.as_mut_ptr(), buffer.len()) };
            if result != 0 && buffer[0] == 0 {
                return format!("Unknown error {}", error_code);
            }
            let text = unsafe { CStr::from_ptr(buffer.as_ptr()) };
            text.to_string_lossy().into_owned()
        })
    }
}

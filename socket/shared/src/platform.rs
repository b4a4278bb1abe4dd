use crate::{ErrorCode, NetworkErrorKind, SocketConfig, SocketError, ForciblyClosed, SocketFd};

/// The OS socket surface a transport is allowed to touch.
///
/// Each target OS provides one implementation; `NativePlatform` names the one
/// selected for the current build. All calls are synchronous and none wait on
/// I/O. Socket operations are only valid between a successful
/// `initialize_network_layer` and the matching `shutdown_network_layer`.
pub trait SocketPlatform: Send + Sync {
    /// The configuration this backend was built with
    fn config(&self) -> &SocketConfig;

    /// Performs any one-time OS initialization needed before sockets can be used.
    fn initialize_network_layer(&self) -> Result<(), SocketError>;

    /// Releases whatever `initialize_network_layer` acquired.
    fn shutdown_network_layer(&self) -> Result<(), SocketError>;

    /// Switches the socket to non-blocking I/O. On failure the socket's mode is unspecified.
    fn set_socket_non_blocking(&self, socket_fd: SocketFd) -> Result<(), SocketError>;

    /// Requests kernel send/receive buffer sizes. A size of 0 leaves that buffer untouched.
    fn set_socket_buffer_sizes(
        &self,
        socket_fd: SocketFd,
        send_size: usize,
        recv_size: usize,
    ) -> Result<(), SocketError>;

    /// Best-effort release of the OS socket. The handle must not be used afterwards.
    fn close_socket(&self, socket_fd: SocketFd);

    /// The most recent network error raised on the calling thread.
    fn last_network_error(&self) -> ErrorCode;

    fn error_is_would_block(&self, error_code: ErrorCode) -> bool;

    /// `None` if `error_code` is not a forced close, otherwise what the
    /// caller should do about it.
    fn error_is_forcibly_closed(&self, error_code: ErrorCode) -> Option<ForciblyClosed>;

    /// Human readable description of `error_code`, safe to call from any thread.
    fn network_error_desc(&self, error_code: ErrorCode) -> String;

    /// Applies the configured buffer sizes and non-blocking mode, in that order.
    fn configure_socket(&self, socket_fd: SocketFd) -> Result<(), SocketError> {
        let config = self.config();
        self.set_socket_buffer_sizes(socket_fd, config.send_buffer_size, config.recv_buffer_size)?;
        self.set_socket_non_blocking(socket_fd)
    }

    fn classify_error(&self, error_code: ErrorCode) -> NetworkErrorKind {
        if self.error_is_would_block(error_code) {
            return NetworkErrorKind::WouldBlock;
        }
        match self.error_is_forcibly_closed(error_code) {
            Some(disposition) => NetworkErrorKind::ForciblyClosed(disposition),
            None => NetworkErrorKind::Other,
        }
    }
}

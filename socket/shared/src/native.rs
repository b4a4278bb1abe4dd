//! Free functions over the build target's `NativePlatform` with a default
//! `SocketConfig`, for transports that do not carry a platform value around.

use crate::{ErrorCode, ForciblyClosed, NativePlatform, SocketError, SocketFd, SocketPlatform};

fn native() -> NativePlatform {
    NativePlatform::default()
}

pub fn initialize_network_layer() -> Result<(), SocketError> {
    native().initialize_network_layer()
}

pub fn shutdown_network_layer() -> Result<(), SocketError> {
    native().shutdown_network_layer()
}

pub fn set_socket_non_blocking(socket_fd: SocketFd) -> Result<(), SocketError> {
    native().set_socket_non_blocking(socket_fd)
}

pub fn close_socket(socket_fd: SocketFd) {
    native().close_socket(socket_fd)
}

pub fn last_network_error() -> ErrorCode {
    native().last_network_error()
}

pub fn error_is_would_block(error_code: ErrorCode) -> bool {
    native().error_is_would_block(error_code)
}

pub fn error_is_forcibly_closed(error_code: ErrorCode) -> Option<ForciblyClosed> {
    native().error_is_forcibly_closed(error_code)
}

pub fn network_error_desc(error_code: ErrorCode) -> String {
    native().network_error_desc(error_code)
}

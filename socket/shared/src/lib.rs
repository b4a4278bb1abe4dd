//! # Skiff Socket Shared
//! Platform socket primitives shared by skiff transports: network layer
//! lifecycle, non-blocking configuration, and OS error translation.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

mod backends;
mod error;
mod native;
mod network_layer;
mod platform;
mod socket_config;
mod socket_fd;

pub use backends::NativePlatform;
cfg_if! {
    if #[cfg(unix)] {
        pub use backends::UnixPlatform;
    } else if #[cfg(windows)] {
        pub use backends::WindowsPlatform;
    }
}
pub use error::{ErrorCode, ForciblyClosed, NetworkErrorKind, SocketError};
pub use native::{
    close_socket, error_is_forcibly_closed, error_is_would_block, initialize_network_layer,
    last_network_error, network_error_desc, set_socket_non_blocking, shutdown_network_layer,
};
pub use network_layer::NetworkLayer;
pub use platform::SocketPlatform;
pub use socket_config::SocketConfig;
pub use socket_fd::{RawSocketHandle, SocketFd};

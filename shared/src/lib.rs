//! # Skiff Shared
//! Bitset views and the platform socket layer, shared between the protocol
//! and transport halves of a skiff connection.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

cfg_if! {
    if #[cfg(not(any(unix, windows)))]
    {
        compile_error!("'skiff_shared' requires a unix or windows target.");
    }
}

pub use skiff_socket_shared::{
    close_socket, error_is_forcibly_closed, error_is_would_block, initialize_network_layer,
    last_network_error, network_error_desc, set_socket_non_blocking, shutdown_network_layer,
    ErrorCode, ForciblyClosed, NativePlatform, NetworkErrorKind, NetworkLayer, RawSocketHandle,
    SocketConfig, SocketError, SocketFd, SocketPlatform,
};

mod bitset;
mod types;

pub use bitset::{
    bitset_view::BitsetView,
    error::BitsetError,
    fixed_size_bitset::{words_for_bits, FixedSizeBitset},
    Bitset,
};
pub use types::BitIndex;

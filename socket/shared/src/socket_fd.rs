use std::fmt;

cfg_if! {
    if #[cfg(unix)] {
        use std::os::fd::{IntoRawFd, OwnedFd};

        /// The OS representation of a socket handle
        pub type RawSocketHandle = std::os::fd::RawFd;

        const INVALID_RAW_HANDLE: RawSocketHandle = -1;
    } else if #[cfg(windows)] {
        use std::os::windows::io::{IntoRawSocket, OwnedSocket};

        /// The OS representation of a socket handle
        pub type RawSocketHandle = std::os::windows::io::RawSocket;

        const INVALID_RAW_HANDLE: RawSocketHandle = !0;
    }
}

/// Opaque, non-owning socket handle.
///
/// Copying a `SocketFd` does not duplicate the OS resource; whoever calls
/// `close_socket` on it must not use any copy afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SocketFd(RawSocketHandle);

impl SocketFd {
    pub const INVALID: SocketFd = SocketFd(INVALID_RAW_HANDLE);

    pub const fn from_raw(raw: RawSocketHandle) -> Self {
        Self(raw)
    }

    pub const fn as_raw(&self) -> RawSocketHandle {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 != INVALID_RAW_HANDLE
    }
}

impl Default for SocketFd {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Debug for SocketFd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "SocketFd({})", self.0)
        } else {
            write!(f, "SocketFd(INVALID)")
        }
    }
}

cfg_if! {
    if #[cfg(unix)] {
        /// Releases ownership of the descriptor; it must later be handed to `close_socket`.
        impl From<OwnedFd> for SocketFd {
            fn from(fd: OwnedFd) -> Self {
                Self(fd.into_raw_fd())
            }
        }
    } else if #[cfg(windows)] {
        /// Releases ownership of the socket; it must later be handed to `close_socket`.
        impl From<OwnedSocket> for SocketFd {
            fn from(socket: OwnedSocket) -> Self {
                Self(socket.into_raw_socket())
            }
        }
    }
}

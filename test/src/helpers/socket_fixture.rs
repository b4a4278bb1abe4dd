/// Loopback sockets and logging setup for platform tests

use std::net::{SocketAddr, UdpSocket};

use skiff_socket_shared::SocketFd;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        use std::os::fd::AsRawFd;

        /// Borrows the raw handle of `socket`; ownership stays with `socket`.
        pub fn udp_socket_fd(socket: &UdpSocket) -> SocketFd {
            SocketFd::from_raw(socket.as_raw_fd())
        }

        /// A handle number no test ever opens
        pub fn unopened_socket_fd() -> SocketFd {
            SocketFd::from_raw(i32::MAX - 1)
        }
    } else if #[cfg(windows)] {
        use std::os::windows::io::AsRawSocket;

        /// Borrows the raw handle of `socket`; ownership stays with `socket`.
        pub fn udp_socket_fd(socket: &UdpSocket) -> SocketFd {
            SocketFd::from_raw(socket.as_raw_socket())
        }

        /// A handle number no test ever opens
        pub fn unopened_socket_fd() -> SocketFd {
            SocketFd::from_raw(0x7FFF_FFF0)
        }
    }
}

/// Installs `env_logger` at debug level; safe to call from every test.
pub fn init_test_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

/// A UDP socket bound to an ephemeral loopback port
pub struct LoopbackSocket {
    pub socket: UdpSocket,
    pub address: SocketAddr,
}

impl LoopbackSocket {
    pub fn bind() -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").expect("Failed to bind loopback UDP socket");
        let address = socket
            .local_addr()
            .expect("Failed to read loopback UDP socket address");
        Self { socket, address }
    }

    /// Borrowed handle of the inner socket
    pub fn fd(&self) -> SocketFd {
        udp_socket_fd(&self.socket)
    }

    /// Gives up ownership of the OS socket; the caller must `close_socket` it.
    pub fn into_fd(self) -> SocketFd {
        cfg_if::cfg_if! {
            if #[cfg(unix)] {
                SocketFd::from(std::os::fd::OwnedFd::from(self.socket))
            } else {
                SocketFd::from(std::os::windows::io::OwnedSocket::from(self.socket))
            }
        }
    }
}

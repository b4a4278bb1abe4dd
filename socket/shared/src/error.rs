use thiserror::Error;

/// OS-level network error code (`errno` on unix, `WSAGetLastError` on windows)
pub type ErrorCode = i32;

/// Errors that can occur while configuring or tearing down OS sockets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocketError {
    /// One-time network layer initialization failed
    #[error("Failed to initialize network layer ({code}:{description})")]
    Initialize { code: ErrorCode, description: String },

    /// Network layer shutdown failed
    #[error("Failed to shut down network layer ({code}:{description})")]
    Shutdown { code: ErrorCode, description: String },

    /// The OS refused to switch the socket into non-blocking mode
    #[error("Failed to set non-blocking for socket ({code}:{description})")]
    SetNonBlocking { code: ErrorCode, description: String },

    /// The OS refused the requested send/receive buffer sizes
    #[error("Failed to set socket buffer sizes, send: {send_size} recv: {recv_size} ({code}:{description})")]
    SetBufferSizes {
        send_size: usize,
        recv_size: usize,
        code: ErrorCode,
        description: String,
    },

    /// An operation was handed `SocketFd::INVALID`
    #[error("Invalid socket handle passed to {operation}")]
    InvalidHandle { operation: &'static str },
}

impl SocketError {
    /// The OS error code carried by this error, if any
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            SocketError::Initialize { code, .. }
            | SocketError::Shutdown { code, .. }
            | SocketError::SetNonBlocking { code, .. }
            | SocketError::SetBufferSizes { code, .. } => Some(*code),
            SocketError::InvalidHandle { .. } => None,
        }
    }
}

/// What a transport should do with an error that means the peer forcibly
/// closed the connection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForciblyClosed {
    /// Swallow the error and keep polling
    Ignore,
    /// Tear the connection down
    Disconnect,
}

/// Coarse classification of an OS network error code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetworkErrorKind {
    /// The non-blocking call should be retried later, never logged as a failure
    WouldBlock,
    /// The peer forcibly closed the connection
    ForciblyClosed(ForciblyClosed),
    /// Any other hard failure
    Other,
}

impl NetworkErrorKind {
    pub fn is_would_block(&self) -> bool {
        matches!(self, NetworkErrorKind::WouldBlock)
    }

    pub fn should_disconnect(&self) -> bool {
        matches!(
            self,
            NetworkErrorKind::ForciblyClosed(ForciblyClosed::Disconnect)
        )
    }
}

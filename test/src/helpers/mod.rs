pub mod assertions;
pub mod recording_bitset;
pub mod socket_fixture;

pub use recording_bitset::RecordingBitset;
pub use socket_fixture::{init_test_logger, unopened_socket_fd, udp_socket_fd, LoopbackSocket};

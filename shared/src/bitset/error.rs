use thiserror::Error;

use crate::BitIndex;

/// Errors that can occur when addressing bits through a `BitsetView`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitsetError {
    /// A local index at or past the view's bit count was used
    #[error("Bit index {index} is outside of the view's {count} valid bits")]
    IndexOutOfRange { index: BitIndex, count: BitIndex },

    /// The requested window does not fit inside the underlying bitset
    #[error("Bitset view of {count} bits starting at {start_offset} exceeds the underlying bitset's {capacity} bits")]
    WindowOutOfRange {
        start_offset: BitIndex,
        count: BitIndex,
        capacity: BitIndex,
    },
}

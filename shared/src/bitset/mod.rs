pub mod bitset_view;
pub mod error;
pub mod fixed_size_bitset;

use crate::BitIndex;

/// A fixed number of bits addressable by a zero based index.
///
/// `BitsetView` implements this too, so a window into a bitset can be handed
/// to anything that expects a whole one.
pub trait Bitset {
    /// Sets the bit at `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.valid_bit_count()`.
    fn set_bit(&mut self, index: BitIndex, value: bool);

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.valid_bit_count()`.
    fn get_bit(&self, index: BitIndex) -> bool;

    /// Number of addressable bits
    fn valid_bit_count(&self) -> BitIndex;

    /// Returns whether any addressable bit is set
    fn any_set(&self) -> bool {
        self.any_set_in_range(0, self.valid_bit_count())
    }

    /// Returns whether any bit in `[start, start + count)` is set, reading no
    /// bit outside that range. Word backed bitsets should override the
    /// per-bit default.
    fn any_set_in_range(&self, start: BitIndex, count: BitIndex) -> bool {
        (start..start + count).any(|index| self.get_bit(index))
    }
}

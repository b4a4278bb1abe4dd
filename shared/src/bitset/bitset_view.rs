use crate::{BitIndex, Bitset, BitsetError};

/// A window of `count` bits into a larger `Bitset`, starting at `start_offset`.
///
/// Local index `i` addresses bit `start_offset + i` of the underlying bitset.
/// The view borrows the bitset mutably and owns no bit storage of its own.
///
/// Out-of-window indices panic in every build profile rather than reaching
/// bits the view does not cover; use `try_set_bit`/`try_get_bit` to get a
/// `BitsetError` instead.
///
/// # Examples
/// ```
/// use skiff_shared::{words_for_bits, Bitset, BitsetView, FixedSizeBitset};
///
/// let mut bits: FixedSizeBitset<64, { words_for_bits(64) }> = FixedSizeBitset::new();
/// {
///     let mut view = BitsetView::new(&mut bits, 8, 8);
///     view.set_bit(0, true);
///     assert!(view.any_set());
///     assert_eq!(view.valid_bit_count(), 8);
/// }
/// assert!(bits.get_bit(8));
/// ```
pub struct BitsetView<'a, B: Bitset + ?Sized> {
    bitset: &'a mut B,
    start_offset: BitIndex,
    count: BitIndex,
}

impl<'a, B: Bitset + ?Sized> BitsetView<'a, B> {
    /// Creates a view, failing if `[start_offset, start_offset + count)` does
    /// not fit inside `bitset`.
    pub fn try_new(
        bitset: &'a mut B,
        start_offset: BitIndex,
        count: BitIndex,
    ) -> Result<Self, BitsetError> {
        let capacity = bitset.valid_bit_count();
        match start_offset.checked_add(count) {
            Some(end) if end <= capacity => Ok(Self {
                bitset,
                start_offset,
                count,
            }),
            _ => Err(BitsetError::WindowOutOfRange {
                start_offset,
                count,
                capacity,
            }),
        }
    }

    /// Creates a view.
    ///
    /// # Panics
    ///
    /// Panics if the window does not fit inside `bitset`.
    /// For non-panicking version, use `try_new`.
    pub fn new(bitset: &'a mut B, start_offset: BitIndex, count: BitIndex) -> Self {
        match Self::try_new(bitset, start_offset, count) {
            Ok(view) => view,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn start_offset(&self) -> BitIndex {
        self.start_offset
    }

    pub fn try_set_bit(&mut self, index: BitIndex, value: bool) -> Result<(), BitsetError> {
        let underlying = self.underlying_index(index)?;
        self.bitset.set_bit(underlying, value);
        Ok(())
    }

    pub fn try_get_bit(&self, index: BitIndex) -> Result<bool, BitsetError> {
        let underlying = self.underlying_index(index)?;
        Ok(self.bitset.get_bit(underlying))
    }

    fn underlying_index(&self, index: BitIndex) -> Result<BitIndex, BitsetError> {
        if index >= self.count {
            return Err(BitsetError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        Ok(self.start_offset + index)
    }
}

impl<'a, B: Bitset + ?Sized> Bitset for BitsetView<'a, B> {
    fn set_bit(&mut self, index: BitIndex, value: bool) {
        if let Err(err) = self.try_set_bit(index, value) {
            panic!("{}", err);
        }
    }

    fn get_bit(&self, index: BitIndex) -> bool {
        match self.try_get_bit(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    fn valid_bit_count(&self) -> BitIndex {
        self.count
    }

    fn any_set(&self) -> bool {
        self.bitset.any_set_in_range(self.start_offset, self.count)
    }

    fn any_set_in_range(&self, start: BitIndex, count: BitIndex) -> bool {
        match start.checked_add(count) {
            Some(end) if end <= self.count => {
                self.bitset.any_set_in_range(self.start_offset + start, count)
            }
            _ => panic!(
                "bit range of {} bits starting at {} exceeds the view's {} valid bits",
                count, start, self.count
            ),
        }
    }
}

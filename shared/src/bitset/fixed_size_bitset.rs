use crate::{BitIndex, Bitset};

const WORD_BITS: usize = u64::BITS as usize;

/// Computes the number of `u64` words needed to store `bits` bits.
pub const fn words_for_bits(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Bitset with a compile-time capacity of `BITS`, stored in `WORDS` `u64` words.
///
/// Use `WORDS = words_for_bits(BITS)`. Bits past `BITS` in the last word are
/// never set.
///
/// # Examples
/// ```
/// use skiff_shared::{words_for_bits, Bitset, FixedSizeBitset};
///
/// let mut bits: FixedSizeBitset<96, { words_for_bits(96) }> = FixedSizeBitset::new();
/// bits.set_bit(70, true);
/// assert!(bits.get_bit(70));
/// assert!(bits.any_set_in_range(64, 32));
/// assert!(!bits.any_set_in_range(0, 64));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSizeBitset<const BITS: usize, const WORDS: usize> {
    words: [u64; WORDS],
}

impl<const BITS: usize, const WORDS: usize> FixedSizeBitset<BITS, WORDS> {
    const fn validate() {
        assert!(BITS > 0, "FixedSizeBitset capacity must be > 0");
        assert!(
            BITS <= BitIndex::MAX as usize,
            "FixedSizeBitset capacity must fit in a BitIndex"
        );
        assert!(WORDS == words_for_bits(BITS), "WORDS must equal words_for_bits(BITS)");
    }

    /// Creates a bitset with every bit clear.
    pub const fn new() -> Self {
        Self::validate();
        Self {
            words: [0u64; WORDS],
        }
    }

    /// Clears every bit.
    pub fn clear_all(&mut self) {
        self.words = [0u64; WORDS];
    }

    /// Number of set bits
    pub fn count_set(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    #[inline]
    fn locate(index: BitIndex) -> (usize, u64) {
        let index = index as usize;
        assert!(
            index < BITS,
            "bit index {} out of range for FixedSizeBitset of {} bits",
            index,
            BITS
        );
        (index / WORD_BITS, 1u64 << (index % WORD_BITS))
    }
}

impl<const BITS: usize, const WORDS: usize> Default for FixedSizeBitset<BITS, WORDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const BITS: usize, const WORDS: usize> Bitset for FixedSizeBitset<BITS, WORDS> {
    fn set_bit(&mut self, index: BitIndex, value: bool) {
        let (word, mask) = Self::locate(index);
        if value {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
    }

    fn get_bit(&self, index: BitIndex) -> bool {
        let (word, mask) = Self::locate(index);
        self.words[word] & mask != 0
    }

    fn valid_bit_count(&self) -> BitIndex {
        BITS as BitIndex
    }

    fn any_set(&self) -> bool {
        self.words.iter().any(|word| *word != 0)
    }

    fn any_set_in_range(&self, start: BitIndex, count: BitIndex) -> bool {
        if count == 0 {
            return false;
        }

        let start = start as usize;
        let end = start + count as usize;
        assert!(
            end <= BITS,
            "bit range [{}, {}) out of range for FixedSizeBitset of {} bits",
            start,
            end,
            BITS
        );

        let first_word = start / WORD_BITS;
        let last_word = (end - 1) / WORD_BITS;
        for word_index in first_word..=last_word {
            let mut mask = u64::MAX;
            if word_index == first_word {
                mask &= u64::MAX << (start % WORD_BITS);
            }
            if word_index == last_word {
                // 1..=64 bits of this word are in range
                let end_bit = end - word_index * WORD_BITS;
                if end_bit < WORD_BITS {
                    mask &= (1u64 << end_bit) - 1;
                }
            }
            if self.words[word_index] & mask != 0 {
                return true;
            }
        }
        false
    }
}

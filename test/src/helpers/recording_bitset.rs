/// Vec-backed bitset that remembers every index it was asked to read or write.
/// Uses the per-bit `any_set_in_range` default, so tests can see exactly
/// which bits a scan touched.

use std::cell::RefCell;

use skiff_shared::{BitIndex, Bitset};

pub struct RecordingBitset {
    bits: Vec<bool>,
    reads: RefCell<Vec<BitIndex>>,
    writes: Vec<BitIndex>,
}

impl RecordingBitset {
    pub fn new(bit_count: BitIndex) -> Self {
        Self {
            bits: vec![false; bit_count as usize],
            reads: RefCell::new(Vec::new()),
            writes: Vec::new(),
        }
    }

    /// Sets a bit without recording it, for arranging test state
    pub fn preset(&mut self, index: BitIndex, value: bool) {
        self.bits[index as usize] = value;
    }

    /// Reads a bit without recording it, for checking test state
    pub fn peek(&self, index: BitIndex) -> bool {
        self.bits[index as usize]
    }

    pub fn reads(&self) -> Vec<BitIndex> {
        self.reads.borrow().clone()
    }

    pub fn writes(&self) -> &[BitIndex] {
        &self.writes
    }

    pub fn clear_log(&mut self) {
        self.reads.borrow_mut().clear();
        self.writes.clear();
    }
}

impl Bitset for RecordingBitset {
    fn set_bit(&mut self, index: BitIndex, value: bool) {
        self.writes.push(index);
        self.bits[index as usize] = value;
    }

    fn get_bit(&self, index: BitIndex) -> bool {
        self.reads.borrow_mut().push(index);
        self.bits[index as usize]
    }

    fn valid_bit_count(&self) -> BitIndex {
        self.bits.len() as BitIndex
    }
}

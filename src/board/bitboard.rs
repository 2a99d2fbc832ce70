//! Bitboard implementation sized to the board

/// One bit per cell, backed by as many u64 words as the board needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: Vec<u64>,
    cells: usize,
}

impl Bitboard {
    /// Create an empty bitboard covering `cells` cells
    pub fn new(cells: usize) -> Self {
        Self {
            bits: vec![0; cells.div_ceil(64)],
            cells,
        }
    }

    /// Number of cells covered
    #[inline]
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Set the bit at a cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Clear the bit at a cell index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Check if the bit at a cell index is set
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set cell indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter<'_> {
        BitboardIter {
            bits: &self.bits,
            cells: self.cells,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter<'a> {
    bits: &'a [u64],
    cells: usize,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.bits.len() {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;

        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        if idx < self.cells {
            Some(idx)
        } else {
            None
        }
    }
}

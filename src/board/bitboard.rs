//! Bitboard implementation for occupancy tracking

use serde::{Deserialize, Serialize};

use super::MAX_CELLS;

const WORDS: usize = 6;

/// One bit per cell, row-major.
/// Uses 6 x u64 to cover the largest board (6 * 64 = 384 >= 361)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Set the bit at a cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < MAX_CELLS);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Check if the bit at a cell index is set
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < MAX_CELLS);
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

    /// Union of two bitboards
    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut bits = self.bits;
        for (word, theirs) in bits.iter_mut().zip(other.bits) {
            *word |= theirs;
        }
        Bitboard { bits }
    }

    /// Iterate over set cell indices
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
            current_word: self.bits[0],
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;

        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        Some(idx)
    }
}

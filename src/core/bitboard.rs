//! Module containing the `BitBoard` structure, a u64 where each bit marks one square.
//!
//! The board itself is stored square-by-square (see [`Board`]); `BitBoard`s only appear at
//! the edges, e.g. for occupancy summaries and the bitboard visualizer.
//!
//! [`Board`]: ../../board/struct.Board.html

use super::sq::SQ;

use std::fmt;
use std::ops::*;

/// A `BitBoard` is simply a 64 bit long integer where each bit maps to a specific square.
/// Bit 0 is A1, bit 63 is H8.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct BitBoard(pub u64);

impl_bit_ops!(BitBoard, u64);

const BORDER: &str = "+---+---+---+---+---+---+---+---+";

impl BitBoard {
    /// A `BitBoard` with no bits set.
    pub const EMPTY: BitBoard = BitBoard(0);

    /// Returns if the square's bit is set.
    #[inline(always)]
    pub fn contains(self, sq: SQ) -> bool {
        self.0 & (1u64 << sq.0) != 0
    }

    /// Sets the square's bit.
    #[inline(always)]
    pub fn set(&mut self, sq: SQ) {
        self.0 |= 1u64 << sq.0;
    }

    /// Returns the number of set bits.
    #[inline(always)]
    pub fn count_bits(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns if no bits are set.
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Renders the `BitBoard` as an 8x8 grid, rank 8 first, marking set bits with `*`.
    pub fn grid(self) -> String {
        let mut s = String::with_capacity(38 * 17);
        s.push_str(BORDER);
        s.push('\n');
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let mark = if self.contains(SQ(rank * 8 + file)) { '*' } else { ' ' };
                s.push_str("| ");
                s.push(mark);
                s.push(' ');
            }
            s.push_str("|\n");
            s.push_str(BORDER);
            s.push('\n');
        }
        s
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid())
    }
}

//! Contains the representation of a chessboard's square.
//!
//! Internally, a `SQ` is just a u8. The number of a `SQ` maps to the following
//! squares of a chessboard:
//!
//! ```md,ignore
//! 8 | 56 57 58 59 60 61 62 63
//! 7 | 48 49 50 51 52 53 54 55
//! 6 | 40 41 42 43 44 45 46 47
//! 5 | 32 33 34 35 36 37 38 39
//! 4 | 24 25 26 27 28 29 30 31
//! 3 | 16 17 18 19 20 21 22 23
//! 2 | 8  9  10 11 12 13 14 15
//! 1 | 0  1  2  3  4  5  6  7
//!   -------------------------
//!      a  b  c  d  e  f  g  h
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mailbox_perft::SQ;
//!
//! let g2 = SQ(14);
//! assert_eq!(g2.rank(), 1);
//! assert_eq!(g2.file(), 6);
//! assert_eq!(g2.to_string(), "g2");
//! ```

use super::masks::*;
use super::*;

use std::fmt;

/// Represents a singular square of a chessboard.
#[derive(Copy, Clone, Default, Hash, PartialEq, PartialOrd, Eq, Ord, Debug)]
#[repr(transparent)]
pub struct SQ(pub u8);

impl SQ {
    /// Returns if a `SQ` is within the legal bounds of a square,
    /// which is inclusively between 0 - 63.
    #[inline(always)]
    pub const fn is_okay(self) -> bool {
        self.0 < 64
    }

    /// Returns the rank index (0 for rank 1) of the square.
    #[inline(always)]
    pub fn rank(self) -> u8 {
        rank_idx_of_sq(self.0)
    }

    /// Returns the file index (0 for file A) of the square.
    #[inline(always)]
    pub fn file(self) -> u8 {
        file_idx_of_sq(self.0)
    }

    /// Returns the square reached by stepping `(rank, file)`, or `None` if the step
    /// leaves the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<SQ> {
        sq_from_coords(self.file() as i8 + d_file, self.rank() as i8 + d_rank)
    }

    /// Returns the square index as a usize, for indexing arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the upper case name of the square, e.g. `E2`.
    pub fn upper_name(self) -> String {
        SQ_NAMES[self.index()].to_uppercase()
    }

    /// Iterates over all 64 squares, from A1 to H8.
    pub fn all() -> impl Iterator<Item = SQ> {
        (0..SQ_CNT as u8).map(SQ)
    }

    pub const A1: SQ = SQ(0);
    pub const B1: SQ = SQ(1);
    pub const C1: SQ = SQ(2);
    pub const D1: SQ = SQ(3);
    pub const E1: SQ = SQ(4);
    pub const F1: SQ = SQ(5);
    pub const G1: SQ = SQ(6);
    pub const H1: SQ = SQ(7);
    pub const A2: SQ = SQ(8);
    pub const B2: SQ = SQ(9);
    pub const C2: SQ = SQ(10);
    pub const D2: SQ = SQ(11);
    pub const E2: SQ = SQ(12);
    pub const F2: SQ = SQ(13);
    pub const G2: SQ = SQ(14);
    pub const H2: SQ = SQ(15);
    pub const A3: SQ = SQ(16);
    pub const B3: SQ = SQ(17);
    pub const C3: SQ = SQ(18);
    pub const D3: SQ = SQ(19);
    pub const E3: SQ = SQ(20);
    pub const F3: SQ = SQ(21);
    pub const G3: SQ = SQ(22);
    pub const H3: SQ = SQ(23);
    pub const A4: SQ = SQ(24);
    pub const B4: SQ = SQ(25);
    pub const C4: SQ = SQ(26);
    pub const D4: SQ = SQ(27);
    pub const E4: SQ = SQ(28);
    pub const F4: SQ = SQ(29);
    pub const G4: SQ = SQ(30);
    pub const H4: SQ = SQ(31);
    pub const A5: SQ = SQ(32);
    pub const B5: SQ = SQ(33);
    pub const C5: SQ = SQ(34);
    pub const D5: SQ = SQ(35);
    pub const E5: SQ = SQ(36);
    pub const F5: SQ = SQ(37);
    pub const G5: SQ = SQ(38);
    pub const H5: SQ = SQ(39);
    pub const A6: SQ = SQ(40);
    pub const B6: SQ = SQ(41);
    pub const C6: SQ = SQ(42);
    pub const D6: SQ = SQ(43);
    pub const E6: SQ = SQ(44);
    pub const F6: SQ = SQ(45);
    pub const G6: SQ = SQ(46);
    pub const H6: SQ = SQ(47);
    pub const A7: SQ = SQ(48);
    pub const B7: SQ = SQ(49);
    pub const C7: SQ = SQ(50);
    pub const D7: SQ = SQ(51);
    pub const E7: SQ = SQ(52);
    pub const F7: SQ = SQ(53);
    pub const G7: SQ = SQ(54);
    pub const H7: SQ = SQ(55);
    pub const A8: SQ = SQ(56);
    pub const B8: SQ = SQ(57);
    pub const C8: SQ = SQ(58);
    pub const D8: SQ = SQ(59);
    pub const E8: SQ = SQ(60);
    pub const F8: SQ = SQ(61);
    pub const G8: SQ = SQ(62);
    pub const H8: SQ = SQ(63);
}

impl fmt::Display for SQ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_okay() {
            f.pad(SQ_NAMES[self.index()])
        } else {
            f.pad("--")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_on_board() {
        assert_eq!(SQ::A1.offset(1, 1), Some(SQ::B2));
        assert_eq!(SQ::A1.offset(0, -1), None);
        assert_eq!(SQ::H8.offset(1, 0), None);
        assert_eq!(SQ::H4.offset(0, 1), None);
        assert_eq!(SQ::E4.offset(-2, 1), Some(SQ::F2));
    }

    #[test]
    fn names() {
        assert_eq!(SQ::A1.to_string(), "a1");
        assert_eq!(SQ::H8.to_string(), "h8");
        assert_eq!(SQ::E2.upper_name(), "E2");
        assert_eq!(SQ(64).to_string(), "--");
        assert_eq!(SQ::all().count(), 64);
    }
}

//! Contains the `MoveList` structure, akin to a `Vec<Move>` but kept on the stack.
//!
//! A `MoveList` holds a maximum of 256 moves. No reachable chess position has been found
//! with more than 218 legal moves, so pushing past capacity is treated as a bug.

use super::masks::MAX_MOVES;
use super::piece_move::Move;

use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};
use std::slice;

/// The list of pseudo-legal moves for a position. Think of it as a faster `Vec<Move>`, as all
/// the data is stored on the stack rather than the heap.
#[derive(Clone)]
pub struct MoveList {
    inner: [Move; MAX_MOVES],
    len: usize,
}

impl Default for MoveList {
    #[inline]
    fn default() -> Self {
        MoveList {
            inner: [Move::null(); MAX_MOVES],
            len: 0,
        }
    }
}

impl MoveList {
    /// Adds a `Move` to the end of the list.
    ///
    /// # Panics
    ///
    /// If the list is already at capacity.
    #[inline(always)]
    pub fn push(&mut self, mv: Move) {
        assert!(self.len < MAX_MOVES, "move list overflow");
        self.inner[self.len] = mv;
        self.len += 1;
    }

    /// Returns the number of moves inside the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the moves as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[Move] {
        &self.inner[..self.len]
    }

    /// Copies the moves into a `Vec<Move>`.
    pub fn vec(&self) -> Vec<Move> {
        self.as_slice().to_vec()
    }
}

impl Deref for MoveList {
    type Target = [Move];

    #[inline]
    fn deref(&self) -> &[Move] {
        self.as_slice()
    }
}

impl DerefMut for MoveList {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Move] {
        &mut self.inner[..self.len]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        let mut list = MoveList::default();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

impl From<MoveList> for Vec<Move> {
    fn from(list: MoveList) -> Self {
        list.vec()
    }
}

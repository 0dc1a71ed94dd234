//! The ledger, an ordered history of the moves applied along the current search path.
//!
//! The board holds no en-passant state of its own. Instead the move generator asks the
//! ledger whether the move just played was a pawn double push.

use crate::core::piece_move::Move;
use crate::core::sq::SQ;
use crate::core::*;

use std::slice;

/// Moves applied so far, oldest first.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Ledger {
    moves: Vec<Move>,
}

impl Ledger {
    /// Creates an empty ledger expecting to hold about `depth` moves.
    pub fn with_depth(depth: usize) -> Ledger {
        Ledger {
            moves: Vec::with_capacity(depth),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// The most recently applied move.
    #[inline]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// If the last move was a pawn of `player`'s opponent advancing two ranks from its
    /// starting rank, returns the square that pawn landed on.
    pub fn double_pushed_by_opponent(&self, player: Player) -> Option<SQ> {
        let them = !player;
        let last = self.last()?;
        if last.piece == Piece::make(them, PieceType::P)
            && last.src.rank() == them.pawn_start_rank()
            && last.dst.rank() == them.double_push_rank()
            && last.src.file() == last.dst.file()
        {
            Some(last.dst)
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

//! Fatal board invariants.
//!
//! A violated invariant means the move generator or a caller handed the board something it
//! could never have produced. There is no recovery: the error is logged, the offending board
//! is dumped to stderr, and the run panics.

use super::Board;
use crate::core::piece_move::Move;
use crate::core::sq::SQ;
use crate::core::*;

use thiserror::Error;
use tracing::error;

/// The ways a board or move can be structurally broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("unable to find the {player} king")]
    MissingKing { player: Player },
    #[error("incorrect number of kings for {player}: {count}")]
    KingCount { player: Player, count: u8 },
    #[error("pawn on first or last rank: {sq}")]
    PawnOnBackRank { sq: SQ },
    #[error("{mv} sets both a promotion and an en-passant victim")]
    PromotionAndEnPassant { mv: Move },
    #[error("{mv} found {found} on its origin square")]
    SourceMismatch { mv: Move, found: Piece },
    #[error("{mv} found {found} on its destination square")]
    CaptureMismatch { mv: Move, found: Piece },
    #[error("{mv} expects an opposing pawn to take en passant, found {found}")]
    EnPassantVictim { mv: Move, found: Piece },
    #[error("{mv} leaves its own king in check")]
    LeftInCheck { mv: Move },
    #[error("undoing {mv} did not restore the board")]
    UndoMismatch { mv: Move },
}

/// Reports a violated invariant and panics.
///
/// The error is logged through `tracing`, and the board's grid written to stderr before the
/// panic so the position survives a `panic = "abort"` profile.
#[cold]
#[inline(never)]
pub fn violated(board: &Board, err: InvariantError) -> ! {
    error!(error = %err, placement = %board.placement_string(), "board invariant violated");
    eprintln!("{}", board.pretty_string());
    panic!("{}", err);
}

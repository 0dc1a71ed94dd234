//! Check detection.
//!
//! Attacks are found by looking outward from the attacked square: a knight jump away for
//! knights, one diagonal step toward the attacker's side for pawns, and along each ray up to
//! the first occupied square for sliders. Kings are never considered as attackers.

use super::invariant::{violated, InvariantError};
use super::Board;
use crate::core::lookup::LOOKUP;
use crate::core::piece_move::Move;
use crate::core::sq::SQ;
use crate::core::*;

/// Returns if `player`'s king is attacked by the opponent.
///
/// # Panics
///
/// If `player` has no king on the board.
///
/// # Examples
///
/// ```
/// use mailbox_perft::{Board, Player};
/// use mailbox_perft::board::attacks::in_check;
///
/// assert!(!in_check(&Board::start_pos(), Player::White));
/// ```
pub fn in_check(board: &Board, player: Player) -> bool {
    match board.king_sq(player) {
        Some(king) => attacked_by(board, king, !player),
        None => violated(board, InvariantError::MissingKing { player }),
    }
}

/// Aborts with [`InvariantError::LeftInCheck`] if `mover`'s king is attacked on `board`,
/// which `mv` has just been applied to.
///
/// [`InvariantError::LeftInCheck`]: ../invariant/enum.InvariantError.html
pub fn confirm_king_safe(board: &Board, mover: Player, mv: &Move) {
    if in_check(board, mover) {
        violated(board, InvariantError::LeftInCheck { mv: *mv });
    }
}

/// Returns if any knight, pawn, bishop, rook, or queen of `attacker` attacks `sq`.
pub fn attacked_by(board: &Board, sq: SQ, attacker: Player) -> bool {
    let knight = Piece::make(attacker, PieceType::N);
    if LOOKUP
        .knight_targets(sq)
        .iter()
        .any(|&from| board.piece_at(from) == knight)
    {
        return true;
    }

    // An attacking pawn stands one rank behind `sq` from the attacker's point of view.
    let pawn = Piece::make(attacker, PieceType::P);
    let toward = -attacker.forward();
    for &d_file in [-1i8, 1].iter() {
        if let Some(from) = sq.offset(toward, d_file) {
            if board.piece_at(from) == pawn {
                return true;
            }
        }
    }

    slider_attacks(board, LOOKUP.orthogonal_rays(sq), attacker, PieceType::slides_orthogonally)
        || slider_attacks(board, LOOKUP.diagonal_rays(sq), attacker, PieceType::slides_diagonally)
}

fn slider_attacks(
    board: &Board,
    rays: &[Vec<SQ>],
    attacker: Player,
    slides: fn(PieceType) -> bool,
) -> bool {
    rays.iter().any(|ray| {
        ray.iter()
            .map(|&s| board.piece_at(s))
            .find(|p| p.is_some())
            .map_or(false, |p| p.is_player(attacker) && slides(p.type_of()))
    })
}

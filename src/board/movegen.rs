//! Pseudo-legal move generation.
//!
//! Moves are generated by scanning the board from A1 to H8 and expanding every piece of the
//! side to move through the tables in [`LOOKUP`]. Generated moves obey piece movement rules,
//! but may leave the mover's own king attacked; the caller filters those out after applying
//! them.
//!
//! For each pawn, moves are produced in the order single push, double push, capture toward
//! file A, capture toward file H, and finally en-passant.
//!
//! [`LOOKUP`]: ../../core/lookup/struct.LOOKUP.html

use super::attacks::in_check;
use super::ledger::Ledger;
use super::Board;
use crate::core::lookup::LOOKUP;
use crate::core::move_list::MoveList;
use crate::core::piece_move::Move;
use crate::core::sq::SQ;
use crate::core::*;

/// Returns every pseudo-legal move of `player`. The ledger decides en-passant eligibility.
pub fn generate(board: &Board, player: Player, ledger: &Ledger) -> MoveList {
    let mut gen = MoveGen {
        board,
        player,
        list: MoveList::default(),
    };
    let ep_victim = ledger.double_pushed_by_opponent(player);

    for (sq, piece) in board.pieces() {
        if !piece.is_player(player) {
            continue;
        }
        match piece.type_of() {
            PieceType::P => gen.pawn(sq, piece, ep_victim),
            PieceType::N => gen.steps(sq, piece, LOOKUP.knight_targets(sq)),
            PieceType::B => gen.slides(sq, piece, LOOKUP.diagonal_rays(sq)),
            PieceType::R => gen.slides(sq, piece, LOOKUP.orthogonal_rays(sq)),
            PieceType::Q => gen.slides(sq, piece, LOOKUP.all_rays(sq)),
            PieceType::K => gen.steps(sq, piece, LOOKUP.king_targets(sq)),
            PieceType::None => {}
        }
    }
    gen.list
}

/// Returns the moves of `player` that do not leave their own king attacked.
///
/// Each pseudo-legal move is applied to a copy of the board, kept if the king is safe, and
/// undone.
pub fn generate_legal(board: &Board, player: Player, ledger: &Ledger) -> MoveList {
    let mut b = *board;
    let moves = generate(board, player, ledger);
    let legal = moves
        .iter()
        .filter(|mv| {
            b.apply_move(mv);
            let legal = !in_check(&b, player);
            b.undo_move(mv);
            legal
        })
        .copied()
        .collect();
    legal
}

struct MoveGen<'a> {
    board: &'a Board,
    player: Player,
    list: MoveList,
}

impl<'a> MoveGen<'a> {
    fn steps(&mut self, src: SQ, piece: Piece, targets: &[SQ]) {
        for &dst in targets {
            let target = self.board.piece_at(dst);
            if !target.is_player(self.player) {
                self.list.push(Move::new(piece, src, dst, target));
            }
        }
    }

    fn slides(&mut self, src: SQ, piece: Piece, rays: &[Vec<SQ>]) {
        for ray in rays {
            for &dst in ray {
                let target = self.board.piece_at(dst);
                if target.is_none() {
                    self.list.push(Move::new(piece, src, dst, target));
                    continue;
                }
                if target.is_opponent_of(self.player) {
                    self.list.push(Move::new(piece, src, dst, target));
                }
                break;
            }
        }
    }

    fn pawn(&mut self, src: SQ, piece: Piece, ep_victim: Option<SQ>) {
        let fwd = self.player.forward();

        if let Some(one) = src.offset(fwd, 0) {
            if self.board.piece_at(one).is_none() {
                self.pawn_to(src, piece, one, Piece::None);
                if src.rank() == self.player.pawn_start_rank() {
                    if let Some(two) = src.offset(2 * fwd, 0) {
                        if self.board.piece_at(two).is_none() {
                            self.list.push(Move::new(piece, src, two, Piece::None));
                        }
                    }
                }
            }
        }

        for &d_file in [-1i8, 1].iter() {
            if let Some(dst) = src.offset(fwd, d_file) {
                let target = self.board.piece_at(dst);
                if target.is_opponent_of(self.player) {
                    self.pawn_to(src, piece, dst, target);
                }
            }
        }

        if let Some(victim_sq) = ep_victim {
            let adjacent = victim_sq.rank() == src.rank()
                && (victim_sq.file() as i8 - src.file() as i8).abs() == 1;
            if !adjacent {
                return;
            }
            let victim = self.board.piece_at(victim_sq);
            if victim != Piece::make(!self.player, PieceType::P) {
                return;
            }
            if let Some(dst) = victim_sq.offset(fwd, 0) {
                if self.board.piece_at(dst).is_none() {
                    self.list.push(Move::en_passant(piece, src, dst, victim, victim_sq));
                }
            }
        }
    }

    /// A single-step pawn move, expanded into the four promotions on the last rank.
    fn pawn_to(&mut self, src: SQ, piece: Piece, dst: SQ, captured: Piece) {
        if dst.rank() == self.player.promotion_rank() {
            for &pt in PROMOTION_TYPES.iter() {
                let promo = Piece::make(self.player, pt);
                self.list.push(Move::promoting(piece, src, dst, captured, promo));
            }
        } else {
            self.list.push(Move::new(piece, src, dst, captured));
        }
    }
}

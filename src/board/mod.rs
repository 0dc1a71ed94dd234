//! This module contains `Board`, the object representing the current state of a chessboard.
//!
//! A `Board` is a plain array of 64 [`Piece`]s, one per square, indexed A1 = 0 through H8 = 63.
//! Moves are applied and undone in place; a `Move` carries enough information to restore the
//! board exactly, so no per-ply state is kept on the board itself.
//!
//! # Examples
//!
//! ```rust
//! use mailbox_perft::{Board, Player};
//! use mailbox_perft::board::ledger::Ledger;
//!
//! let mut board = Board::start_pos();
//! let ledger = Ledger::default();
//! let moves = board.generate_moves(Player::White, &ledger);
//! assert_eq!(moves.len(), 20);
//!
//! let before = board;
//! board.apply_move(&moves[0]);
//! board.undo_move(&moves[0]);
//! assert_eq!(before, board);
//! ```
//!
//! [`Piece`]: ../core/enum.Piece.html

pub mod attacks;
pub mod invariant;
pub mod leaf;
pub mod ledger;
pub mod movegen;
pub mod perft;

use crate::core::bitboard::BitBoard;
use crate::core::masks::*;
use crate::core::move_list::MoveList;
use crate::core::piece_move::Move;
use crate::core::sq::SQ;
use crate::core::*;

use self::invariant::{violated, InvariantError};
use self::ledger::Ledger;

use thiserror::Error;

use std::fmt;

/// Represents possible errors encountered while building a `Board` from a placement string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid placement length: {len}, expected 64")]
    WrongLength { len: usize },
    #[error("unrecognized piece '{piece}' at index {index}")]
    UnrecognizedPiece { piece: char, index: usize },
}

/// Pieces of the back rank in the standard starting position, from file A to H.
const BACK_RANK: [PieceType; FILE_CNT] = [
    PieceType::R,
    PieceType::N,
    PieceType::B,
    PieceType::Q,
    PieceType::K,
    PieceType::B,
    PieceType::N,
    PieceType::R,
];

const GRID_BORDER: &str = "---------------------------------";

/// Represents a chessboard as one `Piece` per square.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Piece; SQ_CNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board: {}", self.placement_string())
    }
}

impl Board {
    /// Constructs a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [Piece::None; SQ_CNT],
        }
    }

    /// Constructs a board in the standard starting position.
    ///
    /// ```
    /// use mailbox_perft::{Board, Piece, SQ};
    ///
    /// let board = Board::start_pos();
    /// assert_eq!(board.piece_at(SQ::E1), Piece::WhiteKing);
    /// assert_eq!(board.count_pieces(), 32);
    /// ```
    pub fn start_pos() -> Board {
        let mut board = Board::empty();
        for (file, &pt) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.squares[file as usize] = Piece::make(Player::White, pt);
            board.squares[(56 + file) as usize] = Piece::make(Player::Black, pt);
            board.squares[(8 + file) as usize] = Piece::WhitePawn;
            board.squares[(48 + file) as usize] = Piece::BlackPawn;
        }
        board
    }

    /// Builds a board from a 64 character placement string, index 0 being A1. White pieces
    /// are upper case, black pieces lower case, and a space is an empty square.
    ///
    /// This is the same encoding as the first 64 characters of a leaf line.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailbox_perft::Board;
    ///
    /// let start = Board::start_pos();
    /// let copy = Board::from_placement(&start.placement_string()).unwrap();
    /// assert_eq!(start, copy);
    /// assert!(Board::from_placement("RNBQKBNR").is_err());
    /// ```
    pub fn from_placement(placement: &str) -> Result<Board, BoardError> {
        let len = placement.chars().count();
        if len != SQ_CNT {
            return Err(BoardError::WrongLength { len });
        }
        let mut board = Board::empty();
        for (index, c) in placement.chars().enumerate() {
            board.squares[index] =
                Piece::from_char(c).ok_or(BoardError::UnrecognizedPiece { piece: c, index })?;
        }
        Ok(board)
    }

    /// Returns the 64 character placement string of the board.
    pub fn placement_string(&self) -> String {
        self.squares.iter().map(|p| p.character()).collect()
    }

    /// Returns the piece on the given square.
    #[inline(always)]
    pub fn piece_at(&self, sq: SQ) -> Piece {
        self.squares[sq.index()]
    }

    /// Places a piece on a square, replacing whatever stood there.
    #[inline(always)]
    pub fn set_piece(&mut self, sq: SQ, piece: Piece) {
        self.squares[sq.index()] = piece;
    }

    /// Empties a square.
    #[inline(always)]
    pub fn clear(&mut self, sq: SQ) {
        self.squares[sq.index()] = Piece::None;
    }

    /// Returns the squares and pieces of the board, A1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (SQ, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .map(|(i, &p)| (SQ(i as u8), p))
    }

    /// Returns the square of the player's king, scanning from A1.
    pub fn king_sq(&self, player: Player) -> Option<SQ> {
        let king = Piece::make(player, PieceType::K);
        self.pieces().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }

    /// Returns the number of pieces on the board.
    pub fn count_pieces(&self) -> u8 {
        self.squares.iter().filter(|p| p.is_some()).count() as u8
    }

    /// Returns the number of pieces of a given player and type.
    pub fn count_piece(&self, player: Player, piece_type: PieceType) -> u8 {
        let piece = Piece::make(player, piece_type);
        self.squares.iter().filter(|&&p| p == piece).count() as u8
    }

    /// Returns the `BitBoard` of occupied squares.
    pub fn occupied(&self) -> BitBoard {
        let mut bb = BitBoard::EMPTY;
        for (sq, _) in self.pieces().filter(|(_, p)| p.is_some()) {
            bb.set(sq);
        }
        bb
    }

    /// Returns if the player's king is attacked. See [`attacks::in_check`].
    ///
    /// [`attacks::in_check`]: attacks/fn.in_check.html
    #[inline]
    pub fn in_check(&self, player: Player) -> bool {
        attacks::in_check(self, player)
    }

    /// Returns every pseudo-legal move of `player`. See [`movegen::generate`].
    ///
    /// [`movegen::generate`]: movegen/fn.generate.html
    #[inline]
    pub fn generate_moves(&self, player: Player, ledger: &Ledger) -> MoveList {
        movegen::generate(self, player, ledger)
    }

    /// Returns the moves of `player` that keep their king unattacked. See
    /// [`movegen::generate_legal`].
    ///
    /// [`movegen::generate_legal`]: movegen/fn.generate_legal.html
    #[inline]
    pub fn legal_moves(&self, player: Player, ledger: &Ledger) -> MoveList {
        movegen::generate_legal(self, player, ledger)
    }

    /// Applies a move to the board.
    ///
    /// # Panics
    ///
    /// The move must have been generated for this exact board. A move that sets both a
    /// promotion and an en-passant victim, whose piece is not on its origin square, whose
    /// recorded capture does not match the destination, or whose en-passant victim is
    /// missing, is an invariant violation and aborts the run.
    pub fn apply_move(&mut self, mv: &Move) {
        if mv.promotion.is_some() && mv.ep_victim.is_some() {
            violated(self, InvariantError::PromotionAndEnPassant { mv: *mv });
        }
        let found = self.piece_at(mv.src);
        if found != mv.piece {
            violated(self, InvariantError::SourceMismatch { mv: *mv, found });
        }

        match (mv.promotion, mv.ep_victim) {
            (_, Some(victim_sq)) => {
                let victim = self.piece_at(victim_sq);
                let expected = mv.piece.player().map(|p| Piece::make(!p, PieceType::P));
                if mv.piece.type_of() != PieceType::P
                    || Some(victim) != expected
                    || victim != mv.captured
                    || self.piece_at(mv.dst).is_some()
                {
                    violated(self, InvariantError::EnPassantVictim { mv: *mv, found: victim });
                }
                self.clear(mv.src);
                self.clear(victim_sq);
                self.set_piece(mv.dst, mv.piece);
            }
            (promotion, None) => {
                let found = self.piece_at(mv.dst);
                if found != mv.captured {
                    violated(self, InvariantError::CaptureMismatch { mv: *mv, found });
                }
                self.clear(mv.src);
                self.set_piece(mv.dst, promotion.unwrap_or(mv.piece));
            }
        }
    }

    /// Undoes a move previously applied with `apply_move`, restoring the board exactly.
    pub fn undo_move(&mut self, mv: &Move) {
        match mv.ep_victim {
            Some(victim_sq) => {
                self.clear(mv.dst);
                self.set_piece(victim_sq, mv.captured);
            }
            None => self.set_piece(mv.dst, mv.captured),
        }
        self.set_piece(mv.src, mv.piece);
    }

    /// Checks the structural soundness of the board: exactly one king per player, and no
    /// pawns on the first or last rank.
    pub fn validate(&self) -> Result<(), InvariantError> {
        for &player in ALL_PLAYERS.iter() {
            let count = self.count_piece(player, PieceType::K);
            if count != 1 {
                return Err(InvariantError::KingCount { player, count });
            }
        }
        for (sq, piece) in self.pieces() {
            if piece.type_of() == PieceType::P && (sq.rank() == 0 || sq.rank() == 7) {
                return Err(InvariantError::PawnOnBackRank { sq });
            }
        }
        Ok(())
    }

    /// Returns a prettified String of the current `Board`, rank 8 first, for easy command
    /// line displaying.
    ///
    /// Capital Letters represent white pieces, while lower case represents black pieces.
    pub fn pretty_string(&self) -> String {
        let cells: Vec<char> = self.squares.iter().map(|p| p.character()).collect();
        grid_string(&cells)
    }
}

/// Renders 64 cells, index 0 being A1, as a bordered grid with rank 8 on top.
///
/// Missing cells render as spaces.
pub fn grid_string(cells: &[char]) -> String {
    let mut s = String::with_capacity((GRID_BORDER.len() + 1) * 17);
    s.push_str(GRID_BORDER);
    s.push('\n');
    for (i, &sq) in SQ_DISPLAY_ORDER.iter().enumerate() {
        s.push_str("| ");
        s.push(cells.get(sq as usize).copied().unwrap_or(' '));
        s.push(' ');
        if i % 8 == 7 {
            s.push_str("|\n");
            s.push_str(GRID_BORDER);
            s.push('\n');
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pos_layout() {
        let b = Board::start_pos();
        assert_eq!(
            b.placement_string(),
            "RNBQKBNRPPPPPPPP                                pppppppprnbqkbnr"
        );
        assert_eq!(b.king_sq(Player::White), Some(SQ::E1));
        assert_eq!(b.king_sq(Player::Black), Some(SQ::E8));
        assert_eq!(b.occupied().count_bits(), 32);
        assert!(b.validate().is_ok());
    }

    #[test]
    fn placement_errors() {
        assert_eq!(
            Board::from_placement("K"),
            Err(BoardError::WrongLength { len: 1 })
        );
        let mut bad: String = " ".repeat(63);
        bad.push('x');
        assert_eq!(
            Board::from_placement(&bad),
            Err(BoardError::UnrecognizedPiece { piece: 'x', index: 63 })
        );
    }

    #[test]
    fn validate_catches_problems() {
        let mut b = Board::start_pos();
        b.clear(SQ::E8);
        assert_eq!(
            b.validate(),
            Err(InvariantError::KingCount { player: Player::Black, count: 0 })
        );
        let mut b = Board::start_pos();
        b.set_piece(SQ::A1, Piece::BlackPawn);
        assert_eq!(b.validate(), Err(InvariantError::PawnOnBackRank { sq: SQ::A1 }));
    }

    #[test]
    fn pretty_grid() {
        let s = Board::start_pos().pretty_string();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], GRID_BORDER);
        assert_eq!(lines[1], "| r | n | b | q | k | b | n | r |");
        assert_eq!(lines[15], "| R | N | B | Q | K | B | N | R |");
    }

    #[test]
    fn apply_undo_promotion() {
        let mut b = Board::empty();
        b.set_piece(SQ::B7, Piece::WhitePawn);
        b.set_piece(SQ::A8, Piece::BlackRook);
        let before = b;
        let mv = Move::promoting(
            Piece::WhitePawn,
            SQ::B7,
            SQ::A8,
            Piece::BlackRook,
            Piece::WhiteQueen,
        );
        b.apply_move(&mv);
        assert_eq!(b.piece_at(SQ::A8), Piece::WhiteQueen);
        assert!(b.piece_at(SQ::B7).is_none());
        b.undo_move(&mv);
        assert_eq!(b, before);
    }

    #[test]
    #[should_panic]
    fn apply_wrong_source_panics() {
        let mut b = Board::start_pos();
        let mv = Move::new(Piece::WhiteKnight, SQ::E2, SQ::E4, Piece::None);
        b.apply_move(&mv);
    }
}

//! A mailbox chess move generator, validated by perft.
//!
//! The board is a plain array of 64 squares. Moves are generated pseudo-legally, applied and
//! undone in place, and filtered for legality after the fact by asking whether the mover's
//! king is left attacked. Counting the leaves of that game tree to a fixed depth (perft)
//! against published reference numbers is how the generator is validated.
//!
//! Castling is not implemented, and kings never count as attackers.
//!
//! # Examples
//!
//! Counting the leaves of the standard starting position:
//!
//! ```
//! use mailbox_perft::{Board, Player};
//! use mailbox_perft::board::perft::perft;
//!
//! let board = Board::start_pos();
//! assert_eq!(perft(&board, Player::White, 2), 400);
//! ```
//!
//! Applying and undoing moves:
//!
//! ```
//! use mailbox_perft::{Board, Player};
//! use mailbox_perft::board::ledger::Ledger;
//!
//! let mut board = Board::start_pos();
//! let list = board.generate_moves(Player::White, &Ledger::default());
//!
//! for mv in list.iter() {
//!     board.apply_move(mv);
//!     println!("{}", board.placement_string());
//!     board.undo_move(mv);
//! }
//! assert_eq!(board, Board::start_pos());
//! ```
//!
//! Test positions are built from 64 character placement strings, A1 first:
//!
//! ```
//! use mailbox_perft::Board;
//!
//! let placement = format!("{}K{}k{}", " ".repeat(4), " ".repeat(55), " ".repeat(3));
//! let board = Board::from_placement(&placement).unwrap();
//! assert_eq!(board.count_pieces(), 2);
//! ```

pub mod board;
pub mod config;
pub mod core;
pub mod logging;
pub mod tools;

#[doc(no_inline)]
pub use crate::board::Board;
#[doc(no_inline)]
pub use crate::core::bitboard::BitBoard;
#[doc(no_inline)]
pub use crate::core::move_list::MoveList;
#[doc(no_inline)]
pub use crate::core::piece_move::Move;
#[doc(no_inline)]
pub use crate::core::sq::SQ;
#[doc(no_inline)]
pub use crate::core::{Piece, PieceType, Player};

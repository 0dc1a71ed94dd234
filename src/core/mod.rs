//! Contains the components supporting the creation of a chessboard. This includes `SQ`,
//! `BitBoard`, `Player`, `PieceType`, `Piece`, the `Move` and `MoveList` structures, and the
//! static lookup tables used by move generation.

#[macro_use]
mod macros;

pub mod bitboard;
pub mod lookup;
pub mod masks;
pub mod move_list;
pub mod piece_move;
pub mod sq;

use self::sq::SQ;

use std::fmt;
use std::ops::Not;

/// Array of all real piece types, in increasing order of their discriminant.
pub const ALL_PIECE_TYPES: [PieceType; masks::PIECE_TYPE_CNT] = [
    PieceType::P,
    PieceType::N,
    PieceType::B,
    PieceType::R,
    PieceType::Q,
    PieceType::K,
];

/// The piece types a pawn may promote to, in the order promotions are generated.
pub const PROMOTION_TYPES: [PieceType; 4] =
    [PieceType::N, PieceType::B, PieceType::R, PieceType::Q];

/// Array of both players, indexed by their enum value.
pub const ALL_PLAYERS: [Player; masks::PLAYER_CNT] = [Player::White, Player::Black];

/// Enum to represent the Players White & Black.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Rank step of a pawn push, +1 for White and -1 for Black.
    #[inline(always)]
    pub fn forward(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// The rank index pawns of this player start on.
    #[inline]
    pub fn pawn_start_rank(self) -> u8 {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }

    /// The rank index pawns of this player promote on.
    #[inline]
    pub fn promotion_rank(self) -> u8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }

    /// The rank index a pawn of this player lands on after a double push.
    #[inline]
    pub fn double_push_rank(self) -> u8 {
        match self {
            Player::White => 3,
            Player::Black => 4,
        }
    }

    /// Upper case name, as used by the textual move dumps.
    pub fn shout(self) -> &'static str {
        match self {
            Player::White => "WHITE",
            Player::Black => "BLACK",
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline(always)]
    fn not(self) -> Self::Output {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            Player::White => "White",
            Player::Black => "Black",
        })
    }
}

/// All possible Types of Pieces on a chessboard.
///
/// For a representation of pieces considering color as well, see [`Piece`].
///
/// [`Piece`]: ./enum.Piece.html
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum PieceType {
    None = 0,
    P = 1,
    N = 2,
    B = 3,
    R = 4,
    Q = 5,
    K = 6,
}

impl PieceType {
    /// Returns if the piece is `PieceType::None`
    #[inline(always)]
    pub fn is_none(self) -> bool {
        self == PieceType::None
    }

    /// Returns if the piece is not `PieceType::None`
    #[inline(always)]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns if a piece of this type slides along orthogonal rays.
    #[inline]
    pub fn slides_orthogonally(self) -> bool {
        self == PieceType::R || self == PieceType::Q
    }

    /// Returns if a piece of this type slides along diagonal rays.
    #[inline]
    pub fn slides_diagonally(self) -> bool {
        self == PieceType::B || self == PieceType::Q
    }

    /// Return the uppercase character of a `PieceType`, or a space for `PieceType::None`.
    #[inline]
    pub fn char_upper(self) -> char {
        match self {
            PieceType::None => ' ',
            PieceType::P => 'P',
            PieceType::N => 'N',
            PieceType::B => 'B',
            PieceType::R => 'R',
            PieceType::Q => 'Q',
            PieceType::K => 'K',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            PieceType::P => "Pawn",
            PieceType::N => "Knight",
            PieceType::B => "Bishop",
            PieceType::R => "Rook",
            PieceType::Q => "Queen",
            PieceType::K => "King",
            PieceType::None => "",
        };
        f.pad(s)
    }
}

/// All possible Types of Pieces on a chessboard, for both colors, plus the empty square.
///
/// The lower three bits hold the [`PieceType`], bit 3 holds the [`Player`].
///
/// [`PieceType`]: ./enum.PieceType.html
/// [`Player`]: ./enum.Player.html
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Piece {
    None = 0b0000,
    WhitePawn = 0b0001,
    WhiteKnight = 0b0010,
    WhiteBishop = 0b0011,
    WhiteRook = 0b0100,
    WhiteQueen = 0b0101,
    WhiteKing = 0b0110,
    BlackPawn = 0b1001,
    BlackKnight = 0b1010,
    BlackBishop = 0b1011,
    BlackRook = 0b1100,
    BlackQueen = 0b1101,
    BlackKing = 0b1110,
}

impl Default for Piece {
    fn default() -> Self {
        Piece::None
    }
}

impl Piece {
    /// Returns the `Player` of a piece, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailbox_perft::{Piece, Player};
    ///
    /// assert_eq!(Piece::BlackKnight.player(), Some(Player::Black));
    /// assert!(Piece::None.player().is_none());
    /// ```
    #[inline(always)]
    pub fn player(self) -> Option<Player> {
        match self {
            Piece::None => None,
            p if (p as u8) & 0b1000 == 0 => Some(Player::White),
            _ => Some(Player::Black),
        }
    }

    /// Returns the `PieceType`.
    ///
    /// ```
    /// use mailbox_perft::{Piece, PieceType};
    ///
    /// assert_eq!(Piece::WhiteQueen.type_of(), PieceType::Q);
    /// assert_eq!(Piece::None.type_of(), PieceType::None);
    /// ```
    #[inline(always)]
    pub fn type_of(self) -> PieceType {
        match self {
            Piece::None => PieceType::None,
            Piece::WhitePawn | Piece::BlackPawn => PieceType::P,
            Piece::WhiteKnight | Piece::BlackKnight => PieceType::N,
            Piece::WhiteBishop | Piece::BlackBishop => PieceType::B,
            Piece::WhiteRook | Piece::BlackRook => PieceType::R,
            Piece::WhiteQueen | Piece::BlackQueen => PieceType::Q,
            Piece::WhiteKing | Piece::BlackKing => PieceType::K,
        }
    }

    /// Creates a `Piece` from a `Player` and `PieceType`. `PieceType::None` yields `Piece::None`.
    ///
    /// ```
    /// use mailbox_perft::{Piece, PieceType, Player};
    ///
    /// let black_knight = Piece::make(Player::Black, PieceType::N);
    /// assert_eq!(black_knight, Piece::BlackKnight);
    /// ```
    #[inline]
    pub fn make(player: Player, piece_type: PieceType) -> Piece {
        match (player, piece_type) {
            (_, PieceType::None) => Piece::None,
            (Player::White, PieceType::P) => Piece::WhitePawn,
            (Player::White, PieceType::N) => Piece::WhiteKnight,
            (Player::White, PieceType::B) => Piece::WhiteBishop,
            (Player::White, PieceType::R) => Piece::WhiteRook,
            (Player::White, PieceType::Q) => Piece::WhiteQueen,
            (Player::White, PieceType::K) => Piece::WhiteKing,
            (Player::Black, PieceType::P) => Piece::BlackPawn,
            (Player::Black, PieceType::N) => Piece::BlackKnight,
            (Player::Black, PieceType::B) => Piece::BlackBishop,
            (Player::Black, PieceType::R) => Piece::BlackRook,
            (Player::Black, PieceType::Q) => Piece::BlackQueen,
            (Player::Black, PieceType::K) => Piece::BlackKing,
        }
    }

    /// Returns if the square holding this piece is empty.
    #[inline(always)]
    pub fn is_none(self) -> bool {
        self == Piece::None
    }

    /// Returns if this is a real piece.
    #[inline(always)]
    pub fn is_some(self) -> bool {
        self != Piece::None
    }

    /// Returns if this piece belongs to `player`.
    #[inline(always)]
    pub fn is_player(self, player: Player) -> bool {
        self.player() == Some(player)
    }

    /// Returns if this piece belongs to the opponent of `player`.
    #[inline(always)]
    pub fn is_opponent_of(self, player: Player) -> bool {
        self.player() == Some(!player)
    }

    /// Returns the character of a `Piece`: uppercase for white, lowercase for black, and a
    /// space for an empty square.
    pub fn character(self) -> char {
        match self {
            Piece::None => ' ',
            Piece::WhitePawn => 'P',
            Piece::WhiteKnight => 'N',
            Piece::WhiteBishop => 'B',
            Piece::WhiteRook => 'R',
            Piece::WhiteQueen => 'Q',
            Piece::WhiteKing => 'K',
            Piece::BlackPawn => 'p',
            Piece::BlackKnight => 'n',
            Piece::BlackBishop => 'b',
            Piece::BlackRook => 'r',
            Piece::BlackQueen => 'q',
            Piece::BlackKing => 'k',
        }
    }

    /// Parses a piece character. A space is the empty square.
    pub fn from_char(c: char) -> Option<Piece> {
        let piece = match c {
            ' ' => Piece::None,
            'P' => Piece::WhitePawn,
            'N' => Piece::WhiteKnight,
            'B' => Piece::WhiteBishop,
            'R' => Piece::WhiteRook,
            'Q' => Piece::WhiteQueen,
            'K' => Piece::WhiteKing,
            'p' => Piece::BlackPawn,
            'n' => Piece::BlackKnight,
            'b' => Piece::BlackBishop,
            'r' => Piece::BlackRook,
            'q' => Piece::BlackQueen,
            'k' => Piece::BlackKing,
            _ => return None,
        };
        Some(piece)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.player() {
            Some(player) => {
                let kind = self.type_of().to_string().to_uppercase();
                write!(f, "{} {}", player.shout(), kind)
            }
            None => write!(f, "EMPTY"),
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            Piece::None => "None",
            Piece::WhitePawn => "WhitePawn",
            Piece::WhiteKnight => "WhiteKnight",
            Piece::WhiteBishop => "WhiteBishop",
            Piece::WhiteRook => "WhiteRook",
            Piece::WhiteQueen => "WhiteQueen",
            Piece::WhiteKing => "WhiteKing",
            Piece::BlackPawn => "BlackPawn",
            Piece::BlackKnight => "BlackKnight",
            Piece::BlackBishop => "BlackBishop",
            Piece::BlackRook => "BlackRook",
            Piece::BlackQueen => "BlackQueen",
            Piece::BlackKing => "BlackKing",
        };
        write!(f, "{}", s)
    }
}

/// Rank index of a square.
#[inline(always)]
pub fn rank_idx_of_sq(s: u8) -> u8 {
    s >> 3
}

/// File index of a square.
#[inline(always)]
pub fn file_idx_of_sq(s: u8) -> u8 {
    s & 0b0000_0111
}

/// Square from a file and rank index, if both are on the board.
#[inline]
pub fn sq_from_coords(file: i8, rank: i8) -> Option<SQ> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(SQ((rank * 8 + file) as u8))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_projections() {
        for player in ALL_PLAYERS.iter() {
            for pt in ALL_PIECE_TYPES.iter() {
                let piece = Piece::make(*player, *pt);
                assert_eq!(piece.player(), Some(*player));
                assert_eq!(piece.type_of(), *pt);
                assert_eq!(Piece::from_char(piece.character()), Some(piece));
            }
        }
        assert_eq!(Piece::from_char(' '), Some(Piece::None));
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn piece_display_is_upper_case_words() {
        assert_eq!(Piece::BlackPawn.to_string(), "BLACK PAWN");
        assert_eq!(Piece::WhiteKing.to_string(), "WHITE KING");
        assert_eq!(Piece::None.to_string(), "EMPTY");
    }

    #[test]
    fn opponents() {
        assert!(Piece::BlackRook.is_opponent_of(Player::White));
        assert!(!Piece::BlackRook.is_opponent_of(Player::Black));
        assert!(!Piece::None.is_opponent_of(Player::White));
        assert_eq!(!Player::White, Player::Black);
    }

    #[test]
    fn coords() {
        assert_eq!(sq_from_coords(0, 0), Some(SQ(0)));
        assert_eq!(sq_from_coords(7, 7), Some(SQ(63)));
        assert_eq!(sq_from_coords(-1, 3), None);
        assert_eq!(sq_from_coords(3, 8), None);
    }
}

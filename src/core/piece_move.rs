//! Module for the definition of a move to be played, and its packed integer encoding.
//!
//! A [`Move`] carries everything needed to apply and exactly undo it on a mailbox board: the
//! moving piece, the origin and destination squares, whatever piece stood on the
//! destination, an optional promotion piece, and for en-passant the square of the pawn being
//! taken.
//!
//! # Packed form
//!
//! A [`PackedMove`] squeezes a move into an integer, laid out as such:
//!
//! ```md,ignore
//! bits  0 - 5:  destination square (from 0 to 63)
//! bits  6 - 11: origin square (from 0 to 63)
//! bits 12 - 13: promotion piece: knight (0), bishop (1), rook (2), queen (3)
//! bits 14 -   : move kind: normal (0), en passant (1), promotion (2), castle (3)
//! ```
//!
//! Castling is never generated; the kind is reserved so that decoded integers from other
//! sources render sensibly.
//!
//! [`Move`]: struct.Move.html
//! [`PackedMove`]: struct.PackedMove.html

use super::sq::SQ;
use super::*;

use bitflags::bitflags;

use std::fmt;

bitflags! {
    /// Classification of a `Move`, used when tallying perft leaves.
    pub struct MoveTraits: u8 {
        const CAPTURE     = 0b0001;
        const EN_PASSANT  = 0b0010;
        const PROMOTION   = 0b0100;
        const DOUBLE_PUSH = 0b1000;
    }
}

/// A pseudo-legal move for a specific board.
///
/// At most one of `promotion` and `ep_victim` is set. For an en-passant capture `captured`
/// holds the taken pawn, while the destination square itself is empty.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub piece: Piece,
    pub src: SQ,
    pub dst: SQ,
    pub captured: Piece,
    pub promotion: Option<Piece>,
    pub ep_victim: Option<SQ>,
}

impl Default for Move {
    fn default() -> Self {
        Move::null()
    }
}

impl Move {
    /// A move that does nothing, used as filler.
    #[inline]
    pub const fn null() -> Move {
        Move {
            piece: Piece::None,
            src: SQ(0),
            dst: SQ(0),
            captured: Piece::None,
            promotion: None,
            ep_victim: None,
        }
    }

    /// Creates a plain move, capturing whatever `captured` is (possibly `Piece::None`).
    #[inline]
    pub fn new(piece: Piece, src: SQ, dst: SQ, captured: Piece) -> Move {
        Move {
            piece,
            src,
            dst,
            captured,
            promotion: None,
            ep_victim: None,
        }
    }

    /// Creates a pawn move onto the last rank that becomes `promotion`.
    #[inline]
    pub fn promoting(piece: Piece, src: SQ, dst: SQ, captured: Piece, promotion: Piece) -> Move {
        Move {
            piece,
            src,
            dst,
            captured,
            promotion: Some(promotion),
            ep_victim: None,
        }
    }

    /// Creates an en-passant capture of the pawn `victim` standing on `victim_sq`.
    #[inline]
    pub fn en_passant(piece: Piece, src: SQ, dst: SQ, victim: Piece, victim_sq: SQ) -> Move {
        Move {
            piece,
            src,
            dst,
            captured: victim,
            promotion: None,
            ep_victim: Some(victim_sq),
        }
    }

    /// Returns if the move takes a piece, including en-passant.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline(always)]
    pub fn is_en_passant(&self) -> bool {
        self.ep_victim.is_some()
    }

    #[inline(always)]
    pub fn is_promo(&self) -> bool {
        self.promotion.is_some()
    }

    /// Returns if the move is a pawn advancing two ranks.
    #[inline]
    pub fn is_double_push(&self) -> bool {
        self.piece.type_of() == PieceType::P && (self.dst.0 as i8 - self.src.0 as i8).abs() == 16
    }

    /// Returns the traits of a move.
    pub fn traits(&self) -> MoveTraits {
        let mut traits = MoveTraits::empty();
        if self.is_capture() {
            traits |= MoveTraits::CAPTURE;
        }
        if self.is_en_passant() {
            traits |= MoveTraits::EN_PASSANT;
        }
        if self.is_promo() {
            traits |= MoveTraits::PROMOTION;
        }
        if self.is_double_push() {
            traits |= MoveTraits::DOUBLE_PUSH;
        }
        traits
    }

    /// Returns the packed integer form of this move.
    pub fn to_packed(&self) -> PackedMove {
        let (kind, promo) = match (self.promotion, self.ep_victim) {
            (Some(p), _) => (PackedKind::Promotion, promo_code(p.type_of())),
            (None, Some(_)) => (PackedKind::EnPassant, 0),
            (None, None) => (PackedKind::Normal, 0),
        };
        PackedMove::new(self.src, self.dst, promo, kind as u32)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MOVE({},{})", self.src.0, self.dst.0)
    }
}

fn promo_code(pt: PieceType) -> u32 {
    match pt {
        PieceType::B => 1,
        PieceType::R => 2,
        PieceType::Q => 3,
        _ => 0,
    }
}

const DST_MASK: u32 = 0b11_1111;
const SRC_SHIFT: u32 = 6;
const PROMO_SHIFT: u32 = 12;
const PROMO_MASK: u32 = 0b11;
const KIND_SHIFT: u32 = 14;

/// The kind field of a `PackedMove`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum PackedKind {
    Normal = 0,
    EnPassant = 1,
    Promotion = 2,
    Castle = 3,
}

/// A move packed into an integer. Any `u32` is a valid `PackedMove`; kinds past `Castle`
/// decode to `None`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct PackedMove(pub u32);

impl PackedMove {
    /// Packs the given fields. `promo` and `kind` are masked to their widths.
    pub fn new(src: SQ, dst: SQ, promo: u32, kind: u32) -> PackedMove {
        PackedMove(
            (dst.0 as u32 & DST_MASK)
                | ((src.0 as u32 & DST_MASK) << SRC_SHIFT)
                | ((promo & PROMO_MASK) << PROMO_SHIFT)
                | (kind << KIND_SHIFT),
        )
    }

    #[inline(always)]
    pub fn dst(self) -> SQ {
        SQ((self.0 & DST_MASK) as u8)
    }

    #[inline(always)]
    pub fn src(self) -> SQ {
        SQ(((self.0 >> SRC_SHIFT) & DST_MASK) as u8)
    }

    /// The raw promotion field, 0 to 3.
    #[inline(always)]
    pub fn promo_code(self) -> u32 {
        (self.0 >> PROMO_SHIFT) & PROMO_MASK
    }

    /// The raw kind field. Not masked, so out-of-range kinds are visible.
    #[inline(always)]
    pub fn kind_code(self) -> u32 {
        self.0 >> KIND_SHIFT
    }

    /// The kind of move, if the kind field is in range.
    pub fn kind(self) -> Option<PackedKind> {
        match self.kind_code() {
            0 => Some(PackedKind::Normal),
            1 => Some(PackedKind::EnPassant),
            2 => Some(PackedKind::Promotion),
            3 => Some(PackedKind::Castle),
            _ => None,
        }
    }

    /// The piece type promoted to, only for promotion moves.
    pub fn promotion(self) -> Option<PieceType> {
        match self.kind() {
            Some(PackedKind::Promotion) => Some(PROMOTION_TYPES[self.promo_code() as usize]),
            _ => None,
        }
    }
}

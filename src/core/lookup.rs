//! Statically initialized lookup tables for the mailbox move generator.
//!
//! For every square this stores the on-board knight and king destinations, and the squares
//! of each of the eight rays in marching order. Generation and attack detection only ever
//! walk these tables, so no step needs an edge check at runtime.

use super::masks::*;
use super::sq::SQ;

use lazy_static::lazy_static;

lazy_static! {
    /// Lookup tables created when first accessed. Nothing is mutated afterward, so it is
    /// safe to share between threads.
    pub static ref LOOKUP: Lookup = Lookup::new();
}

/// Fixed-step destinations from one square.
#[derive(Clone, Debug)]
pub struct Steps {
    squares: [SQ; 8],
    len: usize,
}

impl Steps {
    fn from_steps(from: SQ, steps: &[(i8, i8); 8]) -> Steps {
        let mut list = Steps {
            squares: [SQ(0); 8],
            len: 0,
        };
        for &(d_rank, d_file) in steps.iter() {
            if let Some(sq) = from.offset(d_rank, d_file) {
                list.squares[list.len] = sq;
                list.len += 1;
            }
        }
        list
    }

    /// The destination squares, in table order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[SQ] {
        &self.squares[..self.len]
    }
}

/// Per-square lookup tables.
pub struct Lookup {
    knight: Vec<Steps>,
    king: Vec<Steps>,
    rays: Vec<[Vec<SQ>; DIR_CNT]>,
}

impl Lookup {
    fn new() -> Lookup {
        let mut knight = Vec::with_capacity(SQ_CNT);
        let mut king = Vec::with_capacity(SQ_CNT);
        let mut rays = Vec::with_capacity(SQ_CNT);
        for sq in SQ::all() {
            knight.push(Steps::from_steps(sq, &KNIGHT_STEPS));
            king.push(Steps::from_steps(sq, &KING_STEPS));
            rays.push(square_rays(sq));
        }
        Lookup { knight, king, rays }
    }

    /// Squares a knight on `sq` jumps to.
    #[inline(always)]
    pub fn knight_targets(&self, sq: SQ) -> &[SQ] {
        self.knight[sq.index()].as_slice()
    }

    /// Squares a king on `sq` steps to.
    #[inline(always)]
    pub fn king_targets(&self, sq: SQ) -> &[SQ] {
        self.king[sq.index()].as_slice()
    }

    /// The orthogonal rays leaving `sq`, nearest square first.
    #[inline(always)]
    pub fn orthogonal_rays(&self, sq: SQ) -> &[Vec<SQ>] {
        &self.rays[sq.index()][..4]
    }

    /// The diagonal rays leaving `sq`, nearest square first.
    #[inline(always)]
    pub fn diagonal_rays(&self, sq: SQ) -> &[Vec<SQ>] {
        &self.rays[sq.index()][4..]
    }

    /// All eight rays leaving `sq`, orthogonal first.
    #[inline(always)]
    pub fn all_rays(&self, sq: SQ) -> &[Vec<SQ>] {
        &self.rays[sq.index()][..]
    }
}

fn square_rays(from: SQ) -> [Vec<SQ>; DIR_CNT] {
    let mut rays: [Vec<SQ>; DIR_CNT] = Default::default();
    let dirs = ORTHOGONAL_DIRS.iter().chain(DIAGONAL_DIRS.iter());
    for (ray, &(d_rank, d_file)) in rays.iter_mut().zip(dirs) {
        let mut cur = from;
        while let Some(next) = cur.offset(d_rank, d_file) {
            ray.push(next);
            cur = next;
        }
    }
    rays
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_corner_and_center() {
        assert_eq!(LOOKUP.knight_targets(SQ::A1).len(), 2);
        assert_eq!(LOOKUP.knight_targets(SQ::E4).len(), 8);
        assert!(LOOKUP.knight_targets(SQ::G1).contains(&SQ::F3));
        assert!(LOOKUP.knight_targets(SQ::G1).contains(&SQ::H3));
        assert!(LOOKUP.knight_targets(SQ::G1).contains(&SQ::E2));
    }

    #[test]
    fn king_edges() {
        assert_eq!(LOOKUP.king_targets(SQ::A1).len(), 3);
        assert_eq!(LOOKUP.king_targets(SQ::E1).len(), 5);
        assert_eq!(LOOKUP.king_targets(SQ::D5).len(), 8);
    }

    #[test]
    fn rays_march_outward() {
        let north = &LOOKUP.orthogonal_rays(SQ::A1)[0];
        assert_eq!(north.len(), 7);
        assert_eq!(north[0], SQ::A2);
        assert_eq!(north[6], SQ::A8);

        let total: usize = LOOKUP.diagonal_rays(SQ::A1).iter().map(|r| r.len()).sum();
        assert_eq!(total, 7);

        let total: usize = LOOKUP.all_rays(SQ::D4).iter().map(|r| r.len()).sum();
        assert_eq!(total, 14 + 13);
    }
}

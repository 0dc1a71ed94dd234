//! perft, or Performance Test, Move Path Enumeration, tests the correctness of move-generation.
//!
//! Use these functions on a [`Board`] to test that the correct amount of leaf nodes are created.
//! Moves are generated pseudo-legally; a move is only counted once the position it leads to
//! shows the mover's king unattacked.
//!
//! [`Board`]: ../struct.Board.html

use super::attacks::{confirm_king_safe, in_check};
use super::invariant::violated;
use super::leaf::{LeafSink, NoLeaves};
use super::ledger::Ledger;
use super::movegen::generate;
use super::Board;
use crate::core::piece_move::{Move, MoveTraits};
use crate::core::Player;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use thiserror::Error;
use tracing::{debug, trace};

use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Errors from setting up a parallel perft.
#[derive(Error, Debug)]
pub enum PerftError {
    #[error("perft needs at least one thread")]
    NoThreads,
    #[error("unable to build the perft thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Holds all information about the number of nodes counted.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct PerftNodes {
    /// Total number of nodes counted.
    pub nodes: u64,
    /// Number of leaves reached by a capture, including en-passant captures.
    pub captures: u64,
    /// Number of leaves reached by an en-passant capture.
    pub en_passant: u64,
    /// Number of leaves reached by a promotion.
    pub promotions: u64,
    /// Number of leaves where the side to move is in check.
    pub checks: u64,
}

impl Add for PerftNodes {
    type Output = PerftNodes;

    fn add(self, other: PerftNodes) -> PerftNodes {
        PerftNodes {
            nodes: self.nodes + other.nodes,
            captures: self.captures + other.captures,
            en_passant: self.en_passant + other.en_passant,
            promotions: self.promotions + other.promotions,
            checks: self.checks + other.checks,
        }
    }
}

impl AddAssign for PerftNodes {
    fn add_assign(&mut self, other: PerftNodes) {
        *self = *self + other;
    }
}

impl Sum for PerftNodes {
    fn sum<I: Iterator<Item = PerftNodes>>(iter: I) -> PerftNodes {
        iter.fold(PerftNodes::default(), |a, b| a + b)
    }
}

impl PerftNodes {
    /// Checks for the correct number of nodes in each category. If the results don't
    /// match, panics with an error-message containing the failed checks.
    pub fn check(&self, nodes: u64, captures: u64, en_passant: u64, promotions: u64, checks: u64) {
        if self.nodes != nodes
            || self.captures != captures
            || self.en_passant != en_passant
            || self.promotions != promotions
            || self.checks != checks
        {
            panic!(
                "\n Perft did not return the correct results!\
            \n total nodes {}, expected: {}, difference: {}\
            \n captures {}, expected: {}, difference: {}\
            \n en_passant {}, expected: {}, difference: {}\
            \n promotions {}, expected: {}, difference: {}\
            \n checks {}, expected: {}, difference: {}\n",
                self.nodes,
                nodes,
                nodes as i64 - self.nodes as i64,
                self.captures,
                captures,
                captures as i64 - self.captures as i64,
                self.en_passant,
                en_passant,
                en_passant as i64 - self.en_passant as i64,
                self.promotions,
                promotions,
                promotions as i64 - self.promotions as i64,
                self.checks,
                checks,
                checks as i64 - self.checks as i64,
            );
        }
    }

    fn count_leaf(&mut self, last: Option<&Move>, checked: bool) {
        self.nodes += 1;
        if checked {
            self.checks += 1;
        }
        if let Some(mv) = last {
            let traits = mv.traits();
            if traits.contains(MoveTraits::CAPTURE) {
                self.captures += 1;
            }
            if traits.contains(MoveTraits::EN_PASSANT) {
                self.en_passant += 1;
            }
            if traits.contains(MoveTraits::PROMOTION) {
                self.promotions += 1;
            }
        }
    }
}

/// Returns the number of leaf nodes from generating moves to a certain depth, `player` to
/// move first.
pub fn perft(board: &Board, player: Player, depth: u16) -> u64 {
    perft_all(board, player, depth).nodes
}

/// Returns the count of all move types for the leaf nodes up to a certain depth.
pub fn perft_all(board: &Board, player: Player, depth: u16) -> PerftNodes {
    let mut b = *board;
    let mut ledger = Ledger::with_depth(depth as usize);
    perft_with_sink(&mut b, player, &mut ledger, depth, &mut NoLeaves)
}

/// Counts leaves on the given board in place, handing each one to `sink`.
///
/// The board and ledger are returned to their original state.
pub fn perft_with_sink<S: LeafSink + ?Sized>(
    board: &mut Board,
    player: Player,
    ledger: &mut Ledger,
    depth: u16,
    sink: &mut S,
) -> PerftNodes {
    let mut nodes = PerftNodes::default();
    inner_perft(board, player, ledger, depth, sink, &mut nodes);
    nodes
}

/// Returns the leaf count below each pseudo-legal root move. Moves leaving the king
/// attacked are listed with a count of 0; use [`generate_legal`] to list only legal moves.
///
/// [`generate_legal`]: ../movegen/fn.generate_legal.html
pub fn divide(board: &Board, player: Player, depth: u16) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut b = *board;
    let mut ledger = Ledger::with_depth(depth as usize);
    let moves = generate(&b, player, &ledger);
    moves
        .iter()
        .map(|mv| {
            let nodes = branch(&mut b, player, &mut ledger, mv, depth, &mut NoLeaves);
            debug!(%mv, nodes = nodes.nodes, "divide");
            (*mv, nodes.nodes)
        })
        .collect()
}

/// Runs perft with the root moves spread over a pool of `threads` workers. Each worker owns
/// a private copy of the board and ledger. No leaves are emitted.
pub fn perft_parallel(
    board: &Board,
    player: Player,
    depth: u16,
    threads: usize,
) -> Result<PerftNodes, PerftError> {
    if threads == 0 {
        return Err(PerftError::NoThreads);
    }
    if depth == 0 || in_check(board, !player) {
        return Ok(perft_all(board, player, depth));
    }
    let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
    debug!(threads, depth, "starting parallel perft");

    let moves = generate(board, player, &Ledger::default());
    let state = (*board, Ledger::with_depth(depth as usize));
    let total = pool.install(|| {
        moves
            .as_slice()
            .par_iter()
            .map_with(state, |state: &mut (Board, Ledger), mv: &Move| {
                let (b, ledger) = state;
                let nodes = branch(b, player, ledger, mv, depth, &mut NoLeaves);
                trace!(%mv, nodes = nodes.nodes, "branch finished");
                nodes
            })
            .reduce(PerftNodes::default, |a, b| a + b)
    });
    Ok(total)
}

/// Applies `mv`, counts below it, then restores the board and ledger.
fn branch<S: LeafSink + ?Sized>(
    board: &mut Board,
    player: Player,
    ledger: &mut Ledger,
    mv: &Move,
    depth: u16,
    sink: &mut S,
) -> PerftNodes {
    let mut nodes = PerftNodes::default();
    expand(board, player, ledger, mv, depth, sink, &mut nodes);
    nodes
}

fn inner_perft<S: LeafSink + ?Sized>(
    board: &mut Board,
    player: Player,
    ledger: &mut Ledger,
    depth: u16,
    sink: &mut S,
    nodes: &mut PerftNodes,
) {
    // The previous mover left their own king attacked.
    if in_check(board, !player) {
        return;
    }

    if depth == 0 {
        if cfg!(debug_assertions) {
            if let Some(mv) = ledger.last() {
                confirm_king_safe(board, !player, mv);
            }
        }
        nodes.count_leaf(ledger.last(), in_check(board, player));
        sink.leaf(board, ledger);
        return;
    }

    let moves = generate(board, player, ledger);
    for mv in moves.iter() {
        expand(board, player, ledger, mv, depth, sink, nodes);
    }
}

#[inline]
fn expand<S: LeafSink + ?Sized>(
    board: &mut Board,
    player: Player,
    ledger: &mut Ledger,
    mv: &Move,
    depth: u16,
    sink: &mut S,
    nodes: &mut PerftNodes,
) {
    #[cfg(debug_assertions)]
    let snapshot = *board;

    ledger.push(*mv);
    board.apply_move(mv);
    if cfg!(debug_assertions) {
        if let Err(err) = board.validate() {
            violated(board, err);
        }
    }

    inner_perft(board, !player, ledger, depth - 1, sink, nodes);

    board.undo_move(mv);
    ledger.pop();

    #[cfg(debug_assertions)]
    {
        if *board != snapshot {
            violated(board, super::invariant::InvariantError::UndoMismatch { mv: *mv });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w`, written rank 1 first.
    fn board_3() -> Board {
        let ranks = [
            "        ", "    P P ", "        ", " R   p k", "KP     r", "   p    ", "  p     ",
            "        ",
        ];
        Board::from_placement(&ranks.concat()).unwrap()
    }

    #[test]
    fn start_pos_perft() {
        let b: Board = Board::start_pos();
        assert_eq!(1, perft(&b, Player::White, 0));
        assert_eq!(20, perft(&b, Player::White, 1));
        assert_eq!(400, perft(&b, Player::White, 2));
        assert_eq!(8902, perft(&b, Player::White, 3));
    }

    #[test]
    fn start_pos_perft_all() {
        let b: Board = Board::start_pos();
        perft_all(&b, Player::White, 3).check(8902, 34, 0, 0, 12);
    }

    #[test]
    fn perft_board_3_shallow() {
        let b = board_3();
        assert_eq!(14, perft(&b, Player::White, 1));
        assert_eq!(191, perft(&b, Player::White, 2));
        assert_eq!(2812, perft(&b, Player::White, 3));
    }

    #[test]
    fn divide_sums_to_perft() {
        let b = board_3();
        let split = divide(&b, Player::White, 3);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 2812);
        assert!(divide(&b, Player::White, 0).is_empty());
    }

    #[test]
    fn parallel_matches_sequential() {
        let b = Board::start_pos();
        let par = perft_parallel(&b, Player::White, 3, 2).unwrap();
        assert_eq!(par, perft_all(&b, Player::White, 3));
        assert!(matches!(
            perft_parallel(&b, Player::White, 3, 0),
            Err(PerftError::NoThreads)
        ));
    }

    #[test]
    fn sink_sees_every_leaf() {
        let mut b = Board::start_pos();
        let before = b;
        let mut ledger = Ledger::default();
        let mut seen = 0u64;
        let mut sink = |_: &Board, path: &Ledger| {
            assert_eq!(path.len(), 2);
            seen += 1;
        };
        let nodes = perft_with_sink(&mut b, Player::White, &mut ledger, 2, &mut sink);
        assert_eq!(nodes.nodes, 400);
        assert_eq!(seen, 400);
        assert_eq!(b, before);
        assert!(ledger.is_empty());
    }
}

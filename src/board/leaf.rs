//! Leaf output for perft.
//!
//! Every counted leaf can be handed to a [`LeafSink`]. The textual form, written by
//! [`LeafWriter`], is one line per leaf: the 64 character placement, a `|`, and the move that
//! reached the leaf as `MOVE(from,to)` with decimal square indices.
//!
//! ```md,ignore
//! RNBQKBNRPPPP PPP            P                   pppppppprnbqkbnr|MOVE(12,28)
//! ```
//!
//! [`LeafSink`]: trait.LeafSink.html
//! [`LeafWriter`]: struct.LeafWriter.html

use super::ledger::Ledger;
use super::Board;
use crate::core::piece_move::Move;

use std::io::{self, Write};

/// Receives every leaf counted by a perft traversal.
pub trait LeafSink {
    /// Called once per counted leaf, with the moves leading to it from the root.
    fn leaf(&mut self, board: &Board, path: &Ledger);
}

/// A sink that discards every leaf.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoLeaves;

impl LeafSink for NoLeaves {
    #[inline(always)]
    fn leaf(&mut self, _board: &Board, _path: &Ledger) {}
}

impl<F> LeafSink for F
where
    F: FnMut(&Board, &Ledger),
{
    #[inline]
    fn leaf(&mut self, board: &Board, path: &Ledger) {
        self(board, path)
    }
}

/// Returns the leaf line for a board, without a trailing newline. A leaf reached by no move
/// ends right after the `|`.
pub fn leaf_line(board: &Board, last: Option<&Move>) -> String {
    let mut line = board.placement_string();
    line.push('|');
    if let Some(mv) = last {
        line.push_str(&mv.to_string());
    }
    line
}

/// Writes leaf lines to any `Write`.
///
/// The first I/O error stops all further writing; it is returned by [`finish`].
///
/// [`finish`]: #method.finish
pub struct LeafWriter<W: Write> {
    out: W,
    error: Option<io::Error>,
    lines: u64,
}

impl<W: Write> LeafWriter<W> {
    pub fn new(out: W) -> LeafWriter<W> {
        LeafWriter {
            out,
            error: None,
            lines: 0,
        }
    }

    /// Number of lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Flushes the writer, returning it or the first error encountered.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> LeafSink for LeafWriter<W> {
    fn leaf(&mut self, board: &Board, path: &Ledger) {
        if self.error.is_some() {
            return;
        }
        match writeln!(self.out, "{}", leaf_line(board, path.last())) {
            Ok(()) => self.lines += 1,
            Err(err) => self.error = Some(err),
        }
    }
}

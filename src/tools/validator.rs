//! Line validator for move dumps.
//!
//! Lines starting with `MOVE(` are expected to have a fixed layout, written by a move
//! printer that spells out the pieces involved:
//!
//! ```md,ignore
//! index 10, 11: origin file and rank, rank '4'
//! index 17, 18: destination file and rank, rank '3'
//! index 24..34: "BLACK PAWN"
//! index 47..57: "WHITE PAWN"
//! ```
//!
//! The origin and destination files must be neighbours on the line A-B-...-H. A line is
//! echoed once for every check it fails, so badly broken lines show up several times. Any
//! other line is ignored.

use super::ToolError;

use std::io::{BufRead, Write};

pub const MOVE_PREFIX: &str = "MOVE(";

const FROM_FILE: usize = 10;
const FROM_RANK: usize = 11;
const TO_FILE: usize = 17;
const TO_RANK: usize = 18;
const VICTIM: (usize, usize) = (24, 34);
const MOVER: (usize, usize) = (47, 57);

/// Returns the number of checks a line fails. Lines that are not move lines fail none.
/// Characters past the end of the line never match.
pub fn failures(line: &str) -> usize {
    if !line.starts_with(MOVE_PREFIX) {
        return 0;
    }
    let chars: Vec<char> = line.chars().collect();
    let at = |i: usize| chars.get(i).copied();
    let span = |(start, end): (usize, usize)| -> Option<String> {
        chars.get(start..end).map(|s| s.iter().collect())
    };

    let mut failed = 0;
    if at(FROM_RANK) != Some('4') {
        failed += 1;
    }
    if at(TO_RANK) != Some('3') {
        failed += 1;
    }
    if !files_adjacent(at(FROM_FILE), at(TO_FILE)) {
        failed += 1;
    }
    if span(VICTIM).as_deref() != Some("BLACK PAWN") {
        failed += 1;
    }
    if span(MOVER).as_deref() != Some("WHITE PAWN") {
        failed += 1;
    }
    failed
}

/// A file outside A-H places no constraint on its neighbour.
fn files_adjacent(from: Option<char>, to: Option<char>) -> bool {
    let from = match from {
        Some(c) => c,
        None => return false,
    };
    if !('A'..='H').contains(&from) {
        return true;
    }
    match to {
        Some(to) if ('A'..='H').contains(&to) => (from as i32 - to as i32).abs() == 1,
        _ => false,
    }
}

/// Echoes every failing move line to `out`, once per failed check. Returns the number of
/// lines written.
pub fn check_lines<R: BufRead, W: Write>(input: R, mut out: W) -> Result<u64, ToolError> {
    let mut written = 0;
    for line in input.lines() {
        let line = line?;
        for _ in 0..failures(&line) {
            writeln!(out, "{}", line)?;
            written += 1;
        }
    }
    out.flush()?;
    Ok(written)
}

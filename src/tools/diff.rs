//! Renders the leaf lines of a `diff` between two leaf dumps.
//!
//! Only lines starting with `<` or `>` are rendered. After stripping the two character
//! marker, the first 64 characters are drawn as a board and the trailing `MOVE(from,to)`
//! is printed with square names, e.g. `MOVE(E2,E4)`.

use super::ToolError;
use crate::board::grid_string;
use crate::core::masks::SQ_CNT;
use crate::core::sq::SQ;

use tracing::warn;

use std::io::{BufRead, Write};

const MARKER_LEN: usize = 2;

/// Renders one line of diff output, or `None` if it is not a changed leaf line.
pub fn render_line(line: &str, line_no: usize) -> Result<Option<String>, ToolError> {
    if !(line.starts_with('<') || line.starts_with('>')) {
        return Ok(None);
    }
    let leaf: Vec<char> = line.chars().skip(MARKER_LEN).collect();
    if leaf.len() < SQ_CNT {
        return Err(ToolError::MalformedLine {
            line_no,
            reason: "shorter than a board placement",
        });
    }
    let rest: String = leaf[SQ_CNT..].iter().collect();
    let (src, dst) = parse_move(&rest, line_no)?;

    let mut out = grid_string(&leaf[..SQ_CNT]);
    out.push_str(&format!("MOVE({},{})\n\n", src.upper_name(), dst.upper_name()));
    Ok(Some(out))
}

/// Parses the `(from,to)` part of a leaf line tail such as `|MOVE(12,28)`.
fn parse_move(rest: &str, line_no: usize) -> Result<(SQ, SQ), ToolError> {
    let malformed = |reason| ToolError::MalformedLine { line_no, reason };
    let open = rest.find('(').ok_or_else(|| malformed("missing '('"))?;
    let close = rest[open..]
        .find(')')
        .map(|i| open + i)
        .ok_or_else(|| malformed("missing ')'"))?;
    let inner = &rest[open + 1..close];
    let (from, to) = inner
        .split_once(',')
        .ok_or_else(|| malformed("missing ','"))?;
    Ok((parse_square(from, line_no)?, parse_square(to, line_no)?))
}

fn parse_square(text: &str, line_no: usize) -> Result<SQ, ToolError> {
    let index: u32 = text.trim().parse().map_err(|_| ToolError::MalformedLine {
        line_no,
        reason: "square is not a number",
    })?;
    if index as usize >= SQ_CNT {
        return Err(ToolError::SquareOutOfRange { index });
    }
    Ok(SQ(index as u8))
}

/// Renders every changed leaf line of `input` to `out`. Malformed lines are logged and
/// skipped. Returns the number of boards written.
pub fn render<R: BufRead, W: Write>(input: R, mut out: W) -> Result<u64, ToolError> {
    let mut rendered = 0;
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        match render_line(&line, i + 1) {
            Ok(Some(board)) => {
                out.write_all(board.as_bytes())?;
                rendered += 1;
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "skipping line"),
        }
    }
    out.flush()?;
    Ok(rendered)
}

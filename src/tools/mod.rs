//! Companion tools for inspecting perft output.
//!
//! Each tool reads one of the encodings the engine produces: leaf lines, packed move
//! integers, bitboard integers, or diffs between two leaf dumps. None of them know any chess
//! rules. The binaries under `src/bin` are thin wrappers around these functions.

pub mod bitboard;
pub mod diff;
pub mod packed;
pub mod validator;

use thiserror::Error;

use std::io;

/// Errors raised by the tools.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("expected an integer, found {arg:?}")]
    NotAnInteger { arg: String },
    #[error("malformed line {line_no}: {reason}")]
    MalformedLine { line_no: usize, reason: &'static str },
    #[error("square index out of range: {index}")]
    SquareOutOfRange { index: u32 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parses an unsigned integer command line argument.
pub fn parse_integer<T: std::str::FromStr>(arg: &str) -> Result<T, ToolError> {
    arg.trim().parse().map_err(|_| ToolError::NotAnInteger {
        arg: arg.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(parse_integer::<u32>(" 42 ").unwrap(), 42);
        assert!(matches!(
            parse_integer::<u64>("e2e4"),
            Err(ToolError::NotAnInteger { .. })
        ));
    }
}

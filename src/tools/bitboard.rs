//! Bitboard visualizer.

use super::{parse_integer, ToolError};
use crate::core::bitboard::BitBoard;

/// Renders the integer followed by its 8x8 grid, rank 8 on top.
///
/// ```
/// use mailbox_perft::tools::bitboard::describe;
///
/// let out = describe(1);
/// assert!(out.starts_with("1\n+---+"));
/// ```
pub fn describe(value: u64) -> String {
    format!("{}\n{}", value, BitBoard(value).grid())
}

/// Parses the argument and renders it.
pub fn describe_arg(arg: &str) -> Result<String, ToolError> {
    parse_integer(arg).map(describe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_second_rank() {
        let out = describe(0xFF00);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "65280");
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[14], "| * | * | * | * | * | * | * | * |");
        assert_eq!(lines[16], "|   |   |   |   |   |   |   |   |");
    }

    #[test]
    fn rejects_garbage() {
        assert!(describe_arg("xyz").is_err());
    }
}

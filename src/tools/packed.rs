//! Packed move decoder.
//!
//! Any integer decodes; fields that make no sense (such as a kind past castling) render as
//! `unknown` rather than failing.

use super::{parse_integer, ToolError};
use crate::core::piece_move::{PackedKind, PackedMove};

/// The name printed on the `Flags:` line for a raw kind field.
pub fn kind_name(move_code: PackedMove) -> &'static str {
    match move_code.kind() {
        Some(PackedKind::Normal) => "NONE",
        Some(PackedKind::EnPassant) => "enpassant",
        Some(PackedKind::Promotion) => "promo",
        Some(PackedKind::Castle) => "castle",
        None => "unknown",
    }
}

/// The text printed on the `Promo:` line.
pub fn promo_name(move_code: PackedMove) -> String {
    match move_code.promotion() {
        Some(pt) => pt.char_upper().to_string(),
        None => "none".to_string(),
    }
}

/// Renders the decoded fields of a packed move, one per line.
///
/// ```
/// use mailbox_perft::core::piece_move::PackedMove;
/// use mailbox_perft::tools::packed::describe;
///
/// let out = describe(PackedMove(8 << 6 | 24));
/// assert_eq!(out, "536\nFrom : a2\nTo   : a4\nFlags: NONE\nPromo: none\n");
/// ```
pub fn describe(move_code: PackedMove) -> String {
    format!(
        "{}\nFrom : {}\nTo   : {}\nFlags: {}\nPromo: {}\n",
        move_code.0,
        move_code.src(),
        move_code.dst(),
        kind_name(move_code),
        promo_name(move_code)
    )
}

/// Parses the argument and decodes it.
pub fn describe_arg(arg: &str) -> Result<String, ToolError> {
    parse_integer(arg).map(|raw| describe(PackedMove(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sq::SQ;

    #[test]
    fn promotion_letters() {
        for (code, letter) in ["N", "B", "R", "Q"].iter().enumerate() {
            let mv = PackedMove::new(SQ::G7, SQ::G8, code as u32, PackedKind::Promotion as u32);
            assert_eq!(promo_name(mv), *letter);
            assert_eq!(kind_name(mv), "promo");
        }
    }

    #[test]
    fn promo_field_ignored_without_promotion_kind() {
        let mv = PackedMove::new(SQ::E5, SQ::D6, 3, PackedKind::EnPassant as u32);
        assert_eq!(promo_name(mv), "none");
        assert_eq!(kind_name(mv), "enpassant");
    }

    #[test]
    fn unknown_kind() {
        let out = describe_arg("1048576").unwrap();
        assert!(out.contains("Flags: unknown\n"));
        assert!(out.ends_with("Promo: none\n"));
        assert!(describe_arg("-3").is_err());
    }
}

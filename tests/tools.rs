use mailbox_perft::board::leaf::LeafWriter;
use mailbox_perft::board::ledger::Ledger;
use mailbox_perft::board::perft::perft_with_sink;
use mailbox_perft::core::masks::START_PIECE_CNT;
use mailbox_perft::tools::{bitboard, diff, packed, validator};
use mailbox_perft::{Board, Move, Piece, Player, SQ};

fn leaf_dump(depth: u16) -> String {
    let mut board = Board::start_pos();
    let mut ledger = Ledger::default();
    let mut writer = LeafWriter::new(Vec::new());
    let nodes = perft_with_sink(&mut board, Player::White, &mut ledger, depth, &mut writer);
    assert_eq!(writer.lines(), nodes.nodes);
    String::from_utf8(writer.finish().unwrap()).unwrap()
}

#[test]
fn leaf_lines_round_trip_through_placement() {
    let dump = leaf_dump(2);
    assert_eq!(dump.lines().count(), 400);
    for line in dump.lines() {
        let (placement, mv) = line.split_at(64);
        let board = Board::from_placement(placement).unwrap();
        assert_eq!(board.count_pieces(), START_PIECE_CNT);
        assert!(mv.starts_with("|MOVE("));
        assert!(mv.ends_with(')'));
    }
}

#[test]
fn diff_of_leaf_dumps_renders() {
    let dump = leaf_dump(1);
    let first = dump.lines().next().unwrap();
    let input = format!("1c1\n< {}\n---\n> {}\n", first, first);
    let mut out = Vec::new();
    assert_eq!(diff::render(input.as_bytes(), &mut out).unwrap(), 2);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("---------------------------------").count(), 18);
}

#[test]
fn validator_ignores_leaf_lines() {
    let dump = leaf_dump(1);
    let mut out = Vec::new();
    assert_eq!(validator::check_lines(dump.as_bytes(), &mut out).unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn decoder_reads_generated_moves() {
    let mv = Move::new(Piece::WhiteKnight, SQ::G1, SQ::F3, Piece::None);
    let text = packed::describe(mv.to_packed());
    assert!(text.contains("From : g1\n"));
    assert!(text.contains("To   : f3\n"));
    assert!(text.contains("Flags: NONE\n"));

    let promo = Move::promoting(Piece::WhitePawn, SQ::H7, SQ::H8, Piece::None, Piece::WhiteKnight);
    let text = packed::describe_arg(&promo.to_packed().0.to_string()).unwrap();
    assert!(text.contains("Flags: promo\n"));
    assert!(text.ends_with("Promo: N\n"));
}

#[test]
fn bitboard_of_start_occupancy() {
    let occupied = Board::start_pos().occupied();
    let text = bitboard::describe(occupied.0);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], occupied.0.to_string());
    assert_eq!(lines[2], "| * | * | * | * | * | * | * | * |");
    assert_eq!(lines[8], "|   |   |   |   |   |   |   |   |");
}

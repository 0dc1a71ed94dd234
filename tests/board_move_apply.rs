use mailbox_perft::board::ledger::Ledger;
use mailbox_perft::core::piece_move::Move;
use mailbox_perft::{Board, Piece, PieceType, Player, SQ};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Applies and undoes every pseudo-legal move down to `depth` plies, checking that each undo
/// restores the board exactly.
fn apply_undo_tree(board: &mut Board, player: Player, ledger: &mut Ledger, depth: u16) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut visited = 0;
    for mv in board.generate_moves(player, ledger).iter() {
        if mv.captured.type_of() == PieceType::K {
            continue;
        }
        let before = *board;
        ledger.push(*mv);
        board.apply_move(mv);
        assert_ne!(*board, before);
        visited += apply_undo_tree(board, !player, ledger, depth - 1);
        board.undo_move(mv);
        ledger.pop();
        assert_eq!(*board, before, "undo of {} did not restore the board", mv);
    }
    visited
}

#[test]
fn undo_restores_within_four_plies() {
    let mut board = Board::start_pos();
    let mut ledger = Ledger::default();
    let visited = apply_undo_tree(&mut board, Player::White, &mut ledger, 4);
    assert!(visited >= 197_281);
    assert_eq!(board, Board::start_pos());
    assert!(ledger.is_empty());
}

#[test]
fn random_moves() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..20 {
        let mut board = Board::start_pos();
        let mut ledger = Ledger::default();
        let mut player = Player::White;
        for _ in 0..80 {
            let moves: Vec<Move> = board
                .generate_moves(player, &ledger)
                .iter()
                .filter(|m| m.captured.type_of() != PieceType::K)
                .copied()
                .collect();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.apply_move(&mv);
            ledger.push(mv);
            assert!(board.validate().is_ok(), "{}", board);
            player = !player;
        }
        while let Some(mv) = ledger.pop() {
            board.undo_move(&mv);
        }
        assert_eq!(board, Board::start_pos());
    }
}

#[test]
fn en_passant_apply_and_undo() {
    let mut board = Board::start_pos();
    let mut ledger = Ledger::default();
    let opening = [
        Move::new(Piece::WhitePawn, SQ::E2, SQ::E4, Piece::None),
        Move::new(Piece::BlackPawn, SQ::A7, SQ::A6, Piece::None),
        Move::new(Piece::WhitePawn, SQ::E4, SQ::E5, Piece::None),
        Move::new(Piece::BlackPawn, SQ::D7, SQ::D5, Piece::None),
    ];
    for mv in opening.iter() {
        board.apply_move(mv);
        ledger.push(*mv);
    }
    let before = board;

    let moves = board.generate_moves(Player::White, &ledger);
    let ep = *moves.iter().find(|m| m.is_en_passant()).unwrap();
    assert_eq!(ep.src, SQ::E5);
    assert_eq!(ep.dst, SQ::D6);
    assert_eq!(ep.ep_victim, Some(SQ::D5));

    board.apply_move(&ep);
    assert_eq!(board.piece_at(SQ::D6), Piece::WhitePawn);
    assert!(board.piece_at(SQ::D5).is_none());
    assert!(board.piece_at(SQ::E5).is_none());
    assert_eq!(board.count_pieces(), 31);

    board.undo_move(&ep);
    assert_eq!(board, before);
    assert_eq!(board.piece_at(SQ::D5), Piece::BlackPawn);
    assert!(board.piece_at(SQ::D6).is_none());
}

#[test]
#[should_panic]
fn en_passant_without_victim_panics() {
    let mut board = Board::start_pos();
    let mv = Move::en_passant(Piece::WhitePawn, SQ::E2, SQ::D3, Piece::BlackPawn, SQ::D2);
    board.apply_move(&mv);
}

#[test]
#[should_panic]
fn promotion_and_en_passant_together_panics() {
    let mut board = Board::start_pos();
    let mut mv = Move::promoting(Piece::WhitePawn, SQ::E2, SQ::E3, Piece::None, Piece::WhiteQueen);
    mv.ep_victim = Some(SQ::D2);
    board.apply_move(&mv);
}

use mailbox_perft::board::ledger::Ledger;
use mailbox_perft::board::perft::divide;
use mailbox_perft::core::piece_move::{Move, MoveTraits};
use mailbox_perft::{Board, Piece, PieceType, Player, SQ};

fn board_with(pieces: &[(SQ, Piece)]) -> Board {
    let mut b = Board::empty();
    for &(sq, p) in pieces {
        b.set_piece(sq, p);
    }
    b
}

#[test]
fn test_opening_position() {
    let b = Board::start_pos();
    let moves = b.generate_moves(Player::White, &Ledger::default());
    assert_eq!(moves.len(), (8 * 2) + (2 * 2));
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn legal_opening_moves() {
    let b = Board::start_pos();
    let ledger = Ledger::default();
    assert_eq!(b.legal_moves(Player::White, &ledger).len(), 20);
    assert_eq!(b.legal_moves(Player::Black, &ledger).len(), 20);
}

#[test]
fn legal_moves_skip_pinned_bishop() {
    let b = board_with(&[
        (SQ::A1, Piece::WhiteKing),
        (SQ::B2, Piece::WhiteBishop),
        (SQ::E5, Piece::BlackBishop),
        (SQ::A3, Piece::BlackKnight),
        (SQ::H5, Piece::BlackKing),
    ]);
    let ledger = Ledger::default();
    let legal = b.legal_moves(Player::White, &ledger);
    let has = |src: SQ, dst: SQ| legal.iter().any(|m| m.src == src && m.dst == dst);

    assert!(!has(SQ::B2, SQ::A3));
    assert!(!has(SQ::B2, SQ::C1));
    assert!(has(SQ::B2, SQ::C3));
    assert!(has(SQ::B2, SQ::E5));
    assert!(legal.len() < b.generate_moves(Player::White, &ledger).len());
    for mv in legal.iter() {
        let mut after = b;
        after.apply_move(mv);
        assert!(!after.in_check(Player::White));
    }
}

#[test]
fn promotions_come_in_fours() {
    let b = board_with(&[
        (SQ::E1, Piece::WhiteKing),
        (SQ::B7, Piece::WhitePawn),
        (SQ::A8, Piece::BlackRook),
        (SQ::H5, Piece::BlackKing),
    ]);
    let moves = b.generate_moves(Player::White, &Ledger::default());
    let pawn_moves: Vec<&Move> = moves.iter().filter(|m| m.piece == Piece::WhitePawn).collect();
    assert_eq!(pawn_moves.len(), 8);

    for &dst in [SQ::B8, SQ::A8].iter() {
        let to_dst: Vec<&&Move> = pawn_moves.iter().filter(|m| m.dst == dst).collect();
        assert_eq!(to_dst.len(), 4);
        let kinds: Vec<PieceType> = to_dst
            .iter()
            .map(|m| m.promotion.map_or(PieceType::None, |p| p.type_of()))
            .collect();
        assert_eq!(kinds, vec![PieceType::N, PieceType::B, PieceType::R, PieceType::Q]);
        assert!(to_dst.iter().all(|m| m.promotion.map_or(false, |p| p.is_player(Player::White))));
    }

    let captures = pawn_moves.iter().filter(|m| m.dst == SQ::A8);
    assert!(captures.clone().all(|m| m.captured == Piece::BlackRook));
    assert!(captures.clone().all(|m| m.traits() == MoveTraits::CAPTURE | MoveTraits::PROMOTION));
}

#[test]
fn black_promotions() {
    let b = board_with(&[
        (SQ::E8, Piece::BlackKing),
        (SQ::G2, Piece::BlackPawn),
        (SQ::H1, Piece::WhiteKnight),
        (SQ::A4, Piece::WhiteKing),
    ]);
    let moves = b.generate_moves(Player::Black, &Ledger::default());
    assert_eq!(moves.iter().filter(|m| m.dst == SQ::G1 && m.is_promo()).count(), 4);
    assert_eq!(moves.iter().filter(|m| m.dst == SQ::H1 && m.is_promo()).count(), 4);
    assert!(moves
        .iter()
        .filter(|m| m.is_promo())
        .all(|m| m.promotion.map_or(false, |p| p.is_player(Player::Black))));
}

#[test]
fn pinned_capture_counts_zero() {
    let b = board_with(&[
        (SQ::A1, Piece::WhiteKing),
        (SQ::B2, Piece::WhiteBishop),
        (SQ::E5, Piece::BlackBishop),
        (SQ::A3, Piece::BlackKnight),
        (SQ::H5, Piece::BlackKing),
    ]);
    let split = divide(&b, Player::White, 1);
    let count = |src: SQ, dst: SQ| {
        split
            .iter()
            .find(|(m, _)| m.src == src && m.dst == dst)
            .map(|(_, n)| *n)
    };

    assert_eq!(count(SQ::B2, SQ::A3), Some(0));
    assert_eq!(count(SQ::B2, SQ::C1), Some(0));
    assert_eq!(count(SQ::B2, SQ::C3), Some(1));
    assert_eq!(count(SQ::B2, SQ::D4), Some(1));
    assert_eq!(count(SQ::B2, SQ::E5), Some(1));
}

#[test]
fn en_passant_needs_double_push_and_neighbour() {
    let b = board_with(&[
        (SQ::E1, Piece::WhiteKing),
        (SQ::E8, Piece::BlackKing),
        (SQ::E5, Piece::WhitePawn),
        (SQ::B5, Piece::WhitePawn),
        (SQ::D5, Piece::BlackPawn),
    ]);

    let mut double = Ledger::default();
    double.push(Move::new(Piece::BlackPawn, SQ::D7, SQ::D5, Piece::None));
    let ep: Vec<Move> = b
        .generate_moves(Player::White, &double)
        .iter()
        .filter(|m| m.is_en_passant())
        .copied()
        .collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].src, SQ::E5);
    assert_eq!(ep[0].dst, SQ::D6);

    let mut single = Ledger::default();
    single.push(Move::new(Piece::BlackPawn, SQ::D6, SQ::D5, Piece::None));
    assert!(!b.generate_moves(Player::White, &single).iter().any(|m| m.is_en_passant()));

    assert!(!b
        .generate_moves(Player::White, &Ledger::default())
        .iter()
        .any(|m| m.is_en_passant()));
}

#[test]
fn en_passant_blocked_destination() {
    let b = board_with(&[
        (SQ::E1, Piece::WhiteKing),
        (SQ::E8, Piece::BlackKing),
        (SQ::E4, Piece::BlackPawn),
        (SQ::D4, Piece::WhitePawn),
        (SQ::D3, Piece::WhiteKnight),
    ]);
    let mut ledger = Ledger::default();
    ledger.push(Move::new(Piece::WhitePawn, SQ::D2, SQ::D4, Piece::None));
    assert!(!b.generate_moves(Player::Black, &ledger).iter().any(|m| m.is_en_passant()));
}

#[test]
fn generated_moves_belong_to_mover() {
    let b = Board::start_pos();
    for &player in [Player::White, Player::Black].iter() {
        for mv in b.generate_moves(player, &Ledger::default()).iter() {
            assert!(mv.piece.is_player(player));
            assert!(!mv.captured.is_player(player));
            assert_eq!(b.piece_at(mv.src), mv.piece);
        }
    }
}

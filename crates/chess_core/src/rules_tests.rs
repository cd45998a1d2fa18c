use super::*;

fn board(placement: &str) -> Board {
    Board::from_placement(placement).unwrap()
}

#[test]
fn initial_position_is_quiet() {
    let b = Board::initial();
    for color in Color::ALL {
        assert!(!is_check(&b, color));
        assert!(!is_checkmate(&b, color));
        assert!(!is_stalemate(&b, color));
        assert_eq!(game_status(&b, color), GameStatus::InProgress);
    }
}

#[test]
fn scholars_mate_is_checkmate() {
    let b = board("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR");
    assert!(is_check(&b, Color::Black));
    assert!(is_checkmate(&b, Color::Black));
    assert!(!is_stalemate(&b, Color::Black));
    assert!(!is_check(&b, Color::White));
    assert_eq!(game_status(&b, Color::Black), GameStatus::Checkmate);
}

#[test]
fn fools_mate_is_checkmate() {
    let b = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR");
    assert!(is_checkmate(&b, Color::White));
    assert!(!is_stalemate(&b, Color::White));
}

#[test]
fn back_rank_mate() {
    let b = board("R5k1/5ppp/8/8/8/8/8/6K1");
    assert!(is_checkmate(&b, Color::Black));
    assert!(!is_checkmate(&b, Color::White));
}

#[test]
fn check_with_escape_is_not_mate() {
    // Same back-rank pattern but h7 is free for the king.
    let b = board("R5k1/5pp1/8/8/8/8/8/6K1");
    assert!(is_check(&b, Color::Black));
    assert!(!is_checkmate(&b, Color::Black));
    assert_eq!(game_status(&b, Color::Black), GameStatus::Check);
}

#[test]
fn lone_king_stalemates() {
    let corner = board("k7/2K5/1Q6/8/8/8/8/8");
    assert!(is_stalemate(&corner, Color::Black));
    assert!(!is_checkmate(&corner, Color::Black));
    assert!(!is_check(&corner, Color::Black));

    let edge = board("7k/5Q2/6K1/8/8/8/8/8");
    assert!(is_stalemate(&edge, Color::Black));
    assert_eq!(game_status(&edge, Color::Black), GameStatus::Stalemate);
    // White still has moves in the same position.
    assert!(!is_stalemate(&edge, Color::White));
}

#[test]
fn pawn_endgame_stalemate() {
    let b = board("6k1/6P1/6K1/8/8/8/8/8");
    assert!(is_stalemate(&b, Color::Black));
}

#[test]
fn missing_king_is_never_in_check() {
    let b = board("8/8/8/8/8/8/8/R3K3");
    assert!(!is_check(&b, Color::Black));
    assert!(!is_checkmate(&b, Color::Black));
}

#[test]
fn pawn_attacks_diagonally_only() {
    // Black pawn on d2 attacks e1 and c1, not d1.
    let b = board("4k3/8/8/8/8/8/3p4/4K3");
    assert!(is_check(&b, Color::White));
    let b = board("4k3/8/8/8/8/8/3p4/3K4");
    assert!(!is_check(&b, Color::White));
}

#[test]
fn status_partition_is_exclusive() {
    let boards = [
        Board::initial(),
        board("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR"),
        board("k7/2K5/1Q6/8/8/8/8/8"),
        board("R5k1/5pp1/8/8/8/8/8/6K1"),
    ];
    for b in &boards {
        for color in Color::ALL {
            let mate = is_checkmate(b, color);
            let stale = is_stalemate(b, color);
            assert!(!(mate && stale));
            let status = game_status(b, color);
            assert_eq!(status == GameStatus::Checkmate, mate);
            assert_eq!(status == GameStatus::Stalemate, stale);
            assert_eq!(status.is_terminal(), mate || stale);
        }
    }
}

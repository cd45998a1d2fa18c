use super::*;

fn sq(label: &str) -> Square {
    label.parse().unwrap()
}

fn board(placement: &str) -> Board {
    Board::from_placement(placement).unwrap()
}

#[test]
fn test_startpos_moves() {
    let b = Board::initial();
    let moves = all_legal_moves(&b, Color::White);
    // 8 single pushes, 8 double pushes, 4 knight moves
    assert_eq!(moves.len(), 20);
    assert_eq!(all_legal_moves(&b, Color::Black).len(), 20);
}

#[test]
fn pawn_single_and_double_push() {
    let b = Board::initial();
    assert_eq!(pseudo_legal_moves(&b, sq("e2")), vec![sq("e3"), sq("e4")]);
    assert_eq!(pseudo_legal_moves(&b, sq("d7")), vec![sq("d6"), sq("d5")]);
}

#[test]
fn pawn_double_push_needs_both_squares_empty() {
    // Blocked directly in front: no moves at all.
    let blocked = board("4k3/8/8/8/8/4n3/4P3/4K3");
    assert!(pseudo_legal_moves(&blocked, sq("e2")).is_empty());

    // Blocked two squares ahead: single push only.
    let half = board("4k3/8/8/8/4n3/8/4P3/4K3");
    assert_eq!(pseudo_legal_moves(&half, sq("e2")), vec![sq("e3")]);

    // Off the start row there is no double push.
    let moved = board("4k3/8/8/8/8/4P3/8/4K3");
    assert_eq!(pseudo_legal_moves(&moved, sq("e3")), vec![sq("e4")]);
}

#[test]
fn pawn_captures_only_enemy_pieces_diagonally() {
    let b = board("4k3/8/8/8/3p1N2/4P3/8/4K3");
    // d4 enemy pawn is capturable, f4 own knight is not; e4 is free.
    assert_eq!(pseudo_legal_moves(&b, sq("e3")), vec![sq("e4"), sq("d4")]);

    // Nothing straight ahead can be captured.
    let head_on = board("4k3/8/8/8/4p3/4P3/8/4K3");
    assert!(pseudo_legal_moves(&head_on, sq("e3")).is_empty());
}

#[test]
fn knight_moves_in_generation_order() {
    let b = Board::initial();
    assert_eq!(pseudo_legal_moves(&b, sq("b1")), vec![sq("a3"), sq("c3")]);
    // Corner knight on an empty board has two targets.
    let corner = board("4k3/8/8/8/8/8/8/N3K3");
    assert_eq!(pseudo_legal_moves(&corner, sq("a1")), vec![sq("b3"), sq("c2")]);
}

#[test]
fn sliders_stop_at_blockers() {
    // Rook a1, own pawn a3, enemy knight d1.
    let b = board("4k3/8/8/8/8/P7/8/R2nK3");
    let moves = pseudo_legal_moves(&b, sq("a1"));
    assert_eq!(moves, vec![sq("a2"), sq("b1"), sq("c1"), sq("d1")]);
    assert!(!moves.contains(&sq("a3")));
    assert!(!moves.contains(&sq("e1")));
}

#[test]
fn queen_on_open_board_reaches_27_squares() {
    let b = board("k7/8/8/8/3Q4/8/8/7K");
    assert_eq!(pseudo_legal_moves(&b, sq("d4")).len(), 27);
    let bishop = board("k7/8/8/8/3B4/8/8/7K");
    assert_eq!(pseudo_legal_moves(&bishop, sq("d4")).len(), 13);
}

#[test]
fn king_never_targets_own_pieces() {
    let b = Board::initial();
    assert!(pseudo_legal_moves(&b, sq("e1")).is_empty());
    let open = board("8/8/8/8/8/8/3PP3/3K4");
    let moves = pseudo_legal_moves(&open, sq("d1"));
    assert_eq!(moves, vec![sq("c2"), sq("c1"), sq("e1")]);
}

#[test]
fn empty_square_generates_nothing() {
    let b = Board::initial();
    assert!(pseudo_legal_moves(&b, sq("e4")).is_empty());
    assert!(legal_moves(&b, sq("e4"), Color::White).is_empty());
}

#[test]
fn wrong_color_yields_no_legal_moves() {
    let b = Board::initial();
    assert!(legal_moves(&b, sq("e7"), Color::White).is_empty());
    assert!(!is_valid_move(&b, sq("e7"), sq("e5"), Color::White));
    assert!(is_valid_move(&b, sq("e7"), sq("e5"), Color::Black));
}

#[test]
fn pinned_piece_cannot_expose_king() {
    // White bishop e2 pinned on the e-file by the black rook e8.
    let b = board("4r1k1/8/8/8/8/8/4B3/4K3");
    assert!(!pseudo_legal_moves(&b, sq("e2")).is_empty());
    assert!(legal_moves(&b, sq("e2"), Color::White).is_empty());
    assert!(!is_valid_move(&b, sq("e2"), sq("d3"), Color::White));
}

#[test]
fn king_cannot_step_into_attack() {
    // Black rook on d8 covers the d-file.
    let b = board("3r2k1/8/8/8/8/8/8/4K3");
    let moves = legal_moves(&b, sq("e1"), Color::White);
    assert!(!moves.contains(&sq("d1")));
    assert!(!moves.contains(&sq("d2")));
    assert!(moves.contains(&sq("e2")));
    assert!(moves.contains(&sq("f1")));
}

#[test]
fn must_answer_check() {
    // White in check from the rook on e8; the knight can only help by
    // blocking on e5.
    let b = board("4r1k1/8/8/8/8/5N2/8/4K3");
    let knight = legal_moves(&b, sq("f3"), Color::White);
    assert_eq!(knight, vec![sq("e5")]);
    let all = all_legal_moves(&b, Color::White);
    assert!(all.iter().all(|mv| {
        let next = b.relocate(mv.from, mv.to);
        !crate::rules::is_check(&next, Color::White)
    }));
}

#[test]
fn legal_moves_do_not_mutate_board() {
    let b = board("4r1k1/8/8/8/8/5N2/4B3/4K3");
    let snapshot = b;
    let _ = legal_moves(&b, sq("e2"), Color::White);
    let _ = all_legal_moves(&b, Color::White);
    let _ = has_legal_move(&b, Color::Black);
    assert_eq!(b, snapshot);
}

#[test]
fn legal_is_subset_of_pseudo_legal() {
    let b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
    for color in Color::ALL {
        for (from, pc) in b.pieces() {
            if pc.color != color {
                continue;
            }
            let pseudo = pseudo_legal_moves(&b, from);
            for to in legal_moves(&b, from, color) {
                assert!(pseudo.contains(&to));
            }
        }
    }
}

#[test]
fn off_board_squares_have_no_moves() {
    let b = Board::initial();
    let far = Square { row: 8, col: 0 };
    assert!(pseudo_legal_moves(&b, far).is_empty());
    assert!(legal_moves(&b, far, Color::White).is_empty());
    assert!(!is_valid_move(&b, far, sq("a3"), Color::White));
    assert!(!is_valid_move(&b, sq("e2"), Square { row: 4, col: 12 }, Color::White));
}

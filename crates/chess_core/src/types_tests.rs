use super::*;

#[test]
fn square_labels_follow_display_orientation() {
    assert_eq!(Square::new(0, 0).unwrap().label(), "a8");
    assert_eq!(Square::new(7, 7).unwrap().label(), "h1");
    assert_eq!(Square::new(6, 4).unwrap().to_string(), "e2");
}

#[test]
fn square_parses_labels() {
    let sq: Square = "e2".parse().unwrap();
    assert_eq!(sq, Square { row: 6, col: 4 });
    assert!("i1".parse::<Square>().is_err());
    assert!("a9".parse::<Square>().is_err());
    assert!("a".parse::<Square>().is_err());
}

#[test]
fn square_offset_respects_bounds() {
    let corner = Square::new(0, 0).unwrap();
    assert_eq!(corner.offset(-1, 0), None);
    assert_eq!(corner.offset(0, -1), None);
    assert_eq!(corner.offset(2, 1), Square::new(2, 1));
    assert_eq!(Square::new(8, 0), None);
}

#[test]
fn all_squares_row_major() {
    let squares: Vec<Square> = Square::all().collect();
    assert_eq!(squares.len(), 64);
    assert_eq!(squares[0], Square { row: 0, col: 0 });
    assert_eq!(squares[9], Square { row: 1, col: 1 });
    assert_eq!(squares[63], Square { row: 7, col: 7 });
}

#[test]
fn color_helpers() {
    assert_eq!(Color::White.other(), Color::Black);
    assert_eq!(Color::White.forward(), -1);
    assert_eq!(Color::Black.pawn_start_row(), 1);
    assert_eq!(Color::Black.promotion_row(), 7);
    assert_eq!("Black".parse::<Color>().unwrap(), Color::Black);
    assert!("purple".parse::<Color>().is_err());
}

#[test]
fn piece_symbols_round_trip() {
    for color in Color::ALL {
        for kind in PieceKind::ALL {
            let pc = Piece::new(kind, color);
            assert_eq!(Piece::from_symbol(pc.symbol()), Some(pc));
        }
    }
    assert_eq!(Piece::from_symbol('x'), None);
}

#[test]
fn square_deserialize_rejects_off_board() {
    let sq: Square = serde_json::from_str(r#"{"row":6,"col":4}"#).unwrap();
    assert_eq!(sq, Square::new(6, 4).unwrap());
    assert!(serde_json::from_str::<Square>(r#"{"row":12,"col":3}"#).is_err());
    assert!(serde_json::from_str::<Square>(r#"{"row":0,"col":8}"#).is_err());
}

#[test]
fn off_board_square_is_inert() {
    let far = Square { row: 8, col: 0 };
    assert!(!far.is_on_board());
    assert_eq!(far.offset(-1, 0), None);
    assert_eq!(Square { row: 200, col: 200 }.label(), "(200,200)");
}

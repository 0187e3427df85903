use ortho_draughts::{evaluate, Color, Position, START_POSITION};

fn pos(encoding: &str, side: Color) -> Position {
    Position::from_encoding(encoding, 8, 8, side)
}

#[test]
fn test_opening_is_level() {
    let start = pos(START_POSITION, Color::Black);
    assert_eq!(evaluate(&start, Color::Black), 0, "Initial position should be 0");
    assert_eq!(evaluate(&start, Color::Yellow), 0);
}

#[test]
fn test_perspective_flips_sign() {
    let p = pos("8/1yy2y2/3y4/2b1b3/8/1bb5/5B2/8", Color::Yellow);
    assert_eq!(evaluate(&p, Color::Yellow), -evaluate(&p, Color::Black));
    assert_ne!(evaluate(&p, Color::Yellow), 0);
}

#[test]
fn test_advanced_pawn_is_worth_more() {
    let home = pos("8/y7/8/8/8/8/8/7b", Color::Yellow);
    let advanced = pos("8/8/8/8/y7/8/8/7b", Color::Yellow);
    assert!(evaluate(&advanced, Color::Yellow) > evaluate(&home, Color::Yellow));

    let home = pos("8/8/8/8/8/8/b7/y7", Color::Black);
    let advanced = pos("8/8/b7/8/8/8/8/y7", Color::Black);
    assert!(evaluate(&advanced, Color::Black) > evaluate(&home, Color::Black));
}

#[test]
fn test_king_outweighs_pawn() {
    // Both sides keep a pawn, so material scoring applies
    let pawn = pos("yy6/8/8/8/8/8/8/6bb", Color::Yellow);
    let king = pos("Yy6/8/8/8/8/8/8/6bb", Color::Yellow);
    assert_eq!(evaluate(&pawn, Color::Yellow), 0);
    assert_eq!(evaluate(&king, Color::Yellow), (3250 + 1000 - 2000) / 4);
    assert!(evaluate(&king, Color::Yellow) > evaluate(&pawn, Color::Yellow));
}

#[test]
fn test_lone_king_is_scored_by_distance_not_material() {
    // Yellow has only a king: the king side is "stronger" and is penalised
    // for every square it stands away from the black pawn
    let far = pos("Y7/8/8/8/8/8/8/7b", Color::Yellow);
    let near = pos("8/8/8/8/8/8/6Y1/7b", Color::Yellow);
    assert!(evaluate(&far, Color::Yellow) < 0);
    assert!(evaluate(&near, Color::Yellow) > evaluate(&far, Color::Yellow));
}

#[test]
fn test_material_normalised_by_piece_count() {
    // Two yellow pawns against one black pawn, all on their back ranks
    let p = pos("yy6/8/8/8/8/8/8/7b", Color::Yellow);
    assert_eq!(evaluate(&p, Color::Yellow), (2000 - 1000) / 3);
}

#[test]
fn test_stronger_king_side_wants_to_close_in() {
    let near = pos("YYB5/8/8/8/8/8/8/8", Color::Yellow);
    let far = pos("YY6/8/8/8/8/8/8/7B", Color::Yellow);
    assert!(evaluate(&near, Color::Yellow) > evaluate(&far, Color::Yellow));
    // and the lone king prefers to stay away
    assert!(evaluate(&far, Color::Black) > evaluate(&near, Color::Black));
}

#[test]
fn test_equal_king_endings_are_level() {
    let p = pos("Y7/8/8/8/8/8/8/7B", Color::Black);
    assert_eq!(evaluate(&p, Color::Black), 0);
}

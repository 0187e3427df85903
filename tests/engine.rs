use ortho_draughts::{Color, Engine, GameConfig, GameError, Square};

fn engine(depth: u8) -> Engine {
    Engine::new(GameConfig::new().search_depth(depth).cache_capacity(1 << 14)).expect("valid config")
}

#[test]
fn test_default_game_setup() {
    let engine = engine(2);
    assert_eq!(engine.position().side_to_move(), Color::Black);
    assert_eq!(engine.legal_moves().len(), 8);
    assert_eq!(engine.counts().total(), 32);
    assert!(engine.legal_moves_from(Square::new(4, 6)).is_empty());
    assert_eq!(engine.legal_moves_from(Square::new(4, 5)).len(), 1);
}

#[test]
fn test_invalid_config_rejected() {
    let err = Engine::new(GameConfig::new().width(40)).err();
    assert!(matches!(err, Some(GameError::InvalidConfig { .. })));
}

#[test]
fn test_search_zero_is_evaluate() {
    let mut engine = engine(2);
    let eval = engine.evaluate();
    assert_eq!(engine.search(0), eval);
}

#[test]
fn test_engine_move_commits_and_fills_cache() {
    let mut engine = engine(3);
    let (mv, counts) = engine
        .play_best_move()
        .expect("engine move is legal")
        .expect("black can move");
    assert_eq!(mv.from().y, 5);
    assert_eq!(counts.total(), 32);
    assert_eq!(engine.position().side_to_move(), Color::Yellow);
    assert!(engine.cache_len() > 0);
}

#[test]
fn test_self_play_conserves_pieces() {
    let mut engine = engine(2);
    let mut total = engine.counts().total();
    for _ in 0..16 {
        let Some((mv, counts)) = engine.play_best_move().unwrap() else {
            break;
        };
        assert_eq!(counts.total(), total - mv.captured().len() as u32);
        total = counts.total();
        if counts.winner().is_some() {
            break;
        }
    }
}

#[test]
fn test_loaded_position_is_played_out() {
    let mut engine = engine(2);
    engine.load("y7/b7/8/8/8/8/8/8", Color::Yellow);
    let (mv, counts) = engine.play_best_move().unwrap().expect("capture available");
    assert!(mv.is_capture());
    assert_eq!(counts.winner(), Some(Color::Yellow));
    assert!(engine.play_best_move().unwrap().is_none(), "black has no moves left");
}

#[test]
fn test_host_click_routing() {
    let mut engine = engine(2);
    assert!(engine.play(Square::new(2, 5), Square::new(2, 3)).is_err());
    engine.play(Square::new(2, 5), Square::new(2, 4)).expect("single step");
    assert_eq!(engine.position().side_to_move(), Color::Yellow);
    engine.initialize_turn();
    assert_eq!(engine.legal_moves().len(), 8);
}

//! End-to-end scenarios through the public facade

use brick_tetris::core::{can_place, scan_and_clear, Field, Figure, Game, GameSnapshot};
use brick_tetris::types::{
    ShapeKind, Stage, UserAction, EMPTY, FIELD_HEIGHT, FIELD_WIDTH, MAX_LEVEL,
};

#[test]
fn test_every_shape_fits_at_spawn() {
    let field = Field::new();
    for kind in ShapeKind::ALL {
        assert!(can_place(&field, &Figure::spawn(kind), 0, 0, 0), "{:?}", kind);
    }
}

#[test]
fn test_o_dropped_to_floor() {
    let mut game = Game::with_seed(12345);
    game.set_next_shape(ShapeKind::O);
    game.action(UserAction::Start, false);

    for _ in 0..FIELD_HEIGHT - 2 {
        game.action(UserAction::Down, false);
        assert_eq!(game.pieces(), 0);
    }
    assert_eq!(game.active().unwrap().y, FIELD_HEIGHT as i8 - 2);

    // Blocked: the figure settles and the next one spawns.
    game.action(UserAction::Down, false);

    let field = game.field();
    assert_eq!(field.occupied(), 4);
    for (x, y) in [(3, 18), (4, 18), (3, 19), (4, 19)] {
        assert_eq!(field.get(x, y), Ok(ShapeKind::O.color()));
    }
    assert_eq!(game.lines(), 0);
    assert_eq!(game.score(), 0);

    let mut settled = field.clone();
    assert_eq!(scan_and_clear(&mut settled), Ok(0));
}

#[test]
fn test_single_gap_filled_clears_one_line() {
    let mut field = Field::new();
    for x in 1..FIELD_WIDTH as i32 {
        field.set(x, 19, 2).unwrap();
    }

    let mut game = Game::with_seed(77).with_field(field);
    game.set_next_shape(ShapeKind::J);
    game.action(UserAction::Start, false);
    for _ in 0..3 {
        game.action(UserAction::Left, false);
    }
    assert_eq!(game.active().unwrap().x, 0);

    game.action(UserAction::Down, true);

    assert_eq!(game.lines(), 1);
    assert_eq!(game.score(), 100);
    assert_eq!(game.high_score(), 100);

    // The J's upper row drops into the cleared row.
    let color = ShapeKind::J.color();
    assert_eq!(game.field().row(19)[..4], [color, color, color, EMPTY]);
    assert_eq!(game.field().occupied(), 3);
    assert_eq!(game.stage(), Stage::Moving);
}

#[test]
fn test_full_row_clears_and_shifts() {
    let mut field = Field::new();
    for x in 0..FIELD_WIDTH as i32 {
        field.set(x, 10, 1).unwrap();
    }
    field.set(6, 9, 4).unwrap();

    assert_eq!(scan_and_clear(&mut field), Ok(1));
    assert_eq!(field.get(6, 10), Ok(4));
    assert_eq!(field.occupied(), 1);
    assert!(field.row(0).iter().all(|&c| c == EMPTY));
}

#[test]
fn test_snapshot_is_consistent() {
    let mut game = Game::with_seed(11);
    game.set_high_score(900);
    game.set_next_shape(ShapeKind::T);
    game.action(UserAction::Start, false);
    game.set_next_shape(ShapeKind::I);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.occupied(), 4);
    assert_eq!(snapshot.field[0][4], ShapeKind::T.color());
    assert_eq!(snapshot.next[0], [1, 1, 1, 1]);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.high_score, 900);
    assert_eq!(snapshot.level, 1);
    assert_eq!(snapshot.speed, 1000);
    assert!(!snapshot.paused);

    let mut reused = GameSnapshot::default();
    game.snapshot_into(&mut reused);
    assert_eq!(reused, snapshot);
}

#[test]
fn test_random_play_keeps_invariants() {
    let mut game = Game::with_seed(2024);
    game.action(UserAction::Start, false);

    let script = [
        UserAction::Left,
        UserAction::Action,
        UserAction::Right,
        UserAction::Right,
        UserAction::Down,
    ];
    let mut last_score = 0;
    let mut steps = 0;
    while !game.game_over() && steps < 20_000 {
        game.action(script[steps % script.len()], steps % 7 == 0);
        game.tick();

        assert!(game.score() >= last_score);
        assert!(game.level() <= MAX_LEVEL);
        assert!(game.high_score() >= game.score());
        assert!(game.field().cells().iter().all(|&c| c <= 7));
        last_score = game.score();
        steps += 1;
    }
    assert!(game.pieces() > 0);
}

//! Tests for movement resolution on the standard board.

use strictly_ladders::{BoardTopology, DieFace, OutcomeKind, Square, resolve};

fn sq(n: u8) -> Square {
    Square::new(n).expect("on-board square")
}

fn die(n: u8) -> DieFace {
    DieFace::new(n).expect("die face")
}

#[test]
fn test_resolver_is_deterministic() {
    let board = BoardTopology::standard();
    for current in 1..=94 {
        for face in DieFace::ALL {
            let first = resolve(sq(current), face, board);
            let second = resolve(sq(current), face, board);
            assert_eq!(first.new_square(), second.new_square());
            assert_eq!(first.kind(), second.kind());
        }
    }
}

#[test]
fn test_overshoot_boundary() {
    let board = BoardTopology::standard();

    let stuck = resolve(sq(95), die(6), board);
    assert_eq!(stuck.new_square(), sq(95));
    assert_eq!(stuck.kind(), OutcomeKind::Overshoot);

    let home = resolve(sq(94), die(6), board);
    assert_eq!(home.new_square(), Square::FINISH);
    assert!(home.is_win());
}

#[test]
fn test_snake_precedence() {
    let r = resolve(sq(10), die(6), BoardTopology::standard());
    assert_eq!(r.new_square(), sq(6));
    assert_eq!(r.kind(), OutcomeKind::SnakeBite);
}

#[test]
fn test_ladder_from_start() {
    let r = resolve(Square::START, die(1), BoardTopology::standard());
    assert_eq!(r.new_square(), sq(38));
    assert_eq!(r.kind(), OutcomeKind::LadderClimb);
}

#[test]
fn test_table_never_chains() {
    let board = BoardTopology::standard();
    for (head, tail) in board.snakes() {
        assert!(board.redirect(tail).is_none(), "snake {} -> {} chains", head, tail);
    }
    for (foot, top) in board.ladders() {
        assert!(board.redirect(top).is_none(), "ladder {} -> {} chains", foot, top);
    }
}

#[test]
fn test_every_roll_applies_at_most_one_redirect() {
    let board = BoardTopology::standard();
    for current in 0..=99 {
        for face in DieFace::ALL {
            let r = resolve(sq(current), face, board);
            match r.kind() {
                OutcomeKind::Overshoot => assert_eq!(r.new_square(), sq(current)),
                OutcomeKind::PlainMove => {
                    assert_eq!(Some(r.new_square()), r.landed());
                    assert!(board.redirect(r.new_square()).is_none());
                }
                OutcomeKind::SnakeBite => {
                    let landed = r.landed().expect("snake needs a landing square");
                    assert_eq!(board.snake_target(landed), Some(r.new_square()));
                    assert!(r.new_square() < landed);
                }
                OutcomeKind::LadderClimb => {
                    let landed = r.landed().expect("ladder needs a landing square");
                    assert_eq!(board.ladder_target(landed), Some(r.new_square()));
                    assert!(r.new_square() > landed);
                }
            }
        }
    }
}

#[test]
fn test_snake_never_wins() {
    let board = BoardTopology::standard();
    for current in 0..=99 {
        for face in DieFace::ALL {
            let r = resolve(sq(current), face, board);
            if r.is_win() {
                assert_ne!(r.kind(), OutcomeKind::SnakeBite);
                assert_eq!(r.new_square(), Square::FINISH);
            }
        }
    }
}

//! Tests for the session turn cycle.

use strictly_ladders::{
    DieFace, GameSession, OutcomeKind, PlayerCount, PlayerId, RandomDie, RollState, ScriptedDie,
    SessionError, Square, TurnPhase, WELCOME_MESSAGE,
};

fn face(n: u8) -> DieFace {
    DieFace::new(n).expect("die face")
}

#[test]
fn test_turns_cycle_with_three_players() {
    let mut session = GameSession::new(PlayerCount::new(3).unwrap());
    let first = session.current_player();

    // 2, 3, 5 land on plain squares from the start.
    let mut die = ScriptedDie::new([2, 3, 5]);
    for _ in 0..3 {
        let record = session.play_turn(&mut die).expect("turn commits");
        assert!(!record.resolution().is_win());
    }

    assert_eq!(session.current_player(), first);
    assert_eq!(
        session.positions(),
        &[Square::new(2).unwrap(), Square::new(3).unwrap(), Square::new(5).unwrap()]
    );
}

#[test]
fn test_terminal_freeze() {
    let mut session = GameSession::default();
    // Player 1 climbs 1 -> 38, walks 42, 48, 54, 60, 66, 72, 78 and takes the
    // ladder at 80 to 100. Player 2 shuffles along the bottom rows.
    let mut die = ScriptedDie::new([1, 2, 4, 1, 6, 1, 6, 1, 6, 1, 6, 1, 6, 1, 6, 1, 2]);
    for _ in 0..17 {
        session.play_turn(&mut die).expect("turn commits");
    }

    assert_eq!(session.winner(), Some(PlayerId::FIRST));
    assert_eq!(session.position(PlayerId::FIRST), Some(Square::FINISH));
    assert_eq!(session.phase(), TurnPhase::Finished);
    assert_eq!(session.status(), "Player 1 wins!");
    let last = session.history().last().expect("history recorded");
    assert_eq!(last.resolution().kind(), OutcomeKind::LadderClimb);

    let frozen = session.snapshot();
    assert!(!session.start_turn());
    assert_eq!(session.settle_turn(face(3)), None);
    assert!(session.play_turn(&mut ScriptedDie::new([1])).is_none());
    assert_eq!(
        session.try_start_turn(),
        Err(SessionError::GameOver(PlayerId::FIRST))
    );
    assert_eq!(session.snapshot(), frozen);
    assert_eq!(session.history().len(), 17);
}

#[test]
fn test_reset_completeness() {
    let mut session = GameSession::default();
    let mut die = RandomDie::seeded(11);
    for _ in 0..10 {
        session.play_turn(&mut die);
    }
    session.start_turn();

    session.reset_with(PlayerCount::new(4).unwrap());
    assert_eq!(session.positions(), &[Square::START; 4]);
    assert_eq!(session.current_player(), PlayerId::FIRST);
    assert_eq!(session.winner(), None);
    assert_eq!(session.phase(), TurnPhase::AwaitingRoll);
    assert_eq!(session.roll_state(), RollState::Idle);
    assert_eq!(session.status(), WELCOME_MESSAGE);
    assert!(session.history().is_empty());
    assert!(!session.is_started());
}

#[test]
fn test_reset_keeps_player_count() {
    let mut session = GameSession::new(PlayerCount::new(3).unwrap());
    session.play_turn(&mut ScriptedDie::new([5]));
    session.reset();
    assert_eq!(session.player_count().get(), 3);
    assert!(session.set_player_count(2), "count unlocks after reset");
}

#[test]
fn test_two_player_ladder_scenario() {
    let mut session = GameSession::new(PlayerCount::new(2).unwrap());
    assert_eq!(session.position(PlayerId::FIRST), Some(Square::START));

    assert!(session.start_turn());
    let record = session.settle_turn(face(1)).expect("turn commits");

    assert_eq!(record.resolution().landed(), Some(Square::new(1).unwrap()));
    assert_eq!(record.resolution().kind(), OutcomeKind::LadderClimb);
    assert_eq!(session.position(PlayerId::FIRST), Some(Square::new(38).unwrap()));
    assert_eq!(
        session.status(),
        "Player 1 landed on a ladder! Climbed up to 38."
    );
    assert_eq!(session.current_player(), PlayerId::new(1));
    assert_eq!(session.die_face(), Some(face(1)));
}

#[test]
fn test_random_games_always_finish_consistently() {
    for seed in 0..20 {
        let mut session = GameSession::new(PlayerCount::new(4).unwrap());
        let mut die = RandomDie::seeded(seed);
        let mut turns = 0;
        while session.winner().is_none() {
            let before = session.positions().to_vec();
            let mover = session.current_player();
            let record = session.play_turn(&mut die).expect("turn commits");
            assert_eq!(*record.player(), mover);
            for (idx, (was, now)) in before.iter().zip(session.positions()).enumerate() {
                if idx != mover.index() {
                    assert_eq!(was, now, "only the mover changes square");
                }
            }
            turns += 1;
            assert!(turns < 100_000, "seed {} never finished", seed);
        }
        assert_eq!(session.history().len(), turns);
    }
}

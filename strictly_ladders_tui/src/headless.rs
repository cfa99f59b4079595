//! Automatic play without a terminal UI.

use anyhow::{Context, Result};
use std::io::Write;
use strictly_ladders::{GameSession, PlayerCount, Roll, RollTiming, TurnRecord, roll_turn};
use tracing::{info, instrument};

/// Plays until someone wins, writing one line per turn to `out`.
///
/// With `json`, the final snapshot follows the turn log.
#[instrument(skip(die, out))]
pub async fn run_headless<R: Roll, W: Write>(
    player_count: PlayerCount,
    die: &mut R,
    timing: RollTiming,
    json: bool,
    out: &mut W,
) -> Result<GameSession> {
    let mut session = GameSession::new(player_count);
    writeln!(out, "{}", session.status())?;

    while session.winner().is_none() {
        let record = roll_turn(&mut session, die, timing, |_, _| {})
            .await
            .context("Turn could not be committed")?;
        writeln!(out, "{}", describe(&record))?;
    }

    if let Some(winner) = session.winner() {
        info!(%winner, turns = session.history().len(), "Headless game finished");
    }

    if json {
        let snapshot = serde_json::to_string_pretty(&session.snapshot())
            .context("Failed to serialize snapshot")?;
        writeln!(out, "{}", snapshot)?;
    }
    Ok(session)
}

/// One log line for a committed turn.
pub fn describe(record: &TurnRecord) -> String {
    let resolution = record.resolution();
    format!(
        "Turn {}: rolled {}. {}",
        record.turn(),
        resolution.steps(),
        resolution.message(*record.player())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_ladders::{PlayerId, ScriptedDie, Square};

    #[tokio::test]
    async fn test_scripted_game_log() {
        let mut die = ScriptedDie::new([1, 2, 4, 1, 6, 1, 6, 1, 6, 1, 6, 1, 6, 1, 6, 1, 2]);
        let mut out = Vec::new();
        let session = run_headless(
            PlayerCount::default(),
            &mut die,
            RollTiming::instant(),
            false,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(session.winner(), Some(PlayerId::FIRST));
        let log = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines[0], "Roll the dice to start the game!");
        assert_eq!(
            lines[1],
            "Turn 1: rolled 1. Player 1 landed on a ladder! Climbed up to 38."
        );
        assert_eq!(lines.last(), Some(&"Turn 17: rolled 2. Player 1 wins!"));
    }

    #[tokio::test]
    async fn test_json_snapshot_appended() {
        let mut die = strictly_ladders::RandomDie::seeded(8);
        let mut out = Vec::new();
        let session = run_headless(
            PlayerCount::new(3).unwrap(),
            &mut die,
            RollTiming::instant(),
            true,
            &mut out,
        )
        .await
        .unwrap();

        let log = String::from_utf8(out).unwrap();
        let start = log.find('{').expect("json present");
        let snapshot: serde_json::Value = serde_json::from_str(&log[start..]).unwrap();
        let winner = session.winner().unwrap();
        assert_eq!(snapshot["winner"], serde_json::json!(winner.index()));
        assert_eq!(
            snapshot["positions"][winner.index()],
            serde_json::json!(Square::FINISH.value())
        );
        assert_eq!(snapshot["phase"], serde_json::json!("Finished"));
    }
}

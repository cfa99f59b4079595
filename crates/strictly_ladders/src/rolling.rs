//! The timed rolling phase between starting and settling a turn.
//!
//! While the dice tumble a fresh face is sampled every tick for display.
//! Only the face sampled after the phase ends is committed to the session.

use crate::dice::{DieFace, Roll};
use crate::session::{GameSession, TurnRecord};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep_until};
use tracing::{debug, instrument};

/// How long the dice tumble and how often the face changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollTiming {
    /// Length of the rolling phase in milliseconds.
    pub duration_ms: u64,
    /// Interval between displayed faces in milliseconds.
    pub tick_ms: u64,
}

impl RollTiming {
    /// Rolling phase length.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Interval between displayed faces, never zero.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Settles immediately with no intermediate faces.
    pub fn instant() -> Self {
        Self {
            duration_ms: 0,
            tick_ms: 1,
        }
    }
}

impl Default for RollTiming {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            tick_ms: 100,
        }
    }
}

/// Rolls for the current player: starts the turn, tumbles the dice for
/// `timing.duration()`, then commits one final face.
///
/// `on_face` sees the session and each intermediate face; it runs between
/// ticks and cannot change game state. Returns `None` without waiting when
/// the turn cannot start (dice already rolling or game over). Once started
/// the phase always runs to completion.
#[instrument(skip_all, fields(player = %session.current_player()))]
pub async fn roll_turn<R, F>(
    session: &mut GameSession,
    die: &mut R,
    timing: RollTiming,
    mut on_face: F,
) -> Option<TurnRecord>
where
    R: Roll,
    F: FnMut(&GameSession, DieFace),
{
    if !session.start_turn() {
        return None;
    }

    let started = Instant::now();
    let deadline = started + timing.duration();
    let mut ticker = interval_at(started + timing.tick(), timing.tick());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut shown = 0usize;
    loop {
        if ticker.tick().await >= deadline {
            break;
        }
        let face = die.roll();
        session.show_face(face);
        on_face(&*session, face);
        shown += 1;
    }
    sleep_until(deadline).await;

    let face = die.roll();
    debug!(shown, face = face.value(), "Dice settled");
    session.settle_turn(face)
}

//! Application state and key handling.

use crossterm::event::KeyCode;
use strictly_ladders::{GameSession, PlayerCount, RandomDie, RollTiming, TurnPhase};
use tracing::debug;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run the rolling phase for the current player.
    Roll,
    /// Leave the application.
    Quit,
    /// Nothing beyond redrawing.
    Redraw,
}

/// Main application state.
pub struct App {
    session: GameSession,
    die: RandomDie,
    timing: RollTiming,
}

impl App {
    /// Creates a new application.
    pub fn new(player_count: PlayerCount, die: RandomDie, timing: RollTiming) -> Self {
        Self {
            session: GameSession::new(player_count),
            die,
            timing,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Session, die and timing for running a roll.
    pub fn roll_parts(&mut self) -> (&mut GameSession, &mut RandomDie, RollTiming) {
        (&mut self.session, &mut self.die, self.timing)
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.session.phase() == TurnPhase::AwaitingRoll {
                    Action::Roll
                } else {
                    Action::Redraw
                }
            }
            KeyCode::Char('r') => {
                debug!("Restarting game");
                self.session.reset();
                Action::Redraw
            }
            KeyCode::Char(c @ '2'..='4') => {
                let count = c as u8 - b'0';
                self.session.set_player_count(count);
                Action::Redraw
            }
            _ => Action::Redraw,
        }
    }
}

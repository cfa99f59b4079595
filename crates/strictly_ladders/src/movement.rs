//! Movement resolution: where a roll takes a player.

use crate::board::{BoardTopology, Redirect};
use crate::dice::DieFace;
use crate::player::PlayerId;
use crate::square::Square;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a move played out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum OutcomeKind {
    /// Moved forward onto an ordinary square.
    #[strum(serialize = "plain move")]
    PlainMove,
    /// Landed on a snake head and slid down.
    #[strum(serialize = "snake bite")]
    SnakeBite,
    /// Landed on a ladder foot and climbed up.
    #[strum(serialize = "ladder climb")]
    LadderClimb,
    /// The roll would pass square 100; the player stays put.
    #[strum(serialize = "overshoot")]
    Overshoot,
}

/// Result of resolving one roll for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    origin: Square,
    steps: DieFace,
    landed: Option<Square>,
    new_square: Square,
    kind: OutcomeKind,
    is_win: bool,
}

impl Resolution {
    /// Square the player started on.
    pub fn origin(&self) -> Square {
        self.origin
    }

    /// Die value moved by.
    pub fn steps(&self) -> DieFace {
        self.steps
    }

    /// Square reached before any snake or ladder, `None` on overshoot.
    pub fn landed(&self) -> Option<Square> {
        self.landed
    }

    /// Square the player ends the turn on.
    pub fn new_square(&self) -> Square {
        self.new_square
    }

    /// What happened.
    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    /// Whether the move ends on square 100.
    pub fn is_win(&self) -> bool {
        self.is_win
    }

    /// Status line describing this move for `player`.
    pub fn message(&self, player: PlayerId) -> String {
        let n = player.number();
        if self.is_win {
            return format!("Player {} wins!", n);
        }
        match self.kind {
            OutcomeKind::Overshoot => {
                format!("Player {} can't move beyond 100. Next player's turn.", n)
            }
            OutcomeKind::SnakeBite => format!(
                "Player {} landed on a snake! Moved down to {}.",
                n, self.new_square
            ),
            OutcomeKind::LadderClimb => format!(
                "Player {} landed on a ladder! Climbed up to {}.",
                n, self.new_square
            ),
            OutcomeKind::PlainMove => format!("Player {} moved to {}.", n, self.new_square),
        }
    }
}

/// Resolves a roll of `steps` from `current` on `board`.
///
/// At most one snake or ladder is applied: the square a redirect lands on
/// is never looked up again in the same call.
#[instrument(skip_all, fields(current = current.value(), steps = steps.value()))]
pub fn resolve(current: Square, steps: DieFace, board: &BoardTopology) -> Resolution {
    let Some(tentative) = current.checked_advance(steps.value()) else {
        debug!("Roll overshoots the finish");
        return Resolution {
            origin: current,
            steps,
            landed: None,
            new_square: current,
            kind: OutcomeKind::Overshoot,
            is_win: false,
        };
    };

    let (new_square, kind) = match board.redirect(tentative) {
        Some(Redirect::Snake { tail, .. }) => (tail, OutcomeKind::SnakeBite),
        Some(Redirect::Ladder { top, .. }) => (top, OutcomeKind::LadderClimb),
        None => (tentative, OutcomeKind::PlainMove),
    };

    let resolution = Resolution {
        origin: current,
        steps,
        landed: Some(tentative),
        new_square,
        kind,
        is_win: new_square.is_finish(),
    };
    debug!(
        landed = tentative.value(),
        new_square = new_square.value(),
        %kind,
        is_win = resolution.is_win,
        "Resolved move"
    );
    resolution
}

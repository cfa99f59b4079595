//! Board topology: the fixed snakes and ladders.

use crate::square::Square;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{instrument, warn};

/// Snake heads and the tails they drop to.
const SNAKES: [(u8, u8); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Ladder feet and the tops they climb to.
const LADDERS: [(u8, u8); 9] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

static STANDARD: LazyLock<BoardTopology> =
    LazyLock::new(|| BoardTopology::from_tables(&SNAKES, &LADDERS));

/// A redirection applied when a player lands on a special square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Redirect {
    /// Landed on a snake head, slide to its tail.
    Snake {
        /// Square the snake's head occupies.
        head: Square,
        /// Square the player ends on.
        tail: Square,
    },
    /// Landed on a ladder foot, climb to its top.
    Ladder {
        /// Square the ladder's foot occupies.
        foot: Square,
        /// Square the player ends on.
        top: Square,
    },
}

impl Redirect {
    /// Square the player ends the move on.
    pub fn target(&self) -> Square {
        match self {
            Redirect::Snake { tail, .. } => *tail,
            Redirect::Ladder { top, .. } => *top,
        }
    }
}

/// A broken construction rule for a topology.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TopologyViolation {
    /// A square is both a snake head and a ladder foot.
    #[display("square {} is both a snake head and a ladder foot", _0)]
    Overlap(Square),
    /// A mapping starts or ends off the board.
    #[display("mapping {} -> {} leaves the board", _0, _1)]
    OffBoard(Square, Square),
    /// A snake does not go down.
    #[display("snake {} -> {} does not descend", _0, _1)]
    SnakeClimbs(Square, Square),
    /// A ladder does not go up.
    #[display("ladder {} -> {} does not ascend", _0, _1)]
    LadderDescends(Square, Square),
    /// A mapping ends on another mapping's start.
    #[display("{} -> {} chains into another snake or ladder", _0, _1)]
    Chained(Square, Square),
}

/// Immutable lookup of snakes (head to tail) and ladders (foot to top).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTopology {
    snakes: BTreeMap<Square, Square>,
    ladders: BTreeMap<Square, Square>,
}

impl BoardTopology {
    /// The fixed board every game is played on.
    pub fn standard() -> &'static BoardTopology {
        &STANDARD
    }

    pub(crate) fn from_tables(snakes: &[(u8, u8)], ladders: &[(u8, u8)]) -> Self {
        let to_map = |pairs: &[(u8, u8)]| {
            pairs
                .iter()
                .filter_map(|&(from, to)| Some((Square::new(from)?, Square::new(to)?)))
                .collect::<BTreeMap<_, _>>()
        };
        Self {
            snakes: to_map(snakes),
            ladders: to_map(ladders),
        }
    }

    /// Tail square if `square` is a snake head.
    pub fn snake_target(&self, square: Square) -> Option<Square> {
        self.snakes.get(&square).copied()
    }

    /// Top square if `square` is a ladder foot.
    pub fn ladder_target(&self, square: Square) -> Option<Square> {
        self.ladders.get(&square).copied()
    }

    /// The single redirection for `square`, if any.
    ///
    /// Snakes are consulted first; a validated topology never has both.
    pub fn redirect(&self, square: Square) -> Option<Redirect> {
        if let Some(tail) = self.snake_target(square) {
            return Some(Redirect::Snake { head: square, tail });
        }
        self.ladder_target(square)
            .map(|top| Redirect::Ladder { foot: square, top })
    }

    /// Snakes as `(head, tail)` in ascending head order.
    pub fn snakes(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.snakes.iter().map(|(head, tail)| (*head, *tail))
    }

    /// Ladders as `(foot, top)` in ascending foot order.
    pub fn ladders(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.ladders.iter().map(|(foot, top)| (*foot, *top))
    }

    /// Checks the construction rules, collecting every violation.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), Vec<TopologyViolation>> {
        let mut violations = Vec::new();

        for (&head, &tail) in &self.snakes {
            if self.ladders.contains_key(&head) {
                violations.push(TopologyViolation::Overlap(head));
            }
            if tail >= head {
                violations.push(TopologyViolation::SnakeClimbs(head, tail));
            }
        }
        for (&foot, &top) in &self.ladders {
            if top <= foot {
                violations.push(TopologyViolation::LadderDescends(foot, top));
            }
        }
        for (from, to) in self.snakes().chain(self.ladders()) {
            if from.is_start() || to.is_start() {
                violations.push(TopologyViolation::OffBoard(from, to));
            }
            if self.snakes.contains_key(&to) || self.ladders.contains_key(&to) {
                violations.push(TopologyViolation::Chained(from, to));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Board topology violations");
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(n: u8) -> Square {
        Square::new(n).unwrap()
    }

    #[test]
    fn test_standard_board_is_valid() {
        assert_eq!(BoardTopology::standard().validate(), Ok(()));
    }

    #[test]
    fn test_snake_lookup() {
        let board = BoardTopology::standard();
        assert_eq!(board.snake_target(sq(16)), Some(sq(6)));
        assert_eq!(board.snake_target(sq(98)), Some(sq(78)));
        assert_eq!(board.snake_target(sq(17)), None);
        assert_eq!(board.ladder_target(sq(16)), None);
    }

    #[test]
    fn test_ladder_lookup() {
        let board = BoardTopology::standard();
        assert_eq!(board.ladder_target(sq(1)), Some(sq(38)));
        assert_eq!(board.ladder_target(sq(80)), Some(sq(100)));
        assert_eq!(board.snake_target(sq(80)), None);
    }

    #[test]
    fn test_redirect_is_exclusive() {
        let board = BoardTopology::standard();
        for square in Square::all_cells() {
            let snake = board.snake_target(square).is_some();
            let ladder = board.ladder_target(square).is_some();
            assert!(!(snake && ladder), "square {} is both", square);
            assert_eq!(board.redirect(square).is_some(), snake || ladder);
        }
    }

    #[test]
    fn test_table_sizes() {
        let board = BoardTopology::standard();
        assert_eq!(board.snakes().count(), 10);
        assert_eq!(board.ladders().count(), 9);
        assert!(board.snakes().all(|(head, tail)| tail < head));
    }

    #[test]
    fn test_validate_catches_chains_and_overlap() {
        let broken = BoardTopology::from_tables(&[(20, 10), (30, 20)], &[(20, 40), (5, 3)]);
        let violations = broken.validate().unwrap_err();
        assert!(violations.contains(&TopologyViolation::Overlap(sq(20))));
        assert!(violations.contains(&TopologyViolation::Chained(sq(30), sq(20))));
        assert!(violations.contains(&TopologyViolation::LadderDescends(sq(5), sq(3))));
    }

    #[test]
    fn test_validate_catches_self_map() {
        let broken = BoardTopology::from_tables(&[(40, 40)], &[]);
        let violations = broken.validate().unwrap_err();
        assert!(violations.contains(&TopologyViolation::SnakeClimbs(sq(40), sq(40))));
        assert!(violations.contains(&TopologyViolation::Chained(sq(40), sq(40))));
    }
}

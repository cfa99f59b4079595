//! Dice rolling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Value shown on a six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    /// Every face, one through six.
    pub const ALL: [DieFace; 6] = [
        DieFace(1),
        DieFace(2),
        DieFace(3),
        DieFace(4),
        DieFace(5),
        DieFace(6),
    ];

    /// Creates a face, `None` outside 1-6.
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1..=6 => Some(Self(value)),
            _ => None,
        }
    }

    /// Pip count (1-6).
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Unicode die glyph for this face.
    pub fn pips(self) -> char {
        const GLYPHS: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];
        GLYPHS[usize::from(self.0 - 1)]
    }
}

impl TryFrom<u8> for DieFace {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DieFace::new(value).ok_or_else(|| format!("{} is not a die face", value))
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.0
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of die rolls.
pub trait Roll {
    /// Rolls the die once.
    fn roll(&mut self) -> DieFace;
}

impl<T: Roll + ?Sized> Roll for &mut T {
    fn roll(&mut self) -> DieFace {
        (**self).roll()
    }
}

/// Fair die backed by a random number generator.
#[derive(Debug, Clone)]
pub struct RandomDie<R = StdRng> {
    rng: R,
}

impl RandomDie<StdRng> {
    /// Die seeded from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Die with a fixed seed, for reproducible games.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomDie<R> {
    /// Wraps an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomDie<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> Roll for RandomDie<R> {
    fn roll(&mut self) -> DieFace {
        let face = DieFace(self.rng.gen_range(1..=6));
        trace!(face = face.0, "Rolled die");
        face
    }
}

/// Die that replays a fixed sequence of faces, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedDie {
    faces: Vec<DieFace>,
    next: usize,
}

impl ScriptedDie {
    /// Creates a scripted die.
    ///
    /// Values outside 1-6 are dropped. An empty script rolls ones.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: values.into_iter().filter_map(DieFace::new).collect(),
            next: 0,
        }
    }

    /// Number of rolls taken so far.
    pub fn rolls(&self) -> usize {
        self.next
    }
}

impl Roll for ScriptedDie {
    fn roll(&mut self) -> DieFace {
        let face = if self.faces.is_empty() {
            DieFace(1)
        } else {
            self.faces[self.next % self.faces.len()]
        };
        self.next += 1;
        face
    }
}

// Player model and position vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pitch positions used for bucket construction and drafting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    CentralDefender,
    WideDefender,
    CentralMidfielder,
    WideMidfielder,
    Attacker,
}

/// The outfield positions processed by the snake draft and the refinement
/// pass, in their canonical order. The draft shuffles a copy of this slice;
/// refinement iterates it as-is.
pub const OUTFIELD_POSITIONS: &[Position] = &[
    Position::CentralDefender,
    Position::WideDefender,
    Position::CentralMidfielder,
    Position::WideMidfielder,
    Position::Attacker,
];

impl Position {
    /// Parse a position tag into a Position enum.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GK" => Some(Position::Goalkeeper),
            "CD" => Some(Position::CentralDefender),
            "WD" => Some(Position::WideDefender),
            "CM" => Some(Position::CentralMidfielder),
            "WM" => Some(Position::WideMidfielder),
            "ATT" => Some(Position::Attacker),
            _ => None,
        }
    }

    /// Return the display tag for this position.
    pub fn tag(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::CentralDefender => "CD",
            Position::WideDefender => "WD",
            Position::CentralMidfielder => "CM",
            Position::WideMidfielder => "WM",
            Position::Attacker => "ATT",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// An attending player, normalized by the ingest layer.
///
/// Players are stored in a single arena (`&[Player]`) for the duration of an
/// allocation call; all engine bookkeeping refers to players by arena index,
/// never by name or rating, so two players sharing a name or rating are still
/// distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Non-negative skill rating. Missing or unparsable source values
    /// default to 0 upstream.
    pub rating: f64,
    /// Position eligibility tags. May be empty; may hold several tags.
    pub positions: Vec<Position>,
    /// Designated first-choice keeper. Trusted as given; exempt from
    /// refinement swaps and size-correction moves.
    pub is_main_goalkeeper: bool,
}

impl Player {
    pub fn is_goalkeeper(&self) -> bool {
        self.positions.contains(&Position::Goalkeeper)
    }

    pub fn plays(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Comma-joined position tags for display, or "N/A" when the player has
    /// no tags at all.
    pub fn positions_display(&self) -> String {
        if self.positions.is_empty() {
            "N/A".to_string()
        } else {
            self.positions
                .iter()
                .map(|p| p.tag())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Move definitions and the move comparison rule

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A move in Rock Paper Scissors
///
/// `None` stands for "no move played" (a forfeited or unavailable round).
/// It loses to every real move and ties only against itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    #[default]
    None,
    Rock,
    Paper,
    Scissors,
}

/// Result of playing one move against another, from the first move's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerOneWin,
    PlayerTwoWin,
    Tie,
}

impl RoundOutcome {
    /// Signed form: 1 if the first move won, -1 if it lost, 0 on a tie
    pub fn as_i8(self) -> i8 {
        match self {
            RoundOutcome::PlayerOneWin => 1,
            RoundOutcome::PlayerTwoWin => -1,
            RoundOutcome::Tie => 0,
        }
    }

    /// The same outcome seen from the other player's side
    pub fn reversed(self) -> Self {
        match self {
            RoundOutcome::PlayerOneWin => RoundOutcome::PlayerTwoWin,
            RoundOutcome::PlayerTwoWin => RoundOutcome::PlayerOneWin,
            RoundOutcome::Tie => RoundOutcome::Tie,
        }
    }
}

impl Move {
    /// Every move, sentinel included
    pub const ALL: [Move; 4] = [Move::None, Move::Rock, Move::Paper, Move::Scissors];

    /// Moves a player can actually throw
    pub const PLAYABLE: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats. The sentinel defeats nothing.
    pub fn beats(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Paper => Some(Move::Rock),
            Move::Scissors => Some(Move::Paper),
            Move::None => None,
        }
    }

    /// The move this one is defeated by
    pub fn loses_to(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Paper),
            Move::Paper => Some(Move::Scissors),
            Move::Scissors => Some(Move::Rock),
            Move::None => None,
        }
    }

    /// Compare this move against `other`
    ///
    /// Total over the move set:
    /// - identical moves tie (including two `None`s)
    /// - `None` loses to any real move
    /// - otherwise Rock > Scissors > Paper > Rock
    pub fn compare(self, other: Move) -> RoundOutcome {
        if self == other {
            return RoundOutcome::Tie;
        }

        match (self, other) {
            (Move::None, _) => RoundOutcome::PlayerTwoWin,
            (_, Move::None) => RoundOutcome::PlayerOneWin,
            (mine, theirs) if mine.beats() == Some(theirs) => RoundOutcome::PlayerOneWin,
            (mine, theirs) if mine.loses_to() == Some(theirs) => RoundOutcome::PlayerTwoWin,
            _ => RoundOutcome::Tie,
        }
    }

    /// Signed comparison: 1 if this move wins, -1 if it loses, 0 on a tie
    pub fn play_against(self, other: Move) -> i8 {
        self.compare(other).as_i8()
    }

    /// Lowercase name used for parsing and display
    pub fn name(self) -> &'static str {
        match self {
            Move::None => "none",
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a move
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown move: {0:?}")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseMoveError(s.to_string()))
    }
}

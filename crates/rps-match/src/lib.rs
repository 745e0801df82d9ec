//! Match Logic for Rock Paper Scissors
//!
//! Scores a best-of-N match between two players, with optional
//! sudden-death tie-breaker rounds. This crate is compiled to:
//! - Native (for game hosts)
//! - WASM (for browser front-ends)

mod error;
mod game;
mod moves;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{ConfigError, MatchError};
pub use game::{
    run_match, MatchConfig, MatchEngine, MatchRecord, MatchSnapshot, MatchState, PlayerId,
    RoundRecord, RoundResult, Tally,
};
pub use moves::{Move, ParseMoveError, RoundOutcome};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_best_of_five() {
        let moves = [
            (Move::Paper, Move::Rock),
            (Move::Rock, Move::Scissors),
            (Move::None, Move::Rock),
            (Move::Rock, Move::Rock),
            (Move::Paper, Move::Rock),
        ];
        let record = run_match(MatchConfig::best_of(5).with_players(1, 2), &moves).unwrap();

        let results: Vec<_> = record.rounds.iter().map(|r| r.result).collect();
        assert_eq!(
            results,
            vec![
                RoundResult::PlayerOneWin,
                RoundResult::PlayerOneWin,
                RoundResult::PlayerTwoWin,
                RoundResult::Tie,
                RoundResult::PlayerOneWin,
            ]
        );
        assert_eq!(record.state, MatchState::CompletedPlayerOneWin);
    }

    #[test]
    fn test_error_messages() {
        let err = MatchError::from(ConfigError::NoRounds);
        assert_eq!(
            err.to_string(),
            "invalid match configuration: match requires at least one round"
        );
        let err = MatchError::OutOfRounds { played: 5, capacity: 5 };
        assert_eq!(err.to_string(), "out of gameplay rounds (5 of 5 played)");
    }
}

//! Match state machine and replay driver

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, MatchError};
use crate::moves::{Move, RoundOutcome};

/// Opaque player identifier supplied by the host application
pub type PlayerId = u32;

/// Lifecycle of a match
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    #[default]
    Ready,
    InProgress,
    CompletedPlayerOneWin,
    CompletedPlayerTwoWin,
    CompletedTie,
}

impl MatchState {
    pub fn is_completed(self) -> bool {
        matches!(
            self,
            MatchState::CompletedPlayerOneWin
                | MatchState::CompletedPlayerTwoWin
                | MatchState::CompletedTie
        )
    }
}

/// Result stored in one round slot of a match
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// Not played yet
    #[default]
    None,
    PlayerOneWin,
    PlayerTwoWin,
    Tie,
    /// Will never be played because the match ended first
    Skipped,
    /// Reserved for invalid-state signaling; never produced by scoring
    Error,
}

impl RoundResult {
    /// True for results produced by scoring a pair of moves
    pub fn is_played(self) -> bool {
        matches!(
            self,
            RoundResult::PlayerOneWin | RoundResult::PlayerTwoWin | RoundResult::Tie
        )
    }
}

impl From<RoundOutcome> for RoundResult {
    fn from(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::PlayerOneWin => RoundResult::PlayerOneWin,
            RoundOutcome::PlayerTwoWin => RoundResult::PlayerTwoWin,
            RoundOutcome::Tie => RoundResult::Tie,
        }
    }
}

/// Match configuration, frozen once the match starts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub player_one: Option<PlayerId>,
    pub player_two: Option<PlayerId>,
    /// Rounds always played unless the match is ended early
    pub num_standard_rounds: u8,
    /// Sudden-death rounds available while the score stays level
    pub max_tie_breaker_rounds: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_one: None,
            player_two: None,
            num_standard_rounds: 5,
            max_tie_breaker_rounds: 0,
        }
    }
}

impl MatchConfig {
    /// Best-of-`rounds` match with no tie-breakers and no players set
    pub fn best_of(rounds: u8) -> Self {
        Self {
            num_standard_rounds: rounds,
            ..Self::default()
        }
    }

    pub fn with_players(mut self, player_one: PlayerId, player_two: PlayerId) -> Self {
        self.player_one = Some(player_one);
        self.player_two = Some(player_two);
        self
    }

    pub fn with_rounds(mut self, rounds: u8) -> Self {
        self.num_standard_rounds = rounds;
        self
    }

    pub fn with_tie_breakers(mut self, rounds: u8) -> Self {
        self.max_tie_breaker_rounds = rounds;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Standard plus tie-breaker round slots
    pub fn total_rounds(&self) -> usize {
        self.num_standard_rounds as usize + self.max_tie_breaker_rounds as usize
    }

    /// Check the configuration is startable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_one.is_none() {
            return Err(ConfigError::MissingPlayerOne);
        }
        if self.player_two.is_none() {
            return Err(ConfigError::MissingPlayerTwo);
        }
        if self.total_rounds() < 1 {
            return Err(ConfigError::NoRounds);
        }
        Ok(())
    }
}

/// Round counts over the played part of a match
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player_one_wins: u32,
    pub player_two_wins: u32,
    pub ties: u32,
}

impl Tally {
    fn from_results(results: &[RoundResult]) -> Self {
        let mut tally = Tally::default();
        for result in results {
            match result {
                RoundResult::PlayerOneWin => tally.player_one_wins += 1,
                RoundResult::PlayerTwoWin => tally.player_two_wins += 1,
                RoundResult::Tie => tally.ties += 1,
                _ => {}
            }
        }
        tally
    }

    /// Completed state implied by these counts
    pub fn grade(&self) -> MatchState {
        if self.player_one_wins > self.player_two_wins {
            MatchState::CompletedPlayerOneWin
        } else if self.player_two_wins > self.player_one_wins {
            MatchState::CompletedPlayerTwoWin
        } else {
            MatchState::CompletedTie
        }
    }
}

/// Read-only view of a match for hosts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub player_one: Option<PlayerId>,
    pub player_two: Option<PlayerId>,
    pub state: MatchState,
    /// 1-based number of the next round to play
    pub current_round: usize,
    pub round_results: Vec<RoundResult>,
    pub in_tie_breaker: bool,
    pub tally: Tally,
}

/// Best-of-N match between two players
///
/// `Ready --start--> InProgress --score_round*--> Completed*`, where an
/// explicit `end` may complete the match at any point.
#[derive(Clone, Debug, Default)]
pub struct MatchEngine {
    config: MatchConfig,
    state: MatchState,
    round_results: Vec<RoundResult>,
    current_round_index: usize,
    in_tie_breaker: bool,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Replace the configuration. Only allowed before the match starts.
    pub fn configure(&mut self, config: MatchConfig) -> Result<(), MatchError> {
        if self.state != MatchState::Ready {
            return Err(ConfigError::AlreadyStarted.into());
        }
        self.config = config;
        Ok(())
    }

    /// Allocate the round slots and move the match into play
    pub fn start(&mut self) -> Result<(), MatchError> {
        if self.state != MatchState::Ready {
            return Err(ConfigError::AlreadyStarted.into());
        }
        self.config.validate()?;

        self.round_results = vec![RoundResult::None; self.config.total_rounds()];
        self.current_round_index = 0;
        self.in_tie_breaker = false;
        self.state = MatchState::InProgress;

        info!(
            "match started: player {:?} vs player {:?}, {} standard + {} tie-breaker rounds",
            self.config.player_one,
            self.config.player_two,
            self.config.num_standard_rounds,
            self.config.max_tie_breaker_rounds,
        );
        Ok(())
    }

    /// Score one pair of moves into the next round slot
    ///
    /// Once the standard rounds are used up, the match ends unless the score
    /// is level and tie-breaker slots remain.
    pub fn score_round(
        &mut self,
        move_one: Move,
        move_two: Move,
    ) -> Result<RoundResult, MatchError> {
        let capacity = self.round_results.len();
        if self.state.is_completed() || self.current_round_index >= capacity {
            return Err(MatchError::OutOfRounds {
                played: self.current_round_index,
                capacity,
            });
        }

        let result = RoundResult::from(move_one.compare(move_two));
        self.round_results[self.current_round_index] = result;
        self.current_round_index += 1;

        debug!(
            "round {}: {} vs {} -> {:?}",
            self.current_round_index, move_one, move_two, result
        );

        if self.current_round_index >= self.config.num_standard_rounds as usize {
            let tie_breakers_available = capacity - self.current_round_index;
            if self.grade_to_round(self.current_round_index) == MatchState::CompletedTie
                && tie_breakers_available > 0
            {
                if !self.in_tie_breaker {
                    debug!(
                        "score level, entering tie-breaker rounds ({} available)",
                        tie_breakers_available
                    );
                }
                self.in_tie_breaker = true;
            } else {
                self.end();
            }
        }

        Ok(result)
    }

    /// Complete the match now, grading the rounds played so far
    ///
    /// Unplayed slots become `Skipped`. Calling it again changes nothing, and
    /// a match that has not started is left alone.
    pub fn end(&mut self) {
        if self.state == MatchState::Ready {
            return;
        }
        self.state = self.grade_to_round(self.current_round_index);
        self.in_tie_breaker = false;
        for slot in &mut self.round_results[self.current_round_index..] {
            *slot = RoundResult::Skipped;
        }

        let tally = self.tally();
        info!(
            "match ended after {} rounds: {:?} ({}-{}, {} ties)",
            self.current_round_index,
            self.state,
            tally.player_one_wins,
            tally.player_two_wins,
            tally.ties,
        );
    }

    fn grade_to_round(&self, rounds: usize) -> MatchState {
        Tally::from_results(&self.round_results[..rounds]).grade()
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// 1-based number of the next round
    pub fn current_round(&self) -> usize {
        self.current_round_index + 1
    }

    pub fn rounds_played(&self) -> usize {
        self.current_round_index
    }

    /// Number of round slots; zero before the match starts
    pub fn total_rounds(&self) -> usize {
        self.round_results.len()
    }

    /// Copy of the round history
    pub fn round_results(&self) -> Vec<RoundResult> {
        self.round_results.clone()
    }

    pub fn in_tie_breaker(&self) -> bool {
        self.in_tie_breaker
    }

    pub fn tally(&self) -> Tally {
        Tally::from_results(&self.round_results[..self.current_round_index])
    }

    /// Winning player, once the match is completed with a winner
    pub fn winner(&self) -> Option<PlayerId> {
        match self.state {
            MatchState::CompletedPlayerOneWin => self.config.player_one,
            MatchState::CompletedPlayerTwoWin => self.config.player_two,
            _ => None,
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            player_one: self.config.player_one,
            player_two: self.config.player_two,
            state: self.state,
            current_round: self.current_round(),
            round_results: self.round_results(),
            in_tie_breaker: self.in_tie_breaker,
            tally: self.tally(),
        }
    }
}

/// One scored round of a replayed match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: usize,
    pub move_one: Move,
    pub move_two: Move,
    pub result: RoundResult,
}

/// Result of a complete replayed match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub rounds: Vec<RoundRecord>,
    pub round_results: Vec<RoundResult>,
    pub state: MatchState,
    pub tally: Tally,
}

/// Play a match from a list of move pairs
///
/// Stops as soon as the match completes; extra pairs are ignored. If the
/// pairs run out first, the match is ended early.
pub fn run_match(
    config: MatchConfig,
    moves: &[(Move, Move)],
) -> Result<MatchRecord, MatchError> {
    let mut engine = MatchEngine::new(config);
    engine.start()?;

    let mut rounds = Vec::with_capacity(engine.total_rounds());
    for &(move_one, move_two) in moves {
        if engine.state().is_completed() {
            break;
        }
        let round = engine.current_round();
        let result = engine.score_round(move_one, move_two)?;
        rounds.push(RoundRecord {
            round,
            move_one,
            move_two,
            result,
        });
    }

    if !engine.state().is_completed() {
        engine.end();
    }

    Ok(MatchRecord {
        rounds,
        round_results: engine.round_results(),
        state: engine.state(),
        tally: engine.tally(),
    })
}

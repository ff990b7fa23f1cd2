pub mod combatant;
pub mod events;
pub mod player_actions;
pub mod setup;
pub mod sides_data;
pub mod skills;

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub use sides_data::SidesData;

#[derive(Serialize, Deserialize, Display, Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Phase of a match. Only one is active at a time and it gates which actions are accepted.
#[derive(Serialize, Deserialize, Display, Eq, PartialEq, Copy, Clone, Debug)]
pub enum MatchState {
    Starting,
    PlayerTurn,
    EnemyTurn,
    Won,
    Lost,
}

impl MatchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchState::Won | MatchState::Lost)
    }

    /// The only edges of the turn state machine.
    pub fn can_advance_to(self, next: MatchState) -> bool {
        matches!(
            (self, next),
            (MatchState::Starting, MatchState::PlayerTurn)
                | (MatchState::PlayerTurn, MatchState::EnemyTurn)
                | (MatchState::PlayerTurn, MatchState::Won)
                | (MatchState::EnemyTurn, MatchState::PlayerTurn)
                | (MatchState::EnemyTurn, MatchState::Lost)
        )
    }

    pub fn result(self) -> Option<MatchResult> {
        match self {
            MatchState::Won => Some(MatchResult::Won),
            MatchState::Lost => Some(MatchResult::Lost),
            _ => None,
        }
    }
}

/// Outcome of a finished match, seen from the player's side.
#[derive(Serialize, Deserialize, Display, Eq, PartialEq, Copy, Clone, Debug)]
pub enum MatchResult {
    Won,
    Lost,
}

impl MatchResult {
    pub fn defeated(self) -> Side {
        match self {
            MatchResult::Won => Side::Enemy,
            MatchResult::Lost => Side::Player,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MatchResult::Won => "You are victorious!",
            MatchResult::Lost => "You have been defeated...",
        }
    }
}

use crate::engine::ai::DecisionSource;
use crate::engine::pacing::Pacer;
use crate::engine::{CombatEngine, RejectedAction};
use crate::players::Player;
use crate::rules::{MatchResult, MatchState};
use thiserror::Error;
use tracing::warn;

const GET_ACTION_RETRY_TIMES: usize = 3;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Failed to get an action from the player.")]
    PlayerCommunicationFail,
    #[error("The player kept requesting invalid actions.")]
    InvalidActionRequested,
    #[error("{0}")]
    Rejected(#[from] RejectedAction),
}

/// Drives `engine` until the match is decided, asking `player` for every player turn.
pub async fn run_match<D: DecisionSource, P: Pacer>(
    engine: &mut CombatEngine<D, P>,
    player: &mut (dyn Player + Send),
) -> Result<MatchResult, MatchError> {
    if engine.state() == MatchState::Starting {
        engine.start_first_turn().await?;
    }

    loop {
        match engine.state() {
            MatchState::PlayerTurn => play_player_turn(engine, player).await?,
            MatchState::EnemyTurn => {
                engine.run_enemy_turn().await?;
            }
            state if state.is_terminal() => {
                return engine
                    .result()
                    .ok_or_else(|| RejectedAction::WrongState(state).into())
            }
            state => return Err(RejectedAction::WrongState(state).into()),
        }
    }
}

async fn play_player_turn<D: DecisionSource, P: Pacer>(
    engine: &mut CombatEngine<D, P>,
    player: &mut (dyn Player + Send),
) -> Result<(), MatchError> {
    let view = engine.view();
    let skills = engine.available_skills();

    let mut cnt_try = 0;
    loop {
        let action = player
            .choose_action(&view, &skills)
            .await
            .map_err(|_| MatchError::PlayerCommunicationFail)?;

        match engine.submit_player_action(action).await {
            Ok(_) => return Ok(()),
            Err(rejected) => {
                warn!(?action, reason = %rejected, "player action rejected");
                player.notify_rejected(&rejected.to_string());
            }
        }

        cnt_try += 1;
        if cnt_try >= GET_ACTION_RETRY_TIMES {
            return Err(MatchError::InvalidActionRequested);
        }
    }
}

use crate::rules::player_actions::{MatchView, PlayerAction, SkillChoice};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("The player could not provide an action.")]
pub struct PlayerInputError;

/// Decides the player side's action whenever a player turn begins.
#[async_trait]
pub trait Player {
    async fn choose_action(
        &mut self,
        view: &MatchView,
        skills: &[SkillChoice],
    ) -> Result<PlayerAction, PlayerInputError>;

    /// Called when a chosen action was refused, before being asked again.
    fn notify_rejected(&mut self, _reason: &str) {}
}

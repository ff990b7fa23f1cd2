use crate::engine::ai::DecisionSource;
use crate::rules::player_actions::{MatchView, PlayerAction, SkillChoice};
use async_trait::async_trait;

use super::PlayerInputError;

/// Plays the player side unattended, with the same coin-then-uniform rule as the enemy.
pub struct RandomPlayer<D: DecisionSource> {
    decisions: D,
}

impl<D: DecisionSource> RandomPlayer<D> {
    pub fn new(decisions: D) -> Self {
        Self { decisions }
    }
}

#[async_trait]
impl<D: DecisionSource> super::Player for RandomPlayer<D> {
    async fn choose_action(
        &mut self,
        _view: &MatchView,
        skills: &[SkillChoice],
    ) -> Result<PlayerAction, PlayerInputError> {
        let usable: Vec<&SkillChoice> = skills.iter().filter(|choice| choice.usable).collect();

        if usable.is_empty() || self.decisions.prefer_basic_attack() {
            return Ok(PlayerAction::BasicAttack);
        }

        let index = self.decisions.pick_index(usable.len()).min(usable.len() - 1);
        Ok(PlayerAction::UseSkill(usable[index].slot))
    }
}

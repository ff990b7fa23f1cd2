use crate::rules::{MatchState, Side};
use thiserror::Error;

/// The setup cannot start a consistent match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No template was configured for the {0} side.")]
    MissingTemplate(Side),
    #[error("No basic attack was configured for the {0} side.")]
    MissingBasicAttack(Side),
    #[error("The {side} basic attack must be free, but costs {cost} mana.")]
    BasicAttackCost { side: Side, cost: u32 },
    #[error("The {0} template has no health.")]
    ZeroMaxHealth(Side),
}

/// A submission that was refused. Nothing about the match changes when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectedAction {
    #[error("Actions are not accepted while the match is in {0}.")]
    WrongState(MatchState),
    #[error("The player has no skill in slot {0}.")]
    UnknownSkillSlot(usize),
    #[error("Skill '{0}' does not belong to the player.")]
    UnknownSkill(String),
}

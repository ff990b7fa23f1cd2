use crate::rules::combatant::CombatantStats;
use crate::rules::{MatchState, SidesData};
use serde::{Deserialize, Serialize};

/// Index into the player's ordered skill list.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct SkillSlot(pub usize);

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Copy, Clone)]
pub enum PlayerAction {
    BasicAttack,
    UseSkill(SkillSlot),
}

/// A choice shown to the player at the start of their turn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkillChoice {
    pub slot: SkillSlot,
    pub name: String,
    pub usable: bool,
}

/// What a deciding player gets to see.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchView {
    pub state: MatchState,
    pub turn: u32,
    pub names: SidesData<String>,
    pub stats: SidesData<CombatantStats>,
}

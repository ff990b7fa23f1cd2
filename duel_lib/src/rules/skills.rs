use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Skills are defined once and shared between every combatant that knows them.
pub type Skill = Arc<SkillTemplate>;

pub type Skills = Arc<Vec<Skill>>;

#[derive(Serialize, Deserialize, Display, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TargetType {
    SingleEnemy,
    AllEnemies,
    SingleAlly,
    AllAllies,
    #[serde(rename = "Self")]
    #[display(fmt = "Self")]
    OwnSelf,
}

impl TargetType {
    /// Only enemy-targeting skills have an effect. Ally and self targeting are reserved.
    pub fn is_offensive(self) -> bool {
        matches!(self, TargetType::SingleEnemy | TargetType::AllEnemies)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkillTemplate {
    pub name: String,
    pub power: u32,
    #[serde(default)]
    pub mana_cost: u32,
    #[serde(default = "default_target_type")]
    pub target_type: TargetType,
}

fn default_target_type() -> TargetType {
    TargetType::SingleEnemy
}

impl SkillTemplate {
    pub fn new(name: impl Into<String>, power: u32, mana_cost: u32, target_type: TargetType) -> Self {
        Self {
            name: name.into(),
            power,
            mana_cost,
            target_type,
        }
    }

    pub fn shared(self) -> Skill {
        Arc::new(self)
    }
}

/// The kind of animation cue a skill triggers. Resolution does not depend on it.
#[derive(Serialize, Deserialize, Display, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CueKind {
    BasicAttack,
    Skill,
}

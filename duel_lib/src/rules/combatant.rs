use crate::rules::skills::{Skill, Skills};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Static definition of a character. Read-only once a match has started.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantTemplate {
    pub name: String,
    pub max_health: u32,
    pub max_mana: u32,
    /// Ordered: the order decides the player's action slots.
    pub skills: Skills,
}

impl CombatantTemplate {
    pub fn new(name: impl Into<String>, max_health: u32, max_mana: u32, skills: Vec<Skill>) -> Self {
        Self {
            name: name.into(),
            max_health,
            max_mana,
            skills: Arc::new(skills),
        }
    }
}

/// A battle participant created from a [`CombatantTemplate`] at match start.
#[derive(Debug, Clone)]
pub struct Combatant {
    pub name: String,
    pub max_health: u32,
    pub current_health: u32,
    pub max_mana: u32,
    pub current_mana: u32,
    skills: Skills,
}

impl Combatant {
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.current_health;
        self.current_health = self.current_health.saturating_sub(amount);
        before - self.current_health
    }

    pub fn spend_mana(&mut self, amount: u32) {
        self.current_mana = self.current_mana.saturating_sub(amount);
    }

    pub fn stats(&self) -> CombatantStats {
        CombatantStats {
            hp: self.current_health,
            max_hp: self.max_health,
            mana: self.current_mana,
            max_mana: self.max_mana,
        }
    }
}

pub struct CombatantFactory;

impl CombatantFactory {
    /// Full health and mana. The skill list is shared with the template, not copied.
    pub fn instantiate(template: &CombatantTemplate) -> Combatant {
        Combatant {
            name: template.name.clone(),
            max_health: template.max_health,
            current_health: template.max_health,
            max_mana: template.max_mana,
            current_mana: template.max_mana,
            skills: Arc::clone(&template.skills),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CombatantStats {
    pub hp: u32,
    pub max_hp: u32,
    pub mana: u32,
    pub max_mana: u32,
}

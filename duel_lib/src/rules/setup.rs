//! Match configuration as authored in JSON.
//!
//! Skills are declared once in a table and referenced by name from the templates and the
//! basic-attack slots, so every reference resolves to the same shared [`Skill`].

use crate::engine::pacing::PacingConfig;
use crate::rules::combatant::CombatantTemplate;
use crate::rules::skills::{Skill, SkillTemplate};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Everything the engine needs to begin a match. Missing parts are reported when the match
/// begins, not when the setup is built.
#[derive(Debug, Clone, Default)]
pub struct MatchSetup {
    pub player: Option<CombatantTemplate>,
    pub enemy: Option<CombatantTemplate>,
    pub player_basic_attack: Option<Skill>,
    pub enemy_basic_attack: Option<Skill>,
}

impl MatchSetup {
    pub fn new(
        player: CombatantTemplate,
        enemy: CombatantTemplate,
        player_basic_attack: Skill,
        enemy_basic_attack: Skill,
    ) -> Self {
        Self {
            player: Some(player),
            enemy: Some(enemy),
            player_basic_attack: Some(player_basic_attack),
            enemy_basic_attack: Some(enemy_basic_attack),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchConfig {
    pub setup: MatchSetup,
    pub pacing: PacingConfig,
}

#[derive(Debug, Error)]
pub enum SetupLoadError {
    #[error("Failed to read the setup file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse the setup file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Skill '{0}' is referenced but never defined.")]
    UnknownSkill(String),
    #[error("Skill '{0}' is defined more than once.")]
    DuplicateSkill(String),
}

#[derive(Deserialize)]
struct SetupFile {
    #[serde(default)]
    skills: Vec<SkillTemplate>,
    player: Option<TemplateEntry>,
    enemy: Option<TemplateEntry>,
    player_basic_attack: Option<String>,
    enemy_basic_attack: Option<String>,
    #[serde(default)]
    pacing: PacingConfig,
}

#[derive(Deserialize)]
struct TemplateEntry {
    name: String,
    max_health: u32,
    max_mana: u32,
    #[serde(default)]
    skills: Vec<String>,
}

impl MatchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SetupLoadError> {
        let file: SetupFile = serde_json::from_str(json)?;
        file.resolve()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SetupLoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl SetupFile {
    fn resolve(self) -> Result<MatchConfig, SetupLoadError> {
        let mut table: HashMap<String, Skill> = HashMap::new();
        for skill in self.skills {
            if table.contains_key(&skill.name) {
                return Err(SetupLoadError::DuplicateSkill(skill.name));
            }
            table.insert(skill.name.clone(), skill.shared());
        }

        let lookup = |name: &str| -> Result<Skill, SetupLoadError> {
            table
                .get(name)
                .cloned()
                .ok_or_else(|| SetupLoadError::UnknownSkill(name.to_owned()))
        };

        let build = |entry: TemplateEntry| -> Result<CombatantTemplate, SetupLoadError> {
            let skills = entry
                .skills
                .iter()
                .map(|name| lookup(name.as_str()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(CombatantTemplate::new(
                entry.name,
                entry.max_health,
                entry.max_mana,
                skills,
            ))
        };

        let setup = MatchSetup {
            player: self.player.map(build).transpose()?,
            enemy: self.enemy.map(build).transpose()?,
            player_basic_attack: self.player_basic_attack.as_deref().map(lookup).transpose()?,
            enemy_basic_attack: self.enemy_basic_attack.as_deref().map(lookup).transpose()?,
        };

        Ok(MatchConfig {
            setup,
            pacing: self.pacing,
        })
    }
}

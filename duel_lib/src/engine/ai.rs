use crate::rules::combatant::Combatant;
use crate::rules::skills::Skill;
use rand::Rng;

/// Source of the enemy's random choices.
pub trait DecisionSource: Send {
    /// Fair binary choice. `true` means "use the basic attack".
    fn prefer_basic_attack(&mut self) -> bool;

    /// Uniform index in `0..len`. Never called with `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

pub struct RandomDecisions<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomDecisions<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> DecisionSource for RandomDecisions<R> {
    fn prefer_basic_attack(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AiChoice {
    pub skill: Skill,
    pub is_basic_attack: bool,
}

/// Basic attack when nothing is affordable or the coin says so, otherwise a uniformly picked
/// affordable skill.
pub fn select_enemy_skill(
    enemy: &Combatant,
    basic_attack: &Skill,
    decisions: &mut (impl DecisionSource + ?Sized),
) -> AiChoice {
    let usable: Vec<&Skill> = enemy
        .skills()
        .iter()
        .filter(|skill| skill.mana_cost <= enemy.current_mana)
        .collect();

    if usable.is_empty() || decisions.prefer_basic_attack() {
        return AiChoice {
            skill: basic_attack.clone(),
            is_basic_attack: true,
        };
    }

    let index = decisions.pick_index(usable.len()).min(usable.len() - 1);
    AiChoice {
        skill: usable[index].clone(),
        is_basic_attack: false,
    }
}

use super::CombatEngine;
use crate::engine::ai::DecisionSource;
use crate::engine::pacing::{Beat, Pacer};
use crate::rules::events::{ActionOutcome, MatchEvent};
use crate::rules::skills::{CueKind, Skill};
use crate::rules::Side;
use std::sync::Arc;
use tracing::debug;

impl<D: DecisionSource, P: Pacer> CombatEngine<D, P> {
    /// Applies `skill` from `actor` to the other side and reports it.
    pub(super) async fn resolve_action(&mut self, actor: Side, skill: Skill) -> ActionOutcome {
        // Player skills are always free.
        let cost = match actor {
            Side::Player => 0,
            Side::Enemy => skill.mana_cost,
        };
        self.combatants[actor].spend_mana(cost);

        let cue = if Arc::ptr_eq(&skill, &self.basic_attacks[actor]) {
            CueKind::BasicAttack
        } else {
            CueKind::Skill
        };
        self.notify(MatchEvent::ActionCue { side: actor, cue });
        self.pacer.pause(Beat::WindUp).await;

        let (target, amount, hp_lost) = if skill.target_type.is_offensive() {
            let target = actor.other();
            self.notify(MatchEvent::HitCue { side: target });
            let hp_lost = self.combatants[target].take_damage(skill.power);
            (target, skill.power, hp_lost)
        } else {
            // Ally and self targeting have no effect yet.
            (actor, 0, 0)
        };

        let outcome = ActionOutcome {
            actor,
            skill_name: skill.name.clone(),
            target,
            amount,
        };
        debug!(
            %actor,
            skill = %skill.name,
            %target,
            amount,
            hp_lost,
            target_hp = self.combatants[target].current_health,
            "action resolved"
        );

        let message = self.describe(&outcome, skill.target_type.is_offensive());
        self.notify(MatchEvent::ActionResolved(outcome.clone()));
        self.log(message);
        self.notify_stats();
        self.pacer.pause(Beat::Aftermath).await;

        outcome
    }

    fn describe(&self, outcome: &ActionOutcome, offensive: bool) -> String {
        let actor = &self.combatants[outcome.actor].name;
        if offensive {
            format!(
                "{actor} uses {} on {} for {} damage!",
                outcome.skill_name, self.combatants[outcome.target].name, outcome.amount
            )
        } else {
            format!("{actor} uses {}, but nothing happens.", outcome.skill_name)
        }
    }
}

pub mod ai;
pub mod errors;
pub mod pacing;
mod resolution;

pub use errors::{ConfigError, RejectedAction};

use crate::engine::ai::{select_enemy_skill, DecisionSource};
use crate::engine::pacing::{Beat, Pacer};
use crate::observers::MatchObserver;
use crate::rules::combatant::{Combatant, CombatantFactory, CombatantStats, CombatantTemplate};
use crate::rules::events::{ActionOutcome, MatchEvent};
use crate::rules::player_actions::{MatchView, PlayerAction, SkillChoice, SkillSlot};
use crate::rules::setup::MatchSetup;
use crate::rules::skills::Skill;
use crate::rules::{MatchResult, MatchState, Side, SidesData};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns one duel from the first turn to its outcome.
///
/// The host drives it: [`start_first_turn`](Self::start_first_turn) once, then
/// [`submit_player_action`](Self::submit_player_action) on each player turn and
/// [`run_enemy_turn`](Self::run_enemy_turn) on each enemy turn. Everything observable is
/// reported to the registered [`MatchObserver`]s as [`MatchEvent`]s.
pub struct CombatEngine<D: DecisionSource, P: Pacer> {
    state: MatchState,
    turn: u32,
    combatants: SidesData<Combatant>,
    basic_attacks: SidesData<Skill>,
    decisions: D,
    pacer: P,
    observers: Vec<Box<dyn MatchObserver + Send>>,
}

impl<D: DecisionSource, P: Pacer> CombatEngine<D, P> {
    /// Validates the setup and creates both combatants. The match waits in
    /// [`MatchState::Starting`] until the first turn is started.
    pub fn begin_match(setup: &MatchSetup, decisions: D, pacer: P) -> Result<Self, ConfigError> {
        let templates = SidesData::new(
            require_template(&setup.player, Side::Player)?,
            require_template(&setup.enemy, Side::Enemy)?,
        );
        let basic_attacks = SidesData::new(
            require_basic_attack(&setup.player_basic_attack, Side::Player)?,
            require_basic_attack(&setup.enemy_basic_attack, Side::Enemy)?,
        );

        for side in [Side::Player, Side::Enemy] {
            if templates[side].max_health == 0 {
                return Err(ConfigError::ZeroMaxHealth(side));
            }
        }

        let combatants = templates.map(|template| CombatantFactory::instantiate(template));
        info!(
            player = %combatants.player.name,
            enemy = %combatants.enemy.name,
            "match set up"
        );

        Ok(Self {
            state: MatchState::Starting,
            turn: 0,
            combatants,
            basic_attacks,
            decisions,
            pacer,
            observers: vec![],
        })
    }

    pub fn add_observer(&mut self, observer: impl MatchObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side]
    }

    pub fn basic_attack(&self, side: Side) -> &Skill {
        &self.basic_attacks[side]
    }

    pub fn stats(&self) -> SidesData<CombatantStats> {
        self.combatants.map(Combatant::stats)
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.state.result()
    }

    pub fn outcome_message(&self) -> Option<&'static str> {
        self.result().map(MatchResult::message)
    }

    pub fn view(&self) -> MatchView {
        MatchView {
            state: self.state,
            turn: self.turn,
            names: self.combatants.map(|c| c.name.clone()),
            stats: self.stats(),
        }
    }

    /// The player's skills in slot order. Every skill is usable: player skills cost no mana.
    pub fn available_skills(&self) -> Vec<SkillChoice> {
        self.combatants
            .player
            .skills()
            .iter()
            .enumerate()
            .map(|(i, skill)| SkillChoice {
                slot: SkillSlot(i),
                name: skill.name.clone(),
                usable: true,
            })
            .collect()
    }

    /// Maps a skill reference to the player's action for it, if the player owns it.
    pub fn action_for_skill(&self, skill: &Skill) -> Option<PlayerAction> {
        if Arc::ptr_eq(skill, &self.basic_attacks.player) {
            return Some(PlayerAction::BasicAttack);
        }
        self.combatants
            .player
            .skills()
            .iter()
            .position(|own| Arc::ptr_eq(own, skill))
            .map(|i| PlayerAction::UseSkill(SkillSlot(i)))
    }

    pub async fn start_first_turn(&mut self) -> Result<(), RejectedAction> {
        self.ensure_state(MatchState::Starting)?;

        let intro = format!(
            "{} faces {}!",
            self.combatants.player.name, self.combatants.enemy.name
        );
        self.log(intro);
        self.pacer.pause(Beat::Opening).await;

        self.begin_player_turn();
        Ok(())
    }

    pub async fn submit_player_action(
        &mut self,
        action: PlayerAction,
    ) -> Result<ActionOutcome, RejectedAction> {
        self.ensure_state(MatchState::PlayerTurn)?;

        let skill = match action {
            PlayerAction::BasicAttack => self.basic_attacks.player.clone(),
            PlayerAction::UseSkill(SkillSlot(index)) => {
                match self.combatants.player.skills().get(index) {
                    Some(skill) => skill.clone(),
                    None => {
                        warn!(index, "rejected unknown skill slot");
                        return Err(RejectedAction::UnknownSkillSlot(index));
                    }
                }
            }
        };

        let outcome = self.resolve_action(Side::Player, skill).await;

        if self.combatants.enemy.is_alive() {
            self.begin_enemy_turn();
        } else {
            self.end_match(MatchResult::Won);
        }
        Ok(outcome)
    }

    /// Same as [`submit_player_action`](Self::submit_player_action), addressed by reference.
    pub async fn submit_player_skill(
        &mut self,
        skill: &Skill,
    ) -> Result<ActionOutcome, RejectedAction> {
        self.ensure_state(MatchState::PlayerTurn)?;

        match self.action_for_skill(skill) {
            Some(action) => self.submit_player_action(action).await,
            None => {
                warn!(skill = %skill.name, "rejected skill the player does not own");
                Err(RejectedAction::UnknownSkill(skill.name.clone()))
            }
        }
    }

    pub async fn run_enemy_turn(&mut self) -> Result<ActionOutcome, RejectedAction> {
        self.ensure_state(MatchState::EnemyTurn)?;

        self.pacer.pause(Beat::EnemyThinking).await;

        let choice = select_enemy_skill(
            &self.combatants.enemy,
            &self.basic_attacks.enemy,
            &mut self.decisions,
        );
        if choice.is_basic_attack {
            let message = format!("{} prepares a basic attack.", self.combatants.enemy.name);
            self.log(message);
        }

        let outcome = self.resolve_action(Side::Enemy, choice.skill).await;

        if self.combatants.player.is_alive() {
            self.begin_player_turn();
        } else {
            self.end_match(MatchResult::Lost);
        }
        Ok(outcome)
    }

    fn ensure_state(&self, expected: MatchState) -> Result<(), RejectedAction> {
        if self.state == expected {
            Ok(())
        } else {
            warn!(state = %self.state, %expected, "rejected out-of-turn action");
            Err(RejectedAction::WrongState(self.state))
        }
    }

    fn begin_player_turn(&mut self) {
        self.turn += 1;
        self.transition(MatchState::PlayerTurn);
        self.log("Your turn. Choose an action!".to_owned());
        self.notify_stats();
    }

    fn begin_enemy_turn(&mut self) {
        self.transition(MatchState::EnemyTurn);
        self.log("Enemy's turn...".to_owned());
    }

    fn end_match(&mut self, result: MatchResult) {
        let state = match result {
            MatchResult::Won => MatchState::Won,
            MatchResult::Lost => MatchState::Lost,
        };
        self.transition(state);
        self.log(result.message().to_owned());
        self.notify(MatchEvent::MatchEnded {
            result,
            defeated: result.defeated(),
        });
        info!(%result, turns = self.turn, "match ended");
    }

    fn transition(&mut self, next: MatchState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        debug!(from = %self.state, to = %next, turn = self.turn, "state changed");
        self.state = next;
        self.notify(MatchEvent::StateChanged(next));
    }

    fn log(&mut self, message: String) {
        self.notify(MatchEvent::Log(message));
    }

    fn notify_stats(&mut self) {
        let stats = self.stats();
        self.notify(MatchEvent::StatsChanged(stats));
    }

    fn notify(&mut self, event: MatchEvent) {
        for observer in &mut self.observers {
            // ignore notify errors.
            if let Err(e) = observer.notify_event(&event) {
                warn!(error = %e, "failed to notify an observer");
            }
        }
    }
}

fn require_template(
    template: &Option<CombatantTemplate>,
    side: Side,
) -> Result<&CombatantTemplate, ConfigError> {
    template.as_ref().ok_or(ConfigError::MissingTemplate(side))
}

fn require_basic_attack(skill: &Option<Skill>, side: Side) -> Result<Skill, ConfigError> {
    let skill = skill.clone().ok_or(ConfigError::MissingBasicAttack(side))?;
    if skill.mana_cost != 0 {
        return Err(ConfigError::BasicAttackCost {
            side,
            cost: skill.mana_cost,
        });
    }
    Ok(skill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ai::tests::ScriptedDecisions;
    use crate::engine::pacing::InstantPacer;
    use crate::observers::{MatchRecorder, NotifyFailedError};
    use crate::rules::skills::{SkillTemplate, TargetType};

    type TestEngine = CombatEngine<ScriptedDecisions, InstantPacer>;

    fn setup() -> MatchSetup {
        let fireball = SkillTemplate::new("Fireball", 30, 20, TargetType::SingleEnemy).shared();
        let focus = SkillTemplate::new("Focus", 0, 0, TargetType::OwnSelf).shared();
        MatchSetup::new(
            CombatantTemplate::new("Hero", 100, 50, vec![fireball, focus]),
            CombatantTemplate::new("Slime", 40, 10, vec![]),
            SkillTemplate::new("Strike", 10, 0, TargetType::SingleEnemy).shared(),
            SkillTemplate::new("Ooze", 5, 0, TargetType::SingleEnemy).shared(),
        )
    }

    async fn started(setup: &MatchSetup) -> (TestEngine, MatchRecorder) {
        let mut engine =
            CombatEngine::begin_match(setup, ScriptedDecisions::default(), InstantPacer).unwrap();
        let recorder = MatchRecorder::new();
        engine.add_observer(recorder.clone());
        engine.start_first_turn().await.unwrap();
        (engine, recorder)
    }

    #[test]
    fn begin_match_refuses_incomplete_setups() {
        let mut no_enemy = setup();
        no_enemy.enemy = None;
        let err = TestEngine::begin_match(&no_enemy, ScriptedDecisions::default(), InstantPacer)
            .err()
            .unwrap();
        assert_eq!(err, ConfigError::MissingTemplate(Side::Enemy));

        let mut no_basic = setup();
        no_basic.player_basic_attack = None;
        let err = TestEngine::begin_match(&no_basic, ScriptedDecisions::default(), InstantPacer)
            .err()
            .unwrap();
        assert_eq!(err, ConfigError::MissingBasicAttack(Side::Player));

        let mut costly = setup();
        costly.enemy_basic_attack =
            Some(SkillTemplate::new("Ooze", 5, 3, TargetType::SingleEnemy).shared());
        let err = TestEngine::begin_match(&costly, ScriptedDecisions::default(), InstantPacer)
            .err()
            .unwrap();
        assert_eq!(
            err,
            ConfigError::BasicAttackCost {
                side: Side::Enemy,
                cost: 3
            }
        );

        let mut lifeless = setup();
        lifeless.enemy = Some(CombatantTemplate::new("Husk", 0, 10, vec![]));
        let err = TestEngine::begin_match(&lifeless, ScriptedDecisions::default(), InstantPacer)
            .err()
            .unwrap();
        assert_eq!(err, ConfigError::ZeroMaxHealth(Side::Enemy));
    }

    struct Broken;

    impl MatchObserver for Broken {
        fn notify_event(&mut self, _event: &MatchEvent) -> Result<(), NotifyFailedError> {
            Err(NotifyFailedError)
        }
    }

    #[tokio::test]
    async fn failing_observers_do_not_stop_the_match() {
        let mut engine =
            TestEngine::begin_match(&setup(), ScriptedDecisions::default(), InstantPacer).unwrap();
        engine.add_observer(Broken);
        let recorder = MatchRecorder::new();
        engine.add_observer(recorder.clone());
        engine.start_first_turn().await.unwrap();

        engine
            .submit_player_action(PlayerAction::BasicAttack)
            .await
            .unwrap();

        assert_eq!(engine.state(), MatchState::EnemyTurn);
        assert_eq!(engine.combatant(Side::Enemy).current_health, 30);
        assert_eq!(recorder.len(), 11);
        assert!(recorder
            .events()
            .contains(&MatchEvent::StateChanged(MatchState::EnemyTurn)));
        assert_eq!(
            recorder.log_lines(),
            vec![
                "Hero faces Slime!",
                "Your turn. Choose an action!",
                "Hero uses Strike on Slime for 10 damage!",
                "Enemy's turn...",
            ]
        );
    }

    #[tokio::test]
    async fn nothing_is_accepted_before_the_first_turn() {
        let mut engine =
            TestEngine::begin_match(&setup(), ScriptedDecisions::default(), InstantPacer).unwrap();
        assert_eq!(engine.state(), MatchState::Starting);
        assert_eq!(
            engine.submit_player_action(PlayerAction::BasicAttack).await,
            Err(RejectedAction::WrongState(MatchState::Starting))
        );
        assert_eq!(
            engine.run_enemy_turn().await,
            Err(RejectedAction::WrongState(MatchState::Starting))
        );

        engine.start_first_turn().await.unwrap();
        assert_eq!(engine.state(), MatchState::PlayerTurn);
        assert_eq!(engine.turn(), 1);
        assert!(engine.start_first_turn().await.is_err());
    }

    #[tokio::test]
    async fn first_turn_opens_with_the_introduction() {
        let (_, recorder) = started(&setup()).await;
        let events = recorder.events();
        assert_eq!(events[0], MatchEvent::Log("Hero faces Slime!".to_owned()));
        assert_eq!(events[1], MatchEvent::StateChanged(MatchState::PlayerTurn));
        assert!(matches!(events.last(), Some(MatchEvent::StatsChanged(_))));
    }

    #[tokio::test]
    async fn player_skills_never_cost_mana() {
        let (mut engine, _) = started(&setup()).await;
        let outcome = engine
            .submit_player_action(PlayerAction::UseSkill(SkillSlot(0)))
            .await
            .unwrap();

        assert_eq!(outcome.amount, 30);
        assert_eq!(engine.combatant(Side::Enemy).current_health, 10);
        assert_eq!(engine.combatant(Side::Player).current_mana, 50);
        assert_eq!(engine.state(), MatchState::EnemyTurn);
    }

    #[tokio::test]
    async fn unknown_slots_and_foreign_skills_are_rejected() {
        let (mut engine, recorder) = started(&setup()).await;
        let before = recorder.len();

        assert_eq!(
            engine
                .submit_player_action(PlayerAction::UseSkill(SkillSlot(7)))
                .await,
            Err(RejectedAction::UnknownSkillSlot(7))
        );
        let foreign = engine.basic_attack(Side::Enemy).clone();
        assert_eq!(
            engine.submit_player_skill(&foreign).await,
            Err(RejectedAction::UnknownSkill("Ooze".to_owned()))
        );

        assert_eq!(engine.state(), MatchState::PlayerTurn);
        assert_eq!(engine.combatant(Side::Enemy).current_health, 40);
        assert_eq!(recorder.len(), before);
    }

    #[tokio::test]
    async fn skill_references_map_to_actions() {
        let setup = setup();
        let (mut engine, _) = started(&setup).await;
        let player = setup.player.as_ref().unwrap();

        assert_eq!(
            engine.action_for_skill(setup.player_basic_attack.as_ref().unwrap()),
            Some(PlayerAction::BasicAttack)
        );
        assert_eq!(
            engine.action_for_skill(&player.skills[1]),
            Some(PlayerAction::UseSkill(SkillSlot(1)))
        );

        let outcome = engine.submit_player_skill(&player.skills[0]).await.unwrap();
        assert_eq!(outcome.skill_name, "Fireball");
    }

    #[tokio::test]
    async fn available_skills_list_player_skills_in_order() {
        let (engine, _) = started(&setup()).await;
        let skills = engine.available_skills();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "Fireball");
        assert_eq!(skills[1].slot, SkillSlot(1));
        assert!(skills.iter().all(|s| s.usable));
        assert_eq!(engine.available_skills(), skills);
    }

    #[tokio::test]
    async fn enemy_turn_hands_back_to_the_player() {
        let (mut engine, recorder) = started(&setup()).await;
        engine.submit_player_action(PlayerAction::BasicAttack).await.unwrap();
        let outcome = engine.run_enemy_turn().await.unwrap();

        assert_eq!(outcome.actor, Side::Enemy);
        assert_eq!(outcome.target, Side::Player);
        assert_eq!(engine.combatant(Side::Player).current_health, 95);
        assert_eq!(engine.state(), MatchState::PlayerTurn);
        assert_eq!(engine.turn(), 2);
        assert!(recorder
            .events()
            .contains(&MatchEvent::Log("Slime prepares a basic attack.".to_owned())));
    }

    #[tokio::test]
    async fn losing_ends_the_match() {
        let mut setup = setup();
        setup.player = Some(CombatantTemplate::new("Hero", 5, 0, vec![]));
        let (mut engine, recorder) = started(&setup).await;

        engine.submit_player_action(PlayerAction::BasicAttack).await.unwrap();
        engine.run_enemy_turn().await.unwrap();

        assert_eq!(engine.state(), MatchState::Lost);
        assert_eq!(engine.result(), Some(MatchResult::Lost));
        assert_eq!(engine.outcome_message(), Some("You have been defeated..."));
        assert_eq!(
            recorder.events().last(),
            Some(&MatchEvent::MatchEnded {
                result: MatchResult::Lost,
                defeated: Side::Player
            })
        );
        assert_eq!(
            engine.submit_player_action(PlayerAction::BasicAttack).await,
            Err(RejectedAction::WrongState(MatchState::Lost))
        );
    }
}

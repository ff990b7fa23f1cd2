#![allow(dead_code)]

use duel_lib::engine::ai::DecisionSource;
use duel_lib::engine::pacing::InstantPacer;
use duel_lib::engine::CombatEngine;
use duel_lib::observers::MatchRecorder;
use duel_lib::rules::combatant::CombatantStats;
use duel_lib::rules::events::MatchEvent;
use duel_lib::rules::setup::MatchSetup;
use duel_lib::rules::MatchState;
use duel_lib::rules::SidesData;
use std::collections::VecDeque;

/// Answers the enemy's coin flips from a script, then keeps answering `fallback_coin`.
pub struct Coins {
    script: VecDeque<bool>,
    fallback_coin: bool,
    pub flips: usize,
}

impl Coins {
    pub fn always(prefer_basic: bool) -> Self {
        Self {
            script: VecDeque::new(),
            fallback_coin: prefer_basic,
            flips: 0,
        }
    }
}

impl DecisionSource for Coins {
    fn prefer_basic_attack(&mut self) -> bool {
        self.flips += 1;
        self.script.pop_front().unwrap_or(self.fallback_coin)
    }

    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

pub type TestEngine<D = Coins> = CombatEngine<D, InstantPacer>;

pub async fn start<D: DecisionSource>(
    setup: &MatchSetup,
    decisions: D,
) -> (TestEngine<D>, MatchRecorder) {
    let mut engine = CombatEngine::begin_match(setup, decisions, InstantPacer).unwrap();
    let recorder = MatchRecorder::new();
    engine.add_observer(recorder.clone());
    engine.start_first_turn().await.unwrap();
    (engine, recorder)
}

pub fn states(events: &[MatchEvent]) -> Vec<MatchState> {
    events
        .iter()
        .filter_map(|event| match event {
            MatchEvent::StateChanged(state) => Some(*state),
            _ => None,
        })
        .collect()
}

pub fn stats_updates(events: &[MatchEvent]) -> Vec<SidesData<CombatantStats>> {
    events
        .iter()
        .filter_map(|event| match event {
            MatchEvent::StatsChanged(stats) => Some(*stats),
            _ => None,
        })
        .collect()
}

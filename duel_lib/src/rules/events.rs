use crate::rules::combatant::CombatantStats;
use crate::rules::skills::CueKind;
use crate::rules::{MatchResult, MatchState, Side, SidesData};
use serde::{Deserialize, Serialize};

/// Result of resolving one action.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub actor: Side,
    pub skill_name: String,
    pub target: Side,
    /// Damage applied to the target. 0 for skills without an effect.
    pub amount: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum MatchEvent {
    Log(String),
    StateChanged(MatchState),
    StatsChanged(SidesData<CombatantStats>),
    /// Fired before damage is applied.
    ActionCue {
        side: Side,
        cue: CueKind,
    },
    HitCue {
        side: Side,
    },
    ActionResolved(ActionOutcome),
    MatchEnded {
        result: MatchResult,
        defeated: Side,
    },
}

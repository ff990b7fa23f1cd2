use duel_lib::observers::{MatchObserver, NotifyFailedError};
use duel_lib::rules::combatant::CombatantStats;
use duel_lib::rules::events::MatchEvent;
use duel_lib::rules::{Side, SidesData};
use tracing::trace;

/// Prints the narration and the status panels to stdout.
pub(crate) struct ConsoleObserver {
    names: SidesData<String>,
}

impl ConsoleObserver {
    pub fn new(names: SidesData<String>) -> Self {
        Self { names }
    }

    fn panel(&self, side: Side, stats: &CombatantStats) -> String {
        format!(
            "{} ({side}) HP: {} / {} MP: {} / {}",
            self.names[side], stats.hp, stats.max_hp, stats.mana, stats.max_mana
        )
    }
}

impl MatchObserver for ConsoleObserver {
    fn notify_event(&mut self, event: &MatchEvent) -> Result<(), NotifyFailedError> {
        match event {
            MatchEvent::Log(line) => println!("{line}"),
            MatchEvent::StatsChanged(stats) => {
                println!("  {}", self.panel(Side::Player, &stats.player));
                println!("  {}", self.panel(Side::Enemy, &stats.enemy));
            }
            MatchEvent::MatchEnded { defeated, .. } => {
                println!("{} is defeated.", self.names[*defeated]);
            }
            // Animation cues have nothing to animate on a terminal.
            other => trace!(event = ?other, "unpresented event"),
        }
        Ok(())
    }
}

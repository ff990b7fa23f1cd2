use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Presentation pauses inside a turn. They only give an animation time to play.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Beat {
    /// Between the introduction and the first player turn.
    Opening,
    /// Between an action cue and the hit.
    WindUp,
    /// After an action's effects have been shown.
    Aftermath,
    /// At the start of the enemy's turn, before it picks a skill.
    EnemyThinking,
}

#[async_trait]
pub trait Pacer: Send {
    async fn pause(&mut self, beat: Beat);
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PacingConfig {
    pub opening_ms: u64,
    pub wind_up_ms: u64,
    pub aftermath_ms: u64,
    pub enemy_thinking_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            opening_ms: 1500,
            wind_up_ms: 500,
            aftermath_ms: 1000,
            enemy_thinking_ms: 1500,
        }
    }
}

impl PacingConfig {
    pub fn duration_of(&self, beat: Beat) -> Duration {
        let ms = match beat {
            Beat::Opening => self.opening_ms,
            Beat::WindUp => self.wind_up_ms,
            Beat::Aftermath => self.aftermath_ms,
            Beat::EnemyThinking => self.enemy_thinking_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Sleeps on the tokio timer for each beat.
pub struct TokioPacer {
    config: PacingConfig,
}

impl TokioPacer {
    pub fn new(config: PacingConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&mut self, beat: Beat) {
        let duration = self.config.duration_of(beat);
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Collapses every beat to nothing. Used headless and in tests.
#[derive(Debug, Default, Copy, Clone)]
pub struct InstantPacer;

#[async_trait]
impl Pacer for InstantPacer {
    async fn pause(&mut self, _beat: Beat) {}
}

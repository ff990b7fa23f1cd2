//! Rules and engine for a turn-based duel between a player and an AI-controlled enemy.
//!
//! [`engine::CombatEngine`] owns the match and enforces whose turn it is. Hosts feed it player
//! actions, either directly or through [`runner::run_match`] with a [`players::Player`], and
//! present it by registering [`observers::MatchObserver`]s.

pub mod engine;
pub mod observers;
pub mod players;
pub mod rules;
pub mod runner;

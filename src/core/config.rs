//! Timing configuration, loaded from `~/.cyber-typer/config.json`.
//!
//! Every field is optional in the file; missing fields take the defaults in
//! [`crate::core::constants`]. A missing or unreadable file yields the
//! defaults. Only timing is configurable: the vocabulary is fixed.

use super::constants::*;
use crate::utils::persistence::load_json_or_default;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of one round in seconds.
    pub round_seconds: u32,
    /// Spawn period at difficulty 1.0; divided by the current difficulty.
    pub spawn_base_ms: f64,
    pub countdown_ms: u64,
    pub ramp_interval_ms: u64,
    pub ramp_step: f64,
    pub max_difficulty: f64,
    /// Target frame period of the terminal host.
    pub frame_ms: u64,
    pub particle_lifetime_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            spawn_base_ms: SPAWN_BASE_INTERVAL_MS,
            countdown_ms: COUNTDOWN_INTERVAL_MS,
            ramp_interval_ms: DIFFICULTY_RAMP_INTERVAL_MS,
            ramp_step: DIFFICULTY_STEP,
            max_difficulty: MAX_DIFFICULTY,
            frame_ms: REALTIME_FRAME_MS,
            particle_lifetime_ms: PARTICLE_LIFETIME_MS,
        }
    }
}

impl GameConfig {
    /// Load the user's config file, falling back to defaults.
    pub fn load() -> Self {
        load_json_or_default::<Self>(CONFIG_FILE).sanitized()
    }

    /// Clamp values that would stall or break the game loop.
    pub fn sanitized(mut self) -> Self {
        self.round_seconds = self.round_seconds.max(1);
        if !self.spawn_base_ms.is_finite() || self.spawn_base_ms < 1.0 {
            self.spawn_base_ms = SPAWN_BASE_INTERVAL_MS;
        }
        self.countdown_ms = self.countdown_ms.max(1);
        self.ramp_interval_ms = self.ramp_interval_ms.max(1);
        if !self.ramp_step.is_finite() || self.ramp_step < 0.0 {
            self.ramp_step = DIFFICULTY_STEP;
        }
        if !self.max_difficulty.is_finite() || self.max_difficulty < BASE_DIFFICULTY {
            self.max_difficulty = BASE_DIFFICULTY;
        }
        self.frame_ms = self.frame_ms.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.round_seconds, 60);
        assert!((config.spawn_base_ms - 2000.0).abs() < f64::EPSILON);
        assert_eq!(config.countdown_ms, 1000);
        assert_eq!(config.ramp_interval_ms, 10_000);
        assert!((config.ramp_step - 0.1).abs() < f64::EPSILON);
        assert!((config.max_difficulty - 2.5).abs() < f64::EPSILON);
        assert_eq!(config.particle_lifetime_ms, 1000);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "round_seconds": 30 }"#).unwrap();
        assert_eq!(config.round_seconds, 30);
        assert_eq!(config.countdown_ms, 1000);
        assert!((config.max_difficulty - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sanitized_clamps_nonsense() {
        let config = GameConfig {
            round_seconds: 0,
            spawn_base_ms: -5.0,
            countdown_ms: 0,
            ramp_interval_ms: 0,
            ramp_step: f64::NAN,
            max_difficulty: 0.2,
            frame_ms: 0,
            particle_lifetime_ms: 0,
        }
        .sanitized();

        assert_eq!(config.round_seconds, 1);
        assert!((config.spawn_base_ms - 2000.0).abs() < f64::EPSILON);
        assert_eq!(config.countdown_ms, 1);
        assert_eq!(config.ramp_interval_ms, 1);
        assert!((config.ramp_step - 0.1).abs() < f64::EPSILON);
        assert!((config.max_difficulty - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.frame_ms, 1);
        assert_eq!(config.particle_lifetime_ms, 0);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let config = GameConfig::default();
        assert_eq!(config.clone().sanitized(), config);
    }
}

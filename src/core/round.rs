//! Round state: score, high score, countdown and difficulty.

use super::config::GameConfig;
use super::constants::BASE_DIFFICULTY;

/// Whether a round is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Before the first round and after every countdown expiry.
    Idle,
    Active,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// One second elapsed, time remains.
    Ticked,
    /// The clock hit zero and the round just ended.
    Expired,
    /// No round was running; nothing changed.
    Inactive,
}

/// Everything the HUD shows about the current round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub score: u64,
    /// Best score of any finished round in this process.
    pub high_score: u64,
    /// Whole seconds left in the round.
    pub time_remaining: u32,
    /// Spawn-rate and fall-speed multiplier.
    pub difficulty: f64,
    pub active: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl RoundState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            high_score: 0,
            time_remaining: config.round_seconds,
            difficulty: BASE_DIFFICULTY,
            active: false,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        if self.active {
            RoundPhase::Active
        } else {
            RoundPhase::Idle
        }
    }

    /// Reset for a fresh round. The high score is kept.
    pub fn begin(&mut self, config: &GameConfig) {
        self.score = 0;
        self.time_remaining = config.round_seconds;
        self.difficulty = BASE_DIFFICULTY;
        self.active = true;
    }

    /// Count one second down. Reaching zero ends the round and commits the high score.
    pub fn tick_countdown(&mut self) -> CountdownOutcome {
        if !self.active {
            return CountdownOutcome::Inactive;
        }

        if self.time_remaining <= 1 {
            self.time_remaining = 0;
            self.active = false;
            self.high_score = self.high_score.max(self.score);
            CountdownOutcome::Expired
        } else {
            self.time_remaining -= 1;
            CountdownOutcome::Ticked
        }
    }

    /// Step the difficulty up, clamped to `max`. Returns true if it changed.
    pub fn ramp_difficulty(&mut self, step: f64, max: f64) -> bool {
        if !self.active {
            return false;
        }
        let next = (self.difficulty + step).min(max);
        if next > self.difficulty {
            self.difficulty = next;
            true
        } else {
            false
        }
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Milliseconds between spawns at the current difficulty.
    pub fn spawn_interval_ms(&self, base_ms: f64) -> u64 {
        (base_ms / self.difficulty).round().max(1.0) as u64
    }

    /// Whole-number level shown in the HUD.
    pub fn level(&self) -> u32 {
        // Guard against 1.9999.. from repeated 0.1 steps
        (self.difficulty + 1e-9).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{DIFFICULTY_STEP, MAX_DIFFICULTY};

    fn active_round() -> RoundState {
        let mut round = RoundState::default();
        round.begin(&GameConfig::default());
        round
    }

    #[test]
    fn test_new_round_state_is_idle() {
        let round = RoundState::default();
        assert_eq!(round.phase(), RoundPhase::Idle);
        assert_eq!(round.score, 0);
        assert_eq!(round.high_score, 0);
        assert_eq!(round.time_remaining, 60);
        assert!((round.difficulty - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_begin_keeps_high_score() {
        let mut round = RoundState::default();
        round.high_score = 1200;
        round.score = 800;
        round.time_remaining = 0;
        round.difficulty = 2.1;
        round.begin(&GameConfig::default());

        assert!(round.active);
        assert_eq!(round.score, 0);
        assert_eq!(round.high_score, 1200);
        assert_eq!(round.time_remaining, 60);
        assert!((round.difficulty - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_countdown_ticks() {
        let mut round = active_round();
        assert_eq!(round.tick_countdown(), CountdownOutcome::Ticked);
        assert_eq!(round.time_remaining, 59);
    }

    #[test]
    fn test_countdown_expires_at_one() {
        let mut round = active_round();
        round.time_remaining = 1;
        round.score = 500;
        assert_eq!(round.tick_countdown(), CountdownOutcome::Expired);
        assert_eq!(round.time_remaining, 0);
        assert!(!round.active);
        assert_eq!(round.high_score, 500);
    }

    #[test]
    fn test_countdown_inactive_noop() {
        let mut round = RoundState::default();
        assert_eq!(round.tick_countdown(), CountdownOutcome::Inactive);
        assert_eq!(round.time_remaining, 60);
    }

    #[test]
    fn test_high_score_only_increases() {
        let mut round = active_round();
        round.high_score = 2000;
        round.score = 300;
        round.time_remaining = 1;
        round.tick_countdown();
        assert_eq!(round.high_score, 2000);
    }

    #[test]
    fn test_ramp_difficulty_capped() {
        let mut round = active_round();
        let mut changes = 0;
        for _ in 0..100 {
            if round.ramp_difficulty(DIFFICULTY_STEP, MAX_DIFFICULTY) {
                changes += 1;
            }
        }
        assert_eq!(changes, 15);
        assert!((round.difficulty - MAX_DIFFICULTY).abs() < f64::EPSILON);
        assert!(!round.ramp_difficulty(DIFFICULTY_STEP, MAX_DIFFICULTY));
    }

    #[test]
    fn test_ramp_ignored_when_idle() {
        let mut round = RoundState::default();
        assert!(!round.ramp_difficulty(DIFFICULTY_STEP, MAX_DIFFICULTY));
        assert!((round.difficulty - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spawn_interval_scales_inversely() {
        let mut round = active_round();
        assert_eq!(round.spawn_interval_ms(2000.0), 2000);
        round.difficulty = 2.0;
        assert_eq!(round.spawn_interval_ms(2000.0), 1000);
        round.difficulty = 2.5;
        assert_eq!(round.spawn_interval_ms(2000.0), 800);
    }

    #[test]
    fn test_level_floors_difficulty() {
        let mut round = active_round();
        assert_eq!(round.level(), 1);
        for _ in 0..10 {
            round.ramp_difficulty(DIFFICULTY_STEP, MAX_DIFFICULTY);
        }
        assert_eq!(round.level(), 2);
        round.difficulty = 2.5;
        assert_eq!(round.level(), 2);
    }
}

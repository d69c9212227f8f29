//! The game session: owns one round's state and drives it from the clock.
//!
//! All mutation goes through `&mut GameSession`. Timer ticks, frame callbacks
//! and input are applied one at a time, so no step ever observes another half
//! done.

use super::config::GameConfig;
use super::matcher::{resolve_input, MatchedWord};
use super::round::{CountdownOutcome, RoundPhase, RoundState};
use super::scheduler::{FrameClock, Scheduler, TimerGroup, TimerId};
use crate::core::constants::MAX_FRAME_DELTA_MS;
use crate::entities::{spawn_word_entity, EntityId, Viewport, WordEntity};
use crate::particles::ParticleField;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Events the session registers with its scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockEvent {
    SpawnWord,
    Countdown,
    RampDifficulty,
    /// Per-frame fall update.
    Motion,
    /// Drop the oldest particle burst.
    ExpireParticles,
}

/// A single-player game: round state, live words, particles and input.
pub struct GameSession<R = StdRng, S = FrameClock<ClockEvent>> {
    config: GameConfig,
    round: RoundState,
    entities: Vec<WordEntity>,
    particles: ParticleField,
    input: String,
    viewport: Viewport,
    next_entity_id: u64,
    spawn_timer: Option<TimerId>,
    rng: R,
    scheduler: S,
}

impl GameSession {
    /// Session seeded from OS entropy.
    pub fn new(config: GameConfig) -> Self {
        Self::with_parts(config, StdRng::from_entropy(), FrameClock::new())
    }

    /// Session whose word and particle rolls are reproducible.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_parts(config, StdRng::seed_from_u64(seed), FrameClock::new())
    }
}

impl<R: Rng, S: Scheduler<ClockEvent>> GameSession<R, S> {
    pub fn with_parts(config: GameConfig, rng: R, scheduler: S) -> Self {
        let round = RoundState::new(&config);
        Self {
            config,
            round,
            entities: Vec::new(),
            particles: ParticleField::new(),
            input: String::new(),
            viewport: Viewport::default(),
            next_entity_id: 0,
            spawn_timer: None,
            rng,
            scheduler,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    pub fn is_active(&self) -> bool {
        self.round.active
    }

    /// Live words in spawn order.
    pub fn entities(&self) -> &[WordEntity] {
        &self.entities
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Update the play field size. Affects future spawns and escape checks.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // ── Round lifecycle ───────────────────────────────────────────────

    /// Start a round. Ignored while one is already running.
    pub fn start(&mut self) -> bool {
        if self.round.active {
            return false;
        }

        self.round.begin(&self.config);
        self.entities.clear();
        self.input.clear();

        // Nothing of the previous round may survive into this one
        self.scheduler.cancel_group(TimerGroup::Round);
        self.arm_spawn_timer();
        self.scheduler
            .every(TimerGroup::Round, self.config.countdown_ms, ClockEvent::Countdown);
        self.scheduler.every(
            TimerGroup::Round,
            self.config.ramp_interval_ms,
            ClockEvent::RampDifficulty,
        );
        self.scheduler.on_frame(TimerGroup::Round, ClockEvent::Motion);

        info!(
            "round started: {}s, high score {}",
            self.round.time_remaining, self.round.high_score
        );
        true
    }

    fn end_round(&mut self) {
        let cancelled = self.scheduler.cancel_group(TimerGroup::Round);
        self.spawn_timer = None;
        info!(
            "round over: score {}, high score {} ({} timers stopped)",
            self.round.score, self.round.high_score, cancelled
        );
    }

    fn arm_spawn_timer(&mut self) {
        if let Some(id) = self.spawn_timer.take() {
            self.scheduler.cancel(id);
        }
        let period = self.round.spawn_interval_ms(self.config.spawn_base_ms);
        self.spawn_timer = Some(
            self.scheduler
                .every(TimerGroup::Round, period, ClockEvent::SpawnWord),
        );
    }

    // ── Clock ─────────────────────────────────────────────────────────

    /// Advance the clock by one frame of `dt_ms` and apply everything due.
    pub fn advance(&mut self, dt_ms: u64) {
        // A stalled terminal must not replay seconds of timers at once
        let dt_ms = dt_ms.min(MAX_FRAME_DELTA_MS);
        self.scheduler.begin_frame(dt_ms);
        while let Some(event) = self.scheduler.poll() {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: ClockEvent) {
        match event {
            ClockEvent::SpawnWord => self.spawn_word(),
            ClockEvent::Countdown => self.countdown(),
            ClockEvent::RampDifficulty => self.ramp_difficulty(),
            ClockEvent::Motion => self.apply_motion(),
            ClockEvent::ExpireParticles => {
                let removed = self.particles.expire_oldest();
                trace!("expired {} particles, {} live", removed, self.particles.len());
            }
        }
    }

    fn spawn_word(&mut self) {
        if !self.round.active {
            return;
        }
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        let entity = spawn_word_entity(&mut self.rng, id, self.round.difficulty, self.viewport);
        trace!(
            "spawned {} {} ({}) at x={:.0} speed={:.2}",
            entity.id,
            entity.word,
            entity.color.name(),
            entity.x,
            entity.speed
        );
        self.entities.push(entity);
    }

    fn countdown(&mut self) {
        if self.round.tick_countdown() == CountdownOutcome::Expired {
            self.end_round();
        }
    }

    fn ramp_difficulty(&mut self) {
        if self
            .round
            .ramp_difficulty(self.config.ramp_step, self.config.max_difficulty)
        {
            debug!("difficulty now {:.1}", self.round.difficulty);
            self.arm_spawn_timer();
        }
    }

    fn apply_motion(&mut self) {
        if !self.round.active {
            return;
        }
        for entity in &mut self.entities {
            entity.y += entity.speed;
        }
        let viewport = self.viewport;
        let before = self.entities.len();
        self.entities.retain(|e| !e.has_escaped(viewport));
        let escaped = before - self.entities.len();
        if escaped > 0 {
            trace!("{} words escaped", escaped);
        }
    }

    // ── Input ─────────────────────────────────────────────────────────

    /// Replace the input buffer with `text` and resolve it against the live
    /// words. Ignored while no round is running.
    pub fn set_input(&mut self, text: &str) -> Option<MatchedWord> {
        if !self.round.active {
            return None;
        }

        let resolution = resolve_input(text, &self.entities);
        self.input = resolution.input;

        let matched = resolution.matched?;
        self.particles.burst(&mut self.rng, matched.x, matched.y);
        self.scheduler.after(
            TimerGroup::Effects,
            self.config.particle_lifetime_ms,
            ClockEvent::ExpireParticles,
        );
        self.entities.remove(matched.index);
        self.round.add_score(resolution.score_delta);
        debug!(
            "matched {} {} for {} (score {})",
            matched.id, matched.word, resolution.score_delta, self.round.score
        );
        Some(matched)
    }

    /// Append one typed character.
    pub fn type_char(&mut self, c: char) -> Option<MatchedWord> {
        if !self.round.active {
            return None;
        }
        let mut text = self.input.clone();
        text.push(c);
        self.set_input(&text)
    }

    /// Remove the last character of the input.
    pub fn backspace(&mut self) {
        if !self.round.active {
            return;
        }
        let mut text = self.input.clone();
        text.pop();
        self.set_input(&text);
    }

    /// Clear the whole input line.
    pub fn clear_input(&mut self) {
        if self.round.active {
            self.set_input("");
        }
    }
}

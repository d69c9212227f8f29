//! Core game loop: clock, round state, matching and the session tying them together.

pub mod config;
pub mod constants;
pub mod matcher;
pub mod round;
pub mod scheduler;
pub mod session;

pub use config::GameConfig;
pub use matcher::{normalize_input, resolve_input, InputResolution, MatchedWord};
pub use round::{CountdownOutcome, RoundPhase, RoundState};
pub use scheduler::{FrameClock, Scheduler, TimerGroup, TimerId};
pub use session::{ClockEvent, GameSession};

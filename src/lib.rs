//! Cyber Typer - Terminal Typing Game Library
//!
//! Words fall down the play field; type them before they reach the bottom.
//! This crate exposes the game core (clock, round state, matching) for the
//! terminal binary and for tests.

pub mod core;
pub mod entities;
pub mod input;
pub mod particles;
pub mod ui;
pub mod utils;
pub mod words;

pub use crate::core::{GameConfig, GameSession, RoundState};
pub use entities::{Viewport, WordEntity};

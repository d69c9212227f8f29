//! Terminal rendering of the game session.
//!
//! The UI only reads from the session; every state change goes through
//! `GameSession` methods called by the host loop.

pub mod game_common;
pub mod play_scene;

use crate::core::{ClockEvent, GameSession, Scheduler};
use crate::entities::Viewport;
use ratatui::{layout::Rect, Frame};

/// Main UI drawing function.
pub fn draw_ui<R: rand::Rng, S: Scheduler<ClockEvent>>(
    frame: &mut Frame,
    session: &GameSession<R, S>,
) {
    let size = frame.size();
    play_scene::render_game(frame, size, session);
}

/// Viewport of the play field for a terminal of the given size.
pub fn viewport_for(area: Rect) -> Viewport {
    let field = game_common::compute_game_layout(area).play_field;
    Viewport::from_cells(field.width, field.height)
}

//! Falling word entity and play field geometry.

use crate::core::constants::{
    CELL_HEIGHT_UNITS, CELL_WIDTH_UNITS, ENTITY_WIDTH, MAX_PLAY_WIDTH, SPAWN_X_MARGIN,
};
use crate::words::ColorTag;
use std::fmt;

/// Opaque identifier of a word entity, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A word falling down the play field.
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntity {
    pub id: EntityId,
    pub word: &'static str,
    /// Left edge in logical units.
    pub x: f64,
    /// Top edge in logical units. Negative while above the visible area.
    pub y: f64,
    /// Vertical distance per frame, fixed at spawn.
    pub speed: f64,
    pub color: ColorTag,
}

impl WordEntity {
    /// Points awarded for typing this word.
    pub fn points(&self) -> u64 {
        self.word.len() as u64 * crate::core::constants::POINTS_PER_LETTER
    }

    /// Whether the entity has reached the bottom of the play field.
    pub fn has_escaped(&self, viewport: Viewport) -> bool {
        self.y >= viewport.height
    }
}

/// Play field size in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    /// An 80x24 terminal.
    fn default() -> Self {
        Self::from_cells(80, 24)
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Viewport covering a block of terminal cells.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self::new(
            cols as f64 * CELL_WIDTH_UNITS,
            rows as f64 * CELL_HEIGHT_UNITS,
        )
    }

    /// Width words may spawn across, capped so the field stays compact on wide screens.
    pub fn available_width(&self) -> f64 {
        self.width.min(MAX_PLAY_WIDTH)
    }

    /// Largest left edge a freshly spawned word may take.
    pub fn max_spawn_x(&self) -> f64 {
        self.available_width() - ENTITY_WIDTH + SPAWN_X_MARGIN
    }
}

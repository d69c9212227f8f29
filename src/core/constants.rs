//! Gameplay constants. Positions and speeds are in logical units; see the
//! cell mapping at the bottom for how they land on the terminal.

// Round timing
pub const ROUND_SECONDS: u32 = 60;
pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;
/// Spawn period at difficulty 1.0; the live period is this divided by the difficulty.
pub const SPAWN_BASE_INTERVAL_MS: f64 = 2000.0;

// Difficulty ramp
pub const BASE_DIFFICULTY: f64 = 1.0;
pub const DIFFICULTY_RAMP_INTERVAL_MS: u64 = 10_000;
pub const DIFFICULTY_STEP: f64 = 0.1;
pub const MAX_DIFFICULTY: f64 = 2.5;

// Real-time frame rate
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
/// Longest frame the game clock accepts. A stalled terminal cannot replay
/// more than this many milliseconds of timers at once.
pub const MAX_FRAME_DELTA_MS: u64 = 500;

// Word entity spawning (logical units)
/// Starting height, above the top edge of the play field.
pub const SPAWN_Y: f64 = -50.0;
pub const SPAWN_X_MARGIN: f64 = 10.0;
/// Horizontal room reserved for one word. Spawning keeps the word's left edge
/// far enough from the right side for this width to fit.
pub const ENTITY_WIDTH: f64 = 100.0;
/// Spawn area cap on wide terminals.
pub const MAX_PLAY_WIDTH: f64 = 500.0;
/// Fall speed range in units per frame, before the difficulty multiplier.
pub const MIN_SPEED: f64 = 0.5;
pub const MAX_SPEED: f64 = 2.0;

// Scoring
pub const POINTS_PER_LETTER: u64 = 100;

// Feedback particles
pub const PARTICLES_PER_BURST: usize = 20;
pub const PARTICLE_LIFETIME_MS: u64 = 1000;

// Terminal cell to logical unit mapping
/// Logical units per terminal column.
pub const CELL_WIDTH_UNITS: f64 = 10.0;
/// Logical units per terminal row. Cells are about twice as tall as wide.
pub const CELL_HEIGHT_UNITS: f64 = 20.0;

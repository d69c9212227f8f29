//! Vocabulary and palette data definitions.

/// Words that can fall down the play field. All entries are uppercase.
///
/// "CYBER" appears twice on purpose and is drawn twice as often.
pub const WORDS: &[&str] = &[
    // Cyberpunk
    "CYBER", "HACK", "NEON", "PULSE", "GRID", "BYTE", "DATA", "SYNC", "FLUX", "VOID", "NODE",
    "CORE", "WAVE", "BEAM",
    // Tech
    "CODE", "LINK", "PING", "PORT", "BOOT", "SCAN", "LOOP", "CHIP", "DISK", "FILE", "HOST",
    "MESH", "RAID", "ROOT",
    // Sci-fi
    "NANO", "QUANTUM", "LASER", "NEXUS", "PRIME", "SOLAR", "CYBER", "MATRIX", "NEURAL", "PLASMA",
    "VECTOR", "ZERO",
    // Short action words
    "RUN", "FLY", "JUMP", "DASH", "SLAM", "RUSH", "FADE", "GLOW", "BURN", "RISE", "FALL", "SPIN",
    "FLIP", "ZOOM",
];

/// Cosmetic color category of a falling word.
///
/// Each tag names a two-stop gradient; the renderer decides how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    PurplePink,
    CyanBlue,
    GreenCyan,
    PinkRose,
    AmberRed,
}

impl ColorTag {
    /// The palette, in draw order.
    pub const ALL: [ColorTag; 5] = [
        ColorTag::PurplePink,
        ColorTag::CyanBlue,
        ColorTag::GreenCyan,
        ColorTag::PinkRose,
        ColorTag::AmberRed,
    ];

    /// Short label used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PurplePink => "purple-pink",
            Self::CyanBlue => "cyan-blue",
            Self::GreenCyan => "green-cyan",
            Self::PinkRose => "pink-rose",
            Self::AmberRed => "amber-red",
        }
    }
}

//! Word entity construction.

use super::types::{EntityId, Viewport, WordEntity};
use crate::core::constants::{MAX_SPEED, MIN_SPEED, SPAWN_X_MARGIN, SPAWN_Y};
use crate::words::{ColorTag, WORDS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Build a new falling word.
///
/// The word and color are drawn uniformly. The left edge lands in
/// `[10, min(width, 500) - 90)` so the word never starts off-screen, and the
/// fall speed is `uniform(0.5, 2.0) * difficulty`, fixed for the entity's life.
pub fn spawn_word_entity<R: Rng>(
    rng: &mut R,
    id: EntityId,
    difficulty: f64,
    viewport: Viewport,
) -> WordEntity {
    // Both tables are non-empty constants
    let word = WORDS.choose(rng).copied().unwrap_or(WORDS[0]);
    let color = ColorTag::ALL
        .choose(rng)
        .copied()
        .unwrap_or(ColorTag::PurplePink);

    // Play field narrower than one entity: pin to the left margin
    let max_x = viewport.max_spawn_x();
    let x = if max_x > SPAWN_X_MARGIN {
        rng.gen_range(SPAWN_X_MARGIN..max_x)
    } else {
        SPAWN_X_MARGIN
    };

    let speed = rng.gen_range(MIN_SPEED..MAX_SPEED) * difficulty;

    WordEntity {
        id,
        word,
        x,
        y: SPAWN_Y,
        speed,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_spawn_starts_above_field() {
        let mut rng = seeded_rng();
        let entity = spawn_word_entity(&mut rng, EntityId(7), 1.0, Viewport::new(800.0, 600.0));
        assert_eq!(entity.id, EntityId(7));
        assert!((entity.y - SPAWN_Y).abs() < f64::EPSILON);
        assert!(WORDS.contains(&entity.word));
    }

    #[test]
    fn test_spawn_x_within_bounds() {
        let mut rng = seeded_rng();
        let viewport = Viewport::new(800.0, 600.0);
        for i in 0..500 {
            let entity = spawn_word_entity(&mut rng, EntityId(i), 1.0, viewport);
            assert!(entity.x >= 10.0, "x = {}", entity.x);
            assert!(entity.x < 410.0, "x = {}", entity.x);
        }
    }

    #[test]
    fn test_spawn_x_narrow_viewport_pinned() {
        let mut rng = seeded_rng();
        let entity = spawn_word_entity(&mut rng, EntityId(1), 1.0, Viewport::new(60.0, 600.0));
        assert!((entity.x - SPAWN_X_MARGIN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_speed_scales_with_difficulty() {
        let mut rng = seeded_rng();
        let viewport = Viewport::default();
        for difficulty in [1.0, 1.5, 2.5] {
            for i in 0..200 {
                let entity = spawn_word_entity(&mut rng, EntityId(i), difficulty, viewport);
                assert!(entity.speed >= 0.5 * difficulty);
                assert!(entity.speed <= 2.0 * difficulty);
            }
        }
    }

    #[test]
    fn test_same_seed_same_entity() {
        let viewport = Viewport::default();
        let a = spawn_word_entity(&mut seeded_rng(), EntityId(1), 1.3, viewport);
        let b = spawn_word_entity(&mut seeded_rng(), EntityId(1), 1.3, viewport);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_word_reachable() {
        let mut rng = seeded_rng();
        let viewport = Viewport::default();
        let mut seen = std::collections::HashSet::new();
        for i in 0..5000 {
            seen.insert(spawn_word_entity(&mut rng, EntityId(i), 1.0, viewport).word);
        }
        for word in WORDS {
            assert!(seen.contains(word), "{} never drawn", word);
        }
    }

    #[test]
    fn test_all_colors_reachable() {
        let mut rng = seeded_rng();
        let viewport = Viewport::default();
        let mut seen = std::collections::HashSet::new();
        for i in 0..500 {
            seen.insert(spawn_word_entity(&mut rng, EntityId(i), 1.0, viewport).color);
        }
        assert_eq!(seen.len(), ColorTag::ALL.len());
    }
}

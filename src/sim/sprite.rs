//! Sprite entities
//!
//! Everything on screen is a square sprite: the player pixie and the fairy
//! dust it collects. Sprites live in fixed slots (the player field or a dust
//! pool slot); "destroying" one just flips its active flag so the slot can be
//! reused by the next spawn.

use glam::IVec2;
use rand::Rng;

use super::color::Rgb;

/// A positioned, sized, colored, activatable game object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub active: bool,
    pub pos: IVec2,
    pub size: i32,
    pub color: Rgb,
}

impl Sprite {
    /// An inactive placeholder for unused pool slots
    pub const fn inactive() -> Self {
        Sprite {
            active: false,
            pos: IVec2::ZERO,
            size: 0,
            color: Rgb::WHITE,
        }
    }

    /// Spawn a sprite. Axes given as `None` are sampled uniformly in
    /// `[0, screen_dimension)`; `Some` values are used as-is. Every spawn
    /// rolls a fresh happy color and comes up active.
    pub fn spawn<R: Rng>(
        x: Option<i32>,
        y: Option<i32>,
        size: i32,
        screen: IVec2,
        rng: &mut R,
    ) -> Self {
        let x = x.unwrap_or_else(|| rng.random_range(0..screen.x));
        let y = y.unwrap_or_else(|| rng.random_range(0..screen.y));
        Sprite {
            active: true,
            pos: IVec2::new(x, y),
            size,
            color: Rgb::happy(rng),
        }
    }

    pub fn grow(&mut self) {
        self.size += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_fixed_position() {
        let mut rng = Pcg32::seed_from_u64(1);
        let s = Sprite::spawn(Some(10), Some(20), 4, IVec2::new(100, 100), &mut rng);
        assert!(s.active);
        assert_eq!(s.pos, IVec2::new(10, 20));
        assert_eq!(s.size, 4);
    }

    #[test]
    fn test_spawn_random_position_in_bounds() {
        let mut rng = Pcg32::seed_from_u64(2);
        let screen = IVec2::new(320, 240);
        for _ in 0..200 {
            let s = Sprite::spawn(None, None, 4, screen, &mut rng);
            assert!(s.pos.x >= 0 && s.pos.x < screen.x);
            assert!(s.pos.y >= 0 && s.pos.y < screen.y);
        }
    }

    #[test]
    fn test_spawn_mixed_axes() {
        let mut rng = Pcg32::seed_from_u64(3);
        let screen = IVec2::new(100, 100);
        let s = Sprite::spawn(Some(42), None, 4, screen, &mut rng);
        assert_eq!(s.pos.x, 42);
        assert!(s.pos.y >= 0 && s.pos.y < screen.y);
    }

    #[test]
    fn test_grow() {
        let mut s = Sprite::inactive();
        s.size = 4;
        s.grow();
        assert_eq!(s.size, 5);
    }
}

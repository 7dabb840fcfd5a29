//! Game state and level progression
//!
//! One owned `GameState` holds everything the simulation mutates. It is
//! created once at startup and re-initialized in place on every level
//! transition; there are no process-wide singletons.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::sprite::Sprite;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// All dust collected, waiting for the advance signal
    LevelComplete,
}

/// Dust pool capacity: the maximum `dust_total_for_level` can ever return.
/// A level only touches slots `0..dust_total`.
pub const DUST_POOL_CAPACITY: usize = 100;

/// Dust count for a level: 10 per level, capped at level 10.
pub fn dust_total_for_level(level: u32) -> usize {
    (level.clamp(1, 10) * 10) as usize
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation RNG, advanced only by spawns
    pub rng: Pcg32,
    /// Simulation tick counter (wraps)
    pub ticks: u64,
    /// Current level, starts at 1 and only increases
    pub level: u32,
    /// Tick of the most recent dust spawn
    pub last_spawn_ticks: u64,
    /// Tick the current level started at
    pub level_start_ticks: u64,
    /// Elapsed level time in simulated seconds, recomputed while Playing
    pub level_elapsed: f32,
    /// Screen dimensions, queried from the host once at creation
    pub screen: IVec2,
    /// The player pixie
    pub player: Sprite,
    /// Fixed-capacity dust pool; "deletion" is an active-flag flip
    pub dust: [Sprite; DUST_POOL_CAPACITY],
    /// Count of active dust slots
    pub dust_remaining: usize,
    /// Dust collected this level
    pub dust_collected: usize,
    /// Dust count this level plays to
    pub dust_total: usize,
    /// Current phase
    pub phase: GamePhase,
    /// Balance knobs
    pub tuning: Tuning,
}

impl GameState {
    /// Create a new game at level 1 with the given seed and screen size
    pub fn new(seed: u64, screen: IVec2, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Sprite::spawn(
            Some(screen.x / 20),
            Some(screen.y / 20),
            tuning.player_start_size,
            screen,
            &mut rng,
        );

        let mut state = Self {
            seed,
            rng,
            ticks: 0,
            level: 0,
            last_spawn_ticks: 0,
            level_start_ticks: 0,
            level_elapsed: 0.0,
            screen,
            player,
            dust: [Sprite::inactive(); DUST_POOL_CAPACITY],
            dust_remaining: 0,
            dust_collected: 0,
            dust_total: 0,
            phase: GamePhase::Playing,
            tuning,
        };
        state.start_level(1);
        state
    }

    /// Re-initialize the pool, player position, counts and timers for a
    /// level. Player size and color persist across levels; only its position
    /// resets.
    pub fn start_level(&mut self, level: u32) {
        self.level = level;
        self.dust_total = dust_total_for_level(level);

        for slot in self.dust.iter_mut() {
            *slot = Sprite::inactive();
        }
        let dust_size = self.tuning.dust_size;
        for slot in self.dust[..self.dust_total].iter_mut() {
            *slot = Sprite::spawn(None, None, dust_size, self.screen, &mut self.rng);
        }

        self.player.pos = self.screen / 20;
        self.dust_remaining = self.dust_total;
        self.dust_collected = 0;
        self.level_start_ticks = self.ticks;
        self.last_spawn_ticks = self.ticks;
        self.level_elapsed = 0.0;
        self.phase = GamePhase::Playing;

        log::info!(
            "level {} started: {} dust on a {}x{} screen",
            level,
            self.dust_total,
            self.screen.x,
            self.screen.y
        );
    }

    /// Count active slots in the pool. The `dust_remaining` field must equal
    /// this at all times after init/spawn/collection logic runs.
    pub fn active_dust_count(&self) -> usize {
        self.dust.iter().filter(|d| d.active).count()
    }

    /// Ticks elapsed since the level started, wrap-safe
    pub fn ticks_in_level(&self) -> u64 {
        self.ticks.wrapping_sub(self.level_start_ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> GameState {
        GameState::new(42, IVec2::new(100, 100), Tuning::default())
    }

    #[test]
    fn test_dust_total_scaling() {
        assert_eq!(dust_total_for_level(0), 10); // clamps up
        assert_eq!(dust_total_for_level(1), 10);
        assert_eq!(dust_total_for_level(5), 50);
        assert_eq!(dust_total_for_level(10), 100);
        assert_eq!(dust_total_for_level(15), 100); // clamps down
    }

    #[test]
    fn test_new_game_starts_at_level_one() {
        let state = test_state();
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.dust_total, 10);
        assert_eq!(state.dust_remaining, 10);
        assert_eq!(state.dust_collected, 0);
        assert_eq!(state.dust_remaining, state.active_dust_count());
    }

    #[test]
    fn test_player_starts_at_screen_twentieth() {
        let state = test_state();
        assert_eq!(state.player.pos, IVec2::new(5, 5));
        assert!(state.player.active);
    }

    #[test]
    fn test_untouched_slots_stay_inactive() {
        let state = test_state();
        assert!(state.dust[state.dust_total..].iter().all(|d| !d.active));
    }

    #[test]
    fn test_start_level_resets_counts_but_not_player_size() {
        let mut state = test_state();
        state.player.size = 9;
        state.player.pos = IVec2::new(77, 77);
        state.dust_collected = 10;
        state.ticks = 5_000;

        state.start_level(3);
        assert_eq!(state.level, 3);
        assert_eq!(state.dust_total, 30);
        assert_eq!(state.dust_remaining, 30);
        assert_eq!(state.dust_collected, 0);
        assert_eq!(state.level_start_ticks, 5_000);
        assert_eq!(state.player.pos, IVec2::new(5, 5));
        assert_eq!(state.player.size, 9);
    }

    #[test]
    fn test_dust_spawns_inside_screen() {
        let state = GameState::new(7, IVec2::new(320, 240), Tuning::default());
        for d in &state.dust[..state.dust_total] {
            assert!(d.pos.x >= 0 && d.pos.x < 320);
            assert!(d.pos.y >= 0 && d.pos.y < 240);
        }
    }
}

//! Data-driven game balance
//!
//! Defaults match the shipped game; a JSON file can override any subset of
//! fields for playtesting. A bad or missing file falls back to defaults with
//! a logged message rather than failing startup.

use serde::{Deserialize, Serialize};

/// Balance knobs for the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Pixels the player moves per tick per held direction
    pub movement_step: i32,
    /// Player sprite size at the start of a run
    pub player_start_size: i32,
    /// Dust sprite size
    pub dust_size: i32,
    /// Simulated seconds between dust replenishments
    pub spawn_cadence_secs: f32,
    /// Only check the spawn timer every this many ticks
    pub spawn_check_interval: u64,
    /// Grow the player every N collections (the `collected % 4 == 0` rule;
    /// set to the level's dust step to get the older remaining-based feel)
    pub growth_every: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            movement_step: 5,
            player_start_size: 4,
            dust_size: 4,
            spawn_cadence_secs: 5.0,
            spawn_check_interval: 100,
            growth_every: 4,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, falling back to defaults on error
    pub fn from_json_str(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("bad tuning JSON, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// File the native binary looks for next to the working directory
    #[cfg(not(target_arch = "wasm32"))]
    const TUNING_FILE: &'static str = "pixie-tuning.json";

    /// Load tuning overrides from `pixie-tuning.json` if present (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::TUNING_FILE) {
            Ok(json) => {
                log::info!("loaded tuning from {}", Self::TUNING_FILE);
                Self::from_json_str(&json)
            }
            Err(_) => Self::default(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

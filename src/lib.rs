//! Pixie - a tiny dust-collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collision, spawning, levels)
//! - `driver`: Per-frame orchestration around the simulation
//! - `platform`: Host abstraction (input polling, drawing surface)
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Convert a tick count to simulated seconds
#[inline]
pub fn ticks_to_secs(ticks: u64) -> f32 {
    ticks as f32 * consts::SIM_DT
}

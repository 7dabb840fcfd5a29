//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-driven only (no wall clock)
//! - Seeded RNG only
//! - Stable iteration order (pool slots by index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod color;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::intersects;
pub use color::Rgb;
pub use sprite::Sprite;
pub use state::{DUST_POOL_CAPACITY, GamePhase, GameState, dust_total_for_level};
pub use tick::{TickInput, tick};

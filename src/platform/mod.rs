//! Platform abstraction layer
//!
//! The core never talks to a window, canvas, or keyboard directly; it goes
//! through the `Host` trait. Hosts own the frame cadence (they call into the
//! driver, never the other way around) and expose input polling plus a
//! pixel-block/text drawing surface.

pub mod headless;

use glam::IVec2;

use crate::sim::Rgb;

pub use headless::HeadlessHost;

/// Directional keys the player controller polls every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

/// One-shot control signals (just-pressed semantics: true at most once per
/// physical key press)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Quit,
    Advance,
}

/// The rendering/input collaborator the core draws through and polls
pub trait Host {
    /// Drawing-surface failure type; fatal when it surfaces
    type DrawError;

    /// Screen dimensions, queried once when the game state is created
    fn screen_size(&self) -> IVec2;

    /// Whether a directional key is currently held
    fn key_held(&self, dir: Direction) -> bool;

    /// Whether a control signal was pressed since the last poll
    fn signal_pressed(&mut self, signal: Signal) -> bool;

    /// Fill a pixel block at (x, y) with the given size and color
    fn draw_block(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb,
    ) -> Result<(), Self::DrawError>;

    /// Draw a text string at a pixel position
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb)
    -> Result<(), Self::DrawError>;
}

//! Headless host for tests and the native demo run
//!
//! Keys are scripted instead of polled from real hardware, and draw calls
//! land in an in-memory log so tests can assert on what a frame rendered.

use std::convert::Infallible;

use glam::IVec2;

use super::{Direction, Host, Signal};
use crate::sim::Rgb;

/// A recorded drawing-surface call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Block {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Rgb,
    },
}

/// Host with scripted input and a draw-call log. Drawing cannot fail.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    screen: IVec2,
    held: [bool; 4],
    quit_pending: bool,
    advance_pending: bool,
    pub draw_log: Vec<DrawCall>,
}

impl HeadlessHost {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen: IVec2::new(width, height),
            held: [false; 4],
            quit_pending: false,
            advance_pending: false,
            draw_log: Vec::new(),
        }
    }

    /// Script a directional key as held or released
    pub fn set_held(&mut self, dir: Direction, held: bool) {
        self.held[Self::index(dir)] = held;
    }

    /// Script a one-shot signal press; consumed by the next poll
    pub fn press(&mut self, signal: Signal) {
        match signal {
            Signal::Quit => self.quit_pending = true,
            Signal::Advance => self.advance_pending = true,
        }
    }

    /// Text draw calls from the log, in order
    pub fn texts(&self) -> Vec<&str> {
        self.draw_log
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn index(dir: Direction) -> usize {
        match dir {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

impl Host for HeadlessHost {
    type DrawError = Infallible;

    fn screen_size(&self) -> IVec2 {
        self.screen
    }

    fn key_held(&self, dir: Direction) -> bool {
        self.held[Self::index(dir)]
    }

    fn signal_pressed(&mut self, signal: Signal) -> bool {
        let pending = match signal {
            Signal::Quit => &mut self.quit_pending,
            Signal::Advance => &mut self.advance_pending,
        };
        std::mem::take(pending)
    }

    fn draw_block(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb,
    ) -> Result<(), Infallible> {
        self.draw_log.push(DrawCall::Block { x, y, w, h, color });
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb) -> Result<(), Infallible> {
        self.draw_log.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signals_are_one_shot() {
        let mut host = HeadlessHost::new(100, 100);
        host.press(Signal::Advance);
        assert!(host.signal_pressed(Signal::Advance));
        assert!(!host.signal_pressed(Signal::Advance));
        assert!(!host.signal_pressed(Signal::Quit));
    }

    #[test]
    fn test_held_keys_persist_across_polls() {
        let mut host = HeadlessHost::new(100, 100);
        host.set_held(Direction::Left, true);
        assert!(host.key_held(Direction::Left));
        assert!(host.key_held(Direction::Left));
        host.set_held(Direction::Left, false);
        assert!(!host.key_held(Direction::Left));
    }
}

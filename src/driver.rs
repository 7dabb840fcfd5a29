//! Frame driver
//!
//! One frame = sample input, advance the simulation one tick, render. The
//! host owns the cadence and calls `frame` (or the `sample_input`/`render`
//! halves around `sim::tick` when it steps the sim on an accumulator). The
//! quit signal is checked before anything else and short-circuits the frame.

use crate::platform::{Direction, Host, Signal};
use crate::sim::{GamePhase, GameState, Rgb, TickInput, tick};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// Quit signal observed; stop driving frames
    Quit,
}

/// Run one full frame against the host
pub fn frame<H: Host>(state: &mut GameState, host: &mut H) -> Result<FrameOutcome, H::DrawError> {
    if host.signal_pressed(Signal::Quit) {
        log::info!("quit signal, shutting down at tick {}", state.ticks);
        return Ok(FrameOutcome::Quit);
    }

    let input = sample_input(host);
    tick(state, &input);
    render(state, host)?;
    Ok(FrameOutcome::Continue)
}

/// Poll the host's key state into a tick input
pub fn sample_input<H: Host>(host: &mut H) -> TickInput {
    TickInput {
        right: host.key_held(Direction::Right),
        left: host.key_held(Direction::Left),
        up: host.key_held(Direction::Up),
        down: host.key_held(Direction::Down),
        advance: host.signal_pressed(Signal::Advance),
    }
}

/// Render the current state: white clear, sprites (hidden once the level is
/// complete), then the HUD text.
pub fn render<H: Host>(state: &GameState, host: &mut H) -> Result<(), H::DrawError> {
    let screen = state.screen;
    host.draw_block(0, 0, screen.x, screen.y, Rgb::WHITE)?;

    if state.phase == GamePhase::Playing {
        let p = &state.player;
        host.draw_block(p.pos.x, p.pos.y, p.size, p.size, p.color)?;
        for d in state.dust[..state.dust_total].iter().filter(|d| d.active) {
            host.draw_block(d.pos.x, d.pos.y, d.size, d.size, d.color)?;
        }
    }

    let hud = hud_color(state.ticks);
    host.draw_text(screen.x / 2, 15, "pixie", hud)?;
    host.draw_text(10, 15, &format!("fairy dust left: {}", state.dust_remaining), hud)?;
    host.draw_text(
        10,
        30,
        &format!("fairy dust collected: {}", state.dust_collected),
        hud,
    )?;
    host.draw_text(10, 45, &format!("level: {}", state.level), hud)?;
    host.draw_text(screen.x - 100, 15, &format_clock(state.level_elapsed), hud)?;

    if state.phase == GamePhase::LevelComplete {
        host.draw_text(
            screen.x / 2,
            screen.y / 2,
            &format!("level {} complete!", state.level),
            hud,
        )?;
        host.draw_text(screen.x / 2, screen.y / 2 + 15, "press enter for more dust", hud)?;
    }

    Ok(())
}

/// HUD text color: cycles through the bright-color space keyed by the tick
/// counter, without touching the sim RNG
fn hud_color(ticks: u64) -> Rgb {
    let hue = (ticks.wrapping_mul(37) % 360) as f32;
    Rgb::from_hsv(hue, 0.85, 0.75)
}

/// Elapsed level time as HH:MM:SS
pub fn format_clock(secs: f32) -> String {
    let total = secs.max(0.0) as u64;
    format!("{:02}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    use crate::platform::HeadlessHost;
    use crate::platform::headless::DrawCall;
    use crate::tuning::Tuning;

    fn game_on(host: &HeadlessHost) -> GameState {
        GameState::new(42, host.screen_size(), Tuning::default())
    }

    fn complete_level(state: &mut GameState) {
        for d in state.dust[..state.dust_total].iter_mut() {
            d.pos = state.player.pos;
        }
        tick(state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::LevelComplete);
    }

    #[test]
    fn test_quit_short_circuits_the_frame() {
        let mut host = HeadlessHost::new(100, 100);
        let mut state = game_on(&host);
        host.press(Signal::Quit);

        let outcome = frame(&mut state, &mut host).unwrap();
        assert_eq!(outcome, FrameOutcome::Quit);
        // Nothing ran: no tick, no draw calls
        assert_eq!(state.ticks, 0);
        assert!(host.draw_log.is_empty());
    }

    #[test]
    fn test_frame_clears_draws_and_labels() {
        let mut host = HeadlessHost::new(100, 100);
        let mut state = game_on(&host);

        let outcome = frame(&mut state, &mut host).unwrap();
        assert_eq!(outcome, FrameOutcome::Continue);
        assert_eq!(state.ticks, 1);

        // First call is the full-screen white clear
        assert!(matches!(
            host.draw_log[0],
            DrawCall::Block { x: 0, y: 0, w: 100, h: 100, color: Rgb::WHITE }
        ));
        // One block per sprite: player plus every active dust
        let blocks = host
            .draw_log
            .iter()
            .filter(|c| matches!(c, DrawCall::Block { .. }))
            .count();
        assert_eq!(blocks, 2 + state.dust_remaining);

        let texts = host.texts();
        assert!(texts.contains(&"pixie"));
        assert!(texts.iter().any(|t| t.starts_with("fairy dust left:")));
        assert!(texts.iter().any(|t| t.starts_with("fairy dust collected:")));
        assert!(texts.contains(&"level: 1"));
        assert!(texts.contains(&"00:00:00"));
    }

    #[test]
    fn test_held_keys_reach_the_player() {
        let mut host = HeadlessHost::new(100, 100);
        let mut state = game_on(&host);
        // Park dust away from the player's path
        for d in state.dust[..state.dust_total].iter_mut() {
            d.pos = IVec2::new(90, 90);
        }
        host.set_held(Direction::Right, true);

        let start_x = state.player.pos.x;
        frame(&mut state, &mut host).unwrap();
        assert_eq!(state.player.pos.x, start_x + state.tuning.movement_step);
    }

    #[test]
    fn test_sprites_hidden_and_banner_shown_when_complete() {
        let mut host = HeadlessHost::new(100, 100);
        let mut state = game_on(&host);
        complete_level(&mut state);

        frame(&mut state, &mut host).unwrap();
        // Only the clear remains; no sprite blocks
        let blocks = host
            .draw_log
            .iter()
            .filter(|c| matches!(c, DrawCall::Block { .. }))
            .count();
        assert_eq!(blocks, 1);
        assert!(host.texts().contains(&"level 1 complete!"));
    }

    #[test]
    fn test_advance_signal_starts_next_level() {
        let mut host = HeadlessHost::new(100, 100);
        let mut state = game_on(&host);
        complete_level(&mut state);

        host.press(Signal::Advance);
        frame(&mut state, &mut host).unwrap();
        assert_eq!(state.level, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.dust_total, 20);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00:00");
        assert_eq!(format_clock(59.9), "00:00:59");
        assert_eq!(format_clock(61.0), "00:01:01");
        assert_eq!(format_clock(3661.5), "01:01:01");
    }
}

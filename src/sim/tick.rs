//! Simulation tick
//!
//! Advances the game state by one step. Called by the frame driver once per
//! externally-cadenced frame; order within a tick is fixed: counter, elapsed
//! time, player movement, collection, spawn replenishment.

use super::collision::intersects;
use super::sprite::Sprite;
use super::state::{GamePhase, GameState};

/// Input sampled for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Directional keys currently held
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
    /// Advance to the next level (one-shot, honored only while complete)
    pub advance: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::LevelComplete {
        // Gameplay is frozen; only the advance signal does anything.
        if input.advance {
            let next = state.level + 1;
            state.start_level(next);
        }
        return;
    }

    state.ticks = state.ticks.wrapping_add(1);
    state.level_elapsed = crate::ticks_to_secs(state.ticks_in_level());

    move_player(state, input);
    collect_dust(state);
    // Collection may have completed the level; no spawns after that.
    if state.phase == GamePhase::Playing {
        replenish_dust(state);
    }
}

/// Apply held-key movement, one fixed step per axis, clamped so the player
/// can rest flush against an edge. Axes are independent, so holding two
/// perpendicular keys moves diagonally in one tick.
fn move_player(state: &mut GameState, input: &TickInput) {
    let step = state.tuning.movement_step;
    let p = &mut state.player;

    if input.right && p.pos.x + p.size <= state.screen.x {
        p.pos.x = (p.pos.x + step).min(state.screen.x - p.size);
    }
    if input.left && p.pos.x >= 0 {
        p.pos.x = (p.pos.x - step).max(0);
    }
    if input.up && p.pos.y >= 0 {
        p.pos.y = (p.pos.y - step).max(0);
    }
    if input.down && p.pos.y + p.size <= state.screen.y {
        p.pos.y = (p.pos.y + step).min(state.screen.y - p.size);
    }
}

/// Test every active dust slot against the player and collect overlaps.
/// Every `growth_every`-th collection grows the player one pixel and recolors
/// it to the collected dust's color. Collecting the last dust flips the phase
/// to `LevelComplete`.
fn collect_dust(state: &mut GameState) {
    for i in 0..state.dust_total {
        if !state.dust[i].active || !intersects(&state.dust[i], &state.player) {
            continue;
        }

        let color = state.dust[i].color;
        state.dust[i].active = false;
        state.dust_remaining -= 1;
        state.dust_collected += 1;

        if state.tuning.growth_every > 0 && state.dust_collected % state.tuning.growth_every == 0 {
            state.player.grow();
            state.player.color = color;
        }
    }

    if state.dust_remaining == 0 {
        state.phase = GamePhase::LevelComplete;
        log::info!(
            "level {} complete: {} dust in {:.1}s",
            state.level,
            state.dust_collected,
            state.level_elapsed
        );
    }
}

/// Replenish at most one inactive pool slot (first fit, lowest index) when
/// the spawn-check tick comes around and the cadence has elapsed. A full
/// pool is a no-op and does not reset the spawn timer.
fn replenish_dust(state: &mut GameState) {
    let interval = state.tuning.spawn_check_interval.max(1);
    if state.ticks % interval != 0 {
        return;
    }
    let since_last = crate::ticks_to_secs(state.ticks.wrapping_sub(state.last_spawn_ticks));
    if since_last < state.tuning.spawn_cadence_secs {
        return;
    }

    let dust_size = state.tuning.dust_size;
    if let Some(i) = state.dust[..state.dust_total].iter().position(|d| !d.active) {
        state.dust[i] = Sprite::spawn(None, None, dust_size, state.screen, &mut state.rng);
        state.dust_remaining += 1;
        state.last_spawn_ticks = state.ticks;
        log::debug!(
            "dust respawned into slot {i}, {} of {} remaining",
            state.dust_remaining,
            state.dust_total
        );
    }
}

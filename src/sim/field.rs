//! Pipe stream
//!
//! Scrolls live pipes left, prunes the ones that left the field, and spawns
//! a new pipe each time the newest one has scrolled `spawn_spacing` in from
//! the right edge.

use crate::config::GameConfig;

use super::rng::RandomSource;
use super::state::{GameState, Pipe};

/// Advance the pipe stream by one step. Spawns at most one pipe per tick.
pub fn advance(state: &mut GameState, dt: f32, config: &GameConfig, source: &mut dyn RandomSource) {
    for pipe in &mut state.pipes {
        pipe.x -= config.pipe_speed * dt;
    }
    state.pipes.retain(|pipe| pipe.x > -config.pipe_width);

    let due = match state.pipes.last() {
        None => true,
        Some(newest) => newest.x < config.field_width - config.spawn_spacing,
    };
    if due {
        let (gap_top, gap_bottom) = sample_gap(config, source);
        let id = state.next_pipe_id();
        log::debug!("spawned pipe {id}: gap_top={gap_top:.1} gap_bottom={gap_bottom:.1}");
        state.pipes.push(Pipe {
            x: config.field_width,
            gap_top,
            gap_bottom,
            id,
            passed: false,
        });
    }
}

/// Draw the solid-band heights for a new pipe from one `[0, 1)` sample.
///
/// `gap_top` is uniform over `[min_gap_top, max_gap_top]` and `gap_bottom`
/// takes the rest, so `gap_top + gap_size + gap_bottom` always equals the
/// playable height.
pub fn sample_gap(config: &GameConfig, source: &mut dyn RandomSource) -> (f32, f32) {
    let span = config.max_gap_top() - config.min_gap_top;
    let gap_top = config.min_gap_top + source.next_unit() * span;
    let gap_bottom = config.playable_height() - config.gap_size - gap_top;
    (gap_top, gap_bottom)
}

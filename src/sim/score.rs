//! Pass scoring
//!
//! A pipe is worth exactly one point, awarded the first tick the bird's
//! leading edge is strictly past the pipe's trailing edge. The `passed`
//! flag is the once-only guard; pruning a passed pipe later never takes the
//! point back.

use crate::config::GameConfig;

use super::state::Pipe;

/// Mark `pipe` as passed if the bird just cleared it. Returns true exactly
/// once per pipe.
pub fn try_score(pipe: &mut Pipe, config: &GameConfig) -> bool {
    if !pipe.passed && config.bird_x > pipe.x + config.pipe_width {
        pipe.passed = true;
        return true;
    }
    false
}

//! Bird physics
//!
//! Semi-implicit Euler: gravity updates the velocity first, then the
//! position advances with the updated velocity. A flap never passes through
//! here; it overrides `vel` directly between ticks.

use crate::config::GameConfig;

use super::state::Bird;

/// Advance the bird by one step. Returns the replacement bird and whether it
/// hit the ground.
///
/// On a ground hit the *old* bird is returned: the run freezes at its
/// pre-tick values instead of clamping onto the ground line. Ceiling contact
/// clamps to `y = 0` with zeroed velocity and is not lethal.
pub fn integrate(bird: &Bird, dt: f32, config: &GameConfig) -> (Bird, bool) {
    let vel = bird.vel + config.gravity * dt;
    let y = bird.y + vel * dt;

    if y > config.playable_height() - config.bird_size {
        return (*bird, true);
    }
    if y < 0.0 {
        return (Bird { y: 0.0, vel: 0.0 }, false);
    }
    (Bird { y, vel }, false)
}

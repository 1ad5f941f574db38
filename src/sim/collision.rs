//! Bird-versus-pipe collision detection
//!
//! Axis-aligned boxes only. A pipe is checked when its horizontal span
//! overlaps the bird's (strict inequalities, so edge-touching boxes do not
//! collide); on overlap the bird must sit entirely inside the gap band.
//! Ground contact is the physics module's call, not a pipe collision.

use glam::Vec2;

use crate::config::GameConfig;

use super::state::{Bird, Pipe};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict horizontal overlap: shared edges do not count.
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }
}

/// The bird's box at its fixed column.
pub fn bird_box(bird: &Bird, config: &GameConfig) -> Aabb {
    Aabb::new(
        Vec2::new(config.bird_x, bird.y),
        Vec2::new(config.bird_x + config.bird_size, bird.y + config.bird_size),
    )
}

/// Full-height box of a pipe pair (gap included).
fn pipe_span(pipe: &Pipe, config: &GameConfig) -> Aabb {
    Aabb::new(
        Vec2::new(pipe.x, 0.0),
        Vec2::new(pipe.x + config.pipe_width, config.field_height),
    )
}

/// True if the bird hits this pipe's solid bands.
pub fn pipe_hit(bird: &Bird, pipe: &Pipe, config: &GameConfig) -> bool {
    let bird = bird_box(bird, config);
    if !bird.overlaps_x(&pipe_span(pipe, config)) {
        return false;
    }
    let gap_floor = config.playable_height() - pipe.gap_bottom;
    bird.min.y < pipe.gap_top || bird.max.y > gap_floor
}

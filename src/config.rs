//! Game configuration
//!
//! The full tuning of a run, supplied once at construction. Nothing in here
//! changes while a game is alive; `reset` reuses the same values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning for a single game. Distances are in px, velocities in px per
/// `dt = 1.0` tick.
///
/// The playable column spans `0..field_height - ground_height`; the ground
/// band below it is lethal, the ceiling at `y = 0` is not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Downward acceleration applied to the bird every tick (px/tick²).
    pub gravity: f32,
    /// Velocity the bird is set to on a flap (negative = upward). Overrides,
    /// never accumulates.
    pub flap_impulse: f32,
    /// Leftward pipe scroll speed (px/tick).
    pub pipe_speed: f32,
    /// Vertical extent of the passable gap in every pipe.
    pub gap_size: f32,
    /// Side length of the bird's square bounding box.
    pub bird_size: f32,
    /// Height of the lethal ground band at the bottom of the field.
    pub ground_height: f32,
    /// Field width; pipes spawn at `x = field_width`.
    pub field_width: f32,
    /// Field height including the ground band.
    pub field_height: f32,
    /// A new pipe spawns once the newest one has scrolled this far in from
    /// the right edge.
    pub spawn_spacing: f32,
    /// Minimum solid height above the gap; by symmetry also the minimum
    /// solid height below it.
    pub min_gap_top: f32,
    /// Fixed horizontal position of the bird's left edge.
    pub bird_x: f32,
    /// Vertical position of the bird after `reset`.
    pub bird_start_y: f32,
    /// Horizontal extent of every pipe.
    pub pipe_width: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 0.4,
            flap_impulse: -8.0,
            pipe_speed: 2.0,
            gap_size: 120.0,
            bird_size: 24.0,
            ground_height: 60.0,
            field_width: 400.0,
            field_height: 500.0,
            spawn_spacing: 180.0,
            min_gap_top: 40.0,
            bird_x: 100.0,
            bird_start_y: 250.0,
            pipe_width: 52.0,
        }
    }
}

/// Rejected configuration. Raised once, at construction; no partial game is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("gap of {gap}px plus 2×{margin}px margins exceeds the {playable}px playable height")]
    GapExceedsField { gap: f32, margin: f32, playable: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f32 },
}

impl GameConfig {
    /// Height of the playable column (field minus the ground band).
    pub fn playable_height(&self) -> f32 {
        self.field_height - self.ground_height
    }

    /// Largest admissible `gap_top` for a spawned pipe.
    pub fn max_gap_top(&self) -> f32 {
        self.playable_height() - self.gap_size - self.min_gap_top
    }

    /// Check that the geometry can produce a playable pipe stream.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird_size", self.bird_size),
            ("pipe_width", self.pipe_width),
            ("gap_size", self.gap_size),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }
        if self.gap_size + 2.0 * self.min_gap_top > self.playable_height() {
            return Err(ConfigError::GapExceedsField {
                gap: self.gap_size,
                margin: self.min_gap_top,
                playable: self.playable_height(),
            });
        }
        Ok(())
    }
}

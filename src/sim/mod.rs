//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, `dt` supplied by the host
//! - Injected RNG only
//! - Stable pipe order (insertion order, oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod physics;
pub mod rng;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Aabb, pipe_hit};
pub use rng::{PcgSource, RandomSource};
pub use state::{Bird, GameEvent, GamePhase, GameState, Pipe};
pub use tick::Game;

//! Fixed timestep simulation tick and the [`Game`] facade
//!
//! One tick while Running: bird physics, then the pipe stream, then a
//! single pass over the pipes doing pass-scoring before the collision check
//! for each pipe. A ground hit ends the tick early, so the whole field
//! freezes at the moment of impact.

use crate::config::{ConfigError, GameConfig};

use super::rng::{PcgSource, RandomSource};
use super::state::{GameEvent, GamePhase, GameState};
use super::{collision, field, physics, score};

/// Advance `state` by one step of `dt` simulated units. No-op unless
/// Running; `dt <= 0` is also a defined no-op.
pub(crate) fn step(
    state: &mut GameState,
    config: &GameConfig,
    source: &mut dyn RandomSource,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    if state.phase != GamePhase::Running || dt <= 0.0 {
        return;
    }
    state.tick_count += 1;

    let (bird, grounded) = physics::integrate(&state.bird, dt, config);
    if grounded {
        state.phase = GamePhase::Over;
        events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "run over: hit the ground at tick {} with score {}",
            state.tick_count,
            state.score
        );
        return;
    }
    state.bird = bird;

    field::advance(state, dt, config, source);

    let mut hit = false;
    for pipe in &mut state.pipes {
        if score::try_score(pipe, config) {
            state.score += 1;
            events.push(GameEvent::PipePassed { id: pipe.id });
            log::debug!("passed pipe {}: score {}", pipe.id, state.score);
        }
        hit |= collision::pipe_hit(&state.bird, pipe, config);
    }
    if hit {
        state.phase = GamePhase::Over;
        events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "run over: hit a pipe at tick {} with score {}",
            state.tick_count,
            state.score
        );
    }
}

/// The game: owns the composed state, the tuning, and the injected
/// randomness, and exposes the trigger surface for a host.
///
/// A host drives it with `tick(dt)` at a fixed cadence, forwards `flap` and
/// `reset` from its input layer, renders from [`Game::state`], and drains
/// [`Game::take_events`] for transient cues. All methods take `&mut self`
/// or `&self`, so triggers and ticks serialize through ownership; a flap is
/// applied fully between ticks, never inside one.
pub struct Game {
    config: GameConfig,
    state: GameState,
    source: Box<dyn RandomSource>,
    events: Vec<GameEvent>,
}

impl Game {
    /// Build a game from validated tuning and an injected random source.
    pub fn new(config: GameConfig, source: Box<dyn RandomSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(&config),
            config,
            source,
            events: Vec::new(),
        })
    }

    /// Build a game with the production PCG source.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, Box::new(PcgSource::new(seed)))
    }

    /// Input trigger. Idle: start the run with no impulse (the first flap
    /// only arms the game). Running: override the bird's velocity with the
    /// flap impulse and emit [`GameEvent::Flapped`]. Over: no-op.
    pub fn flap(&mut self) {
        match self.state.phase {
            GamePhase::Idle => {
                self.state.phase = GamePhase::Running;
                log::debug!("run started");
            }
            GamePhase::Running => {
                self.state.bird.vel = self.config.flap_impulse;
                self.events.push(GameEvent::Flapped);
            }
            GamePhase::Over => {}
        }
    }

    /// Input trigger, valid from any phase: back to a fresh Idle state with
    /// the same tuning. Pending events are dropped with the old run.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
        self.events.clear();
        log::info!("game reset");
    }

    /// Advance the simulation by `dt` simulated units.
    pub fn tick(&mut self, dt: f32) {
        step(
            &mut self.state,
            &self.config,
            self.source.as_mut(),
            dt,
            &mut self.events,
        );
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state, for a render or replay layer.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Drain the transient signals emitted since the last drain.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

//! Skyglide headless demo driver
//!
//! Runs a seeded game under a fixed-step loop with a simple autopilot, and
//! prints the final score. Doubles as a smoke test for the simulation core:
//! the driver owns pacing and input, the library never schedules itself.
//!
//! Usage: `skyglide [seed]`. Set RUST_LOG=debug to watch spawns and scores.

use skyglide::consts::NOMINAL_DT;
use skyglide::{Game, GameConfig, GamePhase, GameState};

/// Safety margin the autopilot keeps above the gap floor before flapping.
const FLAP_MARGIN: f32 = 10.0;

/// Cut runs off after this many ticks so a good seed terminates.
const MAX_TICKS: u64 = 100_000;

/// Flap when falling and close to the floor of the next gap ahead of the
/// bird; between pipes, aim for the middle of the playable column.
fn autopilot(state: &GameState, config: &GameConfig) -> bool {
    let gap_floor = state
        .pipes
        .iter()
        .find(|pipe| pipe.x + config.pipe_width > config.bird_x)
        .map(|pipe| config.playable_height() - pipe.gap_bottom)
        .unwrap_or_else(|| (config.playable_height() + config.gap_size) / 2.0);

    let falling = state.bird.vel >= 0.0;
    falling && state.bird.y + config.bird_size >= gap_floor - FLAP_MARGIN
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let config = GameConfig::default();
    let mut game = match Game::with_seed(config, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("invalid config: {err}");
            std::process::exit(1);
        }
    };

    log::info!("skyglide demo starting with seed {seed}");

    // First flap arms the run without an impulse.
    game.flap();

    while game.state().phase == GamePhase::Running && game.state().tick_count < MAX_TICKS {
        if autopilot(game.state(), game.config()) {
            game.flap();
        }
        game.tick(NOMINAL_DT);
        for event in game.take_events() {
            log::debug!("event: {event:?}");
        }
    }

    let state = game.state();
    println!(
        "seed {seed}: scored {} in {} ticks ({:?})",
        state.score, state.tick_count, state.phase
    );
}

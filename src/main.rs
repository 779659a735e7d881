//! Asterfield entry point
//!
//! Headless demo runner: drives the sim with the built-in pilot at a fixed
//! timestep and reports the run. A graphical frontend plugs in through the
//! `Renderer` and `AudioSink` traits instead of this binary.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use asterfield::consts::*;
use asterfield::render::{Hud, NullRenderer, Renderer};
use asterfield::sim::{GamePhase, GameState, TickInput, tick};
use asterfield::{AudioManager, NullAudio, Settings};

/// Game instance holding all state
struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
    audio: AudioManager<NullAudio>,
}

impl Game {
    fn new(seed: u64, settings: &Settings) -> Self {
        let mut audio = AudioManager::new(NullAudio);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        Self {
            state: GameState::new(seed),
            accumulator: 0.0,
            input: TickInput::default(),
            audio,
        }
    }

    /// Run simulation ticks to catch up with wall time
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input;
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.start = false;
            self.input.pause = false;
            self.input.restart = false;
        }

        let events = self.state.take_events();
        self.audio.handle_events(&events);
    }
}

fn main() {
    env_logger::init();

    let mut settings = Settings::load(Settings::DEFAULT_PATH);
    settings.sanitize();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Asterfield demo starting with seed {seed}");

    let mut game = Game::new(seed, &settings);
    game.input.start = true;
    game.input.idle_mode = true;

    let mut renderer = NullRenderer;
    let demo_length = Duration::from_secs(60);
    let started = Instant::now();
    let mut last_frame = started;

    while started.elapsed() < demo_length {
        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f32();
        last_frame = now;

        game.update(dt);
        renderer.draw(&game.state);

        if game.state.phase == GamePhase::GameOver {
            break;
        }
        std::thread::sleep(Duration::from_secs_f32(SIM_DT));
    }

    let hud = Hud::from_state(&game.state);
    log::info!(
        "Demo finished: score {} with {} lives left after {:.1}s",
        hud.score,
        hud.lives,
        game.state.time_secs
    );
    settings.save(Settings::DEFAULT_PATH);
}

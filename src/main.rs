//! Brickfall headless driver
//!
//! Runs the autopilot against the simulation with no window or audio device,
//! logging sound triggers and a per-level summary. Useful for soak-testing
//! the core and tuning configs.
//!
//! Usage: `brickfall [config.json] [max_frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brickfall::sim::TickInput;
    use brickfall::{DrawCommand, DrawSurface, Game, GameConfig, SoundEffect, SoundSink};

    /// Counts primitives instead of drawing them
    #[derive(Default)]
    struct CountingSurface {
        frames: u64,
        commands: u64,
    }

    impl DrawSurface for CountingSurface {
        fn draw(&mut self, commands: &[DrawCommand]) {
            self.frames += 1;
            self.commands += commands.len() as u64;
        }
    }

    /// Logs every trigger at trace level
    struct LogSink;

    impl SoundSink for LogSink {
        fn play(&mut self, effect: SoundEffect) {
            log::trace!("sound: {}", effect.as_str());
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brickfall (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default config");
            GameConfig::default()
        }),
        None => GameConfig::default(),
    };
    let max_frames: u64 = match args.next().map(|s| s.parse()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Ignoring frame limit: {e}");
            100_000
        }
        None => 100_000,
    };

    let mut game = Game::new(config);
    game.set_ai_controlled(true);

    let mut surface = CountingSurface::default();
    let mut sink = LogSink;
    let input = TickInput::default();
    let mut level = game.state().level;

    for _ in 0..max_frames {
        let frame = game.advance_into(&input, &mut surface, &mut sink);
        if frame.level != level {
            log::info!(
                "Reached level {} at frame {} (score {}, lives {})",
                frame.level,
                surface.frames,
                frame.score,
                frame.lives
            );
            level = frame.level;
        }
        if frame.terminal {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "Finished after {} frames: score {}, level {}, lives {}, {:?}",
        surface.frames,
        state.score,
        state.level,
        state.lives,
        state.phase
    );
    log::debug!(
        "Averaged {:.1} draw commands per frame",
        surface.commands as f64 / surface.frames.max(1) as f64
    );
    if let Some(best) = game.high_scores().top_score() {
        log::info!("Session best: {best}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser shell drives `brickfall::Game` directly
}

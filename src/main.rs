//! Nose Ninja headless runner
//!
//! Plays one run against a scripted pointer sweep on an offscreen mesh surface
//! and prints the run summary as JSON.
//!
//! Usage: `nose-ninja [settings.json] [frames]`

#[cfg(not(target_arch = "wasm32"))]
use nose_ninja::{
    GameEngine, HostCallbacks, Settings,
    consts::SIM_DT_MS,
    renderer::MeshSurface,
    sim::SoundCue,
    tracking::ScriptedTracker,
};

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 60 * 60;
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SEED: u64 = 0x6e6f_7365;

/// Host that reports notifications to the log
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
struct LogHost {
    slices: u32,
}

#[cfg(not(target_arch = "wasm32"))]
impl HostCallbacks for LogHost {
    fn on_score(&mut self, score: u64) {
        log::debug!("Score: {}", score);
    }

    fn on_level(&mut self, level: u32) {
        log::info!("Level {}", level);
    }

    fn on_game_over(&mut self, final_score: u64) {
        log::info!("Game over after {} slices, final score {}", self.slices, final_score);
    }

    fn on_sound(&mut self, cue: SoundCue) {
        if cue == SoundCue::Slice {
            self.slices += 1;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings {
            seed: Some(DEFAULT_SEED),
            ..Settings::default()
        },
    };
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("Invalid frame count: {}", e);
            std::process::exit(2);
        }
        None => DEFAULT_FRAMES,
    };

    log::info!("Nose Ninja (headless) starting, {} frames", frames);

    let mut engine = GameEngine::new(settings, LogHost::default());
    let mut tracker = ScriptedTracker::sweep(600, 240);
    if let Err(e) = engine.attach_tracker(&mut tracker) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut surface = MeshSurface::new(1280.0, 720.0);
    let mut ticket = Some(engine.start(1, None));
    let mut now = 0.0;
    for _ in 0..frames {
        let Some(t) = ticket else { break };
        if let Err(e) = tracker.pump() {
            log::error!("Tracker stopped: {}", e);
            break;
        }
        ticket = engine.frame(t, now, &mut surface);
        now += SIM_DT_MS;
    }
    log::debug!(
        "Last frame: {} vertices, {} glyphs",
        surface.vertices.len(),
        surface.glyphs.len()
    );

    let summary = engine.summary();
    engine.shutdown(&mut tracker);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to encode summary: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host page drives GameEngine directly
}

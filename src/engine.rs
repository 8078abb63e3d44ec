//! Simulation loop driver
//!
//! Owns the simulation state and its active/inactive lifecycle. The host calls
//! `frame` once per display refresh with the ticket returned by `start` (or by
//! the previous `frame`). Real elapsed time is accumulated and consumed in
//! fixed ticks. Stopping bumps the generation counter, which invalidates every
//! ticket already handed out, so a frame that was queued before the stop never
//! runs a tick.

use serde::Serialize;

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS, SIM_DT_MS};
use crate::normalized_to_surface;
use crate::renderer::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, SimPhase, SimState, SoundCue, TickInput, Trail, tick};
use crate::tracking::{PointerSlot, TrackingError, TrackingProvider};

/// Host notifications. All methods default to no-ops.
pub trait HostCallbacks {
    fn on_score(&mut self, _score: u64) {}
    fn on_level(&mut self, _level: u32) {}
    fn on_game_over(&mut self, _final_score: u64) {}
    fn on_sound(&mut self, _cue: SoundCue) {}
}

impl HostCallbacks for () {}

/// Permission to run one scheduled frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicket {
    generation: u64,
}

/// End-of-run report for the host's persistence layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub final_score: u64,
    pub level_reached: u32,
    /// Highest level across this run and the prior best passed to `start`
    pub best_level: u32,
    pub ticks: u64,
    pub game_over: bool,
}

pub struct GameEngine<H: HostCallbacks = ()> {
    settings: Settings,
    state: SimState,
    slot: PointerSlot,
    host: H,
    generation: u64,
    accumulator: f64,
    last_frame_ms: Option<f64>,
    best_level: u32,
}

impl<H: HostCallbacks> GameEngine<H> {
    pub fn new(settings: Settings, host: H) -> Self {
        let seed = settings.seed.unwrap_or(0);
        Self {
            settings,
            state: SimState::new(seed, 1),
            slot: PointerSlot::new(),
            host,
            generation: 0,
            accumulator: 0.0,
            last_frame_ms: None,
            best_level: 1,
        }
    }

    /// Bring up a tracking provider wired to this engine's pointer slot.
    ///
    /// Setup failures are reported as-is; there is no fallback input mode.
    pub fn attach_tracker(&mut self, provider: &mut dyn TrackingProvider) -> Result<(), TrackingError> {
        match provider.initialize(self.slot.clone()) {
            Ok(()) => {
                log::info!("Tracker ready");
                Ok(())
            }
            Err(e) => {
                log::error!("Tracker setup failed: {}", e);
                Err(e)
            }
        }
    }

    /// Slot a provider writes pointer readings into
    pub fn pointer_slot(&self) -> PointerSlot {
        self.slot.clone()
    }

    /// Reset and activate a run.
    ///
    /// Starts at the higher of `level` and the prior best, so returning
    /// players resume where they got to.
    pub fn start(&mut self, level: u32, prior_best: Option<u32>) -> FrameTicket {
        let level = level.max(prior_best.unwrap_or(0)).max(1);
        let seed = self.settings.seed.unwrap_or_else(rand::random);

        let mut state = SimState::new(seed, level);
        state.trail = Trail::with_capacity(self.settings.trail_capacity());
        state.max_particles = self.settings.max_particles();
        state.phase = SimPhase::Active;
        self.state = state;

        self.generation += 1;
        self.accumulator = 0.0;
        self.last_frame_ms = None;
        self.best_level = prior_best.unwrap_or(1).max(level);
        self.slot.open();

        log::info!(
            "Run started at level {} ({}), seed {}",
            level,
            self.state.config.title,
            seed
        );
        self.host.on_score(0);
        self.host.on_level(level);

        FrameTicket {
            generation: self.generation,
        }
    }

    /// Deactivate. Safe to call repeatedly or before any `start`.
    pub fn stop(&mut self) {
        if self.state.phase == SimPhase::Active {
            self.state.phase = SimPhase::Inactive;
            log::info!("Run stopped at score {}", self.state.score);
        }
        self.generation += 1;
        self.slot.close();
    }

    /// Stop the run and tear the provider down
    pub fn shutdown(&mut self, provider: &mut dyn TrackingProvider) {
        self.stop();
        provider.stop();
    }

    /// Run one scheduled frame: catch up on fixed ticks, then draw.
    ///
    /// Returns the ticket for the next frame while the run is still active.
    /// Stale tickets and inactive runs do nothing.
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        ticket: FrameTicket,
        now_ms: f64,
        surface: &mut S,
    ) -> Option<FrameTicket> {
        if ticket.generation != self.generation || !self.state.is_active() {
            return None;
        }

        let elapsed = match self.last_frame_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
            self.step(surface);
            self.accumulator -= SIM_DT_MS;
            substeps += 1;
            if !self.state.is_active() {
                break;
            }
        }
        // Drop time we could not catch up on
        self.accumulator = self.accumulator.min(SIM_DT_MS);

        draw_frame(&self.state, &self.settings, surface);

        if self.state.is_active() {
            Some(ticket)
        } else {
            None
        }
    }

    /// One fixed tick against the surface's current size and latest pointer
    fn step<S: Surface + ?Sized>(&mut self, surface: &S) {
        let viewport = surface.size();
        let pointer = self
            .slot
            .latest()
            .map(|p| normalized_to_surface(p, viewport, self.settings.mirror_pointer));

        tick(&mut self.state, &TickInput { pointer, viewport }, SIM_DT_MS);
        self.dispatch_events();
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => self.host.on_score(score),
                GameEvent::LevelChanged { to, .. } => {
                    self.best_level = self.best_level.max(to);
                    self.host.on_level(to);
                }
                GameEvent::GameOver { final_score } => {
                    log::info!("Game over: score {}, level {}", final_score, self.state.level);
                    self.generation += 1;
                    self.slot.close();
                    self.host.on_game_over(final_score);
                }
                GameEvent::Sound(cue) => self.host.on_sound(cue),
                GameEvent::Sliced { id, kind, points, .. } => {
                    log::debug!("Sliced {:?} #{} (+{})", kind, id, points);
                }
            }
        }
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn phase(&self) -> SimPhase {
        self.state.phase
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.state.seed,
            final_score: self.state.score,
            level_reached: self.state.level,
            best_level: self.best_level,
            ticks: self.state.time_ticks,
            game_over: self.state.phase == SimPhase::GameOver,
        }
    }
}

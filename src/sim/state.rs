//! Simulation state and core entity types
//!
//! Everything the tick mutates lives in `SimState`, owned by the engine.
//! Only score and level are exposed to the host.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::content::Content;
use super::level::{self, LevelConfig};
use super::trail::Trail;

/// Lifecycle phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimPhase {
    /// Not running (never started, or stopped by the host)
    Inactive,
    /// Ticking
    Active,
    /// Terminal: a bomb was touched
    GameOver,
}

/// Object variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectKind {
    Fruit,
    Bomb,
    HiddenCharacter,
}

impl ObjectKind {
    /// Points awarded for slicing; bombs are never sliced
    pub fn points(self) -> u64 {
        use crate::consts::{FRUIT_POINTS, HIDDEN_CHARACTER_POINTS};
        match self {
            ObjectKind::Fruit => FRUIT_POINTS,
            ObjectKind::HiddenCharacter => HIDDEN_CHARACTER_POINTS,
            ObjectKind::Bomb => 0,
        }
    }
}

/// A launched object
#[derive(Debug, Clone, Serialize)]
pub struct SimObject {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius (always > 0)
    pub radius: f32,
    /// Render scale the radius was derived from
    pub scale: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub kind: ObjectKind,
    pub content: Content,
    pub sliced: bool,
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: u32,
    pub life: f32, // 0-1, decreases every tick
    pub size: f32,
}

/// Host-facing audio cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoundCue {
    Slice,
    GameOver,
}

/// Things that happened during a tick, drained by the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    Sliced {
        id: u32,
        kind: ObjectKind,
        pos: Vec2,
        points: u64,
    },
    ScoreChanged(u64),
    LevelChanged {
        from: u32,
        to: u32,
    },
    GameOver {
        final_score: u64,
    },
    Sound(SoundCue),
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct SimState {
    pub phase: SimPhase,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Live objects, in spawn order
    pub objects: Vec<SimObject>,
    /// Live particles
    pub particles: Vec<Particle>,
    /// Primary pointer trail
    pub trail: Trail,
    /// Pointer read for the current tick, in surface pixels
    pub pointer: Option<Vec2>,
    /// Simulated clock (ms since run start)
    pub time_ms: f64,
    pub last_spawn_ms: f64,
    pub score: u64,
    pub level: u32,
    /// Resolved config for `level`
    pub config: LevelConfig,
    /// Particle cap from settings
    pub max_particles: usize,
    /// Pending events for the host
    pub events: Vec<GameEvent>,
    pub time_ticks: u64,
    next_id: u32,
}

impl SimState {
    /// Create an inactive state at the given level
    pub fn new(seed: u64, level: u32) -> Self {
        Self {
            phase: SimPhase::Inactive,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            objects: Vec::new(),
            particles: Vec::new(),
            trail: Trail::default(),
            pointer: None,
            time_ms: 0.0,
            last_spawn_ms: 0.0,
            score: 0,
            level,
            config: level::resolve(level),
            max_particles: usize::MAX,
            events: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn is_active(&self) -> bool {
        self.phase == SimPhase::Active
    }

    /// Switch to a new level and re-resolve its config
    pub fn set_level(&mut self, level: u32) {
        self.level = level;
        self.config = level::resolve(level);
    }

    /// Add points and run the level advance check once
    pub fn award(&mut self, points: u64) {
        self.score += points;
        self.events.push(GameEvent::ScoreChanged(self.score));

        if let Some(next) = level::advance_for_score(&self.config, self.score) {
            let from = self.level;
            self.set_level(next);
            log::info!("Level {} -> {} ({})", from, next, self.config.title);
            self.events.push(GameEvent::LevelChanged { from, to: next });
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{BOSS_LEVEL, LAST_REGULAR_LEVEL};

    #[test]
    fn test_award_advances_once() {
        let mut state = SimState::new(1, 1);
        state.award(10);
        assert_eq!(state.level, 1);
        state.score = 95;
        state.award(10);
        assert_eq!(state.level, 2);
        assert_eq!(state.config.level_number, 2);

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::LevelChanged { from: 1, to: 2 }));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_last_regular_jumps_to_boss() {
        let mut state = SimState::new(1, LAST_REGULAR_LEVEL);
        state.score = 950;
        state.award(100);
        assert_eq!(state.level, BOSS_LEVEL);
        assert!(state.config.is_hidden);

        state.award(1_000_000);
        assert_eq!(state.level, BOSS_LEVEL);
    }

    #[test]
    fn test_entity_ids_unique() {
        let mut state = SimState::new(7, 1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
    }
}

//! Nose Ninja - a nose-tracked arcade slicing game
//!
//! Core modules:
//! - `sim`: Per-tick simulation (spawning, physics, trail, collisions, particles, levels)
//! - `engine`: Active/inactive lifecycle and fixed timestep frame driver
//! - `tracking`: Pointer provider contract and the single-slot pointer channel
//! - `renderer`: Drawable surface contract and a vertex mesh backend
//! - `settings`: Runtime configuration

pub mod engine;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tracking;

pub use engine::{FrameTicket, GameEngine, HostCallbacks, RunSummary};
pub use settings::{QualityPreset, Settings};
pub use tracking::{PointerSlot, TrackingError, TrackingProvider};

use glam::Vec2;

/// Game tuning constants
pub mod consts {
    /// Simulation tick rate. All kinematics are expressed per tick.
    pub const TICK_RATE_HZ: f64 = 60.0;
    /// Fixed simulation timestep in milliseconds
    pub const SIM_DT_MS: f64 = 1000.0 / TICK_RATE_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest wall-clock gap a single frame may account for
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Pointer trail capacity
    pub const MAX_TRAIL_LENGTH: usize = 12;

    /// Points for slicing a fruit
    pub const FRUIT_POINTS: u64 = 10;
    /// Points for slicing a hidden character
    pub const HIDDEN_CHARACTER_POINTS: u64 = 100;
    /// Added to an object's radius when testing pointer proximity
    pub const HIT_MARGIN: f32 = 20.0;

    /// Horizontal keep-out on both viewport edges for spawn placement
    pub const SPAWN_EDGE_MARGIN: f32 = 50.0;
    /// Objects start this far below the bottom edge and are culled this far below it
    pub const OFFSCREEN_MARGIN: f32 = 100.0;
    /// Base object radius before the random scale is applied
    pub const BASE_OBJECT_RADIUS: f32 = 50.0;
    pub const MIN_OBJECT_SCALE: f32 = 1.0;
    pub const MAX_OBJECT_SCALE: f32 = 1.5;
    /// Horizontal launch speed range is symmetric: [-MAX_LAUNCH_VX, MAX_LAUNCH_VX)
    pub const MAX_LAUNCH_VX: f32 = 3.0;
    /// Minimum upward launch speed (pixels/tick)
    pub const BASE_LAUNCH_SPEED: f32 = 14.0;
    /// Random extra upward launch speed
    pub const LAUNCH_SPEED_JITTER: f32 = 8.0;
    /// Extra upward launch speed per difficulty rank
    pub const LAUNCH_BONUS_PER_RANK: f32 = 0.5;
    /// Spin range is symmetric: [-MAX_ROTATION_SPEED, MAX_ROTATION_SPEED)
    pub const MAX_ROTATION_SPEED: f32 = 0.15;
    /// Burst probability = BASE + PER_RANK * rank
    pub const BURST_CHANCE_BASE: f64 = 0.2;
    pub const BURST_CHANCE_PER_RANK: f64 = 0.05;

    /// Particles emitted per slice
    pub const PARTICLE_BURST_COUNT: usize = 25;
    /// Particle velocity range is symmetric per axis
    pub const PARTICLE_MAX_SPEED: f32 = 10.0;
    pub const PARTICLE_MIN_SIZE: f32 = 5.0;
    pub const PARTICLE_MAX_SIZE: f32 = 15.0;
    /// Downward acceleration applied to particles (pixels/tick²)
    pub const PARTICLE_GRAVITY: f32 = 0.3;
    /// Life lost per tick
    pub const PARTICLE_DECAY: f32 = 0.02;
}

/// Map a normalized camera-space position into surface pixels.
///
/// The camera image is mirrored relative to what the player sees, so the
/// horizontal axis is flipped when `mirrored` is set.
#[inline]
pub fn normalized_to_surface(normalized: Vec2, size: Vec2, mirrored: bool) -> Vec2 {
    let x = if mirrored { 1.0 - normalized.x } else { normalized.x };
    Vec2::new(x * size.x, normalized.y * size.y)
}

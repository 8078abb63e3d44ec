//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only, kinematics expressed per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod content;
pub mod level;
pub mod particles;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod trail;

pub use collision::{CollisionOutcome, CollisionResult, pointer_circle_collision, resolve_collisions};
pub use content::Content;
pub use level::{BOSS_LEVEL, LAST_REGULAR_LEVEL, LevelConfig};
pub use state::{GameEvent, ObjectKind, Particle, SimObject, SimPhase, SimState, SoundCue};
pub use tick::{TickInput, tick};
pub use trail::{PathCmd, Trail};

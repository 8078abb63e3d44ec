//! Fixed timestep simulation tick
//!
//! One tick runs, in order: spawn check, object physics, trail update,
//! collision pass, particle update. A bomb hit during the collision pass ends
//! the tick early.

use glam::Vec2;

use super::collision::{CollisionOutcome, resolve_collisions};
use super::particles::update_particles;
use super::physics::integrate_objects;
use super::spawn::spawn_tick;
use super::state::SimState;

/// Inputs for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Primary pointer in surface pixels, if tracked this tick
    pub pointer: Option<Vec2>,
    /// Current surface size
    pub viewport: Vec2,
}

/// Advance the simulation by one fixed timestep.
///
/// Inactive and game-over states are left untouched.
pub fn tick(state: &mut SimState, input: &TickInput, dt_ms: f64) {
    if !state.is_active() {
        return;
    }

    state.time_ticks += 1;
    state.time_ms += dt_ms;

    spawn_tick(state, input.viewport);
    integrate_objects(state, input.viewport);

    state.pointer = input.pointer;
    state.trail.update(input.pointer);

    if resolve_collisions(state) == CollisionOutcome::BombHit {
        return;
    }

    update_particles(&mut state.particles);
}

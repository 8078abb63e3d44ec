//! Slice burst particles

use glam::Vec2;
use rand::Rng;

use super::state::{Particle, SimState};
use crate::consts::*;

/// Emit a burst at `pos`, respecting the particle cap.
///
/// Returns the number of particles actually emitted.
pub fn emit_burst(state: &mut SimState, pos: Vec2, color: u32) -> usize {
    let room = state.max_particles.saturating_sub(state.particles.len());
    let count = PARTICLE_BURST_COUNT.min(room);

    for _ in 0..count {
        let vel = Vec2::new(
            state.rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            state.rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
        );
        state.particles.push(Particle {
            pos,
            vel,
            color,
            life: 1.0,
            size: state.rng.random_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
        });
    }
    count
}

/// Advance a single particle. Returns false once it has expired.
#[inline]
pub fn step_particle(particle: &mut Particle) -> bool {
    particle.pos += particle.vel;
    particle.vel.y += PARTICLE_GRAVITY;
    particle.life -= PARTICLE_DECAY;
    particle.life > 0.0
}

/// Advance all particles and drop the expired ones
pub fn update_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(step_particle);
}

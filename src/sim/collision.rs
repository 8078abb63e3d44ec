//! Pointer-versus-object collision detection and slice response
//!
//! The pointer is a point; each object is a circle whose hit zone is enlarged
//! by `HIT_MARGIN` so near misses still count.

use glam::Vec2;

use super::particles::emit_burst;
use super::state::{GameEvent, ObjectKind, SimPhase, SimState, SoundCue};
use crate::consts::HIT_MARGIN;

/// Result of a proximity check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the pointer is inside the hit zone
    pub hit: bool,
    /// Distance from pointer to object center
    pub distance: f32,
    /// How far inside the hit zone the pointer is (negative on a miss)
    pub penetration: f32,
}

/// Check a pointer against a circle of `radius` at `center`
pub fn pointer_circle_collision(pointer: Vec2, center: Vec2, radius: f32) -> CollisionResult {
    let distance = pointer.distance(center);
    let reach = radius + HIT_MARGIN;
    CollisionResult {
        hit: distance < reach,
        distance,
        penetration: reach - distance,
    }
}

/// Outcome of a collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Nothing terminal happened; `slices` objects were cut
    Continue { slices: usize },
    /// A bomb was touched; the run is over
    BombHit,
}

/// Test every live, unsliced object against this tick's pointer.
///
/// Does nothing without a pointer. Every overlapped fruit or hidden character
/// is sliced in the same pass; touching a bomb ends the run immediately with
/// the score untouched and abandons the rest of the pass.
pub fn resolve_collisions(state: &mut SimState) -> CollisionOutcome {
    let Some(pointer) = state.pointer else {
        return CollisionOutcome::Continue { slices: 0 };
    };

    let mut slices = 0;
    let mut i = 0;
    while i < state.objects.len() {
        let object = &state.objects[i];
        if object.sliced || !pointer_circle_collision(pointer, object.pos, object.radius).hit {
            i += 1;
            continue;
        }

        let (id, kind) = (object.id, object.kind);
        match kind {
            ObjectKind::Bomb => {
                log::info!("Bomb #{} touched, final score {}", id, state.score);
                state.phase = SimPhase::GameOver;
                state.events.push(GameEvent::Sound(SoundCue::GameOver));
                state.events.push(GameEvent::GameOver {
                    final_score: state.score,
                });
                return CollisionOutcome::BombHit;
            }
            ObjectKind::Fruit | ObjectKind::HiddenCharacter => {
                let mut object = state.objects.remove(i);
                object.sliced = true;
                let points = kind.points();

                emit_burst(state, object.pos, object.content.color);
                state.events.push(GameEvent::Sound(SoundCue::Slice));
                state.events.push(GameEvent::Sliced {
                    id,
                    kind,
                    pos: object.pos,
                    points,
                });
                state.award(points);
                slices += 1;
            }
        }
    }

    CollisionOutcome::Continue { slices }
}

//! Object kinematics
//!
//! Semi-implicit per tick: position moves by the current velocity first, then
//! gravity is added to the vertical velocity.

use glam::Vec2;

use super::state::{SimObject, SimState};
use crate::consts::OFFSCREEN_MARGIN;

/// Advance one object by a tick
#[inline]
pub fn step_object(object: &mut SimObject, gravity: f32) {
    object.pos += object.vel;
    object.vel.y += gravity;
    object.rotation += object.rotation_speed;
}

/// True once an object has fallen past the bottom edge plus margin
#[inline]
pub fn is_below_viewport(object: &SimObject, viewport: Vec2) -> bool {
    object.pos.y > viewport.y + OFFSCREEN_MARGIN
}

/// Move every live object and drop the ones that fell out of view.
///
/// Missed objects (bombs included) leave silently. Returns how many were culled.
pub fn integrate_objects(state: &mut SimState, viewport: Vec2) -> usize {
    let gravity = state.config.gravity;
    let before = state.objects.len();

    for object in &mut state.objects {
        step_object(object, gravity);
    }
    state.objects.retain(|o| !is_below_viewport(o, viewport));

    before - state.objects.len()
}

//! Rendering
//!
//! `Surface` is the host's drawing target. `draw_frame` paints one frame of
//! simulation state onto it: pointer trail first, then objects, then particles.
//! `MeshSurface` is a surface that tessellates everything into vertices for a
//! GPU upload.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::{GlyphInstance, MeshSurface};
pub use vertex::{Vertex, rgba};

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::content::{BLADE_COLOR, BLADE_CORE, BLADE_GLOW};
use crate::sim::{PathCmd, SimState};

/// Soft halo around a stroke or fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: [f32; 4],
}

/// Stroke style (round caps and joins)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: [f32; 4],
    pub glow: Option<Glow>,
}

/// Drawing target supplied by the host.
///
/// `size` may change between frames; callers must query it every frame.
pub trait Surface {
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn stroke_path(&mut self, path: &[PathCmd], stroke: &Stroke);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4], glow: Option<Glow>);
    fn draw_glyph(&mut self, glyph: &str, center: Vec2, size: f32, rotation: f32);
}

pub const TRAIL_OUTER_WIDTH: f32 = 15.0;
pub const TRAIL_INNER_WIDTH: f32 = 6.0;
pub const TRAIL_GLOW_BLUR: f32 = 20.0;
pub const POINTER_RADIUS: f32 = 15.0;
pub const POINTER_GLOW_BLUR: f32 = 15.0;

/// Paint the current simulation state
pub fn draw_frame<S: Surface + ?Sized>(state: &SimState, settings: &Settings, surface: &mut S) {
    surface.clear();

    if settings.trails {
        draw_trail(state, surface);
    }

    for object in &state.objects {
        surface.draw_glyph(object.content.glyph, object.pos, object.radius * 2.0, object.rotation);
    }

    for particle in &state.particles {
        surface.fill_circle(particle.pos, particle.size, rgba(particle.color, particle.life), None);
    }
}

/// Blade trail: glowing wide stroke, thin core stroke, then the live pointer
fn draw_trail<S: Surface + ?Sized>(state: &SimState, surface: &mut S) {
    let path = state.trail.smoothed_path();
    if !path.is_empty() {
        surface.stroke_path(
            &path,
            &Stroke {
                width: TRAIL_OUTER_WIDTH,
                color: rgba(BLADE_COLOR, 1.0),
                glow: Some(Glow {
                    blur: TRAIL_GLOW_BLUR,
                    color: rgba(BLADE_GLOW, 1.0),
                }),
            },
        );
        surface.stroke_path(
            &path,
            &Stroke {
                width: TRAIL_INNER_WIDTH,
                color: rgba(BLADE_CORE, 1.0),
                glow: None,
            },
        );
    }

    if let Some(pointer) = state.pointer {
        surface.fill_circle(
            pointer,
            POINTER_RADIUS,
            rgba(BLADE_COLOR, 1.0),
            Some(Glow {
                blur: POINTER_GLOW_BLUR,
                color: rgba(BLADE_COLOR, 1.0),
            }),
        );
    }
}

//! Tessellating surface
//!
//! Collects a frame as a triangle list plus a list of glyph instances for the
//! text pass. Glows are approximated with a wider translucent layer drawn
//! underneath.

use glam::Vec2;

use super::shapes::{circle, circle_segments, flatten_path, stroke_polyline};
use super::vertex::{Vertex, colors};
use super::{Glow, Stroke, Surface};
use crate::sim::PathCmd;

/// Alpha applied to glow layers
const GLOW_ALPHA: f32 = 0.35;

/// A glyph to be drawn by the text pass
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphInstance {
    pub glyph: String,
    pub center: Vec2,
    /// Font size in pixels
    pub size: f32,
    pub rotation: f32,
}

#[derive(Debug, Clone)]
pub struct MeshSurface {
    size: Vec2,
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub glyphs: Vec<GlyphInstance>,
}

impl MeshSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
            glyphs: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("Surface resized to {}x{}", width, height);
        self.size = Vec2::new(width, height);
    }

    /// Vertex data ready for a buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn glow_color(glow: &Glow) -> [f32; 4] {
        let [r, g, b, a] = glow.color;
        [r, g, b, a * GLOW_ALPHA]
    }

    fn push_polyline(&mut self, points: &[Vec2], width: f32, color: [f32; 4]) {
        self.vertices.extend(stroke_polyline(points, width, color));
        // Round joins and caps
        let cap = width * 0.5;
        for p in points {
            self.vertices.extend(circle(*p, cap, color, circle_segments(cap)));
        }
    }
}

impl Surface for MeshSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    /// Starts the frame with a full-surface quad in `clear_color`
    fn clear(&mut self) {
        self.vertices.clear();
        self.glyphs.clear();
        let (w, h) = (self.size.x, self.size.y);
        let c = self.clear_color;
        self.vertices.extend_from_slice(&[
            Vertex::new(0.0, 0.0, c),
            Vertex::new(w, 0.0, c),
            Vertex::new(0.0, h, c),
            Vertex::new(w, 0.0, c),
            Vertex::new(w, h, c),
            Vertex::new(0.0, h, c),
        ]);
    }

    fn stroke_path(&mut self, path: &[PathCmd], stroke: &Stroke) {
        let points = flatten_path(path);
        if points.len() < 2 {
            return;
        }
        if let Some(glow) = &stroke.glow {
            self.push_polyline(&points, stroke.width + glow.blur, Self::glow_color(glow));
        }
        self.push_polyline(&points, stroke.width, stroke.color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4], glow: Option<Glow>) {
        if let Some(glow) = glow {
            let r = radius + glow.blur * 0.5;
            self.vertices
                .extend(circle(center, r, Self::glow_color(&glow), circle_segments(r)));
        }
        self.vertices
            .extend(circle(center, radius, color, circle_segments(radius)));
    }

    fn draw_glyph(&mut self, glyph: &str, center: Vec2, size: f32, rotation: f32) {
        self.glyphs.push(GlyphInstance {
            glyph: glyph.to_string(),
            center,
            size,
            rotation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_frame() {
        let mut mesh = MeshSurface::new(640.0, 480.0);
        mesh.fill_circle(Vec2::ZERO, 10.0, [1.0; 4], None);
        mesh.draw_glyph("🍎", Vec2::ONE, 100.0, 0.0);
        assert!(!mesh.vertices.is_empty());
        assert_eq!(mesh.glyphs.len(), 1);

        mesh.clear_color = [1.0, 0.0, 0.0, 1.0];
        mesh.clear();
        assert!(mesh.glyphs.is_empty());
        // Only the background quad is left
        assert_eq!(mesh.vertices.len(), 6);
        assert!(mesh.vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
        assert!(mesh.vertices.iter().any(|v| v.position == [640.0, 480.0]));
    }

    #[test]
    fn test_glow_adds_underlay() {
        let mut plain = MeshSurface::new(640.0, 480.0);
        plain.fill_circle(Vec2::ZERO, 15.0, [1.0; 4], None);

        let mut glowing = MeshSurface::new(640.0, 480.0);
        glowing.fill_circle(
            Vec2::ZERO,
            15.0,
            [1.0; 4],
            Some(Glow {
                blur: 15.0,
                color: [1.0, 0.0, 0.0, 1.0],
            }),
        );
        assert!(glowing.vertices.len() > plain.vertices.len());
        // Underlay comes first and is translucent
        assert_eq!(glowing.vertices[0].color[3], GLOW_ALPHA);
    }

    #[test]
    fn test_stroke_path_and_bytes() {
        let mut mesh = MeshSurface::new(640.0, 480.0);
        let path = [
            PathCmd::MoveTo(Vec2::ZERO),
            PathCmd::LineTo(Vec2::new(100.0, 0.0)),
        ];
        mesh.stroke_path(
            &path,
            &Stroke {
                width: 6.0,
                color: [1.0; 4],
                glow: None,
            },
        );
        assert!(mesh.vertices.len() >= 6);
        assert_eq!(
            mesh.vertex_bytes().len(),
            mesh.vertices.len() * std::mem::size_of::<Vertex>()
        );
    }

    #[test]
    fn test_resize() {
        let mut mesh = MeshSurface::new(640.0, 480.0);
        mesh.resize(1920.0, 1080.0);
        assert_eq!(mesh.size(), Vec2::new(1920.0, 1080.0));
    }
}

//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::PathCmd;

/// Line segments used to approximate one quadratic curve
pub const CURVE_SEGMENTS: u32 = 8;

/// Point on a quadratic Bézier at `t`
#[inline]
pub fn quad_point(from: Vec2, ctrl: Vec2, to: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    from * (u * u) + ctrl * (2.0 * u * t) + to * (t * t)
}

/// Flatten a path into a polyline
pub fn flatten_path(path: &[PathCmd]) -> Vec<Vec2> {
    let mut points: Vec<Vec2> = Vec::with_capacity(path.len() * CURVE_SEGMENTS as usize);

    for cmd in path {
        match *cmd {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => {
                if points.last() != Some(&p) {
                    points.push(p);
                }
            }
            PathCmd::QuadTo { ctrl, to } => {
                let from = points.last().copied().unwrap_or(ctrl);
                for i in 1..=CURVE_SEGMENTS {
                    let t = i as f32 / CURVE_SEGMENTS as f32;
                    points.push(quad_point(from, ctrl, to, t));
                }
            }
        }
    }

    points
}

/// Generate vertices for a constant-width stroke along a polyline
pub fn stroke_polyline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = width * 0.5;
    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);

        // Direction from p1 to p2
        let dir = (p2 - p1).normalize_or_zero();
        if dir == Vec2::ZERO {
            continue;
        }
        // Perpendicular for width
        let perp = Vec2::new(-dir.y, dir.x) * half;

        // Quad corners
        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Segment count that keeps circle edges smooth at a given radius
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 0.75) as u32).clamp(8, 48)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_point_endpoints() {
        let (a, c, b) = (Vec2::ZERO, Vec2::new(5.0, 10.0), Vec2::new(10.0, 0.0));
        assert_eq!(quad_point(a, c, b, 0.0), a);
        assert_eq!(quad_point(a, c, b, 1.0), b);
        assert_eq!(quad_point(a, c, b, 0.5), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_flatten_path() {
        let path = [
            PathCmd::MoveTo(Vec2::ZERO),
            PathCmd::QuadTo {
                ctrl: Vec2::ZERO,
                to: Vec2::new(5.0, 0.0),
            },
            PathCmd::LineTo(Vec2::new(10.0, 0.0)),
        ];
        let points = flatten_path(&path);
        assert_eq!(points.len(), 1 + CURVE_SEGMENTS as usize + 1);
        assert_eq!(points[0], Vec2::ZERO);
        assert_eq!(points[CURVE_SEGMENTS as usize], Vec2::new(5.0, 0.0));
        assert_eq!(*points.last().unwrap(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_stroke_skips_degenerate() {
        let color = [1.0; 4];
        assert!(stroke_polyline(&[Vec2::ZERO], 4.0, color).is_empty());
        assert!(stroke_polyline(&[Vec2::ONE, Vec2::ONE], 4.0, color).is_empty());

        let verts = stroke_polyline(&[Vec2::ZERO, Vec2::new(10.0, 0.0)], 4.0, color);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().all(|v| v.position[1].abs() == 2.0));
    }

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::ZERO, 10.0, [1.0; 4], 12);
        assert_eq!(verts.len(), 36);
        assert_eq!(circle_segments(1.0), 8);
        assert_eq!(circle_segments(1000.0), 48);
    }
}
